//! Walkthrough of a dialog lifecycle rendered through a string-node host.
//!
//! The "frames" printed below stand in for a host framework's render
//! passes; each one re-evaluates the boundary's registered placeholders.

use std::sync::Arc;

use scrim::prelude::*;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Clone, Default)]
struct ConfirmProps {
    message: String,
    on_confirm: Option<ConfirmFn<bool>>,
}

impl OverlayProps for ConfirmProps {
    fn wrap_confirm(&mut self, close: CloseFn) {
        if let Some(confirm) = self.on_confirm.take() {
            self.on_confirm = Some(confirm_then_close(confirm, close));
        }
    }
}

fn frame(host: &OverlayHost<String>) {
    for node in host.render(vec!["app content".to_string()]) {
        println!("  {node}");
    }
    println!("  ---");
    host.clear_dirty();
}

fn main() {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let host = OverlayHost::<String>::new();
    let confirm_dialog = host
        .handle()
        .attach(dialog::<ConfirmProps>(true), |placeholder| {
            match placeholder.props() {
                Some(props) => format!(
                    "[dialog open={} scrim_dismiss={} message={:?}]",
                    props.open, props.scrim_dismiss, props.body.message
                ),
                None => "[no dialog]".to_string(),
            }
        })
        .expect("boundary is alive");

    println!("initial frame:");
    frame(&host);

    let controller = confirm_dialog.open(ConfirmProps {
        message: "Delete 3 files?".to_string(),
        on_confirm: Some(Arc::new(|accepted| println!("  confirmed: {accepted}"))),
    });
    println!("after open:");
    frame(&host);

    controller.update(ConfirmProps {
        message: "Delete 4 files?".to_string(),
        on_confirm: Some(Arc::new(|accepted| println!("  confirmed: {accepted}"))),
    });
    println!("after update:");
    frame(&host);

    // The user confirms: the wrapped callback forwards the value and then
    // requests close, so the dialog starts its closing animation.
    if let Some(props) = confirm_dialog.overlay().placeholder().into_props() {
        if let Some(confirm) = props.body.on_confirm.clone() {
            confirm(true);
        }
    }
    println!("while closing:");
    frame(&host);

    // The kit reports the closing transition finished.
    if let Some(props) = confirm_dialog.overlay().placeholder().into_props() {
        (props.after_close)();
    }
    println!("after close finished:");
    frame(&host);
}
