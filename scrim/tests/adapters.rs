//! Tests for the dialog and panel surface adapters.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use scrim::adapters::{dialog, panel, surface};
use scrim::props::{CloseFn, ConfirmFn, OverlayProps, confirm_then_close};

#[derive(Clone, Default)]
struct FormProps {
    label: String,
    dismissable: Option<bool>,
    on_confirm: Option<ConfirmFn<u32>>,
}

impl OverlayProps for FormProps {
    fn wrap_confirm(&mut self, close: CloseFn) {
        if let Some(confirm) = self.on_confirm.take() {
            self.on_confirm = Some(confirm_then_close(confirm, close));
        }
    }

    fn scrim_dismiss(&self) -> Option<bool> {
        self.dismissable
    }
}

fn form(label: &str) -> FormProps {
    FormProps {
        label: label.into(),
        dismissable: None,
        on_confirm: None,
    }
}

#[test]
fn test_dialog_adapter_property_shape() {
    let overlay = dialog::<FormProps>(true);
    overlay.open(form("rename"));

    let placeholder = overlay.placeholder();
    let props = placeholder.props().expect("mounted");
    assert!(props.open);
    assert!(!props.scrim_dismiss);
    assert_eq!(props.body.label, "rename");
    assert_eq!(overlay.key().prefix(), "dialog");
}

#[test]
fn test_dialog_scrim_dismiss_caller_override() {
    let overlay = dialog::<FormProps>(true);
    overlay.open(FormProps {
        label: "loose".into(),
        dismissable: Some(true),
        on_confirm: None,
    });

    let placeholder = overlay.placeholder();
    assert!(placeholder.props().expect("mounted").scrim_dismiss);
}

#[test]
fn test_dialog_dismiss_then_after_close_unmounts() {
    let overlay = dialog::<FormProps>(true);
    overlay.open(form("x"));

    let placeholder = overlay.placeholder();
    let props = placeholder.props().expect("mounted");
    (props.on_dismiss)();
    assert!(!overlay.is_open());
    assert!(overlay.is_mounted());

    // The kit reports its closing animation finished.
    let closing = overlay.placeholder();
    (closing.props().expect("still mounted").after_close)();
    assert!(!overlay.is_mounted());
}

#[test]
fn test_dialog_after_close_while_open_is_ignored() {
    let overlay = dialog::<FormProps>(true);
    overlay.open(form("x"));

    let placeholder = overlay.placeholder();
    (placeholder.props().expect("mounted").after_close)();
    assert!(overlay.is_mounted());
    assert!(overlay.is_open());
}

#[test]
fn test_panel_open_change_guard() {
    let overlay = panel::<FormProps>(true);
    overlay.open(form("details"));
    assert_eq!(overlay.key().prefix(), "panel");

    // Opening transition finished: the flag is true, nothing advances.
    let opened = overlay.placeholder();
    (opened.props().expect("mounted").after_open_change)(true);
    assert!(overlay.is_mounted());
    assert!(overlay.is_open());

    overlay.request_close();
    let closing = overlay.placeholder();
    let props = closing.props().expect("mounted while closing");
    assert!(!props.open);

    // Closing transition finished: the flag is false, the surface unmounts.
    (props.after_open_change)(false);
    assert!(!overlay.is_mounted());
}

#[test]
fn test_panel_confirm_auto_closes() {
    let forwarded = Arc::new(AtomicUsize::new(0));

    let overlay = panel::<FormProps>(true);
    overlay.open(FormProps {
        label: "x".into(),
        dismissable: None,
        on_confirm: Some({
            let forwarded = Arc::clone(&forwarded);
            Arc::new(move |value: u32| {
                assert_eq!(value, 7);
                forwarded.fetch_add(1, Ordering::SeqCst);
            })
        }),
    });

    let placeholder = overlay.placeholder();
    let confirm = placeholder
        .props()
        .expect("mounted")
        .body
        .on_confirm
        .clone()
        .expect("confirm slot present");
    confirm(7);

    assert_eq!(forwarded.load(Ordering::SeqCst), 1);
    assert!(!overlay.is_open());
    assert!(overlay.is_mounted());
}

#[test]
fn test_surface_adapter_injects_dismiss() {
    let overlay = surface::<FormProps>(false);
    overlay.open(form("plain"));

    let placeholder = overlay.placeholder();
    (placeholder.props().expect("mounted").on_dismiss)();

    // Non-animated: dismissal unmounts in the same transition.
    assert!(!overlay.is_mounted());
    assert!(overlay.placeholder().is_empty());
}
