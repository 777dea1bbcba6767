//! Tests for the boundary-owned placeholder registry.

use scrim::OverlayError;
use scrim::adapters::dialog;
use scrim::host::OverlayHost;
use scrim::key::SurfaceKey;
use scrim::props::OverlayProps;

#[derive(Clone, Default)]
struct CardProps {
    title: String,
}

impl OverlayProps for CardProps {}

fn card(title: &str) -> CardProps {
    CardProps {
        title: title.into(),
    }
}

#[test]
fn test_registration_order_is_paint_order() {
    let host = OverlayHost::<String>::new();
    let _one = host.register(SurfaceKey::new("test"), || "p1".to_string());
    let _two = host.register(SurfaceKey::new("test"), || "p2".to_string());
    let _three = host.register(SurfaceKey::new("test"), || "p3".to_string());

    assert_eq!(host.placeholders(), vec!["p1", "p2", "p3"]);
    assert_eq!(
        host.render(vec!["content".to_string()]),
        vec!["content", "p1", "p2", "p3"]
    );
}

#[test]
fn test_deregistration_removes_exact_entry() {
    let host = OverlayHost::<String>::new();
    let first = SurfaceKey::new("test");
    let second = SurfaceKey::new("test");

    // Value-equal views under distinct identities.
    let _one = host.register(first, || "same".to_string());
    let _two = host.register(second, || "same".to_string());
    assert_eq!(host.placeholders().len(), 2);

    host.deregister(first);
    assert_eq!(host.placeholders(), vec!["same"]);

    // Removing an absent entry is a no-op.
    host.deregister(first);
    assert_eq!(host.placeholders().len(), 1);
}

#[test]
fn test_registration_drop_deregisters() {
    let host = OverlayHost::<String>::new();
    {
        let _guard = host.register(SurfaceKey::new("test"), || "ephemeral".to_string());
        assert_eq!(host.placeholders().len(), 1);
    }
    assert!(host.placeholders().is_empty());
}

#[test]
fn test_missing_boundary_fails_fast() {
    let handle = {
        let host = OverlayHost::<String>::new();
        host.handle()
    };

    let overlay = dialog::<CardProps>(true);
    let result = handle.attach(overlay.clone(), |_| String::new());
    assert!(matches!(result, Err(OverlayError::MissingBoundary)));
    // Failed fast: the lifecycle was never touched.
    assert!(!overlay.is_mounted());
}

#[test]
fn test_attach_renders_through_boundary() {
    let host = OverlayHost::<String>::new();
    let attached = host
        .handle()
        .attach(dialog::<CardProps>(true), |placeholder| {
            match placeholder.props() {
                Some(props) => format!("dialog:{}:{}", props.body.title, props.open),
                None => "empty".to_string(),
            }
        })
        .expect("boundary is alive");

    assert_eq!(host.placeholders(), vec!["empty"]);

    attached.open(card("settings"));
    assert_eq!(host.placeholders(), vec!["dialog:settings:true"]);

    attached.request_close();
    assert_eq!(host.placeholders(), vec!["dialog:settings:false"]);

    attached.notify_closed();
    assert_eq!(host.placeholders(), vec!["empty"]);
}

#[test]
fn test_dropping_attached_overlay_deregisters() {
    let host = OverlayHost::<String>::new();
    let attached = host
        .handle()
        .attach(dialog::<CardProps>(true), |_| "node".to_string())
        .expect("boundary is alive");
    attached.open(card("x"));
    assert_eq!(host.placeholders().len(), 1);

    // Call-site teardown, independent of the overlay still being open.
    drop(attached);
    assert!(host.placeholders().is_empty());
}

#[test]
fn test_independent_boundaries_do_not_interfere() {
    let left = OverlayHost::<String>::new();
    let right = OverlayHost::<String>::new();

    let _l = left.register(SurfaceKey::new("test"), || "left".to_string());
    let _r = right.register(SurfaceKey::new("test"), || "right".to_string());

    assert_eq!(left.placeholders(), vec!["left"]);
    assert_eq!(right.placeholders(), vec!["right"]);
}

#[test]
fn test_boundary_default_props() {
    let host = OverlayHost::<String>::new();
    host.set_default_props(card("from-boundary"));

    let attached = host
        .handle()
        .attach(dialog::<CardProps>(true), |placeholder| {
            match placeholder.props() {
                Some(props) => props.body.title.clone(),
                None => "empty".to_string(),
            }
        })
        .expect("boundary is alive");

    attached.open_default();
    assert_eq!(host.placeholders(), vec!["from-boundary"]);

    // Caller-supplied bags win wholesale.
    attached.open(card("explicit"));
    assert_eq!(host.placeholders(), vec!["explicit"]);
}

#[test]
fn test_open_default_without_boundary_bag() {
    let host = OverlayHost::<String>::new();
    let attached = host
        .handle()
        .attach(dialog::<CardProps>(true), |placeholder| {
            match placeholder.props() {
                Some(props) => format!("[{}]", props.body.title),
                None => "empty".to_string(),
            }
        })
        .expect("boundary is alive");

    attached.open_default();
    assert_eq!(host.placeholders(), vec!["[]"]);
}

#[test]
fn test_host_dirty_on_registry_changes() {
    let host = OverlayHost::<String>::new();
    host.clear_dirty();

    let guard = host.register(SurfaceKey::new("test"), || "p".to_string());
    assert!(host.is_dirty());

    host.clear_dirty();
    drop(guard);
    assert!(host.is_dirty());
}
