use super::*;

#[test]
fn toast_state_default_empty() {
    assert!(ToastState::default().current.is_none());
}

#[test]
fn show_sets_current_with_fresh_ids() {
    let mut toasts = ToastState::default();
    let first = toasts.show("one", ToastKind::Info);
    let second = toasts.show("two", ToastKind::Error);
    assert_ne!(first, second);

    let current = toasts.current.clone().unwrap();
    assert_eq!(current.id, second);
    assert_eq!(current.message, "two");
    assert_eq!(current.kind, ToastKind::Error);
}

#[test]
fn timer_dismiss_clears_matching_toast() {
    let mut toasts = ToastState::default();
    let id = toasts.show("saved", ToastKind::Success);
    assert!(toasts.dismiss(id));
    assert!(toasts.current.is_none());
}

#[test]
fn stale_timer_does_not_dismiss_newer_toast() {
    let mut toasts = ToastState::default();
    let old = toasts.show("old", ToastKind::Info);
    let new = toasts.show("new", ToastKind::Info);
    assert!(!toasts.dismiss(old));
    assert_eq!(toasts.current.as_ref().map(|t| t.id), Some(new));
}

#[test]
fn close_dismisses_early_and_later_timer_is_noop() {
    let mut toasts = ToastState::default();
    let id = toasts.show("bye", ToastKind::Info);
    toasts.close();
    assert!(toasts.current.is_none());
    assert!(!toasts.dismiss(id));
}

#[test]
fn kind_css_modifiers_are_distinct() {
    assert_eq!(ToastKind::Success.css_modifier(), "toast--success");
    assert_eq!(ToastKind::Error.css_modifier(), "toast--error");
    assert_eq!(ToastKind::Info.css_modifier(), "toast--info");
}

#[test]
fn duration_is_a_few_seconds() {
    assert_eq!(TOAST_DURATION_MS, 4_000);
}
