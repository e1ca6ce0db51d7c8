use super::*;

fn messages(state: &ToastState) -> Vec<&str> {
    state.items.iter().map(|toast| toast.message.as_str()).collect()
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "one");
    let second = state.push(ToastKind::Success, "two");
    assert_eq!(first, ToastId(1));
    assert_eq!(second, ToastId(2));
    assert_eq!(messages(&state), vec!["one", "two"]);
}

#[test]
fn oldest_toast_is_dropped_past_limit() {
    let mut state = ToastState::default();
    for n in 1..=6 {
        state.push(ToastKind::Info, format!("toast {n}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(messages(&state), vec!["toast 3", "toast 4", "toast 5", "toast 6"]);
}

#[test]
fn dismiss_removes_once() {
    let mut state = ToastState::default();
    let keep = state.push(ToastKind::Info, "keep");
    let drop = state.push(ToastKind::Error, "drop");
    assert!(state.dismiss(drop));
    assert!(!state.dismiss(drop));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, keep);
}

#[test]
fn ids_are_not_reused_after_clear() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "a");
    state.clear();
    assert!(state.items.is_empty());
    assert_eq!(state.push(ToastKind::Info, "b"), ToastId(2));
}

#[test]
fn only_errors_use_alert_role() {
    assert_eq!(ToastKind::Error.aria_role(), "alert");
    for kind in [ToastKind::Success, ToastKind::Info, ToastKind::Warning] {
        assert_eq!(kind.aria_role(), "status");
    }
    assert_eq!(ToastKind::Warning.css_modifier(), "toast--warning");
}

#[test]
fn notify_pushes_into_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        let id = notify(toasts, ToastKind::Success, "Saved", Duration::from_secs(4));
        assert_eq!(id, Some(ToastId(1)));
        assert_eq!(toasts.with_untracked(|state| state.items.len()), 1);
    });
}
