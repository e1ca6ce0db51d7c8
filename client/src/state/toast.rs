//! Toast notification queue.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use leptos::prelude::*;

/// Toasts visible at once; pushing past this drops the oldest.
pub const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub const fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
            Self::Warning => "toast--warning",
        }
    }

    /// Errors interrupt screen readers; everything else is announced politely.
    pub const fn aria_role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            _ => "status",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.items.push(Toast { id, kind, message: message.into() });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Show a toast and, in the browser, dismiss it after `duration`. A zero
/// duration keeps it until the user closes it.
///
/// Returns `None` when the signal has been disposed.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>, duration: Duration) -> Option<ToastId> {
    let id = toasts.try_update(|state| state.push(kind, message))?;
    #[cfg(feature = "hydrate")]
    {
        if !duration.is_zero() {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(duration).await;
                toasts.try_update(|state| state.dismiss(id));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
    Some(id)
}
