//! Transient notification state.
//!
//! Each `show` issues a new id. The dismissal timer scheduled for a toast
//! calls [`ToastState::dismiss`] with that id, which is a no-op once a newer
//! toast has replaced it.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays up before the timer dismisses it.
pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Replace whatever is showing and return the new toast's id.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Toast { id, message: message.into(), kind });
        id
    }

    /// Timer-driven dismissal; only clears the toast it was scheduled for.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            return true;
        }
        false
    }

    /// Explicit close from the user.
    pub fn close(&mut self) {
        self.current = None;
    }
}
