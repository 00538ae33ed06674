use dioxus::prelude::*;
use shared_types::{AppError, Notice, NoticeTone};
use shared_ui::{use_toast, ToastOptions, Toasts};

/// Toast handle that speaks in [`Notice`]s.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: Toasts,
}

pub fn use_notifier() -> Notifier {
    Notifier {
        toasts: use_toast(),
    }
}

/// Single-line toast text for a notice.
fn toast_text(notice: &Notice) -> String {
    format!("{}: {}", notice.title(), notice.description())
}

impl Notifier {
    pub fn notice(&self, notice: Notice) {
        let text = toast_text(&notice);
        match notice.tone() {
            NoticeTone::Success => self.toasts.success(text, ToastOptions::new()),
            NoticeTone::Info => self.toasts.info(text, ToastOptions::new()),
        }
    }

    pub fn error(&self, err: &AppError) {
        tracing::warn!(kind = %err.kind, message = %err.message, "action failed");
        self.toasts.error(err.friendly_message(), ToastOptions::new());
    }
}
