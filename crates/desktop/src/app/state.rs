//! Shared UI-side state that lives next to the core start-page controller.

use std::time::Instant;

use serene_core::Settings;

#[derive(Debug, Clone)]
pub(crate) struct StatusToast {
    pub(crate) message: String,
    pub(crate) kind: ToastKind,
    pub(crate) created_at: Instant,
}

impl StatusToast {
    pub(crate) fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Info,
            created_at: Instant::now(),
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: Instant::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub(crate) enum MutationKind {
    AddTask(String),
    ToggleTask(String),
    RemoveTask(String),
    ClearCompleted,
    SaveSettings(Settings),
}

impl MutationKind {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            MutationKind::AddTask(_) => "add task",
            MutationKind::ToggleTask(_) => "toggle task",
            MutationKind::RemoveTask(_) => "remove task",
            MutationKind::ClearCompleted => "clear completed",
            MutationKind::SaveSettings(_) => "save settings",
        }
    }
}

/// Draft state of the todo entry field.
#[derive(Debug, Clone, Default)]
pub(crate) struct TodoDraft {
    pub(crate) text: String,
    pub(crate) submitting: bool,
}

impl TodoDraft {
    pub(crate) fn can_submit(&self) -> bool {
        !self.submitting && !self.text.trim().is_empty()
    }
}
