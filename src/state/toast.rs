//! Toast notification store.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Toasts` instance exists per page. Every component that reports a
//! user-visible event pushes onto it; `ToastHost` renders it. Each toast is
//! removed automatically after the configured lifetime or earlier by explicit
//! dismissal, whichever comes first.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use uuid::Uuid;

use crate::util::timer::Scheduler;

/// Severity of a toast; also its CSS modifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self { id: Uuid::new_v4(), message: message.into(), kind }
    }
}

/// Visible toasts in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastList {
    pub items: Vec<Toast>,
}

impl ToastList {
    pub fn push(&mut self, toast: Toast) {
        self.items.push(toast);
    }

    /// Remove by id. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }
}

/// Reactive toast store with timed auto-dismissal.
#[derive(Clone)]
pub struct Toasts {
    list: RwSignal<ToastList>,
    scheduler: Arc<dyn Scheduler>,
    lifetime: Duration,
}

impl Toasts {
    #[must_use]
    pub fn new(scheduler: Arc<dyn Scheduler>, lifetime: Duration) -> Self {
        Self { list: RwSignal::new(ToastList::default()), scheduler, lifetime }
    }

    #[must_use]
    pub fn toasts(&self) -> RwSignal<ToastList> {
        self.list
    }

    /// Show a toast and schedule its removal. Returns its id.
    pub fn add(&self, message: impl Into<String>, kind: ToastKind) -> Uuid {
        let toast = Toast::new(message, kind);
        let id = toast.id;
        self.list.update(|list| list.push(toast));

        let list = self.list;
        self.scheduler.schedule(
            self.lifetime,
            Box::new(move || {
                // The page may have torn the store down already.
                let _ = list.try_update(|list| list.remove(id));
            }),
        );
        id
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.add(message, ToastKind::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.add(message, ToastKind::Success)
    }

    pub fn warning(&self, message: impl Into<String>) -> Uuid {
        self.add(message, ToastKind::Warning)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.add(message, ToastKind::Error)
    }

    /// Dismiss a toast; a no-op if it is already gone.
    pub fn remove(&self, id: Uuid) {
        self.list.update(|list| {
            list.remove(id);
        });
    }
}
