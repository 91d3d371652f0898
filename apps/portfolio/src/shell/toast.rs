//! Transient notifications shown outside the document flow.

use std::collections::VecDeque;

use serde::Serialize;
use uuid::Uuid;

/// Maximum number of toasts held at once. The oldest is evicted first.
pub const TOAST_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    /// How long the page keeps the toast on screen.
    pub duration_ms: u64,
}

impl Toast {
    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Notification queue for a single page view. Newest first. Removal after
/// `duration_ms` happens in the browser.
#[derive(Debug, Clone)]
pub struct Toaster {
    toasts: VecDeque<Toast>,
    duration_ms: u64,
}

impl Toaster {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            toasts: VecDeque::with_capacity(TOAST_LIMIT),
            duration_ms,
        }
    }

    /// Queues a regular notification and returns its id.
    pub fn toast(&mut self, title: impl Into<String>, description: impl Into<String>) -> Uuid {
        self.push(title.into(), description.into(), ToastVariant::Default)
    }

    /// Queues an error-styled notification and returns its id.
    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) -> Uuid {
        self.push(title.into(), description.into(), ToastVariant::Destructive)
    }

    fn push(&mut self, title: String, description: String, variant: ToastVariant) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            title,
            description,
            variant,
            duration_ms: self.duration_ms,
        };
        let id = toast.id;
        self.toasts.push_front(toast);
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_is_queued_newest_first() {
        let mut toaster = Toaster::new(5_000);
        toaster.toast("first", "one");
        toaster.error("second", "two");
        let titles: Vec<_> = toaster.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
        assert!(toaster.latest().unwrap().is_destructive());
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut toaster = Toaster::new(5_000);
        for i in 0..TOAST_LIMIT + 2 {
            toaster.toast(format!("t{i}"), "");
        }
        assert_eq!(toaster.iter().count(), TOAST_LIMIT);
        assert!(toaster.iter().all(|t| t.title != "t0" && t.title != "t1"));
    }

    #[test]
    fn test_toasts_carry_configured_duration() {
        let mut toaster = Toaster::new(1_500);
        let first = toaster.toast("hello", "");
        let second = toaster.error("oops", "");
        assert_ne!(first, second);
        assert!(toaster.iter().all(|t| t.duration_ms == 1_500));
        assert_eq!(toaster.latest().unwrap().id, second);
    }
}
