use maud::{html, Markup};

use crate::shell::Toaster;

pub(super) fn toast_region(toaster: &Toaster) -> Markup {
    html! {
        ol.toast-region aria-live="polite" {
            @for toast in toaster.iter() {
                li.toast.destructive[toast.is_destructive()] role="status"
                    data-toast-id=(toast.id.to_string())
                    data-dismiss-ms=(toast.duration_ms) {
                    p.toast-title { (toast.title) }
                    p.toast-description { (toast.description) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_region_renders_no_toasts() {
        let markup = toast_region(&Toaster::new(5_000)).into_string();
        assert!(!markup.contains("toast-title"));
    }

    #[test]
    fn test_destructive_toast_is_styled() {
        let mut toaster = Toaster::new(4_000);
        toaster.error("Error", "Failed to send message. Please try again later.");
        let markup = toast_region(&toaster).into_string();
        assert!(markup.contains("toast destructive"));
        assert!(markup.contains("data-dismiss-ms=\"4000\""));
        assert!(markup.contains("Failed to send message."));
    }
}
