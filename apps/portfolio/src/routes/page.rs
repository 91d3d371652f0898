use axum::extract::{Query, State};
use maud::Markup;
use serde::Deserialize;

use crate::contact::form::{SENT_DESCRIPTION, SENT_TITLE};
use crate::render::{render_page, PageView};
use crate::state::AppState;
use crate::timeline::TimelineState;

/// Query parameters are taken as raw strings so a malformed value degrades
/// to its default instead of rejecting the page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Index of the expanded timeline entry, if any.
    pub expanded: Option<String>,
    /// Set to `1` by the redirect that follows a successful contact post.
    pub sent: Option<String>,
}

impl PageQuery {
    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded.as_deref().and_then(|raw| raw.trim().parse().ok())
    }

    pub fn just_sent(&self) -> bool {
        self.sent.as_deref() == Some("1")
    }
}

/// GET /
pub async fn handle_page(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Markup {
    let timeline = TimelineState::restore(query.expanded_index(), state.portfolio.experiences.len());

    let mut shell = state.mount_shell();
    if query.just_sent() {
        shell.toaster.toast(SENT_TITLE, SENT_DESCRIPTION);
    }

    render_page(&state.portfolio, &PageView::new(shell).with_timeline(timeline))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(expanded: Option<&str>) -> PageQuery {
        PageQuery {
            expanded: expanded.map(str::to_string),
            sent: None,
        }
    }

    #[test]
    fn test_expanded_index_parses_leniently() {
        assert_eq!(query(Some("2")).expanded_index(), Some(2));
        assert_eq!(query(Some("")).expanded_index(), None);
        assert_eq!(query(Some("abc")).expanded_index(), None);
        assert_eq!(query(Some("-1")).expanded_index(), None);
        assert_eq!(query(None).expanded_index(), None);
    }
}
