use maud::{html, Markup};

use super::stagger_style;
use crate::content::ExperienceEntry;
use crate::timeline::{description_paragraphs, TimelineState};

/// Link that moves the page to `state`, keeping the clicked card in view.
fn state_href(state: TimelineState, anchor: usize) -> String {
    match state.expanded() {
        Some(idx) => format!("/?expanded={idx}#experience-{anchor}"),
        None => format!("/#experience-{anchor}"),
    }
}

pub(super) fn timeline(entries: &[ExperienceEntry], state: &TimelineState) -> Markup {
    html! {
        ol.timeline {
            @for (idx, entry) in entries.iter().enumerate() {
                @let expanded = state.is_expanded(idx);
                li.timeline-item id=(format!("experience-{idx}")) data-reveal="left"
                    style=(stagger_style(idx)) {
                    span.timeline-dot {}
                    div.card.hover-lift {
                        a.timeline-header href=(state_href(state.toggled(idx), idx))
                            aria-expanded=(if expanded { "true" } else { "false" }) {
                            div {
                                h3.card-title { (entry.role) }
                                p.subtitle { (entry.company) }
                                p.muted.small { (entry.duration) }
                            }
                            span.chevron { @if expanded { "▴" } @else { "▾" } }
                        }
                        @if expanded {
                            div.timeline-body {
                                @for line in description_paragraphs(entry.description) {
                                    p { (line) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
