use maud::{html, Markup};

use super::{stagger_style, Section, SECTIONS};
use crate::content::{AdditionalInfoEntry, EducationEntry, Profile, SkillEntry};

pub(super) fn header(profile: &Profile) -> Markup {
    html! {
        header.site-header {
            div.brand.slide-in-left { (profile.brand) }
            nav.site-nav.slide-in-right {
                @for section in &SECTIONS {
                    @if let Some(label) = section.nav_label {
                        a href=(format!("#{}", section.id)) { (label) }
                    }
                }
            }
        }
    }
}

/// Wraps section content under a centered heading.
pub(super) fn titled(section: &Section, body: Markup) -> Markup {
    html! {
        section id=(section.id) class="section" {
            div.container {
                h2.section-title data-reveal="up" { (section.title) }
                (body)
            }
        }
    }
}

pub(super) fn about(section: &Section, profile: &Profile) -> Markup {
    html! {
        section id=(section.id) class="section about" {
            div.container.about-card data-reveal="up" {
                div.about-text {
                    h1.slide-in-left { (profile.full_name) }
                    p.summary.slide-in-left { (profile.summary) }
                }
                div.headshot {
                    div.skeleton {}
                    img src=(profile.headshot_path) alt="Professional Headshot"
                        onload="this.classList.add('loaded')";
                }
            }
        }
    }
}

pub(super) fn skills(skills: &[SkillEntry]) -> Markup {
    html! {
        div.grid."grid-3" {
            @for (idx, skill) in skills.iter().enumerate() {
                div.card.hover-lift data-reveal="up" style=(stagger_style(idx)) {
                    h3.card-title { (skill.name) }
                    @if let Some(level) = skill.level {
                        p.muted { "Level: " (level.label()) }
                    }
                }
            }
        }
    }
}

pub(super) fn education(education: &[EducationEntry]) -> Markup {
    html! {
        div.grid."grid-2" {
            @for (idx, entry) in education.iter().enumerate() {
                div.card.hover-lift data-reveal="up" style=(stagger_style(idx)) {
                    h3.card-title { (entry.degree) }
                    p.subtitle { (entry.institution) }
                }
            }
        }
    }
}

pub(super) fn additional_info(entries: &[AdditionalInfoEntry]) -> Markup {
    html! {
        div.grid."grid-2" {
            @for entry in entries {
                div.card.hover-lift data-reveal="up" {
                    h3.card-title { (entry.title) }
                    p.subtitle { (entry.issuer) }
                }
            }
        }
    }
}

pub(super) fn footer(profile: &Profile, year: i32) -> Markup {
    html! {
        footer.site-footer {
            div.container.footer-row {
                p.muted { "© " (year) " " (profile.full_name) ". All rights reserved." }
                a.linkedin href=(profile.linkedin_url) target="_blank" rel="noopener noreferrer" {
                    "LinkedIn"
                }
            }
        }
    }
}
