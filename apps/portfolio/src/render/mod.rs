//! Server-side page composition.
//!
//! The page is one document: header, then the sections in [`SECTIONS`] order,
//! then the footer. Every element tagged `data-reveal` fades in the first time
//! it scrolls into view and never replays.

mod assets;
mod contact;
mod sections;
mod timeline;
mod toasts;

use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::contact::ContactForm;
use crate::content::Portfolio;
use crate::shell::ShellContext;
use crate::timeline::TimelineState;

/// Delay between consecutive cards of one section entering view.
pub const STAGGER_MS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    About,
    Experience,
    Skills,
    Education,
    AdditionalInfo,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub id: &'static str,
    pub title: &'static str,
    /// Label in the header nav; sections without one are not linked.
    pub nav_label: Option<&'static str>,
}

pub const SECTIONS: [Section; 6] = [
    Section {
        kind: SectionKind::About,
        id: "about",
        title: "About",
        nav_label: Some("About"),
    },
    Section {
        kind: SectionKind::Experience,
        id: "experience",
        title: "Work Experience",
        nav_label: Some("Experience"),
    },
    Section {
        kind: SectionKind::Skills,
        id: "skills",
        title: "Skills",
        nav_label: Some("Skills"),
    },
    Section {
        kind: SectionKind::Education,
        id: "education",
        title: "Education",
        nav_label: Some("Education"),
    },
    Section {
        kind: SectionKind::AdditionalInfo,
        id: "additional-info",
        title: "Additional Information",
        nav_label: None,
    },
    Section {
        kind: SectionKind::Contact,
        id: "contact",
        title: "Get In Touch",
        nav_label: Some("Contact"),
    },
];

/// Everything that varies between two renders of the same content.
#[derive(Debug, Clone)]
pub struct PageView {
    pub shell: ShellContext,
    pub timeline: TimelineState,
    pub form: ContactForm,
    pub year: i32,
}

impl PageView {
    pub fn new(shell: ShellContext) -> Self {
        Self {
            shell,
            timeline: TimelineState::collapsed(),
            form: ContactForm::new(),
            year: Utc::now().year(),
        }
    }

    pub fn with_timeline(mut self, timeline: TimelineState) -> Self {
        self.timeline = timeline;
        self
    }

    pub fn with_form(mut self, form: ContactForm) -> Self {
        self.form = form;
        self
    }
}

pub fn render_page(portfolio: &Portfolio, view: &PageView) -> Markup {
    let profile = &portfolio.profile;

    html! {
        (DOCTYPE)
        html lang="en" data-theme=(view.shell.theme.as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (profile.full_name) " | Résumé" }
                script { (PreEscaped(assets::ENABLE_JS)) }
                style { (PreEscaped(assets::STYLES)) }
            }
            body {
                (sections::header(profile))
                main {
                    @for section in &SECTIONS {
                        (render_section(section, portfolio, view))
                    }
                }
                (sections::footer(profile, view.year))
                (toasts::toast_region(&view.shell.toaster))
                script { (PreEscaped(assets::SCRIPT)) }
            }
        }
    }
}

fn render_section(section: &Section, portfolio: &Portfolio, view: &PageView) -> Markup {
    match section.kind {
        SectionKind::About => sections::about(section, &portfolio.profile),
        SectionKind::Experience => sections::titled(
            section,
            timeline::timeline(portfolio.experiences, &view.timeline),
        ),
        SectionKind::Skills => sections::titled(section, sections::skills(portfolio.skills)),
        SectionKind::Education => {
            sections::titled(section, sections::education(portfolio.education))
        }
        SectionKind::AdditionalInfo => {
            sections::titled(section, sections::additional_info(portfolio.additional_info))
        }
        SectionKind::Contact => sections::titled(section, contact::contact_form(&view.form)),
    }
}

fn stagger_style(idx: usize) -> String {
    format!("--reveal-delay: {}ms", idx * STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::ContactFormValues;
    use crate::shell::Theme;

    fn view() -> PageView {
        PageView::new(ShellContext::mount(Theme::Light, 5_000))
    }

    fn render(view: &PageView) -> String {
        render_page(&Portfolio::published(), view).into_string()
    }

    #[test]
    fn test_sections_appear_in_document_order() {
        let page = render(&view());
        let positions: Vec<usize> = SECTIONS
            .iter()
            .map(|s| {
                page.find(&format!("<section id=\"{}\"", s.id))
                    .unwrap_or_else(|| panic!("missing section {}", s.id))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_header_links_to_each_anchor() {
        let page = render(&view());
        for anchor in ["about", "experience", "skills", "education", "contact"] {
            assert!(page.contains(&format!("href=\"#{anchor}\"")), "no link to {anchor}");
        }
        assert!(!page.contains("href=\"#additional-info\""));
    }

    #[test]
    fn test_sections_are_revealed_once_on_scroll() {
        let page = render(&view());
        assert!(page.matches("data-reveal").count() >= SECTIONS.len());
        assert!(assets::SCRIPT.contains("unobserve"));
    }

    #[test]
    fn test_footer_has_year_and_linkedin() {
        let mut v = view();
        v.year = 2031;
        let page = render(&v);
        assert!(page.contains("© 2031 Haripriya Tanuku Venkata. All rights reserved."));
        assert!(page.contains("https://www.linkedin.com/in/your-linkedin-profile"));
    }

    #[test]
    fn test_theme_is_applied_to_document() {
        let dark = PageView::new(ShellContext::mount(Theme::Dark, 5_000));
        assert!(render(&dark).contains("<html lang=\"en\" data-theme=\"dark\">"));
        assert!(render(&view()).contains("<html lang=\"en\" data-theme=\"light\">"));
    }

    #[test]
    fn test_skill_levels_and_education_render() {
        let page = render(&view());
        assert!(page.contains("Level: Expert"));
        assert!(page.contains("M.B.A. in Finance &amp; Systems"));
        assert!(page.contains("LinkedIn Learning"));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let form = ContactForm::with_values(ContactFormValues::new(
            "<script>alert(1)</script>",
            "x@example.com",
            "hello",
        ));
        let page = render(&view().with_form(form));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!page.contains("<script>alert(1)</script>"));
    }
}
