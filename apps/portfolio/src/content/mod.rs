//! Static résumé content. Everything here is immutable after startup; array
//! order is display order.

mod data;

use serde::Serialize;

pub use data::{ADDITIONAL_INFO, EDUCATION, EXPERIENCES, PROFILE, SKILLS};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Profile {
    pub full_name: &'static str,
    /// Short label shown in the header.
    pub brand: &'static str,
    pub summary: &'static str,
    pub headshot_path: &'static str,
    pub linkedin_url: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    /// Free-form date range, e.g. "Dec 2021 – Nov 2024".
    pub duration: &'static str,
    /// One bullet per line; blank lines are ignored when rendered.
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SkillLevel {
    Intermediate,
    Expert,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub level: Option<SkillLevel>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AdditionalInfoEntry {
    pub title: &'static str,
    pub issuer: &'static str,
}

/// The full content model handed to the renderer and the content API.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub experiences: &'static [ExperienceEntry],
    pub skills: &'static [SkillEntry],
    pub education: &'static [EducationEntry],
    pub additional_info: &'static [AdditionalInfoEntry],
}

impl Portfolio {
    /// The résumé this site is built for.
    pub const fn published() -> Self {
        Self {
            profile: PROFILE,
            experiences: EXPERIENCES,
            skills: SKILLS,
            education: EDUCATION,
            additional_info: ADDITIONAL_INFO,
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::published()
    }
}
