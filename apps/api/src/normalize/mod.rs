//! Data Normalizer — reconciles loosely-shaped resume input into `ResumeRecord`.
//!
//! All synonym resolution (`jobTitle`/`title`/`position`, `name`/`title` on
//! custom items) happens here, once. Pure and infallible.

pub mod handlers;
pub mod raw;

use serde_json::Value;

use crate::models::resume::{
    CertificationEntry, CustomSectionEntry, EducationEntry, ExperienceEntry, ResumeRecord,
    SkillEntry,
};
use crate::models::section::CustomKind;
use crate::normalize::raw::{
    RawCertification, RawCustomSection, RawEducation, RawExperience, RawResume, RawSkill,
};

pub const JOB_TITLE_FALLBACK: &str = "Job Title";

/// Normalizes an experience list so every entry carries a non-empty job title.
///
/// The title is the first non-blank of `jobTitle`, `title`, `position`, else
/// [`JOB_TITLE_FALLBACK`]. Length and order are preserved; `None` → empty.
pub fn normalize_experience(entries: Option<Vec<RawExperience>>) -> Vec<ExperienceEntry> {
    entries
        .unwrap_or_default()
        .into_iter()
        .map(|raw| {
            let job_title = raw
                .job_title
                .non_blank()
                .or_else(|| raw.title.non_blank())
                .or_else(|| raw.position.non_blank())
                .unwrap_or(JOB_TITLE_FALLBACK)
                .to_string();
            ExperienceEntry {
                job_title,
                company: raw.company.text(),
                location: raw.location.text(),
                start_date: raw.start_date.text(),
                end_date: raw.end_date.text(),
                description: raw.description.text(),
            }
        })
        .collect()
}

/// Builds the canonical resume from raw input.
pub fn normalize_resume(raw: RawResume) -> ResumeRecord {
    let extra_sections = raw
        .rest
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Array(items) if !items.is_empty() => Some((key, items)),
            _ => None,
        })
        .collect();

    ResumeRecord {
        name: raw.name.text(),
        job_title: raw.job_title.text(),
        email: raw.email.text(),
        phone: raw.phone.text(),
        address: raw.address.text(),
        linkedin: raw.linkedin.text(),
        portfolio: raw.portfolio.text(),
        summary: raw.summary.text(),
        experience: normalize_experience(raw.experience),
        education: raw.education.into_iter().map(normalize_education).collect(),
        skills: raw.skills.into_iter().filter_map(normalize_skill).collect(),
        certifications: raw
            .certifications
            .into_iter()
            .map(normalize_certification)
            .collect(),
        custom_sections: raw
            .custom_sections
            .into_iter()
            .map(normalize_custom_section)
            .collect(),
        is_fresher: raw.is_fresher.as_ref().map(truthy).unwrap_or(false),
        fresher_analysis: raw.fresher_analysis.text(),
        years_of_experience: raw.years_of_experience.as_ref().and_then(number_of),
        extra_sections,
    }
}

fn normalize_education(raw: RawEducation) -> EducationEntry {
    EducationEntry {
        institution: raw.institution.text(),
        degree: raw.degree.text(),
        field: raw.field.text(),
        start_date: raw.start_date.text(),
        end_date: raw.end_date.text(),
        gpa: raw.gpa.text(),
    }
}

/// Skills without a name carry no information and are dropped.
fn normalize_skill(raw: RawSkill) -> Option<SkillEntry> {
    let (name, proficiency) = match raw {
        RawSkill::Name(name) => (name.trim().to_string(), String::new()),
        RawSkill::Entry { name, proficiency } => (name.text(), proficiency.text()),
    };
    (!name.is_empty()).then_some(SkillEntry { name, proficiency })
}

fn normalize_certification(raw: RawCertification) -> CertificationEntry {
    CertificationEntry {
        name: raw.name.text(),
        issuer: raw.issuer.text(),
        date: raw.date.text(),
    }
}

fn normalize_custom_section(raw: RawCustomSection) -> CustomSectionEntry {
    let kind = raw
        .kind
        .non_blank()
        .and_then(CustomKind::parse_lenient)
        .unwrap_or(CustomKind::Project);
    let title = raw
        .name
        .non_blank()
        .or_else(|| raw.title.non_blank())
        .unwrap_or_default()
        .to_string();
    CustomSectionEntry {
        kind,
        title,
        description: raw.description.text(),
        date: raw.date.text(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
