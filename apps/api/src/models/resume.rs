use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::section::CustomKind;

/// Canonical resume consumed by the renderer.
///
/// Produced only by `normalize::normalize_resume`. Every sequence is present
/// (possibly empty) and every text field is a trimmed string, so render code
/// never needs more than an emptiness check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
    pub portfolio: String,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub custom_sections: Vec<CustomSectionEntry>,
    pub is_fresher: bool,
    pub fresher_analysis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<f64>,
    /// Array-valued input fields with no canonical slot (e.g. `languages`).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_sections: BTreeMap<String, Vec<Value>>,
}

impl ResumeRecord {
    pub fn custom_entries(&self, kind: CustomKind) -> impl Iterator<Item = &CustomSectionEntry> {
        self.custom_sections.iter().filter(move |e| e.kind == kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSectionEntry {
    pub kind: CustomKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}
