//! Section identifiers shared by template slots and resume content.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag of a user-defined custom section entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomKind {
    Project,
    Achievements,
    Volunteer,
    Publication,
    Reference,
    Award,
    Hobby,
}

impl CustomKind {
    pub const ALL: [CustomKind; 7] = [
        CustomKind::Project,
        CustomKind::Achievements,
        CustomKind::Volunteer,
        CustomKind::Publication,
        CustomKind::Reference,
        CustomKind::Award,
        CustomKind::Hobby,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomKind::Project => "project",
            CustomKind::Achievements => "achievements",
            CustomKind::Volunteer => "volunteer",
            CustomKind::Publication => "publication",
            CustomKind::Reference => "reference",
            CustomKind::Award => "award",
            CustomKind::Hobby => "hobby",
        }
    }

    /// Exact tag match, as used for template slot names.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == tag)
    }

    /// Lenient match for free-form input: case-insensitive, tolerates plurals.
    /// Returns `None` when nothing matches.
    pub fn parse_lenient(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        let kind = match tag.as_str() {
            "project" | "projects" => CustomKind::Project,
            "achievement" | "achievements" => CustomKind::Achievements,
            "volunteer" | "volunteering" | "volunteer work" => CustomKind::Volunteer,
            "publication" | "publications" => CustomKind::Publication,
            "reference" | "references" => CustomKind::Reference,
            "award" | "awards" => CustomKind::Award,
            "hobby" | "hobbies" | "interests" => CustomKind::Hobby,
            _ => return None,
        };
        Some(kind)
    }
}

/// A named content block a template can place on the page.
///
/// Built-in sections have dedicated render arms; custom kinds render the
/// matching `customSections` entries; anything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionName {
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Custom(CustomKind),
    Other(String),
}

impl SectionName {
    pub fn as_str(&self) -> &str {
        match self {
            SectionName::Summary => "summary",
            SectionName::Experience => "experience",
            SectionName::Education => "education",
            SectionName::Skills => "skills",
            SectionName::Certifications => "certifications",
            SectionName::Custom(kind) => kind.as_str(),
            SectionName::Other(name) => name,
        }
    }

    /// True for the five built-in sections and the custom-section tags.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, SectionName::Other(_))
    }
}

impl From<&str> for SectionName {
    fn from(tag: &str) -> Self {
        match tag {
            "summary" => SectionName::Summary,
            "experience" => SectionName::Experience,
            "education" => SectionName::Education,
            "skills" => SectionName::Skills,
            "certifications" => SectionName::Certifications,
            other => match CustomKind::from_tag(other) {
                Some(kind) => SectionName::Custom(kind),
                None => SectionName::Other(other.to_string()),
            },
        }
    }
}

impl From<String> for SectionName {
    fn from(tag: String) -> Self {
        SectionName::from(tag.as_str())
    }
}

impl From<SectionName> for String {
    fn from(name: SectionName) -> Self {
        name.as_str().to_string()
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tags_parse() {
        assert_eq!(SectionName::from("summary"), SectionName::Summary);
        assert_eq!(SectionName::from("certifications"), SectionName::Certifications);
    }

    #[test]
    fn test_custom_tags_parse() {
        assert_eq!(
            SectionName::from("award"),
            SectionName::Custom(CustomKind::Award)
        );
        assert!(SectionName::from("hobby").is_recognized());
    }

    #[test]
    fn test_unknown_tag_is_other() {
        let name = SectionName::from("languages");
        assert_eq!(name, SectionName::Other("languages".to_string()));
        assert!(!name.is_recognized());
    }

    #[test]
    fn test_slot_tags_are_exact() {
        // Slot names are case-sensitive and singular.
        assert!(matches!(SectionName::from("Projects"), SectionName::Other(_)));
        assert!(matches!(SectionName::from("projects"), SectionName::Other(_)));
    }

    #[test]
    fn test_lenient_kind_parse() {
        assert_eq!(CustomKind::parse_lenient(" Awards "), Some(CustomKind::Award));
        assert_eq!(CustomKind::parse_lenient("HOBBIES"), Some(CustomKind::Hobby));
        assert_eq!(CustomKind::parse_lenient("course"), None);
    }

    #[test]
    fn test_serde_uses_plain_tags() {
        let json = serde_json::to_string(&SectionName::Custom(CustomKind::Volunteer)).unwrap();
        assert_eq!(json, "\"volunteer\"");
        let back: SectionName = serde_json::from_str("\"skills\"").unwrap();
        assert_eq!(back, SectionName::Skills);
    }
}
