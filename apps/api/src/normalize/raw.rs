//! Loosely-shaped resume input as it arrives from the builder or AI parsing.
//!
//! Nothing here rejects input: wrong-typed scalars become text, wrong-typed
//! sequences become empty, and unusable sequence items are dropped.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// A text field that tolerates strings, numbers, booleans and string lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LooseText(pub Option<String>);

impl LooseText {
    /// Trimmed text, or `None` when absent or blank.
    pub fn non_blank(&self) -> Option<&str> {
        self.0.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn text(&self) -> String {
        self.non_blank().unwrap_or_default().to_string()
    }
}

impl From<&str> for LooseText {
    fn from(s: &str) -> Self {
        LooseText(Some(s.to_string()))
    }
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let lines: Vec<String> = items
                .into_iter()
                .filter_map(text_of)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            (!lines.is_empty()).then(|| lines.join("\n"))
        }
        Value::Null | Value::Object(_) => None,
    }
}

impl<'de> Deserialize<'de> for LooseText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(LooseText(text_of(value)))
    }
}

/// Deserializes `T`, treating null or a value that does not fit `T` as
/// `T::default()`.
pub(crate) fn default_on_mismatch<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        debug!(error = %e, "Ignoring unusable request field");
        T::default()
    }))
}

/// Deserializes a sequence, treating null or non-array values as empty and
/// dropping items that do not fit `T`.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!(error = %e, "Dropping unusable resume list item");
                None
            }
        })
        .collect())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawExperience {
    pub job_title: LooseText,
    pub title: LooseText,
    pub position: LooseText,
    pub company: LooseText,
    pub location: LooseText,
    pub start_date: LooseText,
    pub end_date: LooseText,
    pub description: LooseText,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEducation {
    pub institution: LooseText,
    pub degree: LooseText,
    pub field: LooseText,
    pub start_date: LooseText,
    pub end_date: LooseText,
    pub gpa: LooseText,
}

/// Skills arrive either as objects or as bare names.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawSkill {
    Name(String),
    Entry {
        #[serde(default)]
        name: LooseText,
        #[serde(default)]
        proficiency: LooseText,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCertification {
    pub name: LooseText,
    pub issuer: LooseText,
    pub date: LooseText,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCustomSection {
    #[serde(rename = "type")]
    pub kind: LooseText,
    pub title: LooseText,
    pub name: LooseText,
    pub description: LooseText,
    pub date: LooseText,
}

/// Resume payload before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawResume {
    pub name: LooseText,
    pub job_title: LooseText,
    pub email: LooseText,
    pub phone: LooseText,
    pub address: LooseText,
    pub linkedin: LooseText,
    pub portfolio: LooseText,
    pub summary: LooseText,
    /// `None` when the field is missing, null or not a list.
    #[serde(deserialize_with = "optional_seq")]
    pub experience: Option<Vec<RawExperience>>,
    #[serde(deserialize_with = "lenient_seq")]
    pub education: Vec<RawEducation>,
    #[serde(deserialize_with = "lenient_seq")]
    pub skills: Vec<RawSkill>,
    #[serde(deserialize_with = "lenient_seq")]
    pub certifications: Vec<RawCertification>,
    #[serde(deserialize_with = "lenient_seq")]
    pub custom_sections: Vec<RawCustomSection>,
    pub is_fresher: Option<Value>,
    pub fresher_analysis: LooseText,
    pub years_of_experience: Option<Value>,
    #[serde(flatten)]
    pub rest: BTreeMap<String, Value>,
}

fn optional_seq<'de, D>(deserializer: D) -> Result<Option<Vec<RawExperience>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_array() {
        return Ok(None);
    }
    lenient_seq(value).map(Some).map_err(serde::de::Error::custom)
}
