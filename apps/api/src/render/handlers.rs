use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::normalize::normalize_resume;
use crate::normalize::raw::{default_on_mismatch, RawResume};
use crate::render::colors::{merge_colors, sanitize_palette, CustomColors};
use crate::render::dates::DateStyle;
use crate::render::i18n::Language;
use crate::render::tree::RenderedResume;
use crate::render::{render_resume, RenderOptions};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateFormatPreference {
    #[serde(deserialize_with = "default_on_mismatch")]
    pub month_display: Option<DateStyle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontPair {
    #[serde(deserialize_with = "default_on_mismatch")]
    pub font_family: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyPreference {
    #[serde(deserialize_with = "default_on_mismatch")]
    pub font_pair: FontPair,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPreference {
    #[serde(rename = "showGPA", deserialize_with = "default_on_mismatch")]
    pub show_gpa: Option<bool>,
    #[serde(deserialize_with = "default_on_mismatch")]
    pub gpa_label: Option<String>,
}

/// Display preferences saved alongside a resume.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    #[serde(deserialize_with = "default_on_mismatch")]
    pub date_format: DateFormatPreference,
    #[serde(deserialize_with = "default_on_mismatch")]
    pub typography: TypographyPreference,
    #[serde(deserialize_with = "default_on_mismatch")]
    pub education: EducationPreference,
}

/// Every field may be missing, null or mistyped; each then takes its default.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    #[serde(default, deserialize_with = "default_on_mismatch")]
    pub resume: RawResume,
    #[serde(default, deserialize_with = "default_on_mismatch")]
    pub template_id: Option<String>,
    #[serde(default)]
    pub custom_colors: CustomColors,
    #[serde(default, deserialize_with = "default_on_mismatch")]
    pub preferences: Preferences,
    /// Section title language; falls back to the configured default.
    #[serde(default, deserialize_with = "default_on_mismatch")]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateChoice {
    pub requested: Option<String>,
    pub resolved: String,
    pub fell_back: bool,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub template: TemplateChoice,
    pub rendered: RenderedResume,
}

fn render_options(req: &RenderRequest, default_language: Language) -> RenderOptions {
    let defaults = RenderOptions::default();
    let prefs = &req.preferences;
    RenderOptions {
        language: req
            .language
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or(default_language),
        date_style: prefs.date_format.month_display.unwrap_or_default(),
        font_family: prefs.typography.font_pair.font_family.clone(),
        show_gpa: prefs.education.show_gpa.unwrap_or(defaults.show_gpa),
        gpa_label: prefs
            .education
            .gpa_label
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.gpa_label),
    }
}

/// POST /api/v1/render
/// Normalizes the resume, resolves the template (falling back to the
/// configured default) and returns the renderable tree.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    let options = render_options(&req, state.config.default_language);
    let requested = req
        .template_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string);
    let resolution = state
        .registry
        .resolve_or(requested.as_deref().unwrap_or(""), &state.config.default_template);
    let template = resolution.config();
    let fell_back = resolution.fell_back();

    let resume = normalize_resume(req.resume);
    let custom = sanitize_palette(req.custom_colors.for_template(&template.id));
    let colors = merge_colors(&template.styles.colors, &custom);
    let rendered = render_resume(&resume, template, &colors, &options);

    debug!(
        template = %template.id,
        header = ?rendered.header.style(),
        sections = rendered.body.sections().len(),
        "Resume rendered"
    );
    if fell_back && requested.is_none() {
        info!(template = %template.id, "No template requested; using default");
    }

    Ok(Json(RenderResponse {
        template: TemplateChoice {
            requested,
            resolved: rendered.template_id.clone(),
            fell_back,
        },
        rendered,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> RenderRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_options_from_preferences() {
        let req = request(json!({
            "language": "fr",
            "preferences": {
                "dateFormat": { "monthDisplay": "long" },
                "typography": { "fontPair": { "fontFamily": "'Lora', serif" } },
                "education": { "showGPA": false, "gpaLabel": "CGPA" }
            }
        }));
        let opts = render_options(&req, Language::En);
        assert_eq!(opts.language, Language::Fr);
        assert_eq!(opts.date_style, DateStyle::Long);
        assert_eq!(opts.font_family.as_deref(), Some("'Lora', serif"));
        assert!(!opts.show_gpa);
        assert_eq!(opts.gpa_label, "CGPA");
    }

    #[test]
    fn test_null_and_mistyped_fields_take_defaults() {
        let req = request(json!({
            "resume": null,
            "templateId": 7,
            "customColors": null,
            "preferences": {
                "dateFormat": { "monthDisplay": "sideways" },
                "typography": null,
                "education": { "showGPA": "no", "gpaLabel": "CGPA" }
            },
            "language": null
        }));
        assert!(req.template_id.is_none());
        assert_eq!(req.custom_colors, CustomColors::default());
        let opts = render_options(&req, Language::En);
        assert_eq!(opts.date_style, DateStyle::Short);
        assert!(opts.font_family.is_none());
        assert!(opts.show_gpa);
        assert_eq!(opts.gpa_label, "CGPA");

        let req = request(json!({ "preferences": "compact" }));
        assert!(req.preferences.education.show_gpa.is_none());
    }

    #[test]
    fn test_options_defaults() {
        let req = request(json!({ "language": "xx" }));
        let opts = render_options(&req, Language::Es);
        assert_eq!(opts.language, Language::Es);
        assert_eq!(opts.date_style, DateStyle::Short);
        assert!(opts.show_gpa);
        assert_eq!(opts.gpa_label, "GPA");
    }
}
