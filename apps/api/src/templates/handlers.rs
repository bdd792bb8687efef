use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::section::SectionName;
use crate::models::template::{HeaderStyle, LayoutKind, TemplateConfig};
use crate::state::AppState;
use crate::templates::registry::required_sections;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub premium: bool,
    pub ats_safe: bool,
    pub layout_type: LayoutKind,
    pub header_style: HeaderStyle,
}

impl From<&TemplateConfig> for TemplateSummary {
    fn from(config: &TemplateConfig) -> Self {
        TemplateSummary {
            id: config.id.clone(),
            name: config.name.clone(),
            category: config.category.clone(),
            premium: config.premium,
            ats_safe: config.ats_safe,
            layout_type: config.layout.body.kind(),
            header_style: config.layout.header_style,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDetailResponse {
    pub template: TemplateConfig,
    pub required_sections: Vec<SectionName>,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: state.registry.list().map(TemplateSummary::from).collect(),
    })
}

/// GET /api/v1/templates/:id
/// Strict lookup; unknown ids are a 404 rather than a fallback.
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TemplateDetailResponse>, AppError> {
    let config = state
        .registry
        .lookup(&id)
        .ok_or_else(|| AppError::NotFound(format!("template '{id}'")))?;
    Ok(Json(TemplateDetailResponse {
        template: config.clone(),
        required_sections: required_sections(config),
    }))
}
