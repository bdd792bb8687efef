//! Layout Renderer — turns a normalized resume and a resolved template into
//! a renderable tree.
//!
//! Pure and synchronous: the same inputs always produce an equal tree. Header
//! style, body layout and section kind are each an exhaustive enum match, so
//! every template state has a render arm.

pub mod body;
pub mod colors;
pub mod dates;
pub mod handlers;
pub mod header;
pub mod i18n;
pub mod sections;
pub mod tree;

use crate::models::resume::ResumeRecord;
use crate::models::template::TemplateConfig;
use crate::render::colors::MergedColors;
use crate::render::dates::DateStyle;
use crate::render::i18n::Language;
use crate::render::sections::SkillsMode;
use crate::render::tree::{PageStyle, RenderedResume};

/// Viewer preferences that affect output but not layout.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub language: Language,
    pub date_style: DateStyle,
    /// Replaces the template font unless the template is ATS-safe.
    pub font_family: Option<String>,
    pub show_gpa: bool,
    pub gpa_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            language: Language::En,
            date_style: DateStyle::Short,
            font_family: None,
            show_gpa: true,
            gpa_label: "GPA".to_string(),
        }
    }
}

/// Inputs of one render pass, borrowed for its duration.
pub struct RenderContext<'a> {
    pub resume: &'a ResumeRecord,
    pub template: &'a TemplateConfig,
    pub colors: &'a MergedColors,
    pub options: &'a RenderOptions,
    pub skills_mode: SkillsMode,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        resume: &'a ResumeRecord,
        template: &'a TemplateConfig,
        colors: &'a MergedColors,
        options: &'a RenderOptions,
    ) -> Self {
        let skills_mode =
            SkillsMode::for_layout(&template.layout.body, template.layout.progress_bars);
        RenderContext {
            resume,
            template,
            colors,
            options,
            skills_mode,
        }
    }

    fn page_style(&self) -> PageStyle {
        let styles = &self.template.styles;
        let font_family = match self.options.font_family.as_deref().map(str::trim) {
            Some(font) if !font.is_empty() && !self.template.ats_safe => font.to_string(),
            _ => styles.font_family.clone(),
        };
        PageStyle {
            font_family,
            font_size: styles.font_size.clone(),
            line_height: styles.line_height.clone(),
            background: self.colors.background.clone(),
        }
    }
}

/// Renders a resume with a resolved template and merged palette.
pub fn render_resume(
    resume: &ResumeRecord,
    template: &TemplateConfig,
    colors: &MergedColors,
    options: &RenderOptions,
) -> RenderedResume {
    let ctx = RenderContext::new(resume, template, colors, options);
    RenderedResume {
        template_id: template.id.clone(),
        page: ctx.page_style(),
        colors: colors.clone(),
        header: header::render_header(&ctx),
        body: body::render_body(&ctx),
    }
}
