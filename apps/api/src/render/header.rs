//! Header selection: one fixed composition per header style.

use crate::models::resume::ResumeRecord;
use crate::models::template::HeaderStyle;
use crate::render::colors::gradient;
use crate::render::tree::{Header, HeaderStat, Identity};
use crate::render::RenderContext;

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const DEFAULT_HERO_HEIGHT: &str = "200px";

const CONTACT_SEPARATOR: &str = " • ";

/// Joins the non-empty parts with a bullet.
fn joined<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(CONTACT_SEPARATOR)
}

/// Drops empty lines.
fn lines<I: IntoIterator<Item = String>>(candidates: I) -> Vec<String> {
    candidates.into_iter().filter(|l| !l.is_empty()).collect()
}

fn identity(resume: &ResumeRecord) -> Identity {
    let name = if resume.name.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        resume.name.clone()
    };
    Identity {
        name,
        job_title: resume.job_title.clone(),
    }
}

pub fn render_header(ctx: &RenderContext<'_>) -> Header {
    let r = ctx.resume;
    let c = ctx.colors;
    let identity = identity(r);

    match ctx.template.layout.header_style {
        HeaderStyle::Traditional => Header::Traditional {
            identity,
            contact_lines: lines([
                joined(&[&r.email, &r.phone]),
                r.address.clone(),
                if r.linkedin.is_empty() {
                    String::new()
                } else {
                    format!("LinkedIn: {}", r.linkedin)
                },
            ]),
            name_color: c.primary.clone(),
            rule_color: c.accent.clone(),
        },
        HeaderStyle::SplitHeader => Header::SplitHeader {
            identity,
            contact_lines: lines([r.email.clone(), r.phone.clone(), r.address.clone()]),
            name_color: c.primary.clone(),
            title_color: c.secondary.clone(),
            contact_color: c.text.clone(),
            background: c.background.clone(),
        },
        HeaderStyle::HeroBanner => Header::HeroBanner {
            identity,
            contact_lines: lines([joined(&[&r.email, &r.phone]), r.linkedin.clone()]),
            background: c.header_background(),
            min_height: ctx
                .template
                .layout
                .header_height
                .clone()
                .unwrap_or_else(|| DEFAULT_HERO_HEIGHT.to_string()),
        },
        HeaderStyle::DiagonalSplit => Header::DiagonalSplit {
            identity,
            contact_lines: lines([r.email.clone(), r.phone.clone()]),
            background: gradient(45, &c.primary, &c.accent),
        },
        HeaderStyle::MinimalHeader => Header::MinimalHeader {
            identity,
            contact_line: joined(&[&r.email, &r.phone, &r.address]),
            name_color: c.primary.clone(),
            muted_color: c.secondary.clone(),
        },
        HeaderStyle::InfographicHeader => Header::InfographicHeader {
            identity,
            stats: vec![
                HeaderStat {
                    label: "Jobs".to_string(),
                    value: r.experience.len(),
                },
                HeaderStat {
                    label: "Skills".to_string(),
                    value: r.skills.len(),
                },
                HeaderStat {
                    label: "Degrees".to_string(),
                    value: r.education.len(),
                },
            ],
            name_color: c.primary.clone(),
            title_color: c.secondary.clone(),
            stat_color: c.accent.clone(),
            bar_color: c.accent.clone(),
            background: c.charts().to_string(),
        },
        HeaderStyle::Default => Header::Default {
            identity,
            contact_line: joined(&[&r.email, &r.phone, &r.address]),
            name_color: c.primary.clone(),
            title_color: c.secondary.clone(),
            contact_color: c.text.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template::TemplateConfig;
    use crate::render::colors::merge_colors;
    use crate::render::RenderOptions;
    use crate::templates::registry::global;
    use serde_json::json;

    fn resume() -> ResumeRecord {
        ResumeRecord {
            name: "Ada Lovelace".to_string(),
            job_title: "Analyst".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            linkedin: "in/ada".to_string(),
            ..ResumeRecord::default()
        }
    }

    fn header_for(template: &TemplateConfig, resume: &ResumeRecord) -> Header {
        let colors = merge_colors(&template.styles.colors, &Default::default());
        let options = RenderOptions::default();
        render_header(&RenderContext::new(resume, template, &colors, &options))
    }

    fn template_with_header(style: &str) -> TemplateConfig {
        serde_json::from_value(json!({
            "id": "t",
            "name": "T",
            "category": "Test",
            "layout": { "headerStyle": style, "sectionsOrder": ["summary"] },
            "styles": { "colors": { "primary": "#111111", "accent": "#222222" } }
        }))
        .unwrap()
    }

    #[test]
    fn test_unknown_header_style_renders_default() {
        let header = header_for(&template_with_header("neon-glow"), &resume());
        assert_eq!(header.style(), HeaderStyle::Default);
        let Header::Default { contact_line, .. } = header else {
            panic!("expected default header");
        };
        // Address is blank, so no dangling separator.
        assert_eq!(contact_line, "ada@example.com • 555-0100");
    }

    #[test]
    fn test_name_placeholder() {
        let header = header_for(&template_with_header("minimal-header"), &ResumeRecord::default());
        assert_eq!(header.identity().name, NAME_PLACEHOLDER);
    }

    #[test]
    fn test_traditional_contact_lines() {
        let header = header_for(&template_with_header("traditional"), &resume());
        let Header::Traditional { contact_lines, rule_color, .. } = header else {
            panic!("expected traditional header");
        };
        assert_eq!(
            contact_lines,
            vec!["ada@example.com • 555-0100".to_string(), "LinkedIn: in/ada".to_string()]
        );
        assert_eq!(rule_color, "#222222");
    }

    #[test]
    fn test_hero_banner_gradient_and_height() {
        let header = header_for(&template_with_header("hero-banner"), &resume());
        let Header::HeroBanner { background, min_height, .. } = header else {
            panic!("expected hero banner");
        };
        assert_eq!(background, "linear-gradient(135deg, #111111 0%, #222222 100%)");
        assert_eq!(min_height, DEFAULT_HERO_HEIGHT);

        let hero = global().lookup("creative_header_hero").unwrap();
        let Header::HeroBanner { background, min_height, .. } = header_for(hero, &resume()) else {
            panic!("expected hero banner");
        };
        assert_eq!(background, "linear-gradient(120deg, #1E3A8A 0%, #DB2777 100%)");
        assert_eq!(min_height, "220px");
    }

    #[test]
    fn test_diagonal_uses_45_degrees() {
        let header = header_for(&template_with_header("diagonal-split"), &resume());
        let Header::DiagonalSplit { background, .. } = header else {
            panic!("expected diagonal split");
        };
        assert!(background.starts_with("linear-gradient(45deg"));
    }

    #[test]
    fn test_infographic_stats_count_entries() {
        let mut r = resume();
        r.skills = vec![Default::default(), Default::default()];
        let Header::InfographicHeader { stats, .. } =
            header_for(&template_with_header("infographic-header"), &r)
        else {
            panic!("expected infographic header");
        };
        let values: Vec<usize> = stats.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![0, 2, 0]);
    }
}
