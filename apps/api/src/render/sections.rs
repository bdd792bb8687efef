//! Section dispatch: decides whether a placed section renders, and builds
//! its content.

use crate::models::section::{CustomKind, SectionName};
use crate::models::template::{BodyLayout, TimelineStyle};
use crate::render::dates::{format_date, format_range};
use crate::render::i18n::{section_icon, section_title};
use crate::render::tree::{
    CertificationItem, CustomItem, EducationItem, ExperienceItem, SectionBlock, SectionContent,
    SkillBar, TimelineMarks,
};
use crate::render::RenderContext;

pub const SUMMARY_PLACEHOLDER: &str = "Your professional summary goes here.";
pub const COMPANY_PLACEHOLDER: &str = "Company Name";
pub const DESCRIPTION_PLACEHOLDER: &str = "Job description and achievements.";
pub const INSTITUTION_PLACEHOLDER: &str = "Institution Name";

/// Bar width used when a proficiency is not a usable number.
pub const DEFAULT_PROFICIENCY: u8 = 50;

const META_SEPARATOR: &str = " • ";

/// How the skills section is drawn. Chosen once per template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillsMode {
    ProgressBars,
    Cards,
    Pills,
}

impl SkillsMode {
    pub fn for_layout(body: &BodyLayout, progress_bars: bool) -> Self {
        if progress_bars {
            return SkillsMode::ProgressBars;
        }
        match body {
            BodyLayout::GridMasonry(_) | BodyLayout::GridCards(_) => SkillsMode::Cards,
            _ => SkillsMode::Pills,
        }
    }
}

/// Leading-integer parse of a proficiency string (`"80"`, `"80%"`, `" 75 "`).
/// Missing or zero values use [`DEFAULT_PROFICIENCY`]; the result is clamped
/// to 0..=100.
pub fn proficiency_percent(proficiency: &str) -> u8 {
    let s = proficiency.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let run = &digits[..end];
    if run.is_empty() {
        return DEFAULT_PROFICIENCY;
    }
    // The run is all digits, so the only parse failure is overflow.
    let value = run.parse::<u64>().unwrap_or(u64::MAX);
    match (negative, value) {
        (_, 0) => DEFAULT_PROFICIENCY,
        (true, _) => 0,
        (false, v) => v.min(100) as u8,
    }
}

/// Certification dates that are not shown.
fn is_displayable_date(date: &str) -> bool {
    let date = date.trim();
    !date.is_empty()
        && !date.eq_ignore_ascii_case("ongoing")
        && !date.eq_ignore_ascii_case("undefined")
}

/// Issuer and date joined by a bullet; the bullet and the date are dropped
/// for blank, `ongoing` and `undefined` dates.
pub fn certification_meta(issuer: &str, date: &str) -> String {
    let issuer = issuer.trim();
    let date = date.trim();
    match (issuer.is_empty(), is_displayable_date(date)) {
        (false, true) => format!("{issuer}{META_SEPARATOR}{date}"),
        (false, false) => issuer.to_string(),
        (true, true) => date.to_string(),
        (true, false) => String::new(),
    }
}

fn or_placeholder(text: &str, placeholder: &str) -> String {
    if text.is_empty() {
        placeholder.to_string()
    } else {
        text.to_string()
    }
}

/// True when the section has backing data. `summary` always renders.
pub fn has_content(ctx: &RenderContext<'_>, name: &SectionName) -> bool {
    let resume = ctx.resume;
    match name {
        SectionName::Summary => true,
        SectionName::Experience => !resume.experience.is_empty(),
        SectionName::Education => !resume.education.is_empty(),
        SectionName::Skills => !resume.skills.is_empty(),
        SectionName::Certifications => !resume.certifications.is_empty(),
        SectionName::Custom(kind) => resume.custom_entries(*kind).next().is_some(),
        SectionName::Other(key) => resume
            .extra_sections
            .get(key)
            .is_some_and(|items| !items.is_empty()),
    }
}

/// Renders one placed section, or `None` when it has nothing to show.
pub fn render_section(
    ctx: &RenderContext<'_>,
    name: &SectionName,
    compact: bool,
) -> Option<SectionBlock> {
    if !has_content(ctx, name) {
        return None;
    }
    let icon = if ctx.template.layout.show_icons {
        section_icon(name)
    } else {
        None
    };
    Some(SectionBlock {
        name: name.clone(),
        title: section_title(name, ctx.options.language),
        title_color: ctx.colors.primary.clone(),
        icon,
        compact,
        content: section_content(ctx, name),
    })
}

fn section_content(ctx: &RenderContext<'_>, name: &SectionName) -> SectionContent {
    match name {
        SectionName::Summary => SectionContent::Paragraph {
            text: or_placeholder(&ctx.resume.summary, SUMMARY_PLACEHOLDER),
            color: ctx.colors.text.clone(),
        },
        SectionName::Experience => experience(ctx),
        SectionName::Education => education(ctx),
        SectionName::Skills => skills(ctx),
        SectionName::Certifications => certifications(ctx),
        SectionName::Custom(kind) => custom_entries(ctx, *kind),
        SectionName::Other(other) => SectionContent::Placeholder {
            text: format!("Section content for {other}"),
        },
    }
}

fn experience(ctx: &RenderContext<'_>) -> SectionContent {
    let style = ctx.options.date_style;
    let entries = ctx
        .resume
        .experience
        .iter()
        .map(|exp| {
            let mut meta = format_range(&exp.start_date, &exp.end_date, style);
            if !exp.location.is_empty() {
                if !meta.is_empty() {
                    meta.push_str(META_SEPARATOR);
                }
                meta.push_str(&exp.location);
            }
            ExperienceItem {
                job_title: exp.job_title.clone(),
                company: or_placeholder(&exp.company, COMPANY_PLACEHOLDER),
                meta,
                description: or_placeholder(&exp.description, DESCRIPTION_PLACEHOLDER),
            }
        })
        .collect();

    let timeline = match ctx.template.layout.timeline_style {
        Some(TimelineStyle::VerticalLine) => Some(TimelineMarks {
            line_color: ctx.colors.timeline().to_string(),
            dot_color: ctx.colors.accent.clone(),
        }),
        None => None,
    };

    SectionContent::Experience {
        entries,
        timeline,
        title_color: ctx.colors.primary.clone(),
        meta_color: ctx.colors.secondary.clone(),
    }
}

fn degree_line(degree: &str, field: &str) -> String {
    match (degree.is_empty(), field.is_empty()) {
        (false, false) => format!("{degree} in {field}"),
        (false, true) => degree.to_string(),
        (true, false) => field.to_string(),
        (true, true) => String::new(),
    }
}

fn education(ctx: &RenderContext<'_>) -> SectionContent {
    let opts = ctx.options;
    let entries = ctx
        .resume
        .education
        .iter()
        .map(|edu| EducationItem {
            institution: or_placeholder(&edu.institution, INSTITUTION_PLACEHOLDER),
            dates: format_range(&edu.start_date, &edu.end_date, opts.date_style),
            degree_line: degree_line(&edu.degree, &edu.field),
            gpa_line: (opts.show_gpa && !edu.gpa.is_empty())
                .then(|| format!("{}: {}", opts.gpa_label, edu.gpa)),
        })
        .collect();
    SectionContent::Education {
        entries,
        title_color: ctx.colors.primary.clone(),
        meta_color: ctx.colors.secondary.clone(),
    }
}

fn skills(ctx: &RenderContext<'_>) -> SectionContent {
    let skills = &ctx.resume.skills;
    let names = || -> Vec<String> { skills.iter().map(|s| s.name.clone()).collect() };
    match ctx.skills_mode {
        SkillsMode::ProgressBars => SectionContent::SkillBars {
            bars: skills
                .iter()
                .map(|s| SkillBar {
                    name: s.name.clone(),
                    label: s.proficiency.clone(),
                    percent: proficiency_percent(&s.proficiency),
                })
                .collect(),
            fill_color: ctx.colors.accent.clone(),
            label_color: ctx.colors.secondary.clone(),
        },
        SkillsMode::Cards => SectionContent::SkillCards {
            names: names(),
            background: ctx.colors.cards().to_string(),
        },
        SkillsMode::Pills => SectionContent::SkillPills {
            names: names(),
            background: ctx.colors.accent_tint(),
            color: ctx.colors.accent.clone(),
        },
    }
}

fn certifications(ctx: &RenderContext<'_>) -> SectionContent {
    SectionContent::Certifications {
        entries: ctx
            .resume
            .certifications
            .iter()
            .map(|cert| CertificationItem {
                name: cert.name.clone(),
                meta: certification_meta(&cert.issuer, &cert.date),
            })
            .collect(),
        title_color: ctx.colors.primary.clone(),
        meta_color: ctx.colors.secondary.clone(),
    }
}

fn custom_entries(ctx: &RenderContext<'_>, kind: CustomKind) -> SectionContent {
    SectionContent::CustomEntries {
        entries: ctx
            .resume
            .custom_entries(kind)
            .map(|entry| CustomItem {
                title: entry.title.clone(),
                description: entry.description.clone(),
                date: format_date(&entry.date, ctx.options.date_style),
            })
            .collect(),
        title_color: ctx.colors.primary.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{CertificationEntry, ResumeRecord, SkillEntry};
    use crate::render::colors::{merge_colors, MergedColors};
    use crate::render::RenderOptions;
    use crate::templates::registry::global;
    use serde_json::json;

    fn with_ctx<R>(
        template_id: &str,
        resume: &ResumeRecord,
        f: impl FnOnce(&RenderContext<'_>) -> R,
    ) -> R {
        let template = global().lookup(template_id).unwrap();
        let colors: MergedColors = merge_colors(&template.styles.colors, &Default::default());
        let options = RenderOptions::default();
        let ctx = RenderContext::new(resume, template, &colors, &options);
        f(&ctx)
    }

    #[test]
    fn test_certification_meta_suppresses_unshown_dates() {
        assert_eq!(certification_meta("Amazon", "Ongoing"), "Amazon");
        assert_eq!(certification_meta("Amazon", "undefined"), "Amazon");
        assert_eq!(certification_meta("Amazon", "  "), "Amazon");
        assert_eq!(certification_meta("Amazon", "2022"), "Amazon • 2022");
        assert_eq!(certification_meta("", "2022"), "2022");
        assert_eq!(certification_meta("", "ONGOING"), "");
    }

    #[test]
    fn test_proficiency_percent() {
        assert_eq!(proficiency_percent("80"), 80);
        assert_eq!(proficiency_percent("abc"), DEFAULT_PROFICIENCY);
        assert_eq!(proficiency_percent(""), DEFAULT_PROFICIENCY);
        assert_eq!(proficiency_percent("0"), DEFAULT_PROFICIENCY);
        assert_eq!(proficiency_percent("75%"), 75);
        assert_eq!(proficiency_percent(" 90 years"), 90);
        assert_eq!(proficiency_percent("250"), 100);
        assert_eq!(proficiency_percent("-5"), 0);
        assert_eq!(proficiency_percent("99999999999999999999999"), 100);
        assert_eq!(proficiency_percent("-99999999999999999999999"), 0);
        assert_eq!(proficiency_percent("-"), DEFAULT_PROFICIENCY);
    }

    #[test]
    fn test_skills_mode_selection() {
        let single = BodyLayout::SingleColumn { sections: vec![] };
        assert_eq!(SkillsMode::for_layout(&single, true), SkillsMode::ProgressBars);
        assert_eq!(SkillsMode::for_layout(&single, false), SkillsMode::Pills);
        let l = global().lookup("portfolio_cards").unwrap();
        assert_eq!(
            SkillsMode::for_layout(&l.layout.body, l.layout.progress_bars),
            SkillsMode::Cards
        );
    }

    #[test]
    fn test_empty_sections_are_skipped_except_summary() {
        let resume = ResumeRecord::default();
        with_ctx("classic", &resume, |ctx| {
            assert!(render_section(ctx, &SectionName::Experience, false).is_none());
            assert!(render_section(ctx, &SectionName::Skills, false).is_none());
            let summary = render_section(ctx, &SectionName::Summary, false).unwrap();
            assert!(matches!(
                summary.content,
                SectionContent::Paragraph { ref text, .. } if text == SUMMARY_PLACEHOLDER
            ));
        });
    }

    #[test]
    fn test_unknown_section_with_data_renders_placeholder() {
        let mut resume = ResumeRecord::default();
        resume
            .extra_sections
            .insert("languages".to_string(), vec![json!({ "language": "French" })]);
        with_ctx("classic", &resume, |ctx| {
            let block = render_section(ctx, &SectionName::from("languages"), false).unwrap();
            assert_eq!(block.title, "Languages");
            assert_eq!(
                block.content,
                SectionContent::Placeholder {
                    text: "Section content for languages".to_string()
                }
            );
            assert!(render_section(ctx, &SectionName::from("hobbies_x"), false).is_none());
        });
    }

    #[test]
    fn test_progress_bars_in_progress_layout() {
        let resume = ResumeRecord {
            skills: vec![
                SkillEntry {
                    name: "SQL".to_string(),
                    proficiency: "abc".to_string(),
                },
                SkillEntry {
                    name: "Rust".to_string(),
                    proficiency: "80".to_string(),
                },
            ],
            ..ResumeRecord::default()
        };
        with_ctx("infographic_professional", &resume, |ctx| {
            let block = render_section(ctx, &SectionName::Skills, false).unwrap();
            let SectionContent::SkillBars { bars, .. } = block.content else {
                panic!("expected progress bars");
            };
            assert_eq!(bars[0].percent, 50);
            assert_eq!(bars[1].percent, 80);
        });
    }

    #[test]
    fn test_pills_use_tinted_accent() {
        let resume = ResumeRecord {
            skills: vec![SkillEntry {
                name: "Go".to_string(),
                proficiency: String::new(),
            }],
            ..ResumeRecord::default()
        };
        with_ctx("classic", &resume, |ctx| {
            let block = render_section(ctx, &SectionName::Skills, false).unwrap();
            assert_eq!(
                block.content,
                SectionContent::SkillPills {
                    names: vec!["Go".to_string()],
                    background: "#2563EB20".to_string(),
                    color: "#2563EB".to_string(),
                }
            );
        });
    }

    #[test]
    fn test_certifications_section() {
        let resume = ResumeRecord {
            certifications: vec![CertificationEntry {
                name: "AWS Cert".to_string(),
                issuer: "Amazon".to_string(),
                date: "Ongoing".to_string(),
            }],
            ..ResumeRecord::default()
        };
        with_ctx("classic", &resume, |ctx| {
            let block = render_section(ctx, &SectionName::Certifications, false).unwrap();
            let SectionContent::Certifications { entries, .. } = block.content else {
                panic!("expected certifications");
            };
            assert_eq!(entries[0].name, "AWS Cert");
            assert_eq!(entries[0].meta, "Amazon");
        });
    }

    #[test]
    fn test_degree_line() {
        assert_eq!(degree_line("BSc", "Physics"), "BSc in Physics");
        assert_eq!(degree_line("BSc", ""), "BSc");
        assert_eq!(degree_line("", "Physics"), "Physics");
        assert_eq!(degree_line("", ""), "");
    }
}
