//! The renderable tree handed to the host page.
//!
//! Every node is plain data. Colors are resolved CSS values; nothing here
//! refers back to the template or the resume.

use serde::Serialize;

use crate::models::section::SectionName;
use crate::models::template::{HeaderStyle, ShadowDepth};
use crate::render::colors::MergedColors;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResume {
    pub template_id: String,
    pub page: PageStyle,
    pub colors: MergedColors,
    pub header: Header,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle {
    pub font_family: String,
    pub font_size: String,
    pub line_height: String,
    pub background: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub name: String,
    pub job_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderStat {
    pub label: String,
    pub value: usize,
}

/// One variant per header style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "style", rename_all = "kebab-case")]
pub enum Header {
    #[serde(rename_all = "camelCase")]
    Traditional {
        identity: Identity,
        contact_lines: Vec<String>,
        name_color: String,
        rule_color: String,
    },
    #[serde(rename_all = "camelCase")]
    SplitHeader {
        identity: Identity,
        contact_lines: Vec<String>,
        name_color: String,
        title_color: String,
        contact_color: String,
        background: String,
    },
    #[serde(rename_all = "camelCase")]
    HeroBanner {
        identity: Identity,
        contact_lines: Vec<String>,
        background: String,
        min_height: String,
    },
    #[serde(rename_all = "camelCase")]
    DiagonalSplit {
        identity: Identity,
        contact_lines: Vec<String>,
        background: String,
    },
    #[serde(rename_all = "camelCase")]
    MinimalHeader {
        identity: Identity,
        contact_line: String,
        name_color: String,
        muted_color: String,
    },
    #[serde(rename_all = "camelCase")]
    InfographicHeader {
        identity: Identity,
        stats: Vec<HeaderStat>,
        name_color: String,
        title_color: String,
        stat_color: String,
        bar_color: String,
        background: String,
    },
    #[serde(rename_all = "camelCase")]
    Default {
        identity: Identity,
        contact_line: String,
        name_color: String,
        title_color: String,
        contact_color: String,
    },
}

impl Header {
    pub fn style(&self) -> HeaderStyle {
        match self {
            Header::Traditional { .. } => HeaderStyle::Traditional,
            Header::SplitHeader { .. } => HeaderStyle::SplitHeader,
            Header::HeroBanner { .. } => HeaderStyle::HeroBanner,
            Header::DiagonalSplit { .. } => HeaderStyle::DiagonalSplit,
            Header::MinimalHeader { .. } => HeaderStyle::MinimalHeader,
            Header::InfographicHeader { .. } => HeaderStyle::InfographicHeader,
            Header::Default { .. } => HeaderStyle::Default,
        }
    }

    #[cfg(test)]
    pub fn identity(&self) -> &Identity {
        match self {
            Header::Traditional { identity, .. }
            | Header::SplitHeader { identity, .. }
            | Header::HeroBanner { identity, .. }
            | Header::DiagonalSplit { identity, .. }
            | Header::MinimalHeader { identity, .. }
            | Header::InfographicHeader { identity, .. }
            | Header::Default { identity, .. } => identity,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Body
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarBody {
    pub sidebar_width: String,
    pub main_width: String,
    pub sidebar_background: String,
    pub sidebar: Vec<SectionBlock>,
    pub main: Vec<SectionBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsymmetricBody {
    pub left_width: String,
    pub right_width: String,
    /// Decorative shape color, when the layout draws one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_shape: Option<String>,
    pub left: Vec<SectionBlock>,
    pub right: Vec<SectionBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridBody {
    pub columns: u8,
    pub gap: String,
    pub cell_background: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowDepth>,
    pub cells: Vec<SectionBlock>,
}

/// One variant per layout type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "kebab-case")]
pub enum Body {
    SingleColumn {
        sections: Vec<SectionBlock>,
    },
    SidebarLeft(SidebarBody),
    SidebarRight(SidebarBody),
    Asymmetric(AsymmetricBody),
    GridMasonry(GridBody),
    GridCards(GridBody),
    TimelineVertical {
        sections: Vec<SectionBlock>,
    },
    #[serde(rename_all = "camelCase")]
    HeaderHero {
        /// Set when sections sit on cards.
        #[serde(skip_serializing_if = "Option::is_none")]
        card_background: Option<String>,
        sections: Vec<SectionBlock>,
    },
}

impl Body {
    /// Every placed section, in placement order.
    pub fn sections(&self) -> Vec<&SectionBlock> {
        match self {
            Body::SingleColumn { sections }
            | Body::TimelineVertical { sections }
            | Body::HeaderHero { sections, .. } => sections.iter().collect(),
            Body::SidebarLeft(b) | Body::SidebarRight(b) => {
                b.sidebar.iter().chain(b.main.iter()).collect()
            }
            Body::Asymmetric(b) => b.left.iter().chain(b.right.iter()).collect(),
            Body::GridMasonry(b) | Body::GridCards(b) => b.cells.iter().collect(),
        }
    }

    #[cfg(test)]
    pub fn section(&self, name: &SectionName) -> Option<&SectionBlock> {
        self.sections().into_iter().find(|s| &s.name == name)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBlock {
    pub name: SectionName,
    pub title: String,
    pub title_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    /// Sidebar sections use smaller spacing and headings.
    pub compact: bool,
    pub content: SectionContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub job_title: String,
    pub company: String,
    /// Date range, then location, joined with a bullet.
    pub meta: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMarks {
    pub line_color: String,
    pub dot_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub institution: String,
    pub dates: String,
    /// `Degree in Field`, or whichever half is present.
    pub degree_line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBar {
    pub name: String,
    pub label: String,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationItem {
    pub name: String,
    /// Issuer and date; empty when neither is shown.
    pub meta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomItem {
    pub title: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SectionContent {
    Paragraph {
        text: String,
        color: String,
    },
    #[serde(rename_all = "camelCase")]
    Experience {
        entries: Vec<ExperienceItem>,
        #[serde(skip_serializing_if = "Option::is_none")]
        timeline: Option<TimelineMarks>,
        title_color: String,
        meta_color: String,
    },
    #[serde(rename_all = "camelCase")]
    Education {
        entries: Vec<EducationItem>,
        title_color: String,
        meta_color: String,
    },
    #[serde(rename_all = "camelCase")]
    SkillBars {
        bars: Vec<SkillBar>,
        fill_color: String,
        label_color: String,
    },
    SkillCards {
        names: Vec<String>,
        background: String,
    },
    SkillPills {
        names: Vec<String>,
        background: String,
        color: String,
    },
    #[serde(rename_all = "camelCase")]
    Certifications {
        entries: Vec<CertificationItem>,
        title_color: String,
        meta_color: String,
    },
    #[serde(rename_all = "camelCase")]
    CustomEntries {
        entries: Vec<CustomItem>,
        title_color: String,
    },
    /// A section the template places but no render arm knows.
    Placeholder {
        text: String,
    },
}
