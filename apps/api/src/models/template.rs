//! Template descriptors: layout shape, section slots, typography, palette.
//!
//! The catalog stores layouts in the flat JSON shape the template table has
//! always used (`type`, `sidebarSections`, `columns`, ...). On load that shape
//! is folded into [`LayoutConfig`], whose [`BodyLayout`] carries one variant
//! per layout type with only the geometry that type consumes. Unknown layout
//! types and header styles resolve to the single-column / default variants
//! here, once, so the renderer only ever sees known states.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::section::SectionName;

// ────────────────────────────────────────────────────────────────────────────
// Template descriptor
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub premium: bool,
    /// ATS-safe templates keep their own font even when the user picks another.
    #[serde(default)]
    pub ats_safe: bool,
    pub layout: LayoutConfig,
    pub styles: TemplateStyles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyles {
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size")]
    pub font_size: String,
    #[serde(default = "default_line_height")]
    pub line_height: String,
    #[serde(default)]
    pub colors: Palette,
}

fn default_font_family() -> String {
    "'Inter', sans-serif".to_string()
}

fn default_font_size() -> String {
    "11pt".to_string()
}

fn default_line_height() -> String {
    "1.4".to_string()
}

/// A set of color roles, every one optional.
///
/// Used both for template defaults and for user overrides; the two are
/// combined per render by `render::colors::merge_colors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shapes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charts: Option<String>,
    /// Full CSS background value, not a single color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_gradient: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Header style
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    Traditional,
    SplitHeader,
    HeroBanner,
    DiagonalSplit,
    MinimalHeader,
    InfographicHeader,
    Default,
}

impl HeaderStyle {
    /// Unset or unknown tags resolve to `Default`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(str::trim) {
            Some("traditional") => HeaderStyle::Traditional,
            Some("split-header") => HeaderStyle::SplitHeader,
            Some("hero-banner") => HeaderStyle::HeroBanner,
            Some("diagonal-split") => HeaderStyle::DiagonalSplit,
            Some("minimal-header") => HeaderStyle::MinimalHeader,
            Some("infographic-header") => HeaderStyle::InfographicHeader,
            _ => HeaderStyle::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderStyle::Traditional => "traditional",
            HeaderStyle::SplitHeader => "split-header",
            HeaderStyle::HeroBanner => "hero-banner",
            HeaderStyle::DiagonalSplit => "diagonal-split",
            HeaderStyle::MinimalHeader => "minimal-header",
            HeaderStyle::InfographicHeader => "infographic-header",
            HeaderStyle::Default => "default",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Body layout
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    SingleColumn,
    SidebarLeft,
    SidebarRight,
    Asymmetric,
    GridMasonry,
    GridCards,
    TimelineVertical,
    HeaderHero,
}

impl LayoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::SingleColumn => "single-column",
            LayoutKind::SidebarLeft => "sidebar-left",
            LayoutKind::SidebarRight => "sidebar-right",
            LayoutKind::Asymmetric => "asymmetric",
            LayoutKind::GridMasonry => "grid-masonry",
            LayoutKind::GridCards => "grid-cards",
            LayoutKind::TimelineVertical => "timeline-vertical",
            LayoutKind::HeaderHero => "header-hero",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarGeometry {
    pub sidebar_width: String,
    pub main_width: String,
    pub sidebar_sections: Vec<SectionName>,
    pub main_sections: Vec<SectionName>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AsymmetricGeometry {
    pub left_width: String,
    pub right_width: String,
    pub left_sections: Vec<SectionName>,
    pub right_sections: Vec<SectionName>,
    pub accent_shapes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowDepth {
    Small,
    Medium,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    pub columns: u8,
    pub gap: String,
    pub sections: Vec<SectionName>,
    pub card_borders: bool,
    pub shadow: ShadowDepth,
}

/// Page-composition strategy with the geometry that strategy consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyLayout {
    SingleColumn { sections: Vec<SectionName> },
    SidebarLeft(SidebarGeometry),
    SidebarRight(SidebarGeometry),
    Asymmetric(AsymmetricGeometry),
    GridMasonry(GridGeometry),
    GridCards(GridGeometry),
    TimelineVertical { sections: Vec<SectionName> },
    HeaderHero { sections: Vec<SectionName>, card_style: bool },
}

impl BodyLayout {
    pub fn kind(&self) -> LayoutKind {
        match self {
            BodyLayout::SingleColumn { .. } => LayoutKind::SingleColumn,
            BodyLayout::SidebarLeft(_) => LayoutKind::SidebarLeft,
            BodyLayout::SidebarRight(_) => LayoutKind::SidebarRight,
            BodyLayout::Asymmetric(_) => LayoutKind::Asymmetric,
            BodyLayout::GridMasonry(_) => LayoutKind::GridMasonry,
            BodyLayout::GridCards(_) => LayoutKind::GridCards,
            BodyLayout::TimelineVertical { .. } => LayoutKind::TimelineVertical,
            BodyLayout::HeaderHero { .. } => LayoutKind::HeaderHero,
        }
    }

    /// Section slot lists this layout places, in placement order.
    pub fn slots(&self) -> Vec<&[SectionName]> {
        match self {
            BodyLayout::SingleColumn { sections }
            | BodyLayout::TimelineVertical { sections }
            | BodyLayout::HeaderHero { sections, .. } => vec![sections],
            BodyLayout::SidebarLeft(g) | BodyLayout::SidebarRight(g) => {
                vec![&g.sidebar_sections, &g.main_sections]
            }
            BodyLayout::Asymmetric(g) => vec![&g.left_sections, &g.right_sections],
            BodyLayout::GridMasonry(g) | BodyLayout::GridCards(g) => vec![&g.sections],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineStyle {
    VerticalLine,
}

/// Fully-resolved layout of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLayout", into = "RawLayout")]
pub struct LayoutConfig {
    pub header_style: HeaderStyle,
    pub body: BodyLayout,
    pub show_icons: bool,
    pub progress_bars: bool,
    pub timeline_style: Option<TimelineStyle>,
    pub header_height: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Flat catalog shape
// ────────────────────────────────────────────────────────────────────────────

/// Layout as written in the template catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLayout {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_style: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections_order: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sidebar_sections: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub main_sections: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub left_sections: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub right_sections: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_gap: Option<String>,
    /// Older catalog entries use `true` here; only `"vertical-line"` draws a line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline_style: Option<Value>,
    pub progress_bars: bool,
    pub show_icons: bool,
    pub accent_shapes: bool,
    pub card_borders: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_depth: Option<String>,
    pub card_style: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_height: Option<String>,
}

const DEFAULT_NARROW_WIDTH: &str = "30%";
const DEFAULT_WIDE_WIDTH: &str = "70%";
const DEFAULT_GRID_COLUMNS: u8 = 2;
const MAX_GRID_COLUMNS: u8 = 4;
const DEFAULT_GRID_GAP: &str = "1rem";

fn section_list(names: &[String]) -> Vec<SectionName> {
    names.iter().map(|n| SectionName::from(n.as_str())).collect()
}

fn parse_percent(width: &str) -> Option<f32> {
    let value: f32 = width.trim().strip_suffix('%')?.trim().parse().ok()?;
    (0.0..=100.0).contains(&value).then_some(value)
}

/// Resolves a narrow/wide column pair.
///
/// A missing side is the percentage complement of the given side, or `auto`
/// when the given side is not a percentage. Both missing → 30% / 70%.
fn column_widths(narrow: Option<String>, wide: Option<String>) -> (String, String) {
    match (narrow, wide) {
        (Some(n), Some(w)) => (n, w),
        (Some(n), None) => {
            let w = parse_percent(&n)
                .map(|p| format!("{}%", 100.0 - p))
                .unwrap_or_else(|| "auto".to_string());
            (n, w)
        }
        (None, Some(w)) => {
            let n = parse_percent(&w)
                .map(|p| format!("{}%", 100.0 - p))
                .unwrap_or_else(|| "auto".to_string());
            (n, w)
        }
        (None, None) => (DEFAULT_NARROW_WIDTH.to_string(), DEFAULT_WIDE_WIDTH.to_string()),
    }
}

impl From<RawLayout> for LayoutConfig {
    fn from(raw: RawLayout) -> Self {
        let layout_type = raw.layout_type.as_deref().map(str::trim).unwrap_or("");
        let sections = section_list(&raw.sections_order);

        let grid = |raw: &RawLayout| GridGeometry {
            columns: raw
                .columns
                .filter(|c| *c > 0)
                .map(|c| c.min(MAX_GRID_COLUMNS))
                .unwrap_or(DEFAULT_GRID_COLUMNS),
            gap: raw
                .grid_gap
                .clone()
                .unwrap_or_else(|| DEFAULT_GRID_GAP.to_string()),
            sections: section_list(&raw.sections_order),
            card_borders: raw.card_borders,
            shadow: match raw.shadow_depth.as_deref() {
                Some("medium") => ShadowDepth::Medium,
                _ => ShadowDepth::Small,
            },
        };

        let sidebar = |raw: &RawLayout| {
            let (sidebar_width, main_width) =
                column_widths(raw.sidebar_width.clone(), raw.main_width.clone());
            SidebarGeometry {
                sidebar_width,
                main_width,
                sidebar_sections: section_list(&raw.sidebar_sections),
                main_sections: section_list(&raw.main_sections),
            }
        };

        let body = match layout_type {
            "sidebar-left" => BodyLayout::SidebarLeft(sidebar(&raw)),
            "sidebar-right" => BodyLayout::SidebarRight(sidebar(&raw)),
            "asymmetric" => {
                let (left_width, right_width) =
                    column_widths(raw.left_width.clone(), raw.right_width.clone());
                BodyLayout::Asymmetric(AsymmetricGeometry {
                    left_width,
                    right_width,
                    left_sections: section_list(&raw.left_sections),
                    right_sections: section_list(&raw.right_sections),
                    accent_shapes: raw.accent_shapes,
                })
            }
            "grid-masonry" => BodyLayout::GridMasonry(grid(&raw)),
            "grid-cards" => BodyLayout::GridCards(grid(&raw)),
            "timeline-vertical" => BodyLayout::TimelineVertical { sections },
            "header-hero" => BodyLayout::HeaderHero {
                sections,
                card_style: raw.card_style,
            },
            _ => BodyLayout::SingleColumn { sections },
        };

        let timeline_style = match raw.timeline_style.as_ref().and_then(Value::as_str) {
            Some("vertical-line") => Some(TimelineStyle::VerticalLine),
            _ => None,
        };

        LayoutConfig {
            header_style: HeaderStyle::from_tag(raw.header_style.as_deref()),
            body,
            show_icons: raw.show_icons,
            // The infographic layout is a single column with progress-bar skills.
            progress_bars: raw.progress_bars || layout_type == "infographic",
            timeline_style,
            header_height: raw.header_height,
        }
    }
}

fn tags(names: &[SectionName]) -> Vec<String> {
    names.iter().map(|n| n.as_str().to_string()).collect()
}

impl From<LayoutConfig> for RawLayout {
    fn from(layout: LayoutConfig) -> Self {
        let mut raw = RawLayout {
            layout_type: Some(layout.body.kind().as_str().to_string()),
            header_style: Some(layout.header_style.as_str().to_string()),
            progress_bars: layout.progress_bars,
            show_icons: layout.show_icons,
            timeline_style: layout
                .timeline_style
                .map(|_| Value::String("vertical-line".to_string())),
            header_height: layout.header_height,
            ..RawLayout::default()
        };

        match layout.body {
            BodyLayout::SingleColumn { sections } | BodyLayout::TimelineVertical { sections } => {
                raw.sections_order = tags(&sections);
            }
            BodyLayout::HeaderHero {
                sections,
                card_style,
            } => {
                raw.sections_order = tags(&sections);
                raw.card_style = card_style;
            }
            BodyLayout::SidebarLeft(g) | BodyLayout::SidebarRight(g) => {
                raw.sidebar_width = Some(g.sidebar_width);
                raw.main_width = Some(g.main_width);
                raw.sidebar_sections = tags(&g.sidebar_sections);
                raw.main_sections = tags(&g.main_sections);
            }
            BodyLayout::Asymmetric(g) => {
                raw.left_width = Some(g.left_width);
                raw.right_width = Some(g.right_width);
                raw.left_sections = tags(&g.left_sections);
                raw.right_sections = tags(&g.right_sections);
                raw.accent_shapes = g.accent_shapes;
            }
            BodyLayout::GridMasonry(g) | BodyLayout::GridCards(g) => {
                raw.columns = Some(g.columns);
                raw.grid_gap = Some(g.gap);
                raw.sections_order = tags(&g.sections);
                raw.card_borders = g.card_borders;
                raw.shadow_depth = Some(
                    match g.shadow {
                        ShadowDepth::Small => "small",
                        ShadowDepth::Medium => "medium",
                    }
                    .to_string(),
                );
            }
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layout(value: Value) -> LayoutConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_unknown_layout_type_is_single_column() {
        let l = layout(json!({
            "type": "nonexistent-layout",
            "sectionsOrder": ["summary", "experience"]
        }));
        assert_eq!(
            l.body,
            BodyLayout::SingleColumn {
                sections: vec![SectionName::Summary, SectionName::Experience]
            }
        );
    }

    #[test]
    fn test_missing_type_is_single_column() {
        let l = layout(json!({ "sectionsOrder": ["summary"] }));
        assert_eq!(l.body.kind(), LayoutKind::SingleColumn);
    }

    #[test]
    fn test_unknown_header_style_is_default() {
        let l = layout(json!({ "headerStyle": "neon-glow" }));
        assert_eq!(l.header_style, HeaderStyle::Default);
        let l = layout(json!({}));
        assert_eq!(l.header_style, HeaderStyle::Default);
    }

    #[test]
    fn test_sidebar_without_widths_uses_30_70() {
        let l = layout(json!({
            "type": "sidebar-left",
            "sidebarSections": ["skills"],
            "mainSections": ["experience"]
        }));
        let BodyLayout::SidebarLeft(g) = l.body else {
            panic!("expected sidebar-left");
        };
        assert_eq!(g.sidebar_width, "30%");
        assert_eq!(g.main_width, "70%");
    }

    #[test]
    fn test_sidebar_main_width_is_complement() {
        let l = layout(json!({ "type": "sidebar-right", "sidebarWidth": "35%" }));
        let BodyLayout::SidebarRight(g) = l.body else {
            panic!("expected sidebar-right");
        };
        assert_eq!(g.main_width, "65%");
        assert!(g.sidebar_sections.is_empty());
    }

    #[test]
    fn test_non_percent_width_complement_is_auto() {
        let (n, w) = column_widths(Some("280px".to_string()), None);
        assert_eq!(n, "280px");
        assert_eq!(w, "auto");
    }

    #[test]
    fn test_grid_defaults() {
        let l = layout(json!({ "type": "grid-cards", "columns": 0 }));
        let BodyLayout::GridCards(g) = l.body else {
            panic!("expected grid-cards");
        };
        assert_eq!(g.columns, DEFAULT_GRID_COLUMNS);
        assert_eq!(g.gap, DEFAULT_GRID_GAP);
        assert_eq!(g.shadow, ShadowDepth::Small);
    }

    #[test]
    fn test_infographic_type_enables_progress_bars() {
        let l = layout(json!({ "type": "infographic", "sectionsOrder": ["skills"] }));
        assert!(l.progress_bars);
        assert_eq!(l.body.kind(), LayoutKind::SingleColumn);
    }

    #[test]
    fn test_boolean_timeline_style_draws_nothing() {
        let l = layout(json!({ "timelineStyle": true }));
        assert_eq!(l.timeline_style, None);
        let l = layout(json!({ "timelineStyle": "vertical-line" }));
        assert_eq!(l.timeline_style, Some(TimelineStyle::VerticalLine));
    }

    #[test]
    fn test_layout_serializes_back_to_catalog_shape() {
        let original = layout(json!({
            "type": "asymmetric",
            "headerStyle": "diagonal-split",
            "leftSections": ["summary"],
            "rightSections": ["experience"],
            "leftWidth": "40%",
            "accentShapes": true
        }));
        let value = serde_json::to_value(&original).unwrap();
        assert_eq!(value["type"], "asymmetric");
        assert_eq!(value["rightWidth"], "60%");
        let again: LayoutConfig = serde_json::from_value(value).unwrap();
        assert_eq!(again, original);
    }
}
