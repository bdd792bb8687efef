//! Per-render color palette: template defaults overridden by user choices.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::models::template::Palette;

pub const FALLBACK_PRIMARY: &str = "#4B5EAA";
pub const FALLBACK_SECONDARY: &str = "#6B7280";
pub const FALLBACK_TEXT: &str = "#1F2937";
pub const FALLBACK_ACCENT: &str = "#9333EA";
pub const FALLBACK_BACKGROUND: &str = "#FFFFFF";

/// Alpha suffix used for tinted fills (pill backgrounds, card borders).
pub const TINT_ALPHA: &str = "20";

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("custom color '{role}' is not a CSS color: '{value}'")]
    Unrecognized { role: &'static str, value: String },
}

/// User color overrides. Accepts one flat palette, palettes keyed by
/// template id (`{"classic": {"accent": "#f00"}}`), or both mixed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomColors {
    shared: Palette,
    per_template: BTreeMap<String, Palette>,
}

impl CustomColors {
    /// The template's own entry, else the flat palette.
    pub fn for_template(&self, id: &str) -> &Palette {
        self.per_template.get(id).unwrap_or(&self.shared)
    }
}

impl From<Palette> for CustomColors {
    fn from(shared: Palette) -> Self {
        Self {
            shared,
            per_template: BTreeMap::new(),
        }
    }
}

/// Keeps string-valued roles only; anything else is left to the template.
fn palette_from(roles: Map<String, Value>) -> Palette {
    let roles: Map<String, Value> = roles.into_iter().filter(|(_, v)| v.is_string()).collect();
    serde_json::from_value(Value::Object(roles)).unwrap_or_default()
}

impl<'de> Deserialize<'de> for CustomColors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Value::Object(map) = Value::deserialize(deserializer)? else {
            return Ok(Self::default());
        };
        let mut shared = Map::new();
        let mut per_template = BTreeMap::new();
        for (key, value) in map {
            match value {
                Value::Object(roles) => {
                    per_template.insert(key, palette_from(roles));
                }
                other => {
                    shared.insert(key, other);
                }
            }
        }
        Ok(Self {
            shared: palette_from(shared),
            per_template,
        })
    }
}

/// The palette actually used for one render.
///
/// Core roles are always set. Layout-specific roles stay optional and
/// resolve through the accessor fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub background: String,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_gradient: Option<String>,
}

impl MergedColors {
    pub fn sidebar_bg(&self) -> &str {
        self.sidebar_bg.as_deref().unwrap_or(&self.background)
    }

    pub fn cards(&self) -> &str {
        self.cards.as_deref().unwrap_or(&self.background)
    }

    pub fn charts(&self) -> &str {
        self.charts.as_deref().unwrap_or(&self.background)
    }

    pub fn timeline(&self) -> &str {
        self.timeline.as_deref().unwrap_or(&self.secondary)
    }

    pub fn shapes(&self) -> &str {
        self.shapes.as_deref().unwrap_or(&self.accent)
    }

    /// CSS background for hero-style headers.
    pub fn header_background(&self) -> String {
        match &self.header_gradient {
            Some(gradient) => gradient.clone(),
            None => gradient(135, &self.primary, &self.accent),
        }
    }

    /// Accent with the tint alpha applied.
    pub fn accent_tint(&self) -> String {
        with_alpha(&self.accent, TINT_ALPHA)
    }
}

pub fn gradient(angle: u16, from: &str, to: &str) -> String {
    format!("linear-gradient({angle}deg, {from} 0%, {to} 100%)")
}

fn pick(custom: &Option<String>, template: &Option<String>) -> Option<String> {
    let non_blank = |c: &Option<String>| {
        c.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    non_blank(custom).or_else(|| non_blank(template))
}

/// Custom over template, per role; core roles fall back to built-in colors.
pub fn merge_colors(template: &Palette, custom: &Palette) -> MergedColors {
    let core = |c: &Option<String>, t: &Option<String>, fallback: &str| {
        pick(c, t).unwrap_or_else(|| fallback.to_string())
    };
    MergedColors {
        primary: core(&custom.primary, &template.primary, FALLBACK_PRIMARY),
        secondary: core(&custom.secondary, &template.secondary, FALLBACK_SECONDARY),
        accent: core(&custom.accent, &template.accent, FALLBACK_ACCENT),
        text: core(&custom.text, &template.text, FALLBACK_TEXT),
        background: core(&custom.background, &template.background, FALLBACK_BACKGROUND),
        sidebar_bg: pick(&custom.sidebar_bg, &template.sidebar_bg),
        timeline: pick(&custom.timeline, &template.timeline),
        shapes: pick(&custom.shapes, &template.shapes),
        cards: pick(&custom.cards, &template.cards),
        charts: pick(&custom.charts, &template.charts),
        header_gradient: pick(&custom.header_gradient, &template.header_gradient),
    }
}

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Hex, a functional notation such as `rgb(0, 0, 0)`, or a keyword such as
/// `red`.
pub fn is_css_color(value: &str) -> bool {
    if value.starts_with('#') {
        return is_hex_color(value);
    }
    let word = |w: &str| !w.is_empty() && w.bytes().all(|b| b.is_ascii_alphabetic());
    match value.split_once('(') {
        Some((function, _)) => word(function) && value.ends_with(')'),
        None => word(value),
    }
}

fn check_color(role: &'static str, value: &str) -> Result<(), ColorError> {
    if is_css_color(value) {
        Ok(())
    } else {
        Err(ColorError::Unrecognized {
            role,
            value: value.to_string(),
        })
    }
}

/// Drops user colors that are not CSS colors so the template's color is
/// used for that role. `headerGradient` is a CSS background and is kept.
pub fn sanitize_palette(palette: &Palette) -> Palette {
    let mut clean = palette.clone();
    let roles: [(&'static str, &mut Option<String>); 10] = [
        ("primary", &mut clean.primary),
        ("secondary", &mut clean.secondary),
        ("accent", &mut clean.accent),
        ("text", &mut clean.text),
        ("background", &mut clean.background),
        ("sidebarBg", &mut clean.sidebar_bg),
        ("timeline", &mut clean.timeline),
        ("shapes", &mut clean.shapes),
        ("cards", &mut clean.cards),
        ("charts", &mut clean.charts),
    ];
    for (role, slot) in roles {
        let rejected = slot
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .and_then(|v| check_color(role, v).err());
        if let Some(e) = rejected {
            warn!(error = %e, "Ignoring custom color");
            *slot = None;
        }
    }
    clean
}

/// Appends a two-digit alpha to an opaque hex color. `#rgb` is expanded
/// first; colors that already carry alpha or are not hex are returned as-is.
pub fn with_alpha(color: &str, alpha: &str) -> String {
    let Some(hex) = color.strip_prefix('#') else {
        return color.to_string();
    };
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return color.to_string();
    }
    match hex.len() {
        3 => {
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            format!("#{expanded}{alpha}")
        }
        6 => format!("#{hex}{alpha}"),
        _ => color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(primary: Option<&str>, accent: Option<&str>) -> Palette {
        Palette {
            primary: primary.map(String::from),
            accent: accent.map(String::from),
            ..Palette::default()
        }
    }

    #[test]
    fn test_custom_overrides_template() {
        let merged = merge_colors(
            &palette(Some("#111111"), Some("#222222")),
            &palette(None, Some("#ABCDEF")),
        );
        assert_eq!(merged.primary, "#111111");
        assert_eq!(merged.accent, "#ABCDEF");
    }

    #[test]
    fn test_core_fallbacks() {
        let merged = merge_colors(&Palette::default(), &Palette::default());
        assert_eq!(merged.primary, FALLBACK_PRIMARY);
        assert_eq!(merged.secondary, FALLBACK_SECONDARY);
        assert_eq!(merged.text, FALLBACK_TEXT);
        assert_eq!(merged.accent, FALLBACK_ACCENT);
        assert_eq!(merged.background, FALLBACK_BACKGROUND);
    }

    #[test]
    fn test_blank_custom_does_not_override() {
        let merged = merge_colors(&palette(Some("#111111"), None), &palette(Some("  "), None));
        assert_eq!(merged.primary, "#111111");
    }

    #[test]
    fn test_layout_role_fallbacks() {
        let merged = merge_colors(&Palette::default(), &Palette::default());
        assert_eq!(merged.sidebar_bg(), FALLBACK_BACKGROUND);
        assert_eq!(merged.cards(), FALLBACK_BACKGROUND);
        assert_eq!(merged.timeline(), FALLBACK_SECONDARY);
        assert_eq!(merged.shapes(), FALLBACK_ACCENT);
        assert_eq!(
            merged.header_background(),
            "linear-gradient(135deg, #4B5EAA 0%, #9333EA 100%)"
        );
    }

    #[test]
    fn test_css_colors() {
        for ok in ["#fff", "#12345678", "red", "rgb(0, 0, 0)", "hsla(210, 50%, 40%, 0.5)"] {
            assert!(is_css_color(ok), "{ok}");
        }
        for bad in ["not-a-color", "#12", "#ggg", "rgb(0, 0, 0", "(0,0,0)", "12"] {
            assert!(!is_css_color(bad), "{bad}");
        }
    }

    #[test]
    fn test_sanitize_palette_drops_unrecognized_roles() {
        let custom = Palette {
            primary: Some("not-a-color".to_string()),
            accent: Some("red".to_string()),
            charts: Some("rgb(1, 2, 3)".to_string()),
            header_gradient: Some("linear-gradient(red, blue)".to_string()),
            ..Palette::default()
        };
        let clean = sanitize_palette(&custom);
        assert_eq!(clean.primary, None);
        assert_eq!(clean.accent.as_deref(), Some("red"));
        assert_eq!(clean.charts.as_deref(), Some("rgb(1, 2, 3)"));
        assert_eq!(clean.header_gradient, custom.header_gradient);

        let merged = merge_colors(&palette(Some("#111111"), None), &clean);
        assert_eq!(merged.primary, "#111111");
        assert_eq!(merged.accent, "red");
        assert_eq!(merged.accent_tint(), "red");
    }

    #[test]
    fn test_check_color_error() {
        assert_eq!(
            check_color("accent", "blue-ish"),
            Err(ColorError::Unrecognized {
                role: "accent",
                value: "blue-ish".to_string()
            })
        );
    }

    #[test]
    fn test_custom_colors_flat() {
        let colors: CustomColors =
            serde_json::from_value(serde_json::json!({ "accent": "#ff0000", "sidebarBg": 7 }))
                .unwrap();
        let p = colors.for_template("classic");
        assert_eq!(p.accent.as_deref(), Some("#ff0000"));
        assert_eq!(p.sidebar_bg, None);
    }

    #[test]
    fn test_custom_colors_per_template() {
        let colors: CustomColors = serde_json::from_value(serde_json::json!({
            "classic": { "accent": "#ff0000" },
            "minimal_clean": { "primary": "#00ff00" },
            "text": "#333333"
        }))
        .unwrap();
        assert_eq!(colors.for_template("classic").accent.as_deref(), Some("#ff0000"));
        assert_eq!(colors.for_template("minimal_clean").primary.as_deref(), Some("#00ff00"));
        // Templates without their own entry use the flat roles.
        let other = colors.for_template("timeline_vertical");
        assert_eq!(other.text.as_deref(), Some("#333333"));
        assert_eq!(other.accent, None);
    }

    #[test]
    fn test_custom_colors_non_object_is_empty() {
        for value in [serde_json::Value::Null, serde_json::json!("red"), serde_json::json!([1])] {
            let colors: CustomColors = serde_json::from_value(value).unwrap();
            assert_eq!(colors, CustomColors::default());
        }
        assert_eq!(
            CustomColors::from(palette(None, Some("#abc"))).for_template("x").accent.as_deref(),
            Some("#abc")
        );
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#9333EA", "20"), "#9333EA20");
        assert_eq!(with_alpha("#abc", "20"), "#aabbcc20");
        assert_eq!(with_alpha("#9333EA80", "20"), "#9333EA80");
        assert_eq!(with_alpha("rebeccapurple", "20"), "rebeccapurple");
    }
}
