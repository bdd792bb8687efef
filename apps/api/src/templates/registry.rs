//! Template Registry — read-only lookup over the embedded template catalog.
//!
//! The catalog is parsed once, on first use, into a process-wide immutable
//! static. Callers only ever receive shared references.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::section::SectionName;
use crate::models::template::TemplateConfig;

/// Template used when a requested id is unknown.
pub const DEFAULT_TEMPLATE_ID: &str = "classic";

static CATALOG_JSON: &str = include_str!("../../templates/catalog.json");

static REGISTRY: Lazy<TemplateRegistry> = Lazy::new(|| {
    let registry = TemplateRegistry::from_json(CATALOG_JSON)
        .expect("embedded template catalog must parse");
    info!(templates = registry.len(), "Template registry loaded");
    registry
});

/// The process-wide registry.
pub fn global() -> &'static TemplateRegistry {
    &REGISTRY
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("template catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("template id '{0}' appears more than once")]
    DuplicateId(String),

    #[error("default template '{0}' is missing from the catalog")]
    MissingDefault(String),
}

/// Outcome of resolving a template id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Found(&'a TemplateConfig),
    /// The requested id was unknown; `config` is the designated default.
    Fallback {
        requested: &'a str,
        config: &'a TemplateConfig,
    },
}

impl<'a> Resolution<'a> {
    pub fn config(&self) -> &'a TemplateConfig {
        match self {
            Resolution::Found(config) | Resolution::Fallback { config, .. } => config,
        }
    }

    pub fn fell_back(&self) -> bool {
        matches!(self, Resolution::Fallback { .. })
    }
}

#[derive(Debug)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, TemplateConfig>,
    default: TemplateConfig,
}

impl TemplateRegistry {
    /// Parses a catalog (a JSON array of template configs).
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let entries: Vec<TemplateConfig> = serde_json::from_str(json)?;
        Self::from_templates(entries)
    }

    pub fn from_templates(entries: Vec<TemplateConfig>) -> Result<Self, RegistryError> {
        let mut templates = BTreeMap::new();
        for entry in entries {
            if templates.contains_key(&entry.id) {
                return Err(RegistryError::DuplicateId(entry.id));
            }
            templates.insert(entry.id.clone(), entry);
        }
        let default = templates
            .get(DEFAULT_TEMPLATE_ID)
            .cloned()
            .ok_or_else(|| RegistryError::MissingDefault(DEFAULT_TEMPLATE_ID.to_string()))?;
        Ok(Self { templates, default })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Strict lookup: `None` for unknown ids.
    pub fn lookup(&self, id: &str) -> Option<&TemplateConfig> {
        self.templates.get(id)
    }

    /// All templates, ordered by id.
    pub fn list(&self) -> impl Iterator<Item = &TemplateConfig> {
        self.templates.values()
    }

    /// Resolves `id`, falling back to the `classic` template.
    #[cfg(test)]
    pub fn resolve<'a>(&'a self, id: &'a str) -> Resolution<'a> {
        self.resolve_or(id, DEFAULT_TEMPLATE_ID)
    }

    /// Resolves `id`, falling back to `default_id` (or `classic` when
    /// `default_id` is itself unknown).
    pub fn resolve_or<'a>(&'a self, id: &'a str, default_id: &str) -> Resolution<'a> {
        if let Some(config) = self.lookup(id) {
            return Resolution::Found(config);
        }
        let config = self.lookup(default_id).unwrap_or(&self.default);
        if !id.is_empty() {
            warn!(
                requested = id,
                fallback = %config.id,
                "Unknown template id; using default template"
            );
        }
        Resolution::Fallback {
            requested: id,
            config,
        }
    }
}

/// Every section name the template's layout places, deduplicated, in first
/// placement order.
pub fn required_sections(config: &TemplateConfig) -> Vec<SectionName> {
    let mut seen: Vec<SectionName> = Vec::new();
    for slot in config.layout.body.slots() {
        for name in slot {
            if !seen.contains(name) {
                seen.push(name.clone());
            }
        }
    }
    seen
}
