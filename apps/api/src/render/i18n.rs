//! Section titles and icons.

use serde::{Deserialize, Serialize};

use crate::models::section::{CustomKind, SectionName};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    /// Accepts `en`, `ES`, `fr-CA`, `en_GB` and the like.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }
}

fn builtin_title(name: &SectionName, lang: Language) -> Option<&'static str> {
    use Language::*;
    let title = match (name, lang) {
        (SectionName::Summary, En) => "Profile",
        (SectionName::Summary, Es) => "Perfil",
        (SectionName::Summary, Fr) => "Profil",
        (SectionName::Experience, En) => "Employment History",
        (SectionName::Experience, Es) => "Historial de Empleo",
        (SectionName::Experience, Fr) => "Historique d'Emploi",
        (SectionName::Education, En) => "Education",
        (SectionName::Education, Es) => "Educación",
        (SectionName::Education, Fr) => "Éducation",
        (SectionName::Skills, En) => "Skills",
        (SectionName::Skills, Es) => "Habilidades",
        (SectionName::Skills, Fr) => "Compétences",
        (SectionName::Certifications, En | Fr) => "Certifications",
        (SectionName::Certifications, Es) => "Certificaciones",
        (SectionName::Custom(kind), _) => return custom_title(*kind, lang),
        (SectionName::Other(other), _) if other == "languages" => match lang {
            En => "Languages",
            Es => "Idiomas",
            Fr => "Langues",
        },
        (SectionName::Other(_), _) => return None,
    };
    Some(title)
}

fn custom_title(kind: CustomKind, lang: Language) -> Option<&'static str> {
    use Language::*;
    let title = match (kind, lang) {
        (CustomKind::Project, En) => "Projects",
        (CustomKind::Project, Es) => "Proyectos",
        (CustomKind::Project, Fr) => "Projets",
        (CustomKind::Volunteer, En) => "Volunteer Work",
        (CustomKind::Volunteer, Es) => "Trabajo Voluntario",
        (CustomKind::Volunteer, Fr) => "Travail Bénévole",
        (CustomKind::Publication, En | Fr) => "Publications",
        (CustomKind::Publication, Es) => "Publicaciones",
        (CustomKind::Reference, En) => "References",
        (CustomKind::Reference, Es) => "Referencias",
        (CustomKind::Reference, Fr) => "Références",
        (CustomKind::Award, En) => "Awards",
        (CustomKind::Award, Es) => "Premios",
        (CustomKind::Award, Fr) => "Prix",
        (CustomKind::Hobby, En) => "Interests",
        (CustomKind::Hobby, Es) => "Intereses",
        (CustomKind::Hobby, Fr) => "Centres d'Intérêt",
        (CustomKind::Achievements, En) => "Achievements",
        (CustomKind::Achievements, Es) => "Logros",
        (CustomKind::Achievements, Fr) => "Réalisations",
    };
    Some(title)
}

/// `work_samples` → `Work Samples`.
fn title_case(name: &str) -> String {
    name.split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Heading text for a section.
pub fn section_title(name: &SectionName, lang: Language) -> String {
    match builtin_title(name, lang) {
        Some(title) => title.to_string(),
        None => title_case(name.as_str()),
    }
}

/// Icon name shown beside a section heading when the layout enables icons.
pub fn section_icon(name: &SectionName) -> Option<&'static str> {
    let icon = match name {
        SectionName::Summary => "Bookmark",
        SectionName::Experience => "Briefcase",
        SectionName::Education => "GraduationCap",
        SectionName::Skills => "Wrench",
        SectionName::Certifications => "Award",
        SectionName::Custom(CustomKind::Project) => "Project",
        SectionName::Custom(CustomKind::Volunteer) => "Volunteer",
        SectionName::Custom(CustomKind::Publication) => "Publication",
        SectionName::Custom(CustomKind::Reference) => "Reference",
        SectionName::Custom(CustomKind::Award) => "Award",
        SectionName::Custom(CustomKind::Hobby) => "Hobby",
        SectionName::Custom(CustomKind::Achievements) => return None,
        SectionName::Other(other) if other == "languages" => "Languages",
        SectionName::Other(_) => return None,
    };
    Some(icon)
}
