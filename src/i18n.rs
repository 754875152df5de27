//! Display languages and their string tables.
//!
//! The dictionaries are plain `static` structs, one per language. Keys are
//! serialized in camelCase to match what the mobile client looks up.

use std::{fmt, str::FromStr};

use serde::Serialize;

// ---

/// Supported display languages. Spanish is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    Maya,
}

/// Error returned when a language token is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Every supported language, primary first.
    pub const ALL: [Language; 2] = [Language::Es, Language::Maya];

    /// Token stored in the preference store and used in URLs.
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::Maya => "maya",
        }
    }

    /// Label shown on the header toggle button.
    pub fn badge(self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::Maya => "MAYA",
        }
    }

    /// The other language.
    pub fn toggle(self) -> Language {
        match self {
            Language::Es => Language::Maya,
            Language::Maya => Language::Es,
        }
    }

    pub fn translations(self) -> &'static Translations {
        translations(self)
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Exact match on the stored token; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// User-facing strings for one language.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    pub alert: &'static str,
    pub home: &'static str,
    pub sensors: &'static str,
    pub history: &'static str,
    pub settings: &'static str,
    #[serde(rename = "KaabTech")]
    pub kaab_tech: &'static str,
    pub hive: &'static str,
    pub select_hive: &'static str,
    pub search_hive: &'static str,
    pub hive_id: &'static str,
    pub status: &'static str,
    pub healthy: &'static str,
    pub external_temperature: &'static str,
    pub internal_temperature: &'static str,
    pub location: &'static str,
    pub humidity: &'static str,
    pub pesticide_alert: &'static str,
    pub pesticides_detected: &'static str,
    pub no_pesticides_detected: &'static str,
}

static SPANISH: Translations = Translations {
    alert: "Alerta",
    home: "Inicio",
    sensors: "Sensores",
    history: "Historial",
    settings: "Ajustes",
    kaab_tech: "Kaab Tech",
    hive: "Colmena",
    select_hive: "Seleccionar Colmena",
    search_hive: "Buscar Colmena",
    hive_id: "ID Colmena",
    status: "Estado",
    healthy: "Saludable",
    external_temperature: "Temperatura Externa",
    internal_temperature: "Temperatura Interna",
    location: "Ubicación",
    humidity: "Humedad",
    pesticide_alert: "Alerta de Pesticidas",
    pesticides_detected: "PESTICIDAS DETECTADOS",
    no_pesticides_detected: "NO SE DETECTARON\nPESTICIDAS",
};

static MAYA: Translations = Translations {
    alert: "Xíiw",
    home: "Káajal",
    sensors: "K'ajóol",
    history: "Sáamal",
    settings: "Jats'uts",
    kaab_tech: "Kaab Tech",
    hive: "Kaab",
    select_hive: "T'aan u kaab'",
    search_hive: "T'aan u kaab'",
    hive_id: "Kaab' ID",
    status: "Jats'uts",
    healthy: "Jats'uts",
    external_temperature: "p'áatal ichil",
    internal_temperature: "k’i’ik’el ichil",
    location: "Tu'ux yaan",
    humidity: "Ja'il",
    pesticide_alert: "K'áax Xíiw",
    pesticides_detected: "PESTICIDAS DETECTADOS",
    no_pesticides_detected: "MA' YAN K'ÁAX\nXÍIW",
};

/// String table for `lang`.
pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::Es => &SPANISH,
        Language::Maya => &MAYA,
    }
}
