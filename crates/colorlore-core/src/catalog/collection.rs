//! Collections and their display metadata
//!
//! A collection is a named partition of the catalog: one cultural
//! tradition or trend set. Metadata is a static table keyed by
//! collection and locale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Identifier of a curated collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionId {
    /// Traditional Chinese colors
    Chinese,
    /// Traditional Japanese colors (Nippon no Iro)
    Japanese,
    /// Pantone colors of the year
    Pantone,
    /// Nature-inspired palettes
    Nature,
}

impl CollectionId {
    /// All known collections
    pub const ALL: [CollectionId; 4] = [
        CollectionId::Chinese,
        CollectionId::Japanese,
        CollectionId::Pantone,
        CollectionId::Nature,
    ];

    /// Stable id string
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionId::Chinese => "chinese",
            CollectionId::Japanese => "japanese",
            CollectionId::Pantone => "pantone",
            CollectionId::Nature => "nature",
        }
    }

    /// Display metadata, falling back to English for unknown locales
    pub fn metadata(&self, locale: &str) -> CollectionMetadata {
        let locale = Locale::from_tag(locale);
        let (name, description) = localized_text(*self, locale);
        CollectionMetadata {
            id: *self,
            locale,
            name,
            native_name: native_name(*self),
            description,
        }
    }
}

impl FromStr for CollectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollectionId::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownCollection(s.to_string()))
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locales with translated collection metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
    Pt,
}

impl Locale {
    /// Resolve a language tag (`"fr"`, `"pt-BR"`, `"es_MX"`)
    ///
    /// Only the primary subtag is considered. Anything unrecognized maps to
    /// the default locale.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "es" => Locale::Es,
            "fr" => Locale::Fr,
            "pt" => Locale::Pt,
            _ => Locale::En,
        }
    }

    /// Primary language subtag
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::Pt => "pt",
        }
    }
}

/// Descriptive metadata for one collection in one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionMetadata {
    pub id: CollectionId,
    /// Locale the text was resolved to (after fallback)
    pub locale: Locale,
    pub name: &'static str,
    pub native_name: &'static str,
    pub description: &'static str,
}

fn native_name(id: CollectionId) -> &'static str {
    match id {
        CollectionId::Chinese => "中国传统色",
        CollectionId::Japanese => "日本の伝統色 (Nippon no Iro)",
        CollectionId::Pantone => "PANTONE",
        CollectionId::Nature => "",
    }
}

fn localized_text(id: CollectionId, locale: Locale) -> (&'static str, &'static str) {
    use CollectionId::*;
    use Locale::*;

    match (id, locale) {
        (Chinese, En) => (
            "Traditional Chinese Colors",
            "Colors from the dynasties, poetry, and nature of ancient China.",
        ),
        (Chinese, Es) => (
            "Colores tradicionales chinos",
            "Colores de las dinastías, la poesía y la naturaleza de la antigua China.",
        ),
        (Chinese, Fr) => (
            "Couleurs traditionnelles chinoises",
            "Les couleurs des dynasties, de la poésie et de la nature de la Chine ancienne.",
        ),
        (Chinese, Pt) => (
            "Cores tradicionais chinesas",
            "Cores das dinastias, da poesia e da natureza da China antiga.",
        ),
        (Japanese, En) => (
            "Traditional Japanese Colors",
            "Established over 1,000 years ago, representing the changing seasons of Japan.",
        ),
        (Japanese, Es) => (
            "Colores tradicionales japoneses",
            "Establecidos hace más de 1.000 años, representan las estaciones cambiantes de Japón.",
        ),
        (Japanese, Fr) => (
            "Couleurs traditionnelles japonaises",
            "Établies il y a plus de 1 000 ans, elles représentent le cycle des saisons au Japon.",
        ),
        (Japanese, Pt) => (
            "Cores tradicionais japonesas",
            "Estabelecidas há mais de 1.000 anos, representam as estações do Japão.",
        ),
        (Pantone, En) => (
            "Pantone Colors of the Year",
            "The annual trend colors that shaped fashion, product and graphic design.",
        ),
        (Pantone, Es) => (
            "Colores Pantone del año",
            "Los colores de tendencia anuales que marcaron la moda y el diseño gráfico.",
        ),
        (Pantone, Fr) => (
            "Couleurs Pantone de l'année",
            "Les couleurs tendance annuelles qui ont marqué la mode et le design graphique.",
        ),
        (Pantone, Pt) => (
            "Cores Pantone do ano",
            "As cores de tendência anuais que marcaram a moda e o design gráfico.",
        ),
        (Nature, En) => (
            "Nature Palettes",
            "Hues drawn from oceans, forests, deserts and skies.",
        ),
        (Nature, Es) => (
            "Paletas de la naturaleza",
            "Tonos inspirados en océanos, bosques, desiertos y cielos.",
        ),
        (Nature, Fr) => (
            "Palettes de la nature",
            "Des teintes puisées dans les océans, les forêts, les déserts et le ciel.",
        ),
        (Nature, Pt) => (
            "Paletas da natureza",
            "Tons inspirados em oceanos, florestas, desertos e céus.",
        ),
    }
}
