//! Modelos de dominio del sitio (secciones, artículos, búsqueda y newsletter).

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::newsletter::NewsletterError;

/// Vistas mutuamente excluyentes que puede mostrar el sitio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Resultados,
    Nutricion,
    Sueno,
    Tecnologia,
    Suplementos,
    Protocolos,
    Privacidad,
    Cookies,
    Terminos,
    Descargo,
}

impl Section {
    pub const ALL: [Section; 11] = [
        Section::Home,
        Section::Resultados,
        Section::Nutricion,
        Section::Sueno,
        Section::Tecnologia,
        Section::Suplementos,
        Section::Protocolos,
        Section::Privacidad,
        Section::Cookies,
        Section::Terminos,
        Section::Descargo,
    ];

    /// Identificador usado en la navegación y en la API.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Resultados => "resultados",
            Section::Nutricion => "nutricion",
            Section::Sueno => "sueno",
            Section::Tecnologia => "tecnologia",
            Section::Suplementos => "suplementos",
            Section::Protocolos => "protocolos",
            Section::Privacidad => "privacidad",
            Section::Cookies => "cookies",
            Section::Terminos => "terminos",
            Section::Descargo => "descargo",
        }
    }

    /// Páginas legales (comparten la misma plantilla de vista).
    pub fn is_legal(self) -> bool {
        matches!(
            self,
            Section::Privacidad | Section::Cookies | Section::Terminos | Section::Descargo
        )
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| anyhow!("Sección desconocida: {s}"))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Artículo del catálogo. Varios artículos pueden compartir `id`,
/// que es la sección a la que navega la tarjeta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    pub id: Section,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

/// Resultado de la última búsqueda enviada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    /// Texto tal y como lo escribió el usuario (sin recortar).
    pub query: String,
    pub results: Vec<&'static ArticleRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsletterStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Confirmación devuelta por el servicio de newsletter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionReceipt {
    pub id: Uuid,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

/// Estado del formulario de suscripción.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
    pub status: NewsletterStatus,
    pub error: Option<NewsletterError>,
    pub receipt: Option<SubscriptionReceipt>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for section in Section::ALL {
            assert_eq!(section.slug().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert!("blog".parse::<Section>().is_err());
        assert!("Home".parse::<Section>().is_err());
    }

    #[test]
    fn legal_group_has_four_pages() {
        let legal: Vec<_> = Section::ALL.into_iter().filter(|s| s.is_legal()).collect();
        assert_eq!(
            legal,
            vec![
                Section::Privacidad,
                Section::Cookies,
                Section::Terminos,
                Section::Descargo
            ]
        );
    }

    #[test]
    fn section_serializes_as_slug() {
        assert_eq!(serde_json::to_string(&Section::Sueno).unwrap(), "\"sueno\"");
        assert_eq!(
            serde_json::to_string(&NewsletterStatus::Loading).unwrap(),
            "\"loading\""
        );
    }
}
