//! Carga y gestión de configuración de la aplicación.

use std::{env, path::PathBuf, time::Duration};
use anyhow::{anyhow, Context, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NewsletterProvider {
    Simulated,
}

impl NewsletterProvider {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "simulated" => Ok(Self::Simulated),
            other => Err(anyhow!("Proveedor de newsletter no soportado: {other}")),
        }
    }
}

/// Configuración completa de la aplicación.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_addr: String,
    pub static_dir: PathBuf,
    pub open_browser: bool,

    pub newsletter_provider: NewsletterProvider,
    pub newsletter_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:3322".to_string(),
            static_dir: PathBuf::from("frontend"),
            open_browser: true,
            newsletter_provider: NewsletterProvider::Simulated,
            newsletter_delay: Duration::from_millis(1500),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno (usando .env si existe).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(addr) = lookup("SERVER_ADDR") {
            cfg.server_addr = addr;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            cfg.static_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup("OPEN_BROWSER") {
            cfg.open_browser = parse_bool(&raw)
                .ok_or_else(|| anyhow!("OPEN_BROWSER debe ser true/false, no '{raw}'"))?;
        }
        if let Some(raw) = lookup("NEWSLETTER_PROVIDER") {
            cfg.newsletter_provider = NewsletterProvider::from_str(&raw)?;
        }
        if let Some(raw) = lookup("NEWSLETTER_DELAY_MS") {
            let millis: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("NEWSLETTER_DELAY_MS inválido: '{raw}'"))?;
            cfg.newsletter_delay = Duration::from_millis(millis);
        }

        Ok(cfg)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "si" | "sí" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
