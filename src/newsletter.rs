//! Suscripción a la newsletter: validación del email y puerto hacia el
//! servicio de envío.
//!
//! De momento sólo existe el servicio simulado (espera fija, sin red ni
//! persistencia). Un cliente HTTP real implementaría el mismo trait.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::models::SubscriptionReceipt;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("regex de email válida"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsletterError {
    #[error("Por favor, ingresa un email válido.")]
    InvalidEmailFormat,
    #[error("El servicio de newsletter no está disponible: {0}")]
    ServiceUnavailable(String),
}

/// Comprobación permisiva: `algo@algo.algo` sin espacios.
pub fn validate_email(email: &str) -> Result<(), NewsletterError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(NewsletterError::InvalidEmailFormat)
    }
}

/// Puerto hacia el proveedor de newsletter.
#[async_trait]
pub trait NewsletterService: Send + Sync {
    async fn subscribe(&self, email: &str) -> Result<SubscriptionReceipt, NewsletterError>;
}

/// Sustituto sin red: espera `delay` y confirma siempre.
#[derive(Debug, Clone)]
pub struct SimulatedNewsletterService {
    pub delay: Duration,
}

impl SimulatedNewsletterService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl NewsletterService for SimulatedNewsletterService {
    async fn subscribe(&self, email: &str) -> Result<SubscriptionReceipt, NewsletterError> {
        info!("[Newsletter] Nuevo suscriptor: {email}");
        tokio::time::sleep(self.delay).await;
        Ok(SubscriptionReceipt {
            id: Uuid::new_v4(),
            email: email.to_string(),
            subscribed_at: Utc::now(),
        })
    }
}
