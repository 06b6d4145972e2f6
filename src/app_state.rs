use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::oneshot;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    config::{AppConfig, NewsletterProvider},
    newsletter::{NewsletterService, SimulatedNewsletterService},
    site_state::{self, Action, Effect, SiteState},
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub site: Arc<Mutex<SiteState>>,
    pub newsletter: Arc<dyn NewsletterService>,
    pub shutdown_sender: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl AppState {
    pub fn new(config: AppConfig, shutdown_tx: oneshot::Sender<()>) -> Self {
        let newsletter: Arc<dyn NewsletterService> = match config.newsletter_provider {
            NewsletterProvider::Simulated => {
                Arc::new(SimulatedNewsletterService::new(config.newsletter_delay))
            }
        };
        Self::with_service(config, newsletter, Some(shutdown_tx))
    }

    pub fn with_service(
        config: AppConfig,
        newsletter: Arc<dyn NewsletterService>,
        shutdown_tx: Option<oneshot::Sender<()>>,
    ) -> Self {
        Self {
            config,
            site: Arc::new(Mutex::new(SiteState::default())),
            newsletter,
            shutdown_sender: Arc::new(Mutex::new(shutdown_tx)),
        }
    }

    pub fn site(&self) -> MutexGuard<'_, SiteState> {
        self.site.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Aplica la acción y lanza en segundo plano las suscripciones pendientes.
    /// Devuelve sólo los efectos que debe ejecutar el cliente.
    pub fn dispatch(&self, action: Action) -> Vec<Effect> {
        let effects = site_state::update(&mut self.site(), action);

        let (client_effects, runtime_effects): (Vec<_>, Vec<_>) =
            effects.into_iter().partition(Effect::is_client_side);
        for effect in runtime_effects {
            if let Effect::SubscribeNewsletter { email } = effect {
                self.spawn_subscription(email);
            }
        }
        client_effects
    }

    fn spawn_subscription(&self, email: String) {
        let state = self.clone();
        let attempt = Uuid::new_v4();
        info!(%attempt, "Enviando suscripción a la newsletter");
        tokio::spawn(async move {
            let outcome = state.newsletter.subscribe(&email).await;
            if let Err(err) = &outcome {
                error!(%attempt, "Error en la suscripción: {err}");
            }
            state.dispatch(Action::NewsletterResolved(outcome));
        });
    }

    pub fn request_shutdown(&self) {
        let sender = self
            .shutdown_sender
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(sender) = sender {
            let _ = sender.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewsletterStatus, Section};
    use std::time::Duration;

    fn test_state(delay_ms: u64) -> AppState {
        let config = AppConfig {
            newsletter_delay: Duration::from_millis(delay_ms),
            ..AppConfig::default()
        };
        let (tx, _rx) = oneshot::channel();
        AppState::new(config, tx)
    }

    #[tokio::test(start_paused = true)]
    async fn subscription_resolves_in_background() {
        let state = test_state(1500);
        state.dispatch(Action::UpdateEmail("user@example.com".to_string()));
        let effects = state.dispatch(Action::SubmitNewsletter);
        assert!(effects.is_empty());
        assert_eq!(state.site().newsletter.status, NewsletterStatus::Loading);

        tokio::time::sleep(Duration::from_millis(1600)).await;
        let site = state.site();
        assert_eq!(site.newsletter.status, NewsletterStatus::Success);
        assert_eq!(site.newsletter.email, "");
    }

    #[tokio::test(start_paused = true)]
    async fn navigation_is_not_blocked_by_pending_subscription() {
        let state = test_state(1500);
        state.dispatch(Action::UpdateEmail("user@example.com".to_string()));
        state.dispatch(Action::SubmitNewsletter);
        let effects = state.dispatch(Action::Navigate(Section::Protocolos));
        assert_eq!(effects, vec![Effect::ScrollToTop]);
        assert_eq!(state.site().current_section, Section::Protocolos);
        assert_eq!(state.site().newsletter.status, NewsletterStatus::Loading);
    }

    #[tokio::test]
    async fn shutdown_signal_is_sent_once() {
        let (tx, rx) = oneshot::channel();
        let state = AppState::new(AppConfig::default(), tx);
        state.request_shutdown();
        state.request_shutdown();
        assert!(rx.await.is_ok());
    }
}
