//! Máquina de estados del sitio.
//!
//! Todo cambio pasa por [`update`], que aplica una [`Action`] sobre el
//! [`SiteState`] y devuelve los efectos que el entorno debe ejecutar
//! (desplazar la vista, llamar al servicio de newsletter).

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    catalog::CATALOG,
    models::{NewsletterForm, NewsletterStatus, SearchSession, Section, SubscriptionReceipt},
    newsletter::{self, NewsletterError},
    search,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteState {
    pub current_section: Section,
    pub search: Option<SearchSession>,
    pub search_open: bool,
    pub mobile_menu_open: bool,
    pub newsletter: NewsletterForm,
}

impl Default for SiteState {
    fn default() -> Self {
        Self {
            current_section: Section::Home,
            search: None,
            search_open: false,
            mobile_menu_open: false,
            newsletter: NewsletterForm::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Section),
    SubmitSearch(String),
    ToggleSearchOverlay(bool),
    ToggleMobileMenu(bool),
    UpdateEmail(String),
    SubmitNewsletter,
    NewsletterResolved(Result<SubscriptionReceipt, NewsletterError>),
    ResetNewsletter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Lo ejecuta la capa de presentación.
    ScrollToTop,
    /// Lo ejecuta el runtime, que devuelve `Action::NewsletterResolved`.
    #[serde(skip)]
    SubscribeNewsletter { email: String },
}

impl Effect {
    pub fn is_client_side(&self) -> bool {
        matches!(self, Effect::ScrollToTop)
    }
}

pub fn update(state: &mut SiteState, action: Action) -> Vec<Effect> {
    match action {
        Action::Navigate(section) => {
            info!("Navegando a '{section}'");
            state.mobile_menu_open = false;
            state.current_section = section;
            vec![Effect::ScrollToTop]
        }
        Action::SubmitSearch(raw) => {
            let Some(q) = search::normalize_query(&raw) else {
                debug!("Búsqueda vacía ignorada");
                return Vec::new();
            };
            let results = search::filter(&CATALOG, &q);
            info!("Búsqueda '{raw}': {} resultados", results.len());
            state.search = Some(SearchSession {
                query: raw,
                results,
            });
            state.search_open = false;
            state.current_section = Section::Resultados;
            Vec::new()
        }
        Action::ToggleSearchOverlay(open) => {
            state.search_open = open;
            Vec::new()
        }
        Action::ToggleMobileMenu(open) => {
            state.mobile_menu_open = open;
            Vec::new()
        }
        Action::UpdateEmail(email) => {
            let form = &mut state.newsletter;
            // En éxito el formulario no se muestra hasta `ResetNewsletter`.
            if form.status == NewsletterStatus::Success {
                debug!("Email ignorado tras suscripción confirmada");
                return Vec::new();
            }
            form.email = email;
            if form.status == NewsletterStatus::Error {
                form.status = NewsletterStatus::Idle;
                form.error = None;
            }
            Vec::new()
        }
        Action::SubmitNewsletter => submit_newsletter(&mut state.newsletter),
        Action::NewsletterResolved(outcome) => {
            let form = &mut state.newsletter;
            if form.status != NewsletterStatus::Loading {
                debug!("Resultado de newsletter descartado en estado {:?}", form.status);
                return Vec::new();
            }
            match outcome {
                Ok(receipt) => {
                    info!("Suscripción confirmada ({})", receipt.id);
                    form.status = NewsletterStatus::Success;
                    form.email.clear();
                    form.receipt = Some(receipt);
                }
                Err(err) => {
                    info!("Suscripción fallida: {err}");
                    form.status = NewsletterStatus::Error;
                    form.error = Some(err);
                }
            }
            Vec::new()
        }
        Action::ResetNewsletter => {
            let form = &mut state.newsletter;
            if form.status == NewsletterStatus::Success {
                form.status = NewsletterStatus::Idle;
                form.receipt = None;
            }
            Vec::new()
        }
    }
}

fn submit_newsletter(form: &mut NewsletterForm) -> Vec<Effect> {
    // Una sola petición en vuelo; tras el éxito sólo se sale con reset.
    if !matches!(form.status, NewsletterStatus::Idle | NewsletterStatus::Error) {
        debug!("Envío ignorado en estado {:?}", form.status);
        return Vec::new();
    }
    match newsletter::validate_email(&form.email) {
        Ok(()) => {
            form.status = NewsletterStatus::Loading;
            form.error = None;
            vec![Effect::SubscribeNewsletter {
                email: form.email.clone(),
            }]
        }
        Err(err) => {
            form.status = NewsletterStatus::Error;
            form.error = Some(err);
            Vec::new()
        }
    }
}
