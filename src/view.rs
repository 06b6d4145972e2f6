//! Instantánea del estado para la capa de presentación.
//!
//! Con el `ViewModel` el frontend pinta exactamente una vista, los overlays
//! abiertos y el formulario de newsletter, sin lógica propia.

use serde::Serialize;
use url::Url;

use crate::{
    catalog::{self, NavLink, SectionPage, SocialLink},
    models::{ArticleRecord, NewsletterStatus, Section},
    site_state::SiteState,
};

const IMAGE_HOST: &str = "https://picsum.photos";

#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub section: Section,
    pub page: PageView,
    pub search_open: bool,
    pub mobile_menu_open: bool,
    pub nav: Vec<LinkView>,
    pub footer_explore: Vec<LinkView>,
    pub footer_legal: Vec<LinkView>,
    pub social: Vec<SocialLink>,
    pub trending_searches: Vec<&'static str>,
    /// Sólo presente en la vista de resultados.
    pub results: Option<ResultsView>,
    pub newsletter: NewsletterView,
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub title: &'static str,
    pub hero_image: Option<String>,
    pub is_legal: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkView {
    pub label: &'static str,
    pub target: Section,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub query: String,
    pub summary: String,
    pub cards: Vec<ArticleCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleCard {
    pub category: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: String,
    pub target: Section,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsletterView {
    pub status: NewsletterStatus,
    pub email: String,
    pub error_message: Option<String>,
    pub submit_disabled: bool,
}

impl ViewModel {
    pub fn from_state(state: &SiteState, year: i32) -> Self {
        let current = state.current_section;
        let results = (current == Section::Resultados).then(|| match &state.search {
            Some(session) => ResultsView {
                query: session.query.clone(),
                summary: results_summary(session.results.len()),
                cards: session
                    .results
                    .iter()
                    .enumerate()
                    .map(|(index, record)| card(record, index))
                    .collect(),
            },
            // Se llegó a resultados sin buscar: vista vacía.
            None => ResultsView {
                query: String::new(),
                summary: results_summary(0),
                cards: Vec::new(),
            },
        });

        let form = &state.newsletter;
        Self {
            section: current,
            page: page_view(catalog::page(current), current),
            search_open: state.search_open,
            mobile_menu_open: state.mobile_menu_open,
            nav: links(&catalog::NAV_LINKS, current),
            footer_explore: links(&catalog::FOOTER_EXPLORE, current),
            footer_legal: links(&catalog::FOOTER_LEGAL, current),
            social: catalog::SOCIAL_LINKS.to_vec(),
            trending_searches: catalog::TRENDING_SEARCHES.to_vec(),
            results,
            newsletter: NewsletterView {
                status: form.status,
                email: form.email.clone(),
                error_message: form.error.as_ref().map(ToString::to_string),
                submit_disabled: form.status == NewsletterStatus::Loading,
            },
            copyright: format!("© {year} Longevidad Activa. Todos los derechos reservados."),
        }
    }
}

pub fn results_summary(count: usize) -> String {
    if count > 0 {
        format!("Hemos encontrado {count} protocolos relacionados.")
    } else {
        "No se encontraron protocolos para esa optimización.".to_string()
    }
}

/// URL de imagen `/seed/{seed}/{width}/{height}`; los segmentos se escapan.
pub fn image_url(seed: &str, width: u32, height: u32) -> String {
    let mut url = match Url::parse(IMAGE_HOST) {
        Ok(url) => url,
        Err(_) => return format!("{IMAGE_HOST}/seed/{seed}/{width}/{height}"),
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .clear()
            .push("seed")
            .push(seed)
            .push(&width.to_string())
            .push(&height.to_string());
    }
    url.to_string()
}

fn card(record: &ArticleRecord, index: usize) -> ArticleCard {
    ArticleCard {
        category: record.category,
        title: record.title,
        excerpt: record.excerpt,
        image: image_url(&format!("{}-{index}", record.id), 800, 450),
        target: record.id,
    }
}

fn page_view(page: SectionPage, section: Section) -> PageView {
    PageView {
        title: page.title,
        hero_image: page.hero_image_seed.map(|seed| image_url(seed, 1200, 600)),
        is_legal: section.is_legal(),
    }
}

fn links(links: &[NavLink], current: Section) -> Vec<LinkView> {
    links
        .iter()
        .map(|link| LinkView {
            label: link.label,
            target: link.target,
            active: link.target == current,
        })
        .collect()
}
