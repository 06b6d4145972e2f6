//! Contenido estático del sitio: catálogo de artículos, enlaces y cabeceras
//! de cada sección. Nada de esto cambia en tiempo de ejecución.

use serde::Serialize;

use crate::models::{ArticleRecord, Section};

/// Catálogo sobre el que trabaja el buscador, en orden de inserción.
pub static CATALOG: [ArticleRecord; 8] = [
    ArticleRecord {
        id: Section::Nutricion,
        title: "Autofagia: El sistema de reciclaje celular para la eterna juventud",
        excerpt: "Descubre cómo el ayuno intermitente y ciertos compuestos naturales activan la limpieza profunda de tus células.",
        category: "Nutrición",
        tags: &["autofagia", "ayuno", "celular"],
    },
    ArticleRecord {
        id: Section::Suplementos,
        title: "NMN y Resveratrol: ¿Realidad o marketing en la longevidad?",
        excerpt: "Analizamos la evidencia científica detrás de los precursores de NAD+ y su impacto en el envejecimiento saludable.",
        category: "Suplementos",
        tags: &["nad+", "nmn", "resveratrol", "suplementos"],
    },
    ArticleRecord {
        id: Section::Sueno,
        title: "Higiene del sueño: El pilar olvidado del biohacking",
        excerpt: "Por qué la oscuridad total y la temperatura de tu habitación son más importantes que cualquier suplemento.",
        category: "Sueño",
        tags: &["sueño", "higiene", "descanso", "circadiano"],
    },
    ArticleRecord {
        id: Section::Tecnologia,
        title: "Luz azul y salud mitocondrial: Cómo protegerte",
        excerpt: "El impacto de las pantallas en tu producción de melatonina y estrategias prácticas para mitigar el daño.",
        category: "Tecnología",
        tags: &["luz azul", "mitocondria", "pantallas"],
    },
    ArticleRecord {
        id: Section::Tecnologia,
        title: "Biohacking y Wearables: El Futuro en tu Muñeca",
        excerpt: "De los Oura Rings a los Monitores de Glucosa Continuos. Cómo la tecnología mide tu biología.",
        category: "Tecnología",
        tags: &["wearables", "oura", "cgm", "tecnología"],
    },
    ArticleRecord {
        id: Section::Nutricion,
        title: "Dietas de Longevidad: Nutriendo tus Células",
        excerpt: "La nutrición es la herramienta más potente para influir en nuestra expresión genética.",
        category: "Nutrición",
        tags: &["dietas", "longevidad", "nutrición", "ayuno"],
    },
    ArticleRecord {
        id: Section::Protocolos,
        title: "Protocolos de Longevidad: De la Teoría a la Práctica",
        excerpt: "Hormesis, exposición térmica y entrenamiento de fuerza para extender tu healthspan.",
        category: "Protocolos",
        tags: &["protocolos", "hormesis", "sauna", "frío"],
    },
    ArticleRecord {
        id: Section::Suplementos,
        title: "Magnesio: El mineral maestro que tu cuerpo necesita",
        excerpt: "Existen más de 7 tipos de magnesio. Aprende cuál es el adecuado para ti.",
        category: "Suplementos",
        tags: &["magnesio", "minerales", "suplementos"],
    },
];

/// Sugerencias del buscador; cada una lanza una búsqueda al pulsarla.
pub const TRENDING_SEARCHES: [&str; 5] = [
    "Autofagia",
    "NAD+",
    "Resveratrol",
    "Higiene del sueño",
    "Nootrópicos",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Section,
}

/// Cabecera y menú móvil.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Inicio", target: Section::Home },
    NavLink { label: "Nutrición", target: Section::Nutricion },
    NavLink { label: "Sueño", target: Section::Sueno },
    NavLink { label: "Tecnología", target: Section::Tecnologia },
    NavLink { label: "Suplementos", target: Section::Suplementos },
];

pub const FOOTER_EXPLORE: [NavLink; 2] = [
    NavLink { label: "Protocolos", target: Section::Protocolos },
    NavLink { label: "Suplementación", target: Section::Suplementos },
];

pub const FOOTER_LEGAL: [NavLink; 4] = [
    NavLink { label: "Privacidad", target: Section::Privacidad },
    NavLink { label: "Cookies", target: Section::Cookies },
    NavLink { label: "Términos", target: Section::Terminos },
    NavLink { label: "Descargo Médico", target: Section::Descargo },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub network: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { network: "Instagram", url: "https://instagram.com/longevidadactiva" },
    SocialLink { network: "Twitter", url: "https://twitter.com/longevidadact" },
    SocialLink { network: "Facebook", url: "https://facebook.com/longevidadactiva" },
];

/// Cabecera de una vista: titular y semilla de la imagen principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionPage {
    pub title: &'static str,
    pub hero_image_seed: Option<&'static str>,
}

pub fn page(section: Section) -> SectionPage {
    let (title, hero_image_seed) = match section {
        Section::Home => ("Domina tu Biología: La Guía Definitiva de Biohacking", None),
        Section::Resultados => ("Resultados de búsqueda", None),
        Section::Nutricion => (
            "Dietas de Longevidad: Nutriendo tus Células",
            Some("longevity-diet"),
        ),
        Section::Sueno => (
            "Higiene del Sueño y Ritmo Circadiano: El Pilar Maestro de la Longevidad",
            Some("sleep-science"),
        ),
        Section::Tecnologia => (
            "Biohacking y Wearables: El Futuro en tu Muñeca",
            Some("bio-tech"),
        ),
        Section::Suplementos => (
            "Suplementación Inteligente: Biohacking para la Optimización Celular",
            Some("supplements-science"),
        ),
        Section::Protocolos => (
            "Protocolos de Longevidad: De la Teoría a la Práctica",
            Some("protocols"),
        ),
        Section::Privacidad => ("Política de Privacidad", None),
        Section::Cookies => ("Política de Cookies", None),
        Section::Terminos => ("Términos y Condiciones", None),
        Section::Descargo => ("Descargo de Responsabilidad Médico", None),
    };
    SectionPage { title, hero_image_seed }
}
