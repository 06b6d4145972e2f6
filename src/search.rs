//! Buscador: filtro lineal por subcadena, sin índices ni ranking.
//!
//! Un artículo coincide si la consulta (en minúsculas) aparece dentro del
//! título, del extracto o de alguna de sus etiquetas. El orden del resultado
//! es el del catálogo.

use tracing::debug;

use crate::models::ArticleRecord;

/// Recorta y pasa a minúsculas la consulta. `None` si queda vacía.
pub fn normalize_query(raw: &str) -> Option<String> {
    let q = raw.trim().to_lowercase();
    if q.is_empty() {
        None
    } else {
        Some(q)
    }
}

/// Devuelve los artículos de `catalog` que contienen `query`.
///
/// Quien llama debe descartar antes las consultas vacías (ver
/// [`normalize_query`]); una consulta vacía coincide con todo.
pub fn filter<'a>(catalog: &'a [ArticleRecord], query: &str) -> Vec<&'a ArticleRecord> {
    let q = query.to_lowercase();
    let results: Vec<_> = catalog.iter().filter(|record| matches(record, &q)).collect();
    debug!("Búsqueda '{q}': {} coincidencias", results.len());
    results
}

fn matches(record: &ArticleRecord, q: &str) -> bool {
    record.title.to_lowercase().contains(q)
        || record.excerpt.to_lowercase().contains(q)
        || record.tags.iter().any(|tag| tag.to_lowercase().contains(q))
}
