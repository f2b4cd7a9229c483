use crate::tfidf::{TfIdfModel, TfIdfVector};
use crate::DocId;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    pub doc_id: DocId,
    pub path: PathBuf,
    pub score: f64,
}

/// Cosine of the angle between two vectors, or `None` when either is the zero vector
/// or their dimensions differ.
pub fn cosine_similarity(a: &TfIdfVector, b: &TfIdfVector) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return None;
    }
    let sim = a.dot(b) / denom;
    sim.is_finite().then_some(sim)
}

/// Score every document of `model` against `query` and keep those with positive similarity.
/// Sorted by descending score, ties by ascending path.
pub fn rank(model: &TfIdfModel, query: &TfIdfVector) -> Vec<Hit> {
    if query.len() != model.dimensions() {
        tracing::warn!(
            query = query.len(),
            model = model.dimensions(),
            "query vector does not match model dimensions"
        );
        return Vec::new();
    }
    if query.is_zero() {
        return Vec::new();
    }
    let mut hits: Vec<Hit> = model
        .document_vectors()
        .iter()
        .enumerate()
        .filter_map(|(i, doc_vec)| {
            let doc_id = i as DocId;
            let score = cosine_similarity(query, doc_vec).filter(|&s| s > 0.0)?;
            let path = model.document_path(doc_id)?.to_path_buf();
            Some(Hit { doc_id, path, score })
        })
        .collect();
    hits.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.path.cmp(&b.path)));
    hits
}
