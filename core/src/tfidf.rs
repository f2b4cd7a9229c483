//! TF-IDF weighting over the corpus vocabulary.
//!
//! TF is the raw occurrence count of a term in a token list and IDF is `ln(N / df)`.
//! Every vector is dense and uses the vocabulary's first-seen ordering for its dimensions.

use crate::index::{CorpusIndex, Vocabulary};
use crate::{DocId, TermId};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Raw count of exact occurrences of `term` in `tokens`.
pub fn term_frequency<S: AsRef<str>>(tokens: &[S], term: &str) -> f64 {
    tokens.iter().filter(|t| t.as_ref() == term).count() as f64
}

/// `ln(num_docs / doc_frequency)`. Only defined for `doc_frequency > 0`.
pub fn inverse_document_frequency(num_docs: usize, doc_frequency: u32) -> f64 {
    debug_assert!(doc_frequency > 0, "idf requested for a term outside the corpus");
    (num_docs as f64 / doc_frequency as f64).ln()
}

/// Dense vector with one weight per vocabulary dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfVector {
    components: Vec<f64>,
}

impl TfIdfVector {
    pub fn len(&self) -> usize { self.components.len() }

    pub fn is_empty(&self) -> bool { self.components.is_empty() }

    pub fn get(&self, index: usize) -> Option<f64> { self.components.get(index).copied() }

    pub fn components(&self) -> &[f64] { &self.components }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Dot product accumulated in floating point. Both vectors must share the same dimensions.
    pub fn dot(&self, other: &TfIdfVector) -> f64 {
        debug_assert_eq!(self.len(), other.len());
        self.components.iter().zip(other.components.iter()).map(|(a, b)| a * b).sum()
    }

    pub fn is_zero(&self) -> bool { self.components.iter().all(|&c| c == 0.0) }
}

/// IDF statistics and eagerly computed document vectors for a corpus.
///
/// Holds its own copy of the vocabulary and document paths it was built from.
#[derive(Debug)]
pub struct TfIdfModel {
    vocabulary: Vocabulary,
    idf: Vec<f64>,
    paths: Vec<PathBuf>,
    doc_vectors: Vec<TfIdfVector>,
}

impl TfIdfModel {
    /// Compute IDF for every vocabulary term, then one vector per indexed document.
    pub fn build(index: &CorpusIndex) -> Self {
        let n = index.num_docs();
        let idf: Vec<f64> = (0..index.vocabulary().len() as TermId)
            .map(|tid| inverse_document_frequency(n, index.df_by_id(tid)))
            .collect();
        let mut model = Self {
            vocabulary: index.vocabulary().clone(),
            idf,
            paths: index.documents().iter().map(|d| d.path.clone()).collect(),
            doc_vectors: Vec::with_capacity(n),
        };
        for doc in index.documents() {
            let vector = model.vectorize(doc.tokens.as_slice());
            model.doc_vectors.push(vector);
        }
        tracing::info!(num_docs = n, dimensions = model.idf.len(), "computed document vectors");
        model
    }

    pub fn dimensions(&self) -> usize { self.idf.len() }

    pub fn num_docs(&self) -> usize { self.doc_vectors.len() }

    pub fn idf(&self, tid: TermId) -> Option<f64> { self.idf.get(tid as usize).copied() }

    pub fn document_vector(&self, doc_id: DocId) -> Option<&TfIdfVector> {
        self.doc_vectors.get(doc_id as usize)
    }

    pub fn document_vectors(&self) -> &[TfIdfVector] { &self.doc_vectors }

    pub fn document_path(&self, doc_id: DocId) -> Option<&Path> {
        self.paths.get(doc_id as usize).map(PathBuf::as_path)
    }

    /// Build a vector for an arbitrary token list. Tokens outside the vocabulary are ignored.
    pub fn vectorize<S: AsRef<str>>(&self, tokens: &[S]) -> TfIdfVector {
        let mut components = vec![0.0; self.idf.len()];
        let mut seen: HashSet<TermId> = HashSet::new();
        for token in tokens {
            let term = token.as_ref();
            let Some(tid) = self.vocabulary.id(term) else { continue };
            if seen.insert(tid) {
                components[tid as usize] = term_frequency(tokens, term) * self.idf[tid as usize];
            }
        }
        TfIdfVector { components }
    }
}
