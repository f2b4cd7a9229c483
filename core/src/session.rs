use crate::error::{Result, SearchError};
use crate::index::CorpusIndex;
use crate::search::{rank, Hit};
use crate::tfidf::TfIdfModel;
use crate::tokenizer::StopWords;
use std::fs;
use std::path::Path;

/// Outcome of the most recent query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    /// Query terms that survived vocabulary filtering.
    pub terms: Vec<String>,
    pub hits: Vec<Hit>,
}

impl ResultSet {
    pub fn len(&self) -> usize { self.hits.len() }

    pub fn is_empty(&self) -> bool { self.hits.is_empty() }
}

/// Immutable corpus artifacts plus the current result set.
pub struct Session {
    index: CorpusIndex,
    model: TfIdfModel,
    results: ResultSet,
}

impl Session {
    /// Index every file under `root` and compute all document vectors.
    pub fn build<P: AsRef<Path>, Q: AsRef<Path>>(root: P, stopwords_path: Q) -> Result<Self> {
        let stopwords = StopWords::load(stopwords_path)?;
        let index = CorpusIndex::build(root, stopwords)?;
        Ok(Self::from_index(index))
    }

    pub fn from_index(index: CorpusIndex) -> Self {
        let model = TfIdfModel::build(&index);
        Self { index, model, results: ResultSet::default() }
    }

    pub fn index(&self) -> &CorpusIndex { &self.index }

    pub fn model(&self) -> &TfIdfModel { &self.model }

    /// Run a free-text query, replacing the previous result set.
    pub fn query(&mut self, text: &str) -> &ResultSet {
        let terms = self.index.query_terms(text);
        let vector = self.model.vectorize(terms.as_slice());
        let hits = rank(&self.model, &vector);
        tracing::debug!(?terms, hits = hits.len(), "query");
        self.results = ResultSet { terms, hits };
        &self.results
    }

    pub fn results(&self) -> &ResultSet { &self.results }

    /// Raw bytes of the document at a zero-based position in the current result set.
    pub fn fetch_document_text(&self, position: isize) -> Result<Vec<u8>> {
        let hit = usize::try_from(position)
            .ok()
            .and_then(|p| self.results.hits.get(p))
            .ok_or(SearchError::IndexOutOfRange { position, len: self.results.len() })?;
        fs::read(&hit.path)
            .map_err(|source| SearchError::DocumentRead { path: hit.path.clone(), source })
    }
}

/// Parse a result position argument.
/// Negative values parse and are rejected later as out of range.
pub fn parse_position(arg: &str) -> Result<isize> {
    arg.trim().parse::<isize>().map_err(|_| SearchError::MalformedPosition(arg.to_string()))
}
