use crate::error::{Result, SearchError};
use crate::tokenizer::{tokenize, StopWords};
use crate::{DocId, TermId};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Distinct terms of the corpus in first-seen order. A term's position is its vector dimension.
#[derive(Debug, Default, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    ids: HashMap<String, TermId>,
}

impl Vocabulary {
    fn insert(&mut self, term: &str) -> TermId {
        if let Some(&tid) = self.ids.get(term) {
            return tid;
        }
        let tid = self.terms.len() as TermId;
        self.terms.push(term.to_string());
        self.ids.insert(term.to_string(), tid);
        tid
    }

    pub fn id(&self, term: &str) -> Option<TermId> { self.ids.get(term).copied() }

    pub fn contains(&self, term: &str) -> bool { self.ids.contains_key(term) }

    pub fn term(&self, tid: TermId) -> Option<&str> {
        self.terms.get(tid as usize).map(String::as_str)
    }

    pub fn terms(&self) -> &[String] { &self.terms }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    /// Normalized non-stop-word tokens, duplicates retained.
    pub tokens: Vec<String>,
}

/// Vocabulary and per-document token lists for every readable file under a root directory.
#[derive(Debug)]
pub struct CorpusIndex {
    vocabulary: Vocabulary,
    documents: Vec<Document>,
    df: Vec<u32>,
    stopwords: StopWords,
}

impl CorpusIndex {
    /// Walk `root` recursively and index every regular file. Unreadable files are skipped.
    pub fn build<P: AsRef<Path>>(root: P, stopwords: StopWords) -> Result<Self> {
        Self::build_with_reader(root, stopwords, |path| fs::read(path))
    }

    /// Like [`CorpusIndex::build`], reading each file's bytes through `read`.
    /// A file whose read fails is logged and left out of the corpus.
    pub fn build_with_reader<P, F>(root: P, stopwords: StopWords, mut read: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: FnMut(&Path) -> io::Result<Vec<u8>>,
    {
        let root = root.as_ref();
        if !root.exists() {
            return Err(config_error(root, "document root does not exist"));
        }
        if !root.is_dir() {
            return Err(config_error(root, "document root is not a directory"));
        }

        let mut docs = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            match read(entry.path()) {
                Ok(bytes) => {
                    let text = String::from_utf8_lossy(&bytes).into_owned();
                    docs.push((entry.into_path(), text));
                }
                Err(source) => {
                    let path = entry.path().to_path_buf();
                    let err = SearchError::DocumentRead { path, source };
                    tracing::warn!(error = %err, "skipping document");
                }
            }
        }

        let index = Self::from_texts(docs, stopwords);
        tracing::info!(
            root = %root.display(),
            num_docs = index.num_docs(),
            vocabulary = index.vocabulary.len(),
            "indexed corpus"
        );
        Ok(index)
    }

    /// Index already-loaded `(path, text)` pairs in the given order.
    pub fn from_texts<I, P, S>(texts: I, stopwords: StopWords) -> Self
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<PathBuf>,
        S: AsRef<str>,
    {
        let mut vocabulary = Vocabulary::default();
        let mut df: Vec<u32> = Vec::new();
        let mut documents = Vec::new();
        for (path, text) in texts {
            let tokens = tokenize(text.as_ref(), &stopwords);
            let mut seen_in_doc: HashSet<TermId> = HashSet::new();
            for token in &tokens {
                let tid = vocabulary.insert(token);
                if df.len() <= tid as usize { df.resize(tid as usize + 1, 0); }
                if seen_in_doc.insert(tid) {
                    df[tid as usize] += 1;
                }
            }
            documents.push(Document { path: path.into(), tokens });
        }
        Self { vocabulary, documents, df, stopwords }
    }

    pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }

    pub fn documents(&self) -> &[Document] { &self.documents }

    pub fn document(&self, doc_id: DocId) -> Option<&Document> {
        self.documents.get(doc_id as usize)
    }

    pub fn num_docs(&self) -> usize { self.documents.len() }

    pub fn stopwords(&self) -> &StopWords { &self.stopwords }

    /// Number of documents containing `term` at least once; 0 outside the vocabulary.
    pub fn doc_frequency(&self, term: &str) -> u32 {
        self.vocabulary.id(term).map(|tid| self.df[tid as usize]).unwrap_or(0)
    }

    pub(crate) fn df_by_id(&self, tid: TermId) -> u32 { self.df[tid as usize] }

    /// Tokenize query text the same way documents are and keep only vocabulary terms.
    pub fn query_terms(&self, text: &str) -> Vec<String> {
        tokenize(text, &self.stopwords)
            .into_iter()
            .filter(|t| self.vocabulary.contains(t))
            .collect()
    }
}

fn config_error(path: &Path, reason: &str) -> SearchError {
    SearchError::Config { path: path.to_path_buf(), reason: reason.to_string() }
}
