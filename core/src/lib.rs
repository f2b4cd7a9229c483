pub mod error;
pub mod index;
pub mod search;
pub mod session;
pub mod tfidf;
pub mod tokenizer;

pub use error::{Result, SearchError};
pub use index::{CorpusIndex, Document, Vocabulary};
pub use search::{cosine_similarity, rank, Hit};
pub use session::{parse_position, ResultSet, Session};
pub use tfidf::{TfIdfModel, TfIdfVector};
pub use tokenizer::{tokenize, StopWords};

pub type TermId = u32;
pub type DocId = u32;
