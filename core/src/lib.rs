//! In-memory inverted index over a small text corpus. Each keyword maps to
//! its list of (document, frequency) occurrences, kept in descending
//! frequency order by binary-search insertion, and queried with a
//! two-keyword disjunctive top-5 search.

pub mod error;
pub mod index;
pub mod query;
pub mod tokenizer;

pub use error::IndexError;
pub use index::{
    build_index, insert_last, load_keywords, merge_document, DocMap, KeywordIndex, Occurrence,
    TokenSource,
};
pub use query::{top_k, RESULT_LIMIT};
pub use tokenizer::{keyword, NoiseSet};
