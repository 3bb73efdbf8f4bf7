use crate::error::IndexError;
use crate::tokenizer::{keyword, NoiseSet};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::io;

/// One keyword's presence in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

/// Keywords found in a single document, each with its final count. Produced
/// by [`load_keywords`], consumed by [`merge_document`], then discarded.
pub type DocMap = HashMap<String, Occurrence>;

/// The global keyword index. Every keyword maps to its occurrence list, kept
/// in descending order of frequency with no duplicate documents. Built once
/// by [`build_index`], read-only afterwards.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct KeywordIndex {
    pub keywords: HashMap<String, Vec<Occurrence>>,
    pub num_docs: u32,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn occurrences(&self, kw: &str) -> Option<&[Occurrence]> {
        self.keywords.get(kw).map(Vec::as_slice)
    }
}

/// Supplies the raw whitespace-delimited tokens of a document on demand.
/// Implemented by the filesystem layer in the CLI and by plain maps for
/// in-memory corpora.
pub trait TokenSource {
    fn tokens(&mut self, doc: &str) -> io::Result<Vec<String>>;
}

impl TokenSource for HashMap<String, Vec<String>> {
    fn tokens(&mut self, doc: &str) -> io::Result<Vec<String>> {
        self.get(doc).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no tokens for {doc}"))
        })
    }
}

/// Scan one document's tokens into a keyword -> occurrence map. The whole
/// stream is consumed before the map is returned; counts are only final at
/// end of document.
pub fn load_keywords(doc: &str, tokens: &[String], noise: &NoiseSet) -> DocMap {
    let mut keywords = DocMap::new();
    for token in tokens {
        let word = match keyword(token, noise) {
            Some(word) => word,
            None => continue,
        };
        keywords
            .entry(word)
            .and_modify(|occ| occ.frequency += 1)
            .or_insert_with(|| Occurrence {
                document: doc.to_string(),
                frequency: 1,
            });
    }
    keywords
}

/// Fold one document's keyword map into the global index. New keywords get a
/// fresh single-entry list; existing keywords get the occurrence appended
/// and sifted into place by [`insert_last`].
pub fn merge_document(index: &mut KeywordIndex, doc_map: DocMap) {
    for (word, occurrence) in doc_map {
        let occs = index.keywords.entry(word).or_default();
        occs.push(occurrence);
        insert_last(occs);
    }
}

/// Move the last element of `occs` into place. The prefix `0..n-1` is
/// already sorted in descending frequency order; a binary search over it
/// (bounds `[0, n-2]`, stopping early on an equal frequency) finds the one
/// position that keeps the whole list non-increasing. An equal frequency
/// lands after every earlier entry with the same count, so documents merged
/// first keep priority on ties.
///
/// Returns the sequence of midpoints the search probed, or `None` when the
/// list holds a single element and no search runs. The trace is only
/// consumed by tests.
pub fn insert_last(occs: &mut Vec<Occurrence>) -> Option<Vec<usize>> {
    if occs.len() == 1 {
        return None;
    }
    let last = occs.len() - 1;
    let freq = occs[last].frequency;
    let mut probes = Vec::new();

    let mut low = 0_isize;
    let mut hi = (last - 1) as isize;
    let mut mid = 0_usize;
    let mut tie: Option<usize> = None;
    while low <= hi {
        mid = ((low + hi) / 2) as usize;
        probes.push(mid);
        if occs[mid].frequency == freq {
            tie = Some(mid);
            break;
        } else if occs[mid].frequency < freq {
            hi = mid as isize - 1;
        } else {
            low = mid as isize + 1;
        }
    }

    let pos = match tie {
        // walk past the run of equal frequencies: first-merged wins the tie
        Some(m) => {
            let mut p = m + 1;
            while p < last && occs[p].frequency == freq {
                p += 1;
            }
            p
        }
        None if occs[mid].frequency > freq => mid + 1,
        None => mid,
    };

    let newest = occs.remove(last);
    occs.insert(pos, newest);
    Some(probes)
}

/// Build the complete index for a corpus: every document id is resolved to
/// its token stream, indexed, and merged in listed order. The first
/// unreadable source aborts the whole build.
pub fn build_index<S: TokenSource>(
    doc_ids: &[String],
    source: &mut S,
    noise: &NoiseSet,
) -> Result<KeywordIndex, IndexError> {
    let mut index = KeywordIndex::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for doc in doc_ids {
        if !seen.insert(doc.as_str()) {
            tracing::warn!(%doc, "duplicate document id, skipping");
            continue;
        }
        let tokens = source.tokens(doc).map_err(|source| {
            IndexError::SourceUnavailable {
                name: doc.clone(),
                source,
            }
        })?;
        let doc_map = load_keywords(doc, &tokens, noise);
        tracing::debug!(%doc, keywords = doc_map.len(), "document indexed");
        merge_document(&mut index, doc_map);
        index.num_docs += 1;
    }
    tracing::info!(
        num_docs = index.num_docs,
        num_keywords = index.keywords.len(),
        "index build complete"
    );
    Ok(index)
}
