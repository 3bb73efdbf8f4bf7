use crate::index::{KeywordIndex, Occurrence};

/// Hard cap on the number of documents a query returns.
pub const RESULT_LIMIT: usize = 5;

/// Disjunctive two-keyword search: documents containing either keyword,
/// ranked by descending occurrence frequency.
///
/// Returns `None` when neither keyword exists in the index, so callers can
/// tell "unknown keywords" apart from "known keywords, no documents left
/// after capping". Otherwise returns up to `k` distinct document ids; ties
/// between the two lists favor `kw1`. The index is never mutated.
pub fn top_k(index: &KeywordIndex, kw1: &str, kw2: &str, k: usize) -> Option<Vec<String>> {
    match (index.keywords.get(kw1), index.keywords.get(kw2)) {
        (None, None) => None,
        (Some(occs), None) | (None, Some(occs)) => {
            Some(occs.iter().take(k).map(|o| o.document.clone()).collect())
        }
        (Some(first), Some(second)) => Some(merge_ranked(first, second, k)),
    }
}

/// Two-cursor merge of two descending occurrence lists into at most `k`
/// distinct document ids. The strictly higher frequency goes first; on an
/// exact tie the first keyword's document precedes the second's and both
/// cursors advance, a duplicate side advancing without emitting.
fn merge_ranked(first: &[Occurrence], second: &[Occurrence], k: usize) -> Vec<String> {
    let mut ranked: Vec<String> = Vec::with_capacity(k);
    let mut i = 0;
    let mut j = 0;
    while ranked.len() < k && (i < first.len() || j < second.len()) {
        if j >= second.len() || (i < first.len() && first[i].frequency > second[j].frequency) {
            push_unique(&mut ranked, &first[i].document);
            i += 1;
        } else if i >= first.len() || second[j].frequency > first[i].frequency {
            push_unique(&mut ranked, &second[j].document);
            j += 1;
        } else {
            push_unique(&mut ranked, &first[i].document);
            if ranked.len() < k {
                push_unique(&mut ranked, &second[j].document);
            }
            i += 1;
            j += 1;
        }
    }
    ranked
}

fn push_unique(ranked: &mut Vec<String>, doc: &str) {
    if !ranked.iter().any(|d| d == doc) {
        ranked.push(doc.to_string());
    }
}
