use lazy_static::lazy_static;
use std::collections::HashSet;

/// Punctuation that may legally trail a keyword; a maximal trailing run of
/// these is stripped before the alphabetic check.
const TRAILING_PUNCT: &[char] = &['.', ',', '?', ':', ';', '!'];

lazy_static! {
    static ref DEFAULT_NOISE: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could",
            "did","do","does","doing","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself",
            "me","more","most","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","so","some","such",
            "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","we","were","what","when","where","which","while","who","whom","why","with","would",
            "you","your","yours","yourself","yourselves",
        ];
        words.iter().copied().collect()
    };
}

/// Words excluded from indexing regardless of frequency. Stored case-folded;
/// `contains` expects already-folded input.
#[derive(Debug, Clone, Default)]
pub struct NoiseSet {
    words: HashSet<String>,
}

impl NoiseSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_ascii_lowercase())
            .collect();
        Self { words }
    }

    /// Built-in English noise words, for when the caller supplies no list.
    pub fn default_english() -> Self {
        Self::new(DEFAULT_NOISE.iter().copied())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Normalize a raw token into a keyword: strip the maximal trailing run of
/// `. , ? : ; !`, require the remainder to be purely alphabetic, and fold to
/// lowercase. Returns `None` for empty remainders, tokens with embedded
/// non-alphabetic characters (`won't`, `co-op`), and noise words.
pub fn keyword(token: &str, noise: &NoiseSet) -> Option<String> {
    let stripped = token.trim_end_matches(TRAILING_PUNCT);
    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let word = stripped.to_ascii_lowercase();
    if noise.contains(&word) {
        return None;
    }
    Some(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_noise() -> NoiseSet {
        NoiseSet::default()
    }

    #[test]
    fn strips_trailing_punctuation_and_folds_case() {
        assert_eq!(keyword("Running!", &no_noise()), Some("running".into()));
        assert_eq!(keyword("end?!,", &no_noise()), Some("end".into()));
        assert_eq!(keyword("Cat.", &no_noise()), Some("cat".into()));
    }

    #[test]
    fn rejects_embedded_punctuation() {
        assert_eq!(keyword("won't", &no_noise()), None);
        assert_eq!(keyword("co-op", &no_noise()), None);
        assert_eq!(keyword("a1b", &no_noise()), None);
        assert_eq!(keyword("equi-distant...", &no_noise()), None);
    }

    #[test]
    fn rejects_empty_and_punctuation_only() {
        assert_eq!(keyword("", &no_noise()), None);
        assert_eq!(keyword("!!!", &no_noise()), None);
        assert_eq!(keyword("...", &no_noise()), None);
    }

    #[test]
    fn idempotent_on_accepted_keywords() {
        let once = keyword("Distance,", &no_noise()).unwrap();
        assert_eq!(once, "distance");
        assert_eq!(keyword(&once, &no_noise()), Some(once.clone()));
    }

    #[test]
    fn rejects_noise_words_case_insensitively() {
        let noise = NoiseSet::new(["The", "and"]);
        assert_eq!(keyword("THE", &noise), None);
        assert_eq!(keyword("And,", &noise), None);
        assert_eq!(keyword("theory", &noise), Some("theory".into()));
    }

    #[test]
    fn default_english_filters_common_words() {
        let noise = NoiseSet::default_english();
        assert_eq!(keyword("the", &noise), None);
        assert_eq!(keyword("search", &noise), Some("search".into()));
    }
}
