//! Name tokenization and TF-IDF vocabulary

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Lowercase, split on non-alphanumeric boundaries, drop single-character tokens
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Sorted term vocabulary with smoothed inverse document frequencies
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TextVocabulary {
    terms: Vec<String>,
    idf: Vec<f64>,
    documents: usize,
}

impl TextVocabulary {
    /// Fit over every document of the catalog.
    ///
    /// idf = ln((1 + n) / (1 + df)) + 1
    pub fn fit<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut doc_freqs: AHashMap<String, usize> = AHashMap::new();
        let mut n_docs = 0usize;

        for doc in documents {
            n_docs += 1;
            let mut tokens = tokenize(doc);
            tokens.sort_unstable();
            tokens.dedup();
            for token in tokens {
                *doc_freqs.entry(token).or_insert(0) += 1;
            }
        }

        let mut entries: Vec<(String, usize)> = doc_freqs.into_iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let n = n_docs as f64;
        let (terms, idf) = entries
            .into_iter()
            .map(|(term, df)| {
                let idf = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
                (term, idf)
            })
            .unzip();

        Self {
            terms,
            idf,
            documents: n_docs,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn documents(&self) -> usize {
        self.documents
    }

    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.terms.binary_search_by(|t| t.as_str().cmp(term)).ok()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|i| self.idf[i])
    }

    /// Write the L2-normalised TF-IDF weights of `text` into `out`.
    ///
    /// `out` must be `self.len()` wide and zeroed. Tokens outside the
    /// vocabulary are ignored.
    pub fn transform_into(&self, text: &str, out: &mut [f64]) {
        debug_assert_eq!(out.len(), self.len());

        for token in tokenize(text) {
            if let Some(i) = self.term_index(&token) {
                out[i] += self.idf[i];
            }
        }

        let norm = out.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for w in out.iter_mut() {
                *w /= norm;
            }
        }
    }

    pub(crate) fn is_consistent(&self) -> bool {
        self.terms.len() == self.idf.len() && self.terms.windows(2).all(|w| w[0] < w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Naruto: Shippuden (2007) - A"),
            vec!["naruto", "shippuden", "2007"]
        );
        assert!(tokenize("").is_empty());
        assert!(tokenize("!?").is_empty());
    }

    #[test]
    fn test_vocabulary_is_sorted_and_deduplicated() {
        let vocab = TextVocabulary::fit(["Naruto", "Naruto Shippuden", "Cooking Show"]);
        assert_eq!(vocab.terms(), &["cooking", "naruto", "show", "shippuden"]);
        assert_eq!(vocab.documents(), 3);
        assert!(vocab.is_consistent());
    }

    #[test]
    fn test_rarer_terms_weigh_more() {
        let vocab = TextVocabulary::fit(["Naruto", "Naruto Shippuden", "Cooking Show"]);
        let common = vocab.idf("naruto").unwrap();
        let rare = vocab.idf("shippuden").unwrap();
        assert!(rare > common);
        assert!((common - ((4.0f64 / 3.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_unit_length() {
        let vocab = TextVocabulary::fit(["Naruto", "Naruto Shippuden", "Cooking Show"]);
        let mut out = vec![0.0; vocab.len()];
        vocab.transform_into("Naruto Shippuden", &mut out);
        let norm: f64 = out.iter().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
        assert_eq!(out[vocab.term_index("cooking").unwrap()], 0.0);
    }

    #[test]
    fn test_transform_unknown_text_is_zero() {
        let vocab = TextVocabulary::fit(["Naruto"]);
        let mut out = vec![0.0; vocab.len()];
        vocab.transform_into("Bleach", &mut out);
        assert!(out.iter().all(|w| *w == 0.0));
    }
}
