//! Highlight matcher: splits text into plain and highlighted spans by case-insensitive term match.
//!
//! Terms are literal strings, never patterns. Longer terms win over shorter ones at the
//! same position, so "Next.js" is one span rather than "Next" + ".js".

use serde::{Deserialize, Serialize};

/// A contiguous slice of the input, tagged as matching a term or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub text: String,
    pub is_match: bool,
}

impl HighlightSpan {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: true,
        }
    }
}

/// A prepared term set. Build once per bullet, reuse across renders.
#[derive(Debug, Clone, Default)]
pub struct HighlightMatcher {
    /// Case-folded terms, longest first.
    terms: Vec<Vec<char>>,
}

impl HighlightMatcher {
    /// Prepares a matcher: empty terms are dropped, duplicates (ignoring case) removed,
    /// and the rest ordered by descending length. Equal lengths keep their input order.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut folded: Vec<Vec<char>> = Vec::new();
        for term in terms {
            let term = fold(term.as_ref());
            if !term.is_empty() && !folded.contains(&term) {
                folded.push(term);
            }
        }
        folded.sort_by(|a, b| b.len().cmp(&a.len()));
        Self { terms: folded }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Partitions `text` into spans. Concatenating the span texts yields `text` exactly.
    ///
    /// With no terms the result is a single non-matching span, even for empty text.
    pub fn highlight(&self, text: &str) -> Vec<HighlightSpan> {
        if self.terms.is_empty() {
            return vec![HighlightSpan::plain(text)];
        }

        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(b, _)| b);

        let mut spans = Vec::new();
        let mut plain_start = 0;
        let mut i = 0;

        while i < chars.len() {
            let hit = self
                .terms
                .iter()
                .find_map(|term| match_len(&chars, i, term));

            match hit {
                Some(consumed) => {
                    let start = byte_at(i);
                    let end = byte_at(i + consumed);
                    if plain_start < start {
                        spans.push(HighlightSpan::plain(&text[plain_start..start]));
                    }
                    spans.push(HighlightSpan::matched(&text[start..end]));
                    plain_start = end;
                    i += consumed;
                }
                None => i += 1,
            }
        }

        if plain_start < text.len() {
            spans.push(HighlightSpan::plain(&text[plain_start..]));
        }
        spans
    }
}

/// One-shot convenience over [`HighlightMatcher`].
pub fn highlight<S: AsRef<str>>(text: &str, terms: &[S]) -> Vec<HighlightSpan> {
    HighlightMatcher::new(terms).highlight(text)
}

fn fold(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Number of text chars consumed when `term` matches at `start`, if it does.
/// A match must end on a char boundary of the text.
fn match_len(chars: &[(usize, char)], start: usize, term: &[char]) -> Option<usize> {
    let mut matched = 0;
    let mut idx = start;
    while matched < term.len() {
        let &(_, c) = chars.get(idx)?;
        for lower in c.to_lowercase() {
            if term.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        idx += 1;
    }
    Some(idx - start)
}
