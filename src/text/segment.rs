//! Case-insensitive multi-phrase segmentation of a text block.
//!
//! The scan locates every occurrence of every phrase, stable-sorts the matches
//! by start offset, and folds them into alternating plain/styled runs. Each
//! per-phrase scan resumes past the previous match, so a phrase never matches
//! inside its own earlier occurrence. Matches of *different* phrases may still
//! overlap; both are emitted in start order and the tie at an identical start
//! offset goes to the phrase listed first.

/// Styling a renderer should apply to one emitted run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStyle {
    /// Non-phrase text, rendered verbatim.
    Plain,
    /// An occurrence of the currently active phrase.
    Active,
    /// An occurrence of a listed phrase that is not active.
    Inactive,
}

/// One contiguous run of output text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TextRun<'a> {
    /// The run's text, borrowed from the input.
    pub text: &'a str,
    /// How the renderer should style this run.
    pub style: RunStyle,
    /// Index into the phrase list for styled runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrase: Option<usize>,
}

impl<'a> TextRun<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            style: RunStyle::Plain,
            phrase: None,
        }
    }
}

/// A located phrase occurrence, in byte offsets of the scanned text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhraseMatch {
    /// Index into the phrase list.
    pub phrase: usize,
    /// Byte offset of the first matched character.
    pub start: usize,
    /// Byte offset one past the last matched character.
    pub end: usize,
}

/// Locate all case-insensitive occurrences of all phrases in `text`,
/// sorted by start offset. Empty phrase strings are skipped.
pub fn find_matches(text: &str, phrases: &[String]) -> Vec<PhraseMatch> {
    let mut matches = Vec::new();
    for (phrase_idx, phrase) in phrases.iter().enumerate() {
        if phrase.is_empty() {
            continue;
        }
        let mut at = 0;
        while at < text.len() {
            match match_len_ignore_case(&text[at..], phrase) {
                Some(len) => {
                    matches.push(PhraseMatch {
                        phrase: phrase_idx,
                        start: at,
                        end: at + len,
                    });
                    at += len;
                }
                None => {
                    // Advance one character; `at` is always on a boundary.
                    match text[at..].chars().next() {
                        Some(ch) => at += ch.len_utf8(),
                        None => break,
                    }
                }
            }
        }
    }
    // Stable sort: equal starts keep phrase-list order.
    matches.sort_by_key(|m| m.start);
    matches
}

/// Byte length of a case-insensitive match of `needle` at the start of
/// `haystack`, if any. The length is measured in the haystack's own bytes,
/// so slicing with it is always boundary-safe.
fn match_len_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let mut want = needle.chars().flat_map(char::to_lowercase).peekable();
    want.peek()?;
    let mut len = 0;
    for ch in haystack.chars() {
        for folded in ch.to_lowercase() {
            match want.next() {
                Some(w) if w == folded => {}
                // Mismatch, or the needle ends mid-character.
                _ => return None,
            }
        }
        len += ch.len_utf8();
        if want.peek().is_none() {
            return Some(len);
        }
    }
    None
}

/// Partition `text` into plain/styled runs.
///
/// Occurrences of the phrase at `active` are emitted [`RunStyle::Active`], all
/// other phrase occurrences [`RunStyle::Inactive`], and everything else as
/// plain runs in original order. With no matches (including an empty phrase
/// list) the whole text comes back as a single plain run.
pub fn segment<'a>(text: &'a str, phrases: &[String], active: Option<usize>) -> Vec<TextRun<'a>> {
    let matches = find_matches(text, phrases);
    if matches.is_empty() {
        return vec![TextRun::plain(text)];
    }

    let mut runs = Vec::with_capacity(matches.len() * 2 + 1);
    let mut last = 0;
    for m in &matches {
        if m.start > last {
            runs.push(TextRun::plain(&text[last..m.start]));
        }
        let style = if active == Some(m.phrase) {
            RunStyle::Active
        } else {
            RunStyle::Inactive
        };
        runs.push(TextRun {
            text: &text[m.start..m.end],
            style,
            phrase: Some(m.phrase),
        });
        last = m.end;
    }
    if last < text.len() {
        runs.push(TextRun::plain(&text[last..]));
    }
    runs
}

#[cfg(test)]
#[path = "../../tests/unit/text/segment.rs"]
mod tests;
