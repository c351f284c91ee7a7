use std::collections::BTreeSet;
use std::num::IntErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Empty page range in '{selector}'")]
    Empty { selector: String },

    #[error("Invalid page range '{term}' in '{selector}'")]
    InvalidTerm { selector: String, term: String },
}

/// One comma-separated unit of a selector, still 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTerm {
    Single(i64),
    Span { start: i64, end: i64 },
}

impl PageTerm {
    /// Parse a term like "5" or "2-7"
    pub fn parse(s: &str) -> Option<Self> {
        match s.split_once('-') {
            Some((start, end)) => Some(PageTerm::Span {
                start: parse_page_number(start)?,
                end: parse_page_number(end)?,
            }),
            None => parse_page_number(s).map(PageTerm::Single),
        }
    }

    /// Zero-based indices covered by this term, clipped to `[0, total_pages)`.
    ///
    /// A reversed span such as "5-3" covers nothing.
    fn indices(self, total_pages: u32) -> impl Iterator<Item = u32> {
        let (first, last) = match self {
            PageTerm::Single(n) => (n - 1, n - 1),
            PageTerm::Span { start, end } => (start - 1, end - 1),
        };
        let first = first.max(0);
        let last = last.min(i64::from(total_pages) - 1);
        (first..=last).map(|i| i as u32)
    }
}

/// Well-formed numbers too large for `i64` saturate; they only ever name
/// pages past the end of the document.
fn parse_page_number(s: &str) -> Option<i64> {
    let s = s.trim();
    match s.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow && is_unsigned_integer(s) => {
            Some(i64::MAX)
        }
        Err(_) => None,
    }
}

fn is_unsigned_integer(s: &str) -> bool {
    let digits = s.strip_prefix('+').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a comma-separated selector like "1-3,5" into its terms
pub fn parse_terms(selector: &str) -> Result<Vec<PageTerm>, RangeError> {
    if selector.trim().is_empty() {
        return Err(RangeError::Empty {
            selector: selector.to_string(),
        });
    }

    selector
        .split(',')
        .map(|term| {
            PageTerm::parse(term).ok_or_else(|| RangeError::InvalidTerm {
                selector: selector.to_string(),
                term: term.to_string(),
            })
        })
        .collect()
}

/// Expand a selector into sorted, deduplicated zero-based page indices.
///
/// Pages past the end of the document (or before page 1) are dropped
/// silently; only malformed terms are errors.
pub fn parse(selector: &str, total_pages: u32) -> Result<Vec<u32>, RangeError> {
    let terms = parse_terms(selector)?;
    let pages: BTreeSet<u32> = terms
        .into_iter()
        .flat_map(|term| term.indices(total_pages))
        .collect();
    Ok(pages.into_iter().collect())
}
