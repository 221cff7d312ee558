//! Inline expectation markers.
//!
//! Fixtures declare expected diagnostics directly in their text:
//!
//! ```text
//! val x = <!UNUSED_VARIABLE!>y<!>
//! val z = <!TYPE_MISMATCH("expected Int"), DEPRECATION!>w<!>
//! ```
//!
//! An opening marker is `<!` followed by one or more comma-separated kinds,
//! each with an optional `("message fragment")`, closed by `!>`. The matching
//! `<!>` ends the range. Markers nest; `<!>` always closes the innermost open
//! marker. Extraction strips every marker and reports expectation spans as
//! byte ranges into the stripped text, which is what the analyzer sees.

use thiserror::Error;

use crate::diagnostics::Expectation;
use crate::span::Span;

/// Malformed marker syntax. Offsets are byte positions in the raw fixture
/// text. Always fatal for the fixture; a bad marker is never skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkerParseError {
    #[error("unterminated expectation marker head at offset {offset}")]
    UnterminatedHead { offset: usize },

    #[error("expectation marker at offset {offset} declares no diagnostic kind")]
    EmptyKindList { offset: usize },

    #[error("unexpected `{found}` in expectation marker at offset {offset}")]
    BadKind { offset: usize, found: char },

    #[error("malformed expected-message clause at offset {offset}")]
    MalformedMessage { offset: usize },

    #[error("unterminated expected-message string at offset {offset}")]
    UnterminatedMessage { offset: usize },

    #[error("closing marker at offset {offset} has no matching opening marker")]
    UnbalancedClose { offset: usize },

    #[error("expectation marker at offset {offset} is never closed")]
    UnclosedMarker { offset: usize },
}

/// Fixture text with markers stripped, plus the expectations they declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOutput {
    pub source: String,
    pub expectations: Vec<Expectation>,
}

struct OpenMarker {
    entries: Vec<(String, Option<String>)>,
    start_clean: u32,
    offset: usize,
    order: usize,
}

/// Strip markers from `text` and collect the expectations they encode.
///
/// Expectations come back ordered by opening-marker position, entries within
/// one marker in listed order. A text with no markers is returned verbatim
/// with an empty expectation list.
pub fn extract(text: &str) -> Result<ExtractOutput, MarkerParseError> {
    let bytes = text.as_bytes();
    let mut source = String::new();
    let mut open: Vec<OpenMarker> = Vec::new();
    let mut closed: Vec<((usize, usize), Expectation)> = Vec::new();
    let mut order = 0usize;
    let mut plain_from = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'<' || i + 1 >= bytes.len() || bytes[i + 1] != b'!' {
            i += 1;
            continue;
        }

        source.push_str(&text[plain_from..i]);
        let marker_at = i;
        i += 2;

        if i < bytes.len() && bytes[i] == b'>' {
            i += 1;
            plain_from = i;
            let marker = open
                .pop()
                .ok_or(MarkerParseError::UnbalancedClose { offset: marker_at })?;
            let span = Span::new(marker.start_clean, source.len() as u32);
            for (idx, (kind, message)) in marker.entries.into_iter().enumerate() {
                closed.push(((marker.order, idx), Expectation { kind, span, message }));
            }
            continue;
        }

        let entries = parse_head(text, &mut i, marker_at)?;
        open.push(OpenMarker {
            entries,
            start_clean: source.len() as u32,
            offset: marker_at,
            order,
        });
        order += 1;
        plain_from = i;
    }
    source.push_str(&text[plain_from..]);

    if let Some(marker) = open.first() {
        return Err(MarkerParseError::UnclosedMarker {
            offset: marker.offset,
        });
    }

    closed.sort_by_key(|(key, _)| *key);
    Ok(ExtractOutput {
        source,
        expectations: closed.into_iter().map(|(_, e)| e).collect(),
    })
}

/// Parse the comma-separated kind list of an opening marker, starting just
/// past `<!` and consuming the terminating `!>`.
fn parse_head(
    text: &str,
    i: &mut usize,
    marker_at: usize,
) -> Result<Vec<(String, Option<String>)>, MarkerParseError> {
    let bytes = text.as_bytes();
    let mut entries = Vec::new();

    loop {
        skip_spaces(bytes, i);

        let start = *i;
        if *i < bytes.len() && (bytes[*i].is_ascii_alphabetic() || bytes[*i] == b'_') {
            while *i < bytes.len() && (bytes[*i].is_ascii_alphanumeric() || bytes[*i] == b'_') {
                *i += 1;
            }
        }
        if *i == start {
            if entries.is_empty() && at_terminator(bytes, *i) {
                return Err(MarkerParseError::EmptyKindList { offset: marker_at });
            }
            return Err(head_error(text, *i, marker_at));
        }
        let kind = text[start..*i].to_string();

        let mut message = None;
        if *i < bytes.len() && bytes[*i] == b'(' {
            let clause_at = *i;
            *i += 1;
            if *i >= bytes.len() || bytes[*i] != b'"' {
                return Err(MarkerParseError::MalformedMessage { offset: clause_at });
            }
            *i += 1;
            let msg_start = *i;
            while *i < bytes.len() && bytes[*i] != b'"' && bytes[*i] != b'\n' {
                *i += 1;
            }
            if *i >= bytes.len() || bytes[*i] != b'"' {
                return Err(MarkerParseError::UnterminatedMessage { offset: clause_at });
            }
            message = Some(text[msg_start..*i].to_string());
            *i += 1;
            if *i >= bytes.len() || bytes[*i] != b')' {
                return Err(MarkerParseError::MalformedMessage { offset: clause_at });
            }
            *i += 1;
        }
        entries.push((kind, message));

        skip_spaces(bytes, i);
        if at_terminator(bytes, *i) {
            *i += 2;
            return Ok(entries);
        }
        if *i < bytes.len() && bytes[*i] == b',' {
            *i += 1;
            continue;
        }
        return Err(head_error(text, *i, marker_at));
    }
}

fn skip_spaces(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() && bytes[*i] == b' ' {
        *i += 1;
    }
}

fn at_terminator(bytes: &[u8], i: usize) -> bool {
    i + 1 < bytes.len() && bytes[i] == b'!' && bytes[i + 1] == b'>'
}

/// The marker head ended (newline or end of input) or hit a byte that cannot
/// appear in it.
fn head_error(text: &str, at: usize, marker_at: usize) -> MarkerParseError {
    match text[at..].chars().next() {
        None | Some('\n') => MarkerParseError::UnterminatedHead { offset: marker_at },
        Some(found) => MarkerParseError::BadKind { offset: at, found },
    }
}
