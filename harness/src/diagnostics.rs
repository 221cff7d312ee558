use crate::span::Span;

/// A finding emitted by the analysis pass under test.
///
/// `kind` is the analyzer's tag for the finding (e.g. `UNUSED_VARIABLE`).
/// The harness treats it as an opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: String,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: impl Into<String>, span: Span, message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            kind: kind.into(),
            span,
            message: message.into(),
        }
    }
}

/// An expected finding declared by an inline fixture marker.
///
/// `message`, when present, must occur as a substring of the actual
/// diagnostic's message for the two to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    pub kind: String,
    pub span: Span,
    pub message: Option<String>,
}

impl Expectation {
    pub fn new(kind: impl Into<String>, span: Span) -> Expectation {
        Expectation {
            kind: kind.into(),
            span,
            message: None,
        }
    }

    pub fn with_message(kind: impl Into<String>, span: Span, message: impl Into<String>) -> Expectation {
        Expectation {
            kind: kind.into(),
            span,
            message: Some(message.into()),
        }
    }
}
