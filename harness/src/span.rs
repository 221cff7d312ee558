/// Half-open byte span into the analyzed source: `[start, end)`.
///
/// Offsets always point into the marker-stripped text, not the raw fixture.
/// `start` and `end` must be valid UTF-8 slice boundaries for that text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Span {
        Span { start, end }
    }
}
