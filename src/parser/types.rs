use std::fmt::Debug;

pub type Ident = String;

pub type Span = std::ops::Range<usize>;

#[derive(Debug, Clone)]
pub struct Spanned<T: Debug> {
    pub inner: T,
    pub span: Span,
}

impl<T: Debug> Spanned<T> {
    pub fn new(inner: T, span: Span) -> Self {
        Spanned { inner, span }
    }
}

/// Turns a span over token indices (what the parser reports) into a span over source characters.
pub fn resolve_span_span<T: Debug>(span: &Span, tokens: &[Spanned<T>]) -> Span {
    let eof = tokens.last().map_or(0, |tok| tok.span.end);
    let start = tokens.get(span.start).map_or(eof, |tok| tok.span.start);
    let end = span
        .end
        .checked_sub(1)
        .and_then(|last| tokens.get(last))
        .map_or(eof, |tok| tok.span.end);
    start..end.max(start)
}
