/// Highlighting of query tokens inside result text
///
/// All match spans for all tokens are collected first, overlapping or touching
/// spans are merged, and the text is wrapped once. Overlapping tokens therefore
/// produce a single `<mark>` instead of nested ones.
use crate::search::tokenize;
use regex::Regex;
use std::ops::Range;

/// A run of text that is either plain or highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub marked: bool,
}

/// Byte ranges of every token occurrence, sorted and merged
///
/// Matching runs on `text.to_lowercase()`, the same folding search uses, so a
/// result that matched a token always shows it marked. Spans are reported in
/// bytes of the original `text` and always fall on character boundaries.
pub fn match_spans(text: &str, query: &str) -> Vec<Range<usize>> {
    let folded = FoldedText::new(text);

    let mut spans: Vec<Range<usize>> = tokenize(query)
        .iter()
        .filter_map(|token| {
            Regex::new(&regex::escape(token))
                .map_err(|e| log::warn!("Skipping highlight token {:?}: {}", token, e))
                .ok()
        })
        .flat_map(|re| {
            re.find_iter(&folded.lower)
                .map(|m| folded.original(m.range()))
                .collect::<Vec<_>>()
        })
        .filter(|span| !span.is_empty())
        .collect();

    spans.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| b.end.cmp(&a.end)));

    spans.into_iter().fold(Vec::new(), |mut merged: Vec<Range<usize>>, span| {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
        merged
    })
}

/// Lowercased text plus, for each of its bytes, the source character's range
struct FoldedText {
    lower: String,
    origin: Vec<Range<usize>>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut lower = String::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());

        for (start, c) in text.char_indices() {
            let source = start..start + c.len_utf8();
            for folded in c.to_lowercase() {
                lower.push(folded);
                origin.extend(std::iter::repeat_n(source.clone(), folded.len_utf8()));
            }
        }

        FoldedText { lower, origin }
    }

    /// Widen a lowercased range to whole source characters
    fn original(&self, range: Range<usize>) -> Range<usize> {
        if range.is_empty() {
            return 0..0;
        }
        self.origin[range.start].start..self.origin[range.end - 1].end
    }
}

/// Split `text` into plain and marked segments covering it exactly
pub fn segments<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    let mut result = Vec::new();
    let mut cursor = 0;

    for span in match_spans(text, query) {
        if span.start > cursor {
            result.push(Segment {
                text: &text[cursor..span.start],
                marked: false,
            });
        }
        result.push(Segment {
            text: &text[span.clone()],
            marked: true,
        });
        cursor = span.end;
    }

    if cursor < text.len() {
        result.push(Segment {
            text: &text[cursor..],
            marked: false,
        });
    }

    result
}

/// HTML with each highlighted run wrapped in `<mark>`; all text is escaped
pub fn highlight_html(text: &str, query: &str) -> String {
    segments(text, query)
        .into_iter()
        .fold(String::with_capacity(text.len()), |mut html, segment| {
            if segment.marked {
                html.push_str("<mark>");
                push_escaped(&mut html, segment.text);
                html.push_str("</mark>");
            } else {
                push_escaped(&mut html, segment.text);
            }
            html
        })
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
