use std::ops::Range;

use crate::regex::Regex;

/// An occurrence of a pattern in a text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    /// Matched text.
    pub text: String,

    /// Captured groups, in order, excluding the implicit group of the whole match.
    ///
    /// Groups that did not participate in the match are `None`, which is distinct
    /// from a group that matched an empty string.
    pub groups: Vec<Option<String>>,

    /// Offset of the start of the match, in characters.
    pub start: usize,

    /// Offset of the end of the match, in characters.
    pub end: usize,

    /// Span of the match, in bytes.
    ///
    /// This is the span to use to slice the text.
    pub span: Range<usize>,
}

/// Converts byte offsets into character offsets.
///
/// Offsets must be given in increasing order, so that the text is only walked
/// once for the whole scan.
struct CharOffsets<'a> {
    text: &'a str,
    byte_offset: usize,
    char_offset: usize,
}

impl<'a> CharOffsets<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte_offset: 0,
            char_offset: 0,
        }
    }

    fn advance_to(&mut self, byte_offset: usize) -> usize {
        self.char_offset += self.text[self.byte_offset..byte_offset].chars().count();
        self.byte_offset = byte_offset;
        self.char_offset
    }
}

pub(crate) fn extract_all(text: &str, regex: &Regex) -> Vec<MatchRecord> {
    let mut offsets = CharOffsets::new(text);
    let mut records = Vec::new();

    for caps in regex.as_meta().captures_iter(text) {
        let Some(mat) = caps.get_match() else {
            continue;
        };

        let groups = (1..caps.group_len())
            .map(|index| {
                caps.get_group(index)
                    .map(|span| text[span.range()].to_owned())
            })
            .collect();

        let start = offsets.advance_to(mat.start());
        let end = offsets.advance_to(mat.end());
        records.push(MatchRecord {
            text: text[mat.range()].to_owned(),
            groups,
            start,
            end,
            span: mat.range(),
        });
    }

    records
}
