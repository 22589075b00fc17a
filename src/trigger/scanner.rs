/// Character that opens the mentions popup unless configured otherwise
pub const DEFAULT_TRIGGER: char = '/';

/// Span of the active mention token in the field text, in characters.
///
/// `start` is the offset of the trigger character and `end` is
/// `start + query length`, so the trigger plus query occupy
/// `start..end + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaretRange {
    pub start: usize,
    pub end: usize,
}

/// Result of scanning the text around the caret
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TriggerScan {
    /// Offset just after the nearest whitespace before the caret (or 0)
    pub left_boundary: usize,
    /// Caret offset the scan was taken at, clamped to the text length
    pub caret: usize,
    /// Token text after the trigger character; empty when inactive
    pub query: String,
    /// Whether the token under the caret starts with the trigger
    pub active: bool,
}

impl TriggerScan {
    /// Span to replace when a suggestion is accepted
    pub fn caret_range(&self) -> Option<CaretRange> {
        if !self.active {
            return None;
        }

        Some(CaretRange {
            start: self.left_boundary,
            end: self.left_boundary + self.query.chars().count(),
        })
    }
}

/// Detect whether the caret sits in a token that starts with `trigger`.
///
/// Walks backwards from `caret` (a character offset) to the previous
/// whitespace or the start of the text. The token between that boundary and
/// the caret is active when it starts with the trigger; the query is the
/// rest of the token and therefore never contains whitespace.
pub fn scan(text: &str, caret: usize, trigger: char) -> TriggerScan {
    let chars: Vec<char> = text.chars().collect();
    let caret = caret.min(chars.len());

    let mut left_boundary = caret;
    while left_boundary > 0 && !chars[left_boundary - 1].is_whitespace() {
        left_boundary -= 1;
    }

    match chars[left_boundary..caret].split_first() {
        Some((first, rest)) if *first == trigger => TriggerScan {
            left_boundary,
            caret,
            query: rest.iter().collect(),
            active: true,
        },
        _ => TriggerScan {
            left_boundary,
            caret,
            query: String::new(),
            active: false,
        },
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod scanner_tests;
