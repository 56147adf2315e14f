use statduel_core::{ComparisonResult, Sport};

use crate::labels::{labels_for, LabelEntry};

/// Splits a labeled completion into the structured fields of a result.
///
/// A section starts at a line beginning with `LABEL:` (exact case, no leading
/// whitespace) and runs until the next label line. Continuation lines are
/// trimmed and joined with single spaces; blank lines are skipped. A label
/// that repeats overwrites its earlier value. The raw text is always kept as
/// the analysis, so malformed input yields a result with unset fields.
#[derive(Clone, Copy, Debug)]
pub struct StructuredResponseParser {
    labels: &'static [LabelEntry],
}

impl StructuredResponseParser {
    pub fn new(labels: &'static [LabelEntry]) -> Self {
        Self { labels }
    }

    pub fn for_sport(sport: Sport) -> Self {
        Self::new(labels_for(sport))
    }

    pub fn parse(&self, raw: &str) -> ComparisonResult {
        let mut result = ComparisonResult::message_only(raw);
        let mut current: Option<(&LabelEntry, String)> = None;

        for line in raw.lines() {
            if let Some((entry, rest)) = self.match_label(line) {
                if let Some((open, text)) = current.take() {
                    commit(&mut result, open, text);
                }
                current = Some((entry, rest.trim().to_string()));
                continue;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some((_, text)) = current.as_mut() {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(line);
            }
        }
        if let Some((open, text)) = current {
            commit(&mut result, open, text);
        }
        result
    }

    fn match_label<'l>(&self, line: &'l str) -> Option<(&'static LabelEntry, &'l str)> {
        self.labels.iter().find_map(|entry| {
            line.strip_prefix(entry.label)
                .and_then(|rest| rest.strip_prefix(':'))
                .map(|rest| (entry, rest))
        })
    }
}

fn commit(result: &mut ComparisonResult, entry: &LabelEntry, text: String) {
    *entry.field.slot(result) = Some(text.trim().to_string());
}
