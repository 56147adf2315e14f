use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

fn placeholder() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("valid regex"))
}

/// Text with `{{name}}` placeholders. Unknown names render empty, and
/// substituted values are never re-scanned for placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: &'static str,
}

impl PromptTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self { template }
    }

    pub fn render(&self, vars: &HashMap<&str, String>) -> String {
        placeholder()
            .replace_all(self.template, |caps: &regex::Captures| {
                vars.get(&caps[1]).cloned().unwrap_or_default()
            })
            .into_owned()
    }
}
