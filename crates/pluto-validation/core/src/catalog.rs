// File: src/catalog.rs
// Purpose: Rule names and their default error messages

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the configured bound in `min` / `max` catalog messages
pub const BOUND_PLACEHOLDER: &str = "{bound}";

/// A rule the engine can report a violation for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Required,
    Int,
    /// Decimal numbers
    Double,
    /// Catalog entry only, no data type dispatches to it
    Phone,
    Email,
    Min,
    Max,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::Required,
        Rule::Int,
        Rule::Double,
        Rule::Phone,
        Rule::Email,
        Rule::Min,
        Rule::Max,
    ];

    /// Name used in the catalog and in `pluto-<name>-error` attributes
    pub fn name(self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Int => "int",
            Rule::Double => "double",
            Rule::Phone => "phone",
            Rule::Email => "email",
            Rule::Min => "min",
            Rule::Max => "max",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Rule::ALL.into_iter().find(|rule| rule.name() == name)
    }

    /// Attribute carrying a per-field override for this rule's message
    pub fn error_attribute(self) -> String {
        format!("pluto-{}-error", self.name())
    }

    fn default_message(self) -> &'static str {
        match self {
            Rule::Required => "This field is required",
            Rule::Int => "Please insert an integer number",
            Rule::Double => "Please insert a decimal number",
            Rule::Phone => "Please insert a valid phone",
            Rule::Email => "Please insert a valid email",
            Rule::Min => "The minimum value required is: {bound}",
            Rule::Max => "The maximum value allowed is: {bound}",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Engine-wide mapping from rule name to message text
///
/// Keys are plain strings so a configuration may carry messages for rules the
/// engine does not know about; looking those up is harmless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleCatalog {
    messages: HashMap<String, String>,
}

impl RuleCatalog {
    /// Replaces the built-in catalog wholesale
    pub fn from_messages(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    pub fn get(&self, rule: &str) -> Option<&str> {
        self.messages.get(rule).map(String::as_str)
    }

    pub fn set(&mut self, rule: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(rule.into(), message.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        let messages = Rule::ALL
            .into_iter()
            .map(|rule| (rule.name().to_string(), rule.default_message().to_string()))
            .collect();

        Self { messages }
    }
}
