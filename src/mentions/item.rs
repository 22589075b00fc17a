use std::fmt;

use serde::Deserialize;

/// Value handed back to the application when an item is picked
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MentionValue {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for MentionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MentionValue::Text(text) => write!(f, "{}", text),
            MentionValue::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for MentionValue {
    fn from(value: &str) -> Self {
        MentionValue::Text(value.to_string())
    }
}

impl From<String> for MentionValue {
    fn from(value: String) -> Self {
        MentionValue::Text(value)
    }
}

impl From<i64> for MentionValue {
    fn from(value: i64) -> Self {
        MentionValue::Number(value.into())
    }
}

impl From<u64> for MentionValue {
    fn from(value: u64) -> Self {
        MentionValue::Number(value.into())
    }
}

/// A single suggestion shown in the popup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MentionItem {
    pub label: String,
    pub value: MentionValue,
}

impl MentionItem {
    pub fn new(label: impl Into<String>, value: impl Into<MentionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Item whose value is its own label
    pub fn labeled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: MentionValue::Text(label.clone()),
            label,
        }
    }
}

/// A titled group of suggestions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MentionGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<MentionItem>,
    /// Whether the group takes part in filtering. Absent means it does.
    #[serde(default)]
    pub filter: Option<bool>,
}

impl MentionGroup {
    pub fn new(title: impl Into<String>, items: Vec<MentionItem>) -> Self {
        Self {
            title: title.into(),
            items,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: bool) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn is_filtered(&self) -> bool {
        self.filter != Some(false)
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod item_tests;
