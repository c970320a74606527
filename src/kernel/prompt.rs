//! Prompt data model.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// One reusable text snippet. Identity is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl Prompt {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Ordered, read-only prompt sequence shared between the store and the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptList {
    items: Arc<[Prompt]>,
}

impl PromptList {
    pub fn new(items: Vec<Prompt>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Parse a `{ "prompts": [...] }` document.
    ///
    /// A missing or `null` `prompts` field yields an empty list, as does a
    /// top-level value that is not an object.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let doc: Value = serde_json::from_slice(bytes)?;
        let prompts = match doc {
            Value::Object(mut map) => match map.remove("prompts") {
                None | Some(Value::Null) => Vec::new(),
                Some(value) => serde_json::from_value::<Vec<Prompt>>(value)?,
            },
            _ => Vec::new(),
        };
        Ok(Self::new(prompts))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Prompt> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prompt> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Prompt] {
        &self.items
    }
}

impl FromIterator<Prompt> for PromptList {
    fn from_iter<I: IntoIterator<Item = Prompt>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/prompt.rs"]
mod tests;
