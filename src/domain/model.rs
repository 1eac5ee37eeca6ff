use crate::utils::error::{HelloError, Result};
use crate::utils::validation::validate_entries;
use serde::{Deserialize, Serialize};

/// 內建的籤詩清單
pub const BUILTIN_FORTUNES: &[&str] = &[
    "You will have a great day!",
    "Code compiles on the first try, once in a lifetime.",
    "A small refactor today saves a large rewrite tomorrow.",
    "The bug you are chasing is in the last place you look.",
    "Good tests make brave programmers.",
];

const _: () = assert!(!BUILTIN_FORTUNES.is_empty());

/// Ordered, immutable, non-empty list of messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneList {
    entries: Vec<String>,
}

impl FortuneList {
    /// Builds a list from runtime input. Empty lists and blank entries are rejected.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(HelloError::EmptyFortuneList);
        }
        validate_entries("fortunes", &entries)?;
        Ok(Self { entries })
    }

    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_FORTUNES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // Always false for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, message: &str) -> bool {
        self.entries.iter().any(|e| e == message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub greeting: String,
    pub local_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fortune: Option<String>,
}

impl Report {
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n{}", self.greeting, self.local_time);
        if let Some(fortune) = &self.fortune {
            out.push('\n');
            out.push_str(fortune);
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
