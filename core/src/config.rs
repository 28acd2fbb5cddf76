//! Parser options.
//!
//! Options are plain data so hosts can load them from their own config
//! sources. Omitted fields fall back to `Default`.

use serde::{Deserialize, Serialize};

/// How the method token is compared against the known verbs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodCase {
    /// Only the canonical uppercase spelling matches.
    #[default]
    Exact,
    /// ASCII case is ignored, so `get` and `Get` match `GET`.
    Insensitive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub method_case: MethodCase,
}

impl ParseOptions {
    pub fn ignore_method_case() -> Self {
        Self {
            method_case: MethodCase::Insensitive,
        }
    }
}
