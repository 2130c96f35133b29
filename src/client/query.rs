//! Composable query-string modifiers.
//!
//! Endpoints that accept optional query parameters take a slice of
//! [`QueryModifier`]s. Each modifier appends exactly one `key=value` pair;
//! they are applied in order and repeated keys are kept, not replaced.
//!
//! ```
//! use elevenlabs_rs::{LatencyOptimization, QueryModifier};
//!
//! let modifiers = [
//!     QueryModifier::latency_optimizations(LatencyOptimization::Strong),
//!     QueryModifier::page_size(50),
//! ];
//! assert_eq!(modifiers[0].value(), "2");
//! ```

use std::borrow::Cow;
use std::fmt;

/// Query key for latency optimizations.
pub const OPTIMIZE_STREAMING_LATENCY: &str = "optimize_streaming_latency";
/// Query key requesting voice settings alongside voice metadata.
pub const WITH_SETTINGS: &str = "with_settings";
/// Query key for the history page size.
pub const PAGE_SIZE: &str = "page_size";
/// Query key for the history pagination cursor.
pub const START_AFTER_HISTORY_ITEM_ID: &str = "start_after_history_item_id";

/// Latency optimization level for text-to-speech calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LatencyOptimization {
    /// No latency optimizations
    #[default]
    Off = 0,
    /// Normal latency optimizations
    Normal = 1,
    /// Strong latency optimizations
    Strong = 2,
    /// Maximum latency optimizations
    Max = 3,
    /// Maximum latency optimizations with the text normalizer turned off.
    /// Numbers and dates may be mispronounced.
    MaxWithoutNormalizer = 4,
}

impl LatencyOptimization {
    /// The numeric level sent to the API.
    pub fn level(self) -> u8 {
        self as u8
    }
}

/// One `key=value` addition to a request's query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryModifier {
    key: Cow<'static, str>,
    value: String,
}

impl QueryModifier {
    /// A modifier for an arbitrary parameter.
    pub fn custom(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            key: Cow::Owned(key.into()),
            value: value.to_string(),
        }
    }

    fn fixed(key: &'static str, value: impl fmt::Display) -> Self {
        Self {
            key: Cow::Borrowed(key),
            value: value.to_string(),
        }
    }

    /// Sets `optimize_streaming_latency`, for text-to-speech calls.
    pub fn latency_optimizations(level: LatencyOptimization) -> Self {
        Self::fixed(OPTIMIZE_STREAMING_LATENCY, level.level())
    }

    /// Sets `with_settings=true`, so voice lookups include the settings.
    pub fn with_settings() -> Self {
        Self::fixed(WITH_SETTINGS, "true")
    }

    /// Sets `page_size`, the number of history items per page.
    pub fn page_size(n: u32) -> Self {
        Self::fixed(PAGE_SIZE, n)
    }

    /// Sets `start_after_history_item_id`, the history cursor.
    pub fn start_after(id: impl AsRef<str>) -> Self {
        Self::fixed(START_AFTER_HISTORY_ITEM_ID, id.as_ref())
    }

    /// The query key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The query value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Append this modifier's pair to `params`.
    pub fn apply(&self, params: &mut QueryParams) {
        params.append(self.key(), self.value());
    }
}

/// An ordered list of query pairs. Duplicate keys are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Apply `modifiers` left to right to an empty list.
    pub fn from_modifiers(modifiers: &[QueryModifier]) -> Self {
        let mut params = Self::default();
        for modifier in modifiers {
            modifier.apply(&mut params);
        }
        params
    }

    /// Append a pair, keeping any earlier pair with the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// All values recorded for `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over all pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Modifiers for the page after `last_item_id`.
///
/// Keeps the original modifiers except those whose key `extra` overrides
/// and any earlier cursor, then appends `extra` and the new cursor.
pub(crate) fn next_page_modifiers(
    original: &[QueryModifier],
    extra: &[QueryModifier],
    last_item_id: &str,
) -> Vec<QueryModifier> {
    let mut modifiers: Vec<QueryModifier> = original
        .iter()
        .filter(|m| m.key() != START_AFTER_HISTORY_ITEM_ID)
        .filter(|m| !extra.iter().any(|e| e.key() == m.key()))
        .cloned()
        .collect();
    modifiers.extend(
        extra
            .iter()
            .filter(|m| m.key() != START_AFTER_HISTORY_ITEM_ID)
            .cloned(),
    );
    modifiers.push(QueryModifier::start_after(last_item_id));
    modifiers
}
