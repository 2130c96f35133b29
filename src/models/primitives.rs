//! Strongly-typed identifiers.
//!
//! The API addresses voices, samples, history items and models by opaque
//! string IDs. Wrapping each kind in its own newtype keeps a sample ID from
//! being passed where a voice ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the identifier is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id! {
    /// A voice identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use elevenlabs_rs::VoiceId;
    ///
    /// let voice = VoiceId::new("21m00Tcm4TlvDq8ikWAM");
    /// assert_eq!(voice.as_str(), "21m00Tcm4TlvDq8ikWAM");
    /// ```
    VoiceId
}

string_id! {
    /// Identifier of an audio sample attached to a voice.
    SampleId
}

string_id! {
    /// Identifier of a generated-audio history item.
    HistoryItemId
}

string_id! {
    /// Identifier of a synthesis model, e.g. `eleven_multilingual_v2`.
    ModelId
}
