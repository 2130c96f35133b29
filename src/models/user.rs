//! User and subscription models.
//!
//! The API returns subscription data in two shapes. The copy embedded in
//! [`User`] never carries invoicing data, while `/user/subscription`
//! includes it. They are modelled as [`Subscription`] and
//! [`SubscriptionDetails`] so the difference is visible in the types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_default, unix_timestamp};

/// Subscription data common to both API views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    /// Subscription tier, e.g. `free` or `creator`
    #[serde(deserialize_with = "null_default")]
    pub tier: String,
    /// Subscription status
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    /// Billing currency
    pub currency: Option<String>,
    /// Characters used in the current period
    #[serde(deserialize_with = "null_default")]
    pub character_count: u64,
    /// Character quota of the current period
    #[serde(deserialize_with = "null_default")]
    pub character_limit: u64,
    /// Whether the character limit may be extended
    #[serde(deserialize_with = "null_default")]
    pub can_extend_character_limit: bool,
    /// Whether the user is allowed to extend the character limit
    #[serde(deserialize_with = "null_default")]
    pub allowed_to_extend_character_limit: bool,
    /// Unix time the character count resets
    #[serde(deserialize_with = "null_default")]
    pub next_character_count_reset_unix: i64,
    /// Maximum number of voices
    #[serde(deserialize_with = "null_default")]
    pub voice_limit: u32,
    /// Maximum number of professional voices
    #[serde(deserialize_with = "null_default")]
    pub professional_voice_limit: u32,
    /// Whether the voice limit may be extended
    #[serde(deserialize_with = "null_default")]
    pub can_extend_voice_limit: bool,
    /// Whether instant voice cloning is available
    #[serde(deserialize_with = "null_default")]
    pub can_use_instant_voice_cloning: bool,
    /// Whether professional voice cloning is available
    #[serde(deserialize_with = "null_default")]
    pub can_use_professional_voice_cloning: bool,
    /// Maximum voice add/edit operations
    #[serde(deserialize_with = "null_default")]
    pub max_voice_add_edits: u32,
    /// Voice add/edit operations used
    #[serde(deserialize_with = "null_default")]
    pub voice_add_edit_counter: u32,
}

impl Subscription {
    /// Characters left in the current period.
    pub fn characters_remaining(&self) -> u64 {
        self.character_limit.saturating_sub(self.character_count)
    }

    /// Time the character count resets.
    pub fn next_reset_at(&self) -> Option<DateTime<Utc>> {
        unix_timestamp(self.next_character_count_reset_unix)
    }
}

/// The standalone subscription view, including invoicing data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionDetails {
    /// Fields shared with the embedded view
    #[serde(flatten)]
    pub subscription: Subscription,
    /// Whether unpaid invoices exist
    #[serde(default, deserialize_with = "null_default")]
    pub has_open_invoices: bool,
    /// The upcoming invoice, if one is scheduled
    #[serde(default)]
    pub next_invoice: Option<Invoice>,
}

impl std::ops::Deref for SubscriptionDetails {
    type Target = Subscription;

    fn deref(&self) -> &Subscription {
        &self.subscription
    }
}

/// An upcoming invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    /// Amount due in cents
    #[serde(deserialize_with = "null_default")]
    pub amount_due_cents: u64,
    /// Unix time of the next payment attempt
    #[serde(deserialize_with = "null_default")]
    pub next_payment_attempt_unix: i64,
}

impl Invoice {
    /// Time of the next payment attempt.
    pub fn next_payment_attempt_at(&self) -> Option<DateTime<Utc>> {
        unix_timestamp(self.next_payment_attempt_unix)
    }
}

/// The authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Subscription, without invoicing data
    #[serde(deserialize_with = "null_default")]
    pub subscription: Subscription,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Whether the account is new
    #[serde(deserialize_with = "null_default")]
    pub is_new_user: bool,
    /// Whether onboarding has been completed
    #[serde(deserialize_with = "null_default")]
    pub is_onboarding_complete: bool,
    /// Whether delayed payment methods are available
    #[serde(deserialize_with = "null_default")]
    pub can_use_delayed_payment_methods: bool,
    /// The user's API key as reported by the API
    #[serde(deserialize_with = "null_default")]
    pub xi_api_key: String,
}
