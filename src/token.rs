//! The persisted token record.

use serde::{Deserialize, Deserializer, Serialize};

/// A token as returned by the provider's token endpoint and stored on disk.
///
/// Parsing is lenient: missing fields take their zero value, so a provider
/// error body parses into an empty token rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
    pub scope: String,
    /// Absent on refresh responses that don't rotate it. An empty string
    /// counts as absent.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty"
    )]
    pub refresh_token: Option<String>,
}

impl Token {
    /// Parse a token from raw JSON bytes. A JSON `null` yields an empty token.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice::<Option<Token>>(bytes).map(Option::unwrap_or_default)
    }

    /// Serialize as JSON indented by two spaces.
    pub fn to_pretty_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
    }

    /// Fold a refresh response into the previously stored token.
    ///
    /// The response wins on every field; the previous refresh token is kept
    /// only when the response omits one.
    pub fn merge_refresh(mut self, previous: &Token) -> Token {
        if self.refresh_token.is_none() {
            self.refresh_token = previous.refresh_token.clone();
        }
        self
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
