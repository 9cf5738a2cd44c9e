//! Wire types for the current conditions service.

use serde::{Deserialize, Serialize};

/// The current weather conditions for a user, as reported by the upstream
/// weather provider. Immutable once received, and only lives for the duration
/// of one fetch-then-render sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Weather code classifying the conditions (e.g. clear, rain, snow), a
    /// small integer as a string. See [`crate::icons::icon_class()`].
    pub code: String,
    /// Temperature value, pre-formatted by the service.
    pub temperature: String,
    /// Unit string displayed directly after the temperature (e.g. `°F`).
    pub units: String,
    /// Link to the provider's page for these conditions.
    pub link: url::Url,
}

/// Result of one `getUserCurrentConditions` service call.
///
/// Neither `message` nor `condition` is guaranteed by the wire format:
/// `message` accompanies failures, `condition` accompanies successes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionsResponse {
    /// Whether the service produced conditions for the user.
    pub success: bool,
    /// Diagnostic message accompanying a failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The conditions, present when `success` is `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<CurrentConditions>,
}
