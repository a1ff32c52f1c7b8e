use crate::NetlistError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Comment attached to activations when the caller gives none
pub const DEFAULT_ACTIVATION_COMMENTS: &str = "activated via netlist";

/// Delivery network a list is activated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    /// Staging network
    Staging,
    /// Production network
    Production,
}

impl Network {
    /// Both networks
    pub const ALL: [Self; 2] = [Self::Staging, Self::Production];

    /// Wire representation, also used as the URL segment
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Staging => "STAGING",
            Self::Production => "PRODUCTION",
        }
    }

    /// Pick the network from a "production?" switch
    #[must_use]
    pub const fn from_production_flag(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Staging
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = NetlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "staging" | "stg" => Ok(Self::Staging),
            "production" | "prod" | "prd" => Ok(Self::Production),
            other => Err(NetlistError::InvalidArgument(format!(
                "unknown network '{other}', expected STAGING or PRODUCTION"
            ))),
        }
    }
}

/// Activation state of a list on one network
///
/// `INACTIVE -> PENDING -> ACTIVE | FAILED`. Transitions happen on the
/// service side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivationStatus {
    /// Never activated, or deactivated
    Inactive,
    /// Submitted and propagating
    #[serde(alias = "PENDING_ACTIVATION", alias = "PENDING_DEACTIVATION")]
    Pending,
    /// Live on the network; `MODIFIED` means live with newer local edits
    #[serde(alias = "MODIFIED")]
    Active,
    /// Propagation failed
    Failed,
}

impl ActivationStatus {
    /// Returns true for states the service will not move out of on its own
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Inactive | Self::Active | Self::Failed)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "INACTIVE",
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for ActivationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of an activation submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRequest {
    /// Audit note
    pub comments: String,

    /// Addresses notified about this activation only
    #[serde(default)]
    pub notification_recipients: Vec<String>,

    /// Fast propagation policy, passed through opaquely
    #[serde(default)]
    pub fast: bool,
}

impl Default for ActivationRequest {
    fn default() -> Self {
        Self {
            comments: DEFAULT_ACTIVATION_COMMENTS.to_string(),
            notification_recipients: Vec::new(),
            fast: false,
        }
    }
}

impl ActivationRequest {
    /// Create a request with the given comments
    #[must_use]
    pub fn new(comments: impl Into<String>) -> Self {
        Self {
            comments: comments.into(),
            ..Self::default()
        }
    }

    /// Add notification recipients
    #[must_use]
    pub fn recipients<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notification_recipients
            .extend(recipients.into_iter().map(Into::into));
        self
    }

    /// Set the fast propagation flag
    #[must_use]
    pub const fn fast(mut self, fast: bool) -> Self {
        self.fast = fast;
        self
    }
}

/// Activation acknowledgment or status read for one list on one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activation {
    /// List the activation belongs to
    pub list_id: String,

    /// Target network
    pub network: Network,

    /// Current state as reported by the service
    pub status: ActivationStatus,

    /// Service-assigned activation id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_id: Option<u64>,

    /// List version the activation refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_point: Option<u64>,

    /// Service-reported detail message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
