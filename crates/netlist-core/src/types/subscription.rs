use serde::{Deserialize, Serialize};

/// Direction of a subscription change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionMode {
    /// Start receiving activation notifications
    Subscribe,
    /// Stop receiving activation notifications
    Unsubscribe,
}

impl SubscriptionMode {
    /// Pick the mode from an "unsubscribe?" switch
    #[must_use]
    pub const fn from_unsubscribe_flag(unsubscribe: bool) -> Self {
        if unsubscribe {
            Self::Unsubscribe
        } else {
            Self::Subscribe
        }
    }

    /// URL segment of the notification endpoint
    #[must_use]
    pub const fn path_segment(&self) -> &'static str {
        match self {
            Self::Subscribe => "subscribe",
            Self::Unsubscribe => "unsubscribe",
        }
    }
}

impl std::fmt::Display for SubscriptionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subscribe => write!(f, "SUBSCRIBE"),
            Self::Unsubscribe => write!(f, "UNSUBSCRIBE"),
        }
    }
}

/// One subscription change covering several lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Lists the change applies to
    pub list_ids: Vec<String>,

    /// Notification destinations
    pub recipients: Vec<String>,

    /// Subscribe or unsubscribe
    pub mode: SubscriptionMode,
}
