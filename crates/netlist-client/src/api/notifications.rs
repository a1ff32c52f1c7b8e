//! Notification subscription endpoints.

use crate::NetlistClient;
use netlist_core::{Result, Subscription};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscriptionBody<'a> {
    recipients: &'a [String],
    unique_ids: &'a [String],
}

/// Notification subscription endpoints
pub struct NotificationsApi<'a> {
    client: &'a NetlistClient,
}

impl<'a> NotificationsApi<'a> {
    pub(crate) fn new(client: &'a NetlistClient) -> Self {
        Self { client }
    }

    /// Apply a subscription change to every list it names
    pub async fn apply(&self, subscription: &Subscription) -> Result<()> {
        let body = SubscriptionBody {
            recipients: &subscription.recipients,
            unique_ids: &subscription.list_ids,
        };

        self.client
            .post_empty(
                &format!("/notifications/{}", subscription.mode.path_segment()),
                &body,
            )
            .await
    }
}
