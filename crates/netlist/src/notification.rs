use crate::distinct;
use netlist_core::{ListOptions, ListService, NetlistError, Result, Subscription, SubscriptionMode};

/// Manages activation-notification subscriptions
///
/// Unsubscribing is idempotent: removing recipients that are not subscribed,
/// or passing no recipients at all, succeeds. Naming a list that does not
/// exist still fails with `NotFound`.
#[derive(Debug, Clone)]
pub struct NotificationManager<S> {
    service: S,
}

impl<S: ListService> NotificationManager<S> {
    pub const fn new(service: S) -> Self {
        Self { service }
    }

    /// Subscribe or unsubscribe recipients for every given list
    ///
    /// Returns the change as applied, after trimming and de-duplication.
    pub async fn manage<L, R>(
        &self,
        list_ids: &[L],
        recipients: &[R],
        mode: SubscriptionMode,
    ) -> Result<Subscription>
    where
        L: AsRef<str>,
        R: AsRef<str>,
    {
        let subscription = Subscription {
            list_ids: distinct(list_ids),
            recipients: distinct(recipients),
            mode,
        };

        if subscription.list_ids.is_empty() {
            return Err(NetlistError::InvalidArgument(
                "at least one list id is required".into(),
            ));
        }

        if subscription.recipients.is_empty() {
            return match mode {
                SubscriptionMode::Subscribe => Err(NetlistError::Validation(
                    "at least one recipient is required to subscribe".into(),
                )),
                // Nothing to remove
                SubscriptionMode::Unsubscribe => Ok(subscription),
            };
        }

        if mode == SubscriptionMode::Subscribe {
            self.service.manage_subscription(&subscription).await?;
            return Ok(subscription);
        }

        // Unknown lists fail here, so NotFound below means a missing recipient
        for list_id in &subscription.list_ids {
            self.service.get_list(list_id, ListOptions::default()).await?;
        }
        match self.service.manage_subscription(&subscription).await {
            Err(err) if err.is_not_found() => Ok(subscription),
            other => other.map(|()| subscription),
        }
    }

    pub async fn subscribe<L, R>(&self, list_ids: &[L], recipients: &[R]) -> Result<Subscription>
    where
        L: AsRef<str>,
        R: AsRef<str>,
    {
        self.manage(list_ids, recipients, SubscriptionMode::Subscribe)
            .await
    }

    pub async fn unsubscribe<L, R>(&self, list_ids: &[L], recipients: &[R]) -> Result<Subscription>
    where
        L: AsRef<str>,
        R: AsRef<str>,
    {
        self.manage(list_ids, recipients, SubscriptionMode::Unsubscribe)
            .await
    }
}
