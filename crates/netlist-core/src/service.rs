//! The list service contract.
//!
//! Workflows talk to the remote network list API only through
//! [`ListService`]. `netlist-client` provides the HTTP implementation; tests
//! substitute in-memory ones.

use crate::types::{
    Activation, ActivationRequest, CreateListRequest, DeleteReceipt, ItemSet, ListOptions,
    ListQuery, ListType, Network, NetworkList, Subscription,
};
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Remote network list API
///
/// Every call is a single request/response exchange. Implementations map
/// service failures onto [`NetlistError`](crate::NetlistError) and never
/// retry.
#[async_trait]
pub trait ListService: Send + Sync {
    /// List all lists of one type, optionally filtered by a search pattern
    async fn list_lists(&self, list_type: ListType, query: &ListQuery) -> Result<Vec<NetworkList>>;

    /// Fetch one list
    async fn get_list(&self, list_id: &str, options: ListOptions) -> Result<NetworkList>;

    /// Create a list
    async fn create_list(&self, request: &CreateListRequest) -> Result<NetworkList>;

    /// Append entries to a list in one atomic call
    async fn append_items(&self, list_id: &str, items: &ItemSet) -> Result<NetworkList>;

    /// Remove one entry from a list
    async fn remove_item(&self, list_id: &str, element: &str) -> Result<NetworkList>;

    /// Delete a list (must be inactive on both networks)
    async fn delete_list(&self, list_id: &str) -> Result<DeleteReceipt>;

    /// Submit an activation
    async fn activate(
        &self,
        list_id: &str,
        network: Network,
        request: &ActivationRequest,
    ) -> Result<Activation>;

    /// Read the current activation status
    async fn activation_status(&self, list_id: &str, network: Network) -> Result<Activation>;

    /// Subscribe or unsubscribe notification recipients
    async fn manage_subscription(&self, subscription: &Subscription) -> Result<()>;
}

#[async_trait]
impl<T: ListService + ?Sized> ListService for Arc<T> {
    async fn list_lists(&self, list_type: ListType, query: &ListQuery) -> Result<Vec<NetworkList>> {
        (**self).list_lists(list_type, query).await
    }

    async fn get_list(&self, list_id: &str, options: ListOptions) -> Result<NetworkList> {
        (**self).get_list(list_id, options).await
    }

    async fn create_list(&self, request: &CreateListRequest) -> Result<NetworkList> {
        (**self).create_list(request).await
    }

    async fn append_items(&self, list_id: &str, items: &ItemSet) -> Result<NetworkList> {
        (**self).append_items(list_id, items).await
    }

    async fn remove_item(&self, list_id: &str, element: &str) -> Result<NetworkList> {
        (**self).remove_item(list_id, element).await
    }

    async fn delete_list(&self, list_id: &str) -> Result<DeleteReceipt> {
        (**self).delete_list(list_id).await
    }

    async fn activate(
        &self,
        list_id: &str,
        network: Network,
        request: &ActivationRequest,
    ) -> Result<Activation> {
        (**self).activate(list_id, network, request).await
    }

    async fn activation_status(&self, list_id: &str, network: Network) -> Result<Activation> {
        (**self).activation_status(list_id, network).await
    }

    async fn manage_subscription(&self, subscription: &Subscription) -> Result<()> {
        (**self).manage_subscription(subscription).await
    }
}
