//! [`ListService`] implementation over HTTP.

use crate::NetlistClient;
use async_trait::async_trait;
use netlist_core::{
    Activation, ActivationRequest, CreateListRequest, DeleteReceipt, ItemSet, ListOptions,
    ListQuery, ListService, ListType, Network, NetworkList, Result, Subscription,
};

#[async_trait]
impl ListService for NetlistClient {
    async fn list_lists(&self, list_type: ListType, query: &ListQuery) -> Result<Vec<NetworkList>> {
        let mut request = self.lists().list(list_type).options(query.options);
        if let Some(search) = &query.search {
            request = request.search(search.clone());
        }
        request.send().await
    }

    async fn get_list(&self, list_id: &str, options: ListOptions) -> Result<NetworkList> {
        self.lists().get(list_id, options).await
    }

    async fn create_list(&self, request: &CreateListRequest) -> Result<NetworkList> {
        self.lists().create(request).await
    }

    async fn append_items(&self, list_id: &str, items: &ItemSet) -> Result<NetworkList> {
        self.lists().append(list_id, items).await
    }

    async fn remove_item(&self, list_id: &str, element: &str) -> Result<NetworkList> {
        self.lists().remove_element(list_id, element).await
    }

    async fn delete_list(&self, list_id: &str) -> Result<DeleteReceipt> {
        self.lists().delete(list_id).await
    }

    async fn activate(
        &self,
        list_id: &str,
        network: Network,
        request: &ActivationRequest,
    ) -> Result<Activation> {
        self.activations().submit(list_id, network, request).await
    }

    async fn activation_status(&self, list_id: &str, network: Network) -> Result<Activation> {
        self.activations().status(list_id, network).await
    }

    async fn manage_subscription(&self, subscription: &Subscription) -> Result<()> {
        self.notifications().apply(subscription).await
    }
}
