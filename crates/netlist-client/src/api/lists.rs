//! Network list endpoints.

use crate::NetlistClient;
use netlist_core::{
    CreateListRequest, DeleteReceipt, ItemSet, ListOptions, ListType, NetworkList, Result,
};
use serde::{Deserialize, Serialize};

/// Envelope of the list collection endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NetworkListsResponse {
    #[serde(default)]
    network_lists: Vec<NetworkList>,
}

#[derive(Debug, Serialize)]
struct AppendBody<'a> {
    list: &'a ItemSet,
}

fn bool_param(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Network list endpoints
pub struct ListsApi<'a> {
    client: &'a NetlistClient,
}

impl<'a> ListsApi<'a> {
    pub(crate) fn new(client: &'a NetlistClient) -> Self {
        Self { client }
    }

    /// List lists of one type
    #[must_use]
    pub fn list(&self, list_type: ListType) -> ListRequestBuilder<'a> {
        ListRequestBuilder::new(self.client, list_type)
    }

    /// Get a single list
    pub async fn get(&self, list_id: &str, options: ListOptions) -> Result<NetworkList> {
        self.client
            .get(
                &format!("/network-lists/{list_id}"),
                &[
                    ("includeElements", bool_param(options.include_elements)),
                    ("extended", bool_param(options.extended)),
                ],
            )
            .await
    }

    /// Create a new list
    pub async fn create(&self, request: &CreateListRequest) -> Result<NetworkList> {
        self.client.post("/network-lists", request).await
    }

    /// Append entries to a list
    pub async fn append(&self, list_id: &str, items: &ItemSet) -> Result<NetworkList> {
        self.client
            .post(
                &format!("/network-lists/{list_id}/append"),
                &AppendBody { list: items },
            )
            .await
    }

    /// Remove one entry from a list
    pub async fn remove_element(&self, list_id: &str, element: &str) -> Result<NetworkList> {
        let body = self
            .client
            .delete(
                &format!("/network-lists/{list_id}/elements"),
                &[("element", element)],
            )
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Delete a list
    pub async fn delete(&self, list_id: &str) -> Result<DeleteReceipt> {
        let body = self
            .client
            .delete(&format!("/network-lists/{list_id}"), &[])
            .await?;

        if body.trim().is_empty() {
            return Ok(DeleteReceipt {
                unique_id: list_id.to_string(),
                status: None,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Builder for list collection requests
pub struct ListRequestBuilder<'a> {
    client: &'a NetlistClient,
    list_type: ListType,
    search: Option<String>,
    options: ListOptions,
}

impl<'a> ListRequestBuilder<'a> {
    fn new(client: &'a NetlistClient, list_type: ListType) -> Self {
        Self {
            client,
            list_type,
            search: None,
            options: ListOptions::default(),
        }
    }

    /// Only return lists whose name or elements match
    #[must_use]
    pub fn search(mut self, pattern: impl Into<String>) -> Self {
        self.search = Some(pattern.into());
        self
    }

    /// Element and metadata inclusion
    #[must_use]
    pub const fn options(mut self, options: ListOptions) -> Self {
        self.options = options;
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<Vec<NetworkList>> {
        let mut params = vec![
            ("listType", self.list_type.as_str()),
            ("includeElements", bool_param(self.options.include_elements)),
            ("extended", bool_param(self.options.extended)),
        ];
        if let Some(search) = self.search.as_deref() {
            params.push(("search", search));
        }

        let response: NetworkListsResponse = self.client.get("/network-lists", &params).await?;
        Ok(response.network_lists)
    }
}
