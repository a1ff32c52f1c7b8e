use crate::require;
use netlist_core::{CreateListRequest, DeleteReceipt, ListService, ListType, NetworkList, Result};

/// Description given to lists created without one
pub const DEFAULT_DESCRIPTION: &str = "created via netlist";

/// Creates and deletes whole lists
#[derive(Debug, Clone)]
pub struct ListLifecycle<S> {
    service: S,
}

impl<S: ListService> ListLifecycle<S> {
    pub const fn new(service: S) -> Self {
        Self { service }
    }

    /// Create an empty list
    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
        list_type: ListType,
    ) -> Result<NetworkList> {
        let name = require(name, "list name")?;
        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION);

        let request = CreateListRequest {
            name: name.to_string(),
            list_type,
            description: description.to_string(),
            items: Vec::new(),
        };
        self.service.create_list(&request).await
    }

    /// Delete a list; the service refuses while it is active anywhere
    pub async fn delete(&self, list_id: &str) -> Result<DeleteReceipt> {
        let list_id = require(list_id, "list id")?;
        self.service.delete_list(list_id).await
    }
}
