//! Adding and removing list entries.

use crate::require;
use netlist_core::{ItemSet, ListOptions, ListService, NetlistError, NetworkList, Result};

/// Idempotent additions, strict removals
///
/// Adding an entry that is already present succeeds and leaves it present
/// once. Removing an entry that is absent fails with `NotFound`.
#[derive(Debug, Clone)]
pub struct ItemMutator<S> {
    service: S,
}

impl<S: ListService> ItemMutator<S> {
    pub const fn new(service: S) -> Self {
        Self { service }
    }

    /// Add raw entries to a list
    ///
    /// The list's type is read first so the entries can be normalized and
    /// de-duplicated the same way the list stores them. The append itself is
    /// one atomic call.
    pub async fn add_items<T: AsRef<str>>(&self, list_id: &str, items: &[T]) -> Result<NetworkList> {
        let list_id = require(list_id, "list id")?;
        let list = self.service.get_list(list_id, ListOptions::default()).await?;

        let items = ItemSet::from_items(list.list_type, items);
        self.append(list_id, &items).await
    }

    /// Append an already normalized set in one call
    pub async fn append(&self, list_id: &str, items: &ItemSet) -> Result<NetworkList> {
        let list_id = require(list_id, "list id")?;
        if items.is_empty() {
            return Err(NetlistError::InvalidArgument(
                "at least one item is required".into(),
            ));
        }
        self.service.append_items(list_id, items).await
    }

    /// Remove one entry, failing if it is not in the list
    pub async fn remove_item(&self, list_id: &str, element: &str) -> Result<NetworkList> {
        let list_id = require(list_id, "list id")?;
        let element = require(element, "element")?;

        let list = self
            .service
            .get_list(list_id, ListOptions::with_elements())
            .await?;

        // Send the entry exactly as the list stores it
        let needle = ItemSet::normalize(list.list_type, element);
        let stored = list
            .items
            .iter()
            .find(|item| ItemSet::normalize(list.list_type, item) == needle)
            .ok_or_else(|| {
                NetlistError::not_found(format!("element {element} in list {list_id}"))
            })?;

        self.service.remove_item(list_id, stored).await
    }
}
