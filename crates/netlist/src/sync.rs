//! One-way, additive copy of entries between lists.

use crate::{require, ItemMutator, ListAggregator};
use netlist_core::{ListOptions, ListService, NetlistError, NetworkList, Result};

/// Copies every entry of a source list into a destination list
///
/// Entries already in the destination are kept, destination metadata is
/// never touched, and the copy is a single bulk append.
#[derive(Debug, Clone)]
pub struct SyncEngine<S> {
    lists: ListAggregator<S>,
    mutator: ItemMutator<S>,
}

impl<S: ListService + Clone> SyncEngine<S> {
    pub fn new(service: S) -> Self {
        Self {
            lists: ListAggregator::new(service.clone()),
            mutator: ItemMutator::new(service),
        }
    }
}

impl<S: ListService> SyncEngine<S> {
    /// Append all source entries to the destination
    ///
    /// Fails with `EmptySource` without contacting the destination when the
    /// source has no entries, and with `Validation` when the two lists hold
    /// different entry types.
    pub async fn sync(&self, source_id: &str, dest_id: &str) -> Result<NetworkList> {
        let source_id = require(source_id, "source list id")?;
        let dest_id = require(dest_id, "destination list id")?;
        if source_id == dest_id {
            return Err(NetlistError::InvalidArgument(format!(
                "source and destination are the same list ({source_id})"
            )));
        }

        let source = self
            .lists
            .get_by_id(source_id, ListOptions::with_elements())
            .await?;
        let items = source.item_set();
        if items.is_empty() {
            return Err(NetlistError::EmptySource {
                list_id: source_id.to_string(),
            });
        }

        let dest = self.lists.get_by_id(dest_id, ListOptions::default()).await?;
        if dest.list_type != source.list_type {
            return Err(NetlistError::Validation(format!(
                "cannot sync {} list {source_id} into {} list {dest_id}",
                source.list_type, dest.list_type
            )));
        }

        self.mutator.append(dest_id, &items).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryListService;
    use netlist_core::{ErrorKind, ListType};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_sync_is_union_without_removal() {
        let service = Arc::new(InMemoryListService::new());
        service.seed("1_SRC", "src", ListType::Ip, &["10.0.0.0/8", "192.168.1.1/32"]);
        service.seed("2_DST", "dst", ListType::Ip, &["172.16.0.0/12"]);

        let updated = SyncEngine::new(Arc::clone(&service))
            .sync("1_SRC", "2_DST")
            .await
            .unwrap();

        assert_eq!(
            updated.items,
            ["172.16.0.0/12", "10.0.0.0/8", "192.168.1.1/32"]
        );
        assert_eq!(updated.name, "dst");
        // source untouched
        assert_eq!(service.items("1_SRC"), ["10.0.0.0/8", "192.168.1.1/32"]);
        assert_eq!(
            service.calls().iter().filter(|c| *c == "append_items").count(),
            1
        );
    }

    #[tokio::test]
    async fn test_empty_source_leaves_destination_alone() {
        let service = Arc::new(InMemoryListService::new());
        service.seed("1_SRC", "src", ListType::Ip, &[]);
        service.seed("2_DST", "dst", ListType::Ip, &["172.16.0.0/12"]);
        let engine = SyncEngine::new(Arc::clone(&service));

        let err = engine.sync("1_SRC", "2_DST").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptySource);
        assert_eq!(service.calls(), ["get_list"]);

        let dest = ListAggregator::new(Arc::clone(&service))
            .get_by_id("2_DST", ListOptions::with_elements())
            .await
            .unwrap();
        assert_eq!(dest.items, ["172.16.0.0/12"]);
        assert_eq!(dest.sync_point, Some(0));
    }

    #[tokio::test]
    async fn test_type_mismatch_is_rejected_before_append() {
        let service = Arc::new(InMemoryListService::new());
        service.seed("1_SRC", "src", ListType::Ip, &["10.0.0.0/8"]);
        service.seed("2_GEO", "dst", ListType::Geo, &["US"]);

        let err = SyncEngine::new(Arc::clone(&service))
            .sync("1_SRC", "2_GEO")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(service.items("2_GEO"), ["US"]);
        assert!(!service.calls().contains(&"append_items".to_string()));
    }

    #[tokio::test]
    async fn test_missing_source_and_same_list() {
        let service = Arc::new(InMemoryListService::new());
        service.seed("2_DST", "dst", ListType::Ip, &["172.16.0.0/12"]);
        let engine = SyncEngine::new(Arc::clone(&service));

        let err = engine.sync("1_NOPE", "2_DST").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = engine.sync("2_DST", " 2_DST ").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[tokio::test]
    async fn test_resync_is_a_no_op() {
        let service = Arc::new(InMemoryListService::new());
        service.seed("1_SRC", "src", ListType::Geo, &["CU", "IR"]);
        service.seed("2_DST", "dst", ListType::Geo, &["IR"]);
        let engine = SyncEngine::new(Arc::clone(&service));

        let first = engine.sync("1_SRC", "2_DST").await.unwrap();
        let second = engine.sync("1_SRC", "2_DST").await.unwrap();
        assert_eq!(first.items, second.items);
        assert_eq!(second.items, ["IR", "CU"]);
    }
}
