//! Listing and searching across list types.

use crate::require;
use futures_util::future::try_join;
use netlist_core::{
    ListOptions, ListQuery, ListService, ListType, ListTypeFilter, NetworkList, Result,
};

/// Unified view over IP and GEO lists
#[derive(Debug, Clone)]
pub struct ListAggregator<S> {
    service: S,
}

impl<S: ListService> ListAggregator<S> {
    pub const fn new(service: S) -> Self {
        Self { service }
    }

    /// All lists matching the type filter
    ///
    /// With [`ListTypeFilter::Any`] both types are fetched concurrently and
    /// the result is the IP lists followed by the GEO lists, each in service
    /// order. If either fetch fails nothing is returned.
    pub async fn list_all(
        &self,
        filter: ListTypeFilter,
        options: ListOptions,
    ) -> Result<Vec<NetworkList>> {
        let query = ListQuery {
            search: None,
            options,
        };
        self.fetch(filter, &query).await
    }

    /// One list by id
    pub async fn get_by_id(&self, list_id: &str, options: ListOptions) -> Result<NetworkList> {
        let list_id = require(list_id, "list id")?;
        self.service.get_list(list_id, options).await
    }

    /// Lists whose name or entries match `pattern`
    pub async fn search_by_name(
        &self,
        pattern: &str,
        filter: ListTypeFilter,
        options: ListOptions,
    ) -> Result<Vec<NetworkList>> {
        let pattern = require(pattern, "search pattern")?;
        let query = ListQuery {
            search: Some(pattern.to_string()),
            options,
        };
        self.fetch(filter, &query).await
    }

    async fn fetch(&self, filter: ListTypeFilter, query: &ListQuery) -> Result<Vec<NetworkList>> {
        match filter {
            ListTypeFilter::Ip => self.service.list_lists(ListType::Ip, query).await,
            ListTypeFilter::Geo => self.service.list_lists(ListType::Geo, query).await,
            ListTypeFilter::Any => {
                let (mut lists, geo) = try_join(
                    self.service.list_lists(ListType::Ip, query),
                    self.service.list_lists(ListType::Geo, query),
                )
                .await?;
                lists.extend(geo);
                Ok(lists)
            }
        }
    }
}
