use super::{ActivationStatus, ItemSet};
use crate::NetlistError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of entries a network list holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListType {
    /// IP addresses and CIDR blocks
    Ip,
    /// Geographic region codes
    Geo,
}

impl ListType {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ip => "IP",
            Self::Geo => "GEO",
        }
    }
}

impl std::fmt::Display for ListType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListType {
    type Err = NetlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IP" => Ok(Self::Ip),
            "GEO" => Ok(Self::Geo),
            other => Err(NetlistError::InvalidArgument(format!(
                "unknown list type '{other}', expected IP or GEO"
            ))),
        }
    }
}

/// List type selection for listing and searching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListTypeFilter {
    /// Only IP lists
    Ip,
    /// Only GEO lists
    Geo,
    /// Both types, IP lists first
    #[default]
    Any,
}

impl From<ListType> for ListTypeFilter {
    fn from(list_type: ListType) -> Self {
        match list_type {
            ListType::Ip => Self::Ip,
            ListType::Geo => Self::Geo,
        }
    }
}

impl FromStr for ListTypeFilter {
    type Err = NetlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("any") {
            Ok(Self::Any)
        } else {
            s.parse::<ListType>().map(Self::from)
        }
    }
}

/// How much of each list the service should return
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Include the full element list
    pub include_elements: bool,
    /// Include creation/update metadata and activation status
    pub extended: bool,
}

impl ListOptions {
    /// Options that request the element list
    #[must_use]
    pub const fn with_elements() -> Self {
        Self {
            include_elements: true,
            extended: false,
        }
    }
}

/// Query for listing lists of one concrete type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Match against list names and elements
    pub search: Option<String>,
    /// Response shaping
    pub options: ListOptions,
}

/// A named, typed collection of access-control entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkList {
    /// Service-assigned identifier
    pub unique_id: String,

    /// Human-readable label (not unique)
    pub name: String,

    /// Entry kind, fixed at creation
    #[serde(rename = "type")]
    pub list_type: ListType,

    /// Entries, only populated when elements were requested
    #[serde(default, rename = "list", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of entries as reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_count: Option<u64>,

    /// Service-side version counter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_point: Option<u64>,

    /// Whether the list can be modified by this account
    #[serde(default)]
    pub read_only: bool,

    /// Whether the list is shared across accounts
    #[serde(default)]
    pub shared: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    /// Staging activation status (extended listings only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staging_activation_status: Option<ActivationStatus>,

    /// Production activation status (extended listings only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_activation_status: Option<ActivationStatus>,
}

impl NetworkList {
    /// Normalized view of the entries
    #[must_use]
    pub fn item_set(&self) -> ItemSet {
        ItemSet::from_items(self.list_type, &self.items)
    }

    /// Returns true if the (normalized) entry is present
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        ItemSet::normalize(self.list_type, raw).is_some_and(|needle| {
            self.items
                .iter()
                .filter_map(|item| ItemSet::normalize(self.list_type, item))
                .any(|item| item == needle)
        })
    }

    /// Number of entries, preferring the service's count when elements were omitted
    #[must_use]
    pub fn len(&self) -> u64 {
        if self.items.is_empty() {
            self.element_count.unwrap_or(0)
        } else {
            self.items.len() as u64
        }
    }

    /// Returns true if the list holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Request to create a list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListRequest {
    /// List name
    pub name: String,

    /// Entry kind
    #[serde(rename = "type")]
    pub list_type: ListType,

    /// Description
    pub description: String,

    /// Initial entries
    #[serde(default, rename = "list")]
    pub items: Vec<String>,
}

/// Confirmation of a list deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReceipt {
    /// Identifier of the deleted list
    pub unique_id: String,

    /// Service-reported status code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_JSON: &str = r#"{
        "uniqueId": "25614_GENERALLIST",
        "name": "General List",
        "type": "IP",
        "description": "office ranges",
        "list": ["10.0.0.0/8", "192.168.1.1/32"],
        "elementCount": 2,
        "syncPoint": 5,
        "readOnly": false,
        "shared": false,
        "createDate": "2023-05-10T12:01:02.000Z",
        "stagingActivationStatus": "PENDING_ACTIVATION",
        "productionActivationStatus": "MODIFIED",
        "links": {"self": {"href": "/network-list/v2/network-lists/25614_GENERALLIST"}}
    }"#;

    #[test]
    fn test_deserialize_service_list() {
        let list: NetworkList = serde_json::from_str(LIST_JSON).unwrap();
        assert_eq!(list.unique_id, "25614_GENERALLIST");
        assert_eq!(list.list_type, ListType::Ip);
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.sync_point, Some(5));
        assert!(list.create_date.is_some());
        assert_eq!(list.staging_activation_status, Some(ActivationStatus::Pending));
        assert_eq!(list.production_activation_status, Some(ActivationStatus::Active));
    }

    #[test]
    fn test_contains_uses_normalization() {
        let list: NetworkList = serde_json::from_str(LIST_JSON).unwrap();
        assert!(list.contains(" 10.0.0.0/8"));
        assert!(!list.contains("172.16.0.0/12"));
    }

    #[test]
    fn test_len_falls_back_to_element_count() {
        let mut list: NetworkList = serde_json::from_str(LIST_JSON).unwrap();
        list.items.clear();
        assert_eq!(list.len(), 2);
        list.element_count = None;
        assert!(list.is_empty());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("any".parse::<ListTypeFilter>().unwrap(), ListTypeFilter::Any);
        assert_eq!("geo".parse::<ListTypeFilter>().unwrap(), ListTypeFilter::Geo);
        assert!("asn".parse::<ListTypeFilter>().is_err());
        assert_eq!(ListTypeFilter::from(ListType::Ip), ListTypeFilter::Ip);
    }
}
