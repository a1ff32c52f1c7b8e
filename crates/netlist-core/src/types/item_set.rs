use super::ListType;
use ipnet::IpNet;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::net::IpAddr;

/// De-duplicated, normalized collection of list entries
///
/// Entries keep the order in which they were first inserted. Normalization
/// depends on the list type:
///
/// - `IP`: surrounding whitespace is trimmed and anything that parses as an
///   address or CIDR block is rewritten in canonical form, so `2001:DB8::/32`
///   and `2001:db8::/32` collapse to one entry. Unparseable entries are kept
///   lower-cased and left for the service to reject.
/// - `GEO`: whitespace is trimmed, matching is exact.
///
/// Blank entries are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSet {
    list_type: ListType,
    items: Vec<String>,
    seen: HashSet<String>,
}

impl ItemSet {
    /// Create an empty set for the given list type
    #[must_use]
    pub fn new(list_type: ListType) -> Self {
        Self {
            list_type,
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Build a set from raw entries
    #[must_use]
    pub fn from_items<I, S>(list_type: ListType, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(list_type);
        set.extend(items);
        set
    }

    /// Normalize a single raw entry, `None` when it is blank
    #[must_use]
    pub fn normalize(list_type: ListType, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let normalized = match list_type {
            ListType::Geo => trimmed.to_string(),
            ListType::Ip => trimmed.parse::<IpNet>().map_or_else(
                |_| {
                    trimmed
                        .parse::<IpAddr>()
                        .map_or_else(|_| trimmed.to_ascii_lowercase(), |ip| ip.to_string())
                },
                |net| net.to_string(),
            ),
        };

        Some(normalized)
    }

    /// Insert an entry; returns true if it was not already present
    pub fn insert(&mut self, raw: &str) -> bool {
        let Some(item) = Self::normalize(self.list_type, raw) else {
            return false;
        };

        if self.seen.insert(item.clone()) {
            self.items.push(item);
            true
        } else {
            false
        }
    }

    /// Insert every entry from an iterator
    pub fn extend<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.insert(item.as_ref());
        }
    }

    /// Remove an entry; returns true if it was present
    pub fn remove(&mut self, raw: &str) -> bool {
        let Some(item) = Self::normalize(self.list_type, raw) else {
            return false;
        };

        if self.seen.remove(&item) {
            self.items.retain(|existing| existing != &item);
            true
        } else {
            false
        }
    }

    /// Returns true if the (normalized) entry is present
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        Self::normalize(self.list_type, raw).is_some_and(|item| self.seen.contains(&item))
    }

    /// Number of distinct entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Entries in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Consume the set, returning entries in insertion order
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl Serialize for ItemSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_entries_collapse_after_normalization() {
        let set = ItemSet::from_items(
            ListType::Ip,
            ["1.2.3.4/32", " 1.2.3.4/32 ", "2001:DB8::/32", "2001:db8::/32", ""],
        );
        assert_eq!(set.as_slice(), ["1.2.3.4/32", "2001:db8::/32"]);
    }

    #[test]
    fn test_plain_address_is_not_widened() {
        let set = ItemSet::from_items(ListType::Ip, ["10.0.0.1", "10.0.0.1/32"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(" 10.0.0.1"));
    }

    #[test]
    fn test_geo_codes_match_exactly() {
        let mut set = ItemSet::from_items(ListType::Geo, ["US", "us", " US"]);
        assert_eq!(set.as_slice(), ["US", "us"]);
        assert!(set.remove("us"));
        assert!(!set.remove("us"));
        assert_eq!(set.as_slice(), ["US"]);
    }

    #[test]
    fn test_unparseable_ip_entry_is_kept_lowercased() {
        let mut set = ItemSet::new(ListType::Ip);
        assert!(set.insert("Not-An-IP"));
        assert!(!set.insert("not-an-ip"));
        assert_eq!(set.as_slice(), ["not-an-ip"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let set = ItemSet::from_items(ListType::Ip, ["192.168.1.1/32", "10.0.0.0/8"]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["192.168.1.1/32","10.0.0.0/8"]"#);
    }
}
