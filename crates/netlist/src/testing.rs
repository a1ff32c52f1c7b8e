//! In-memory list service for workflow tests.

use async_trait::async_trait;
use ipnet::IpNet;
use netlist_core::{
    Activation, ActivationRequest, ActivationStatus, CreateListRequest, DeleteReceipt, ItemSet,
    ListOptions, ListQuery, ListService, ListType, NetlistError, Network, NetworkList, Result,
    Subscription, SubscriptionMode,
};
use std::collections::{HashMap, HashSet};
use std::net::IpAddr;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    /// Lists in creation order
    lists: Vec<NetworkList>,
    activations: HashMap<(String, Network), ActivationStatus>,
    subscriptions: HashMap<String, HashSet<String>>,
    failing_type: Option<ListType>,
    calls: Vec<String>,
    next_id: u32,
}

/// Behaves like the remote service: atomic appends that merge duplicates,
/// strict element removal, strict unsubscribe, service-driven activation.
#[derive(Default)]
pub struct InMemoryListService {
    state: Mutex<State>,
}

fn valid_ip_entry(entry: &str) -> bool {
    entry.parse::<IpNet>().is_ok() || entry.parse::<IpAddr>().is_ok()
}

impl InMemoryListService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a list directly, bypassing call recording
    pub fn seed(&self, id: &str, name: &str, list_type: ListType, items: &[&str]) {
        let mut state = self.state.lock().unwrap();
        state.lists.push(NetworkList {
            unique_id: id.to_string(),
            name: name.to_string(),
            list_type,
            items: items.iter().map(ToString::to_string).collect(),
            description: None,
            element_count: Some(items.len() as u64),
            sync_point: Some(0),
            read_only: false,
            shared: false,
            create_date: None,
            created_by: None,
            update_date: None,
            updated_by: None,
            staging_activation_status: None,
            production_activation_status: None,
        });
    }

    /// Make every listing of the given type fail
    pub fn fail_listing(&self, list_type: ListType) {
        self.state.lock().unwrap().failing_type = Some(list_type);
    }

    /// Move an activation forward as the remote side would
    pub fn settle(&self, id: &str, network: Network, status: ActivationStatus) {
        self.state
            .lock()
            .unwrap()
            .activations
            .insert((id.to_string(), network), status);
    }

    /// Add a subscription directly
    pub fn seed_subscription(&self, id: &str, recipient: &str) {
        self.state
            .lock()
            .unwrap()
            .subscriptions
            .entry(id.to_string())
            .or_default()
            .insert(recipient.to_string());
    }

    pub fn subscribers(&self, id: &str) -> HashSet<String> {
        self.state
            .lock()
            .unwrap()
            .subscriptions
            .get(id)
            .cloned()
            .unwrap_or_default()
    }

    /// Current entries of a list, bypassing call recording
    pub fn items(&self, id: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .lists
            .iter()
            .find(|l| l.unique_id == id)
            .map(|l| l.items.clone())
            .unwrap_or_default()
    }

    /// Names of the service operations invoked so far
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(state: &mut State, call: &str) {
        state.calls.push(call.to_string());
    }

    fn find<'a>(state: &'a mut State, id: &str) -> Result<&'a mut NetworkList> {
        state
            .lists
            .iter_mut()
            .find(|l| l.unique_id == id)
            .ok_or_else(|| NetlistError::not_found(format!("network list {id}")))
    }

    fn shaped(list: &NetworkList, options: ListOptions) -> NetworkList {
        let mut list = list.clone();
        list.element_count = Some(list.items.len() as u64);
        if !options.include_elements {
            list.items.clear();
        }
        list
    }

    fn bump(list: &mut NetworkList) {
        list.element_count = Some(list.items.len() as u64);
        list.sync_point = Some(list.sync_point.unwrap_or(0) + 1);
    }
}

#[async_trait]
impl ListService for InMemoryListService {
    async fn list_lists(&self, list_type: ListType, query: &ListQuery) -> Result<Vec<NetworkList>> {
        let mut state = self.state.lock().unwrap();
        Self::record(&mut state, &format!("list_lists:{list_type}"));

        if state.failing_type == Some(list_type) {
            return Err(NetlistError::Service {
                status: Some(500),
                message: format!("{list_type} listing unavailable"),
            });
        }

        let needle = query.search.as_deref().map(str::to_lowercase);
        Ok(state
            .lists
            .iter()
            .filter(|l| l.list_type == list_type)
            .filter(|l| {
                needle.as_deref().map_or(true, |n| {
                    l.name.to_lowercase().contains(n)
                        || l.items.iter().any(|i| i.to_lowercase().contains(n))
                })
            })
            .map(|l| Self::shaped(l, query.options))
            .collect())
    }

    async fn get_list(&self, list_id: &str, options: ListOptions) -> Result<NetworkList> {
        let mut state = self.state.lock().unwrap();
        Self::record(&mut state, "get_list");
        let list = Self::find(&mut state, list_id)?;
        Ok(Self::shaped(list, options))
    }

    async fn create_list(&self, request: &CreateListRequest) -> Result<NetworkList> {
        let id = {
            let mut state = self.state.lock().unwrap();
            Self::record(&mut state, "create_list");
            state.next_id += 1;
            format!("{}_{}", 100 + state.next_id, request.name.to_uppercase().replace(' ', ""))
        };
        let items: Vec<&str> = request.items.iter().map(String::as_str).collect();
        self.seed(&id, &request.name, request.list_type, &items);

        let mut state = self.state.lock().unwrap();
        let list = Self::find(&mut state, &id)?;
        list.description = Some(request.description.clone());
        Ok(list.clone())
    }

    async fn append_items(&self, list_id: &str, items: &ItemSet) -> Result<NetworkList> {
        let mut state = self.state.lock().unwrap();
        Self::record(&mut state, "append_items");
        let list = Self::find(&mut state, list_id)?;

        if list.list_type == ListType::Ip {
            if let Some(bad) = items.iter().find(|i| !valid_ip_entry(i)) {
                return Err(NetlistError::Validation(format!(
                    "{bad} is not a valid IP address or CIDR"
                )));
            }
        }

        let mut merged = list.item_set();
        merged.extend(items.iter());
        list.items = merged.into_vec();
        Self::bump(list);
        Ok(list.clone())
    }

    async fn remove_item(&self, list_id: &str, element: &str) -> Result<NetworkList> {
        let mut state = self.state.lock().unwrap();
        Self::record(&mut state, "remove_item");
        let list = Self::find(&mut state, list_id)?;

        let before = list.items.len();
        list.items.retain(|i| i != element);
        if list.items.len() == before {
            return Err(NetlistError::not_found(format!("element {element}")));
        }
        Self::bump(list);
        Ok(list.clone())
    }

    async fn delete_list(&self, list_id: &str) -> Result<DeleteReceipt> {
        let mut state = self.state.lock().unwrap();
        Self::record(&mut state, "delete_list");
        Self::find(&mut state, list_id)?;

        let active = Network::ALL.iter().any(|network| {
            state
                .activations
                .get(&(list_id.to_string(), *network))
                .is_some_and(|s| *s != ActivationStatus::Inactive)
        });
        if active {
            return Err(NetlistError::Validation(format!(
                "list {list_id} must be inactive on both networks"
            )));
        }

        state.lists.retain(|l| l.unique_id != list_id);
        Ok(DeleteReceipt {
            unique_id: list_id.to_string(),
            status: Some(200),
        })
    }

    async fn activate(
        &self,
        list_id: &str,
        network: Network,
        request: &ActivationRequest,
    ) -> Result<Activation> {
        let mut state = self.state.lock().unwrap();
        Self::record(&mut state, &format!("activate:{network}"));
        let sync_point = Self::find(&mut state, list_id)?.sync_point;

        if request.comments.trim().is_empty() {
            return Err(NetlistError::Validation("comments must not be empty".into()));
        }

        let key = (list_id.to_string(), network);
        if state.activations.get(&key) == Some(&ActivationStatus::Pending) {
            return Err(NetlistError::Validation(format!(
                "list {list_id} is already being activated on {network}"
            )));
        }
        state.activations.insert(key, ActivationStatus::Pending);

        Ok(Activation {
            list_id: list_id.to_string(),
            network,
            status: ActivationStatus::Pending,
            activation_id: Some(u64::from(state.next_id) + 9000),
            sync_point,
            detail: None,
        })
    }

    async fn activation_status(&self, list_id: &str, network: Network) -> Result<Activation> {
        let mut state = self.state.lock().unwrap();
        Self::record(&mut state, &format!("activation_status:{network}"));
        let sync_point = Self::find(&mut state, list_id)?.sync_point;

        let status = state
            .activations
            .get(&(list_id.to_string(), network))
            .copied()
            .unwrap_or(ActivationStatus::Inactive);

        Ok(Activation {
            list_id: list_id.to_string(),
            network,
            status,
            activation_id: None,
            sync_point,
            detail: (status == ActivationStatus::Failed).then(|| "propagation failed".to_string()),
        })
    }

    async fn manage_subscription(&self, subscription: &Subscription) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        Self::record(&mut state, &format!("manage_subscription:{}", subscription.mode));

        for id in &subscription.list_ids {
            Self::find(&mut state, id)?;
        }

        match subscription.mode {
            SubscriptionMode::Subscribe => {
                for id in &subscription.list_ids {
                    state
                        .subscriptions
                        .entry(id.clone())
                        .or_default()
                        .extend(subscription.recipients.iter().cloned());
                }
                Ok(())
            }
            SubscriptionMode::Unsubscribe => {
                let mut missing = None;
                for id in &subscription.list_ids {
                    let subscribers = state.subscriptions.entry(id.clone()).or_default();
                    for recipient in &subscription.recipients {
                        if !subscribers.remove(recipient) {
                            missing = Some(recipient.clone());
                        }
                    }
                }
                missing.map_or(Ok(()), |recipient| {
                    Err(NetlistError::not_found(format!("subscription for {recipient}")))
                })
            }
        }
    }
}
