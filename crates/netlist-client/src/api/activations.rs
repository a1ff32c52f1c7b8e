//! Activation endpoints.

use crate::NetlistClient;
use netlist_core::{Activation, ActivationRequest, ActivationStatus, Network, Result};
use serde::Deserialize;

/// Activation record as returned by the service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivationResponse {
    activation_status: ActivationStatus,
    #[serde(default)]
    activation_id: Option<u64>,
    #[serde(default)]
    sync_point: Option<u64>,
    #[serde(default, alias = "message")]
    detail: Option<String>,
}

impl ActivationResponse {
    fn into_activation(self, list_id: &str, network: Network) -> Activation {
        Activation {
            list_id: list_id.to_string(),
            network,
            status: self.activation_status,
            activation_id: self.activation_id,
            sync_point: self.sync_point,
            detail: self.detail,
        }
    }
}

fn environment_path(list_id: &str, network: Network, action: &str) -> String {
    format!("/network-lists/{list_id}/environments/{network}/{action}")
}

/// Activation endpoints
pub struct ActivationsApi<'a> {
    client: &'a NetlistClient,
}

impl<'a> ActivationsApi<'a> {
    pub(crate) fn new(client: &'a NetlistClient) -> Self {
        Self { client }
    }

    /// Submit a prepared activation request
    pub async fn submit(
        &self,
        list_id: &str,
        network: Network,
        request: &ActivationRequest,
    ) -> Result<Activation> {
        let response: ActivationResponse = self
            .client
            .post(&environment_path(list_id, network, "activate"), request)
            .await?;
        Ok(response.into_activation(list_id, network))
    }

    /// Read the current activation status
    pub async fn status(&self, list_id: &str, network: Network) -> Result<Activation> {
        let response: ActivationResponse = self
            .client
            .get(&environment_path(list_id, network, "status"), &[])
            .await?;
        Ok(response.into_activation(list_id, network))
    }
}
