use crate::{distinct, require};
use netlist_core::{Activation, ActivationRequest, ListService, Network, Result};

/// Submits activations and reads their status
///
/// Activation is asynchronous on the service side: a successful submission
/// only means the request was accepted, normally as `PENDING`. Callers that
/// need the final state ask for [`status`](Self::status) later.
#[derive(Debug, Clone)]
pub struct ActivationController<S> {
    service: S,
}

impl<S: ListService> ActivationController<S> {
    pub const fn new(service: S) -> Self {
        Self { service }
    }

    /// Submit an activation of the list's current version
    pub async fn activate(
        &self,
        list_id: &str,
        network: Network,
        request: &ActivationRequest,
    ) -> Result<Activation> {
        let list_id = require(list_id, "list id")?;

        let request = ActivationRequest {
            comments: request.comments.trim().to_string(),
            notification_recipients: distinct(&request.notification_recipients),
            fast: request.fast,
        };
        self.service.activate(list_id, network, &request).await
    }

    /// Current activation state, read-only
    pub async fn status(&self, list_id: &str, network: Network) -> Result<Activation> {
        let list_id = require(list_id, "list id")?;
        self.service.activation_status(list_id, network).await
    }
}
