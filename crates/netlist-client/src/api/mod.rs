//! API endpoint modules.

mod activations;
mod lists;
mod notifications;

pub use activations::ActivationsApi;
pub use lists::{ListRequestBuilder, ListsApi};
pub use notifications::NotificationsApi;
