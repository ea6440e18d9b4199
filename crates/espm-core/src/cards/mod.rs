//! Mobile Cards templated registration: wire types, the registry seam, and
//! the reqwest-backed client.

mod client;
mod wire;

use async_trait::async_trait;

pub use client::{RegistrationClient, REGISTRATION_PATH};
pub use wire::{parse_list_response, RegistrationMethod, RegistrationScope, RemoteCard};

use crate::models::CardParameters;
use crate::sync::SyncResult;

/// Remote card registry operations used by the sync engine.
#[async_trait]
pub trait CardRegistry: Send + Sync {
    /// Fetch every card registered for the scope.
    async fn list(&self, scope: &RegistrationScope) -> SyncResult<Vec<RemoteCard>>;

    /// Register a card with a deep link back into the application.
    async fn register(
        &self,
        scope: &RegistrationScope,
        parameters: &CardParameters,
        link: &str,
    ) -> SyncResult<()>;

    /// Delete a single card.
    async fn delete(&self, scope: &RegistrationScope, parameters: &CardParameters)
        -> SyncResult<()>;

    /// Delete every card registered for the scope.
    async fn delete_all(&self, scope: &RegistrationScope) -> SyncResult<()>;
}
