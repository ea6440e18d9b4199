//! Card sync engine.
//!
//! One pass lists the remote cards, diffs them against the desired set, then
//! issues one `REGISTER` or `DELETE` per changed card. Card `i` starts
//! `(i + 1) * stagger` after the list completes; every card future is driven
//! to completion before the pass reports, and the first failure in card order
//! fails the pass.

use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

use super::feedback::{delete_all_failure_message, sync_failure_message};
use super::{
    BusyIndicator, Notifier, SyncError, SyncResult, DELETE_ALL_SUCCESS_MESSAGE,
    SYNC_SUCCESS_MESSAGE,
};
use crate::cards::{CardRegistry, RegistrationScope};
use crate::models::{Card, CardStatus, SupplierId};
use crate::selection::CardSelector;

/// Default pause between the start times of successive card requests.
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(750);

/// Per-engine settings shared by every sync pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSettings {
    /// Registration template the cards are created from.
    pub template_name: String,
    /// Application location deep links are built from.
    pub app_url: Url,
    /// Start-time stagger between card requests.
    pub stagger: Duration,
}

/// Outcome of a successful sync pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub registered: usize,
    pub deleted: usize,
    pub unchanged: usize,
    pub completed_at: DateTime<Utc>,
}

impl SyncReport {
    /// Number of remote requests the pass issued.
    pub const fn requests(&self) -> usize {
        self.registered + self.deleted
    }
}

/// Reconciles the remote card registry with a desired card set.
#[derive(Debug)]
pub struct CardSyncEngine<R> {
    registry: R,
    settings: SyncSettings,
}

impl<R: CardRegistry> CardSyncEngine<R> {
    pub const fn new(registry: R, settings: SyncSettings) -> Self {
        Self { registry, settings }
    }

    pub const fn registry(&self) -> &R {
        &self.registry
    }

    pub const fn settings(&self) -> &SyncSettings {
        &self.settings
    }

    /// Switch the registration template used by later passes.
    pub fn set_template_name(&mut self, template_name: impl Into<String>) {
        self.settings.template_name = template_name.into();
    }

    fn scope(&self, username: &str) -> RegistrationScope {
        RegistrationScope::new(username, self.settings.template_name.clone())
    }

    fn stagger_for(&self, index: usize) -> Duration {
        let step = u32::try_from(index.saturating_add(1)).unwrap_or(u32::MAX);
        self.settings.stagger.saturating_mul(step)
    }

    /// List the remote cards and tag them without issuing any mutation.
    pub async fn plan(
        &self,
        username: &str,
        selector: &impl CardSelector,
    ) -> SyncResult<Vec<Card>> {
        let remote = self.registry.list(&self.scope(username)).await?;
        Ok(selector.build_cards_list(&remote))
    }

    /// Run one sync pass for `username`.
    pub async fn sync(
        &self,
        username: &str,
        selector: &impl CardSelector,
    ) -> SyncResult<SyncReport> {
        let scope = self.scope(username);
        let remote = self.registry.list(&scope).await?;
        let cards = selector.build_cards_list(&remote);
        debug!(remote = remote.len(), cards = cards.len(), "Computed card list");
        self.merge_cards(&scope, &cards).await
    }

    async fn merge_cards(
        &self,
        scope: &RegistrationScope,
        cards: &[Card],
    ) -> SyncResult<SyncReport> {
        let operations = cards
            .iter()
            .enumerate()
            .map(|(index, card)| self.merge_card(scope, card, self.stagger_for(index)));
        let outcomes = join_all(operations).await;

        let mut registered = 0;
        let mut deleted = 0;
        let mut unchanged = 0;
        let mut first_error = None;
        for (card, outcome) in cards.iter().zip(outcomes) {
            match outcome {
                Ok(()) => match card.status() {
                    CardStatus::New => registered += 1,
                    CardStatus::Delete => deleted += 1,
                    CardStatus::Unchanged => unchanged += 1,
                },
                Err(error) => {
                    first_error.get_or_insert(error);
                }
            }
        }

        if let Some(error) = first_error {
            return Err(error);
        }
        Ok(SyncReport {
            registered,
            deleted,
            unchanged,
            completed_at: Utc::now(),
        })
    }

    async fn merge_card(
        &self,
        scope: &RegistrationScope,
        card: &Card,
        delay: Duration,
    ) -> SyncResult<()> {
        let identifier = card.identifier();
        match card.status() {
            CardStatus::Unchanged => {
                debug!(card = %identifier, "Skip card");
                Ok(())
            }
            CardStatus::Delete => {
                sleep(delay).await;
                match self.registry.delete(scope, card.parameters()).await {
                    Ok(()) => {
                        info!(card = %identifier, "Successfully DELETEd card");
                        Ok(())
                    }
                    Err(error) => {
                        warn!(card = %identifier, %error, "Failed to DELETE card");
                        Err(error)
                    }
                }
            }
            CardStatus::New => {
                let supplier_id = card.supplier_id().ok_or_else(|| {
                    SyncError::InvalidPayload(format!("card {identifier} has no SupplierId"))
                })?;
                let link = deep_link(&self.settings.app_url, supplier_id);
                sleep(delay).await;
                match self.registry.register(scope, card.parameters(), &link).await {
                    Ok(()) => {
                        info!(card = %identifier, "Successfully REGISTERed card");
                        Ok(())
                    }
                    Err(error) => {
                        warn!(card = %identifier, %error, "Failed to REGISTER card");
                        Err(error)
                    }
                }
            }
        }
    }

    /// Remove every card registered for `username`.
    pub async fn delete_all(&self, username: &str) -> SyncResult<()> {
        match self.registry.delete_all(&self.scope(username)).await {
            Ok(()) => {
                info!("Delete all Cards succeeded");
                Ok(())
            }
            Err(error) => {
                warn!(%error, "Delete all Cards failed");
                Err(error)
            }
        }
    }

    /// Sync with busy indication and a result toast.
    ///
    /// Busy is raised before the list request and cleared once afterwards,
    /// whatever the outcome.
    pub async fn run_sync(
        &self,
        username: &str,
        selector: &impl CardSelector,
        busy: &mut dyn BusyIndicator,
        notifier: &dyn Notifier,
    ) -> SyncResult<SyncReport> {
        busy.set_busy(true);
        let result = self.sync(username, selector).await;
        match &result {
            Ok(_) => notifier.show_toast(SYNC_SUCCESS_MESSAGE),
            Err(error) => notifier.show_toast(&sync_failure_message(error)),
        }
        busy.set_busy(false);
        result
    }

    /// Delete all cards with busy indication and a result toast.
    pub async fn run_delete_all(
        &self,
        username: &str,
        busy: &mut dyn BusyIndicator,
        notifier: &dyn Notifier,
    ) -> SyncResult<()> {
        busy.set_busy(true);
        let result = self.delete_all(username).await;
        match &result {
            Ok(()) => notifier.show_toast(DELETE_ALL_SUCCESS_MESSAGE),
            Err(error) => notifier.show_toast(&delete_all_failure_message(error)),
        }
        busy.set_busy(false);
        result
    }
}

/// Link from a card back to its supplier's detail page.
///
/// The id is placed in the fragment as `/Suppliers/<id>`; characters not
/// allowed in a URL fragment (spaces, quotes, angle brackets) are
/// percent-encoded.
#[must_use]
pub fn deep_link(app_url: &Url, supplier_id: &SupplierId) -> String {
    let mut link = app_url.clone();
    link.set_fragment(Some(&format!("/Suppliers/{supplier_id}")));
    link.to_string()
}
