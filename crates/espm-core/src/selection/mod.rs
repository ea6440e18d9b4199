//! Card selection: turns the locally desired card set and the remote card
//! inventory into one tagged [`Card`] per distinct identity.

use std::collections::HashSet;

use crate::cards::RemoteCard;
use crate::models::{card_identity, Card, CardParameters, CardStatus, Supplier};

/// Source of the cards a sync pass should reconcile.
pub trait CardSelector {
    /// Diff the remote inventory against the desired set.
    fn build_cards_list(&self, remote: &[RemoteCard]) -> Vec<Card>;
}

/// Desired card set derived from the selected suppliers of the master list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSelector {
    desired: Vec<CardParameters>,
}

impl ListSelector {
    pub const fn new(desired: Vec<CardParameters>) -> Self {
        Self { desired }
    }

    /// Desire one card per supplier.
    pub fn from_suppliers<'a>(suppliers: impl IntoIterator<Item = &'a Supplier>) -> Self {
        Self::new(
            suppliers
                .into_iter()
                .map(Supplier::card_parameters)
                .collect(),
        )
    }

    pub fn desired(&self) -> &[CardParameters] {
        &self.desired
    }
}

impl CardSelector for ListSelector {
    fn build_cards_list(&self, remote: &[RemoteCard]) -> Vec<Card> {
        diff_cards(remote, &self.desired)
    }
}

/// Tag every card of `remote` and `desired` by set membership.
///
/// Remote cards come first in response order (`Delete` or `Unchanged`),
/// followed by desired cards missing remotely (`New`) in desired order.
/// Repeated identities on either side collapse into one card.
#[must_use]
pub fn diff_cards(remote: &[RemoteCard], desired: &[CardParameters]) -> Vec<Card> {
    let desired_ids = desired.iter().map(card_identity).collect::<HashSet<_>>();
    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(remote.len() + desired.len());

    for remote_card in remote {
        let identity = card_identity(&remote_card.parameters);
        if !seen.insert(identity.clone()) {
            continue;
        }
        let status = if desired_ids.contains(&identity) {
            CardStatus::Unchanged
        } else {
            CardStatus::Delete
        };
        cards.push(Card::new(status, remote_card.parameters.clone()));
    }

    for parameters in desired {
        if seen.insert(card_identity(parameters)) {
            cards.push(Card::new(CardStatus::New, parameters.clone()));
        }
    }

    cards
}
