// SPDX-License-Identifier: MPL-2.0
//! Application store.
//!
//! An explicitly constructed state container created once at startup and
//! passed by reference through the update loop. Mutation happens only via
//! [`Store::dispatch`], keeping the single-writer discipline while readers
//! borrow snapshots.

pub mod persistence;

use crate::api::dto::{AuthSession, UserProfile, WalletSnapshot};
use persistence::StoreState;

/// Mutations the store accepts.
#[derive(Debug, Clone)]
pub enum Action {
    SessionEstablished(AuthSession),
    SessionCleared,
    FavouriteAdded(String),
    FavouriteRemoved(String),
    WalletUpdated(WalletSnapshot),
    ProfileUpdated(UserProfile),
}

#[derive(Debug, Default)]
pub struct Store {
    session: Option<AuthSession>,
    favourites: Vec<String>,
    wallet: Option<WalletSnapshot>,
    profile: Option<UserProfile>,
}

impl Store {
    /// Builds a store seeded from persisted state.
    #[must_use]
    pub fn from_persisted(state: StoreState) -> Self {
        Self {
            favourites: state.favourites,
            ..Self::default()
        }
    }

    /// Applies a single action.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SessionEstablished(session) => {
                self.profile = Some(session.user.clone());
                self.session = Some(session);
            }
            Action::SessionCleared => {
                self.session = None;
            }
            Action::FavouriteAdded(id) => {
                if !self.favourites.contains(&id) {
                    self.favourites.push(id);
                }
            }
            Action::FavouriteRemoved(id) => {
                self.favourites.retain(|existing| existing != &id);
            }
            Action::WalletUpdated(snapshot) => {
                self.wallet = Some(snapshot);
            }
            Action::ProfileUpdated(profile) => {
                self.profile = Some(profile);
            }
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn favourites(&self) -> &[String] {
        &self.favourites
    }

    #[must_use]
    pub fn is_favourite(&self, id: &str) -> bool {
        self.favourites.iter().any(|existing| existing == id)
    }

    #[must_use]
    pub fn wallet(&self) -> Option<&WalletSnapshot> {
        self.wallet.as_ref()
    }

    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// The slice of state worth persisting across sessions.
    #[must_use]
    pub fn persistable(&self) -> StoreState {
        StoreState {
            favourites: self.favourites.clone(),
        }
    }
}
