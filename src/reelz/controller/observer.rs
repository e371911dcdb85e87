use super::ViewState;
use crate::favorites::FavoritesStore;
use crate::store::KeyValueStore;

/// What part of the view state a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Tab,
    Query,
    Loading,
    Results,
    Favorites,
}

/// Listener notified synchronously after every state mutation.
///
/// Observers run in subscription order, before the mutating controller method
/// returns, and see the state as it is after the change.
pub trait StateObserver {
    fn on_change(&mut self, change: StateChange, state: &ViewState);
}

impl<F> StateObserver for F
where
    F: FnMut(StateChange, &ViewState),
{
    fn on_change(&mut self, change: StateChange, state: &ViewState) {
        self(change, state)
    }
}

/// Writes the favorites collection back to storage whenever it changes.
pub struct FavoritesSync<K: KeyValueStore> {
    store: FavoritesStore<K>,
}

impl<K: KeyValueStore> FavoritesSync<K> {
    pub fn new(store: FavoritesStore<K>) -> Self {
        Self { store }
    }
}

impl<K: KeyValueStore> StateObserver for FavoritesSync<K> {
    fn on_change(&mut self, change: StateChange, state: &ViewState) {
        if change != StateChange::Favorites {
            return;
        }
        // The in-memory list stays authoritative for the session.
        if let Err(e) = self.store.save(&state.favorites) {
            tracing::warn!(key = self.store.key(), error = %e, "could not persist favorites");
        }
    }
}
