//! Catalog store - mediates every mutation through the API client
//!
//! The store follows the persist-first rule: nothing touches local state
//! until the server has accepted the change, so a failed call leaves the
//! catalog exactly as it was. Async outcomes come back as `Did*` actions
//! and go through the reducer like any other transition.

use tokio::sync::watch;

use crate::action::Action;
use crate::api::ApiClient;
use crate::error::ApiError;
use crate::model::{Product, ProductInput, ProductPatch};
use crate::reducer::reducer;
use crate::state::CatalogState;

/// Single source of truth for the session's catalog.
///
/// Create one per application session, call [`load`](Self::load) once at
/// startup, then hand clones of [`subscribe`](Self::subscribe) receivers
/// to consumers (or poll [`state`](Self::state) directly - reads always
/// reflect the last resolved mutation).
pub struct CatalogStore {
    state: CatalogState,
    api: ApiClient,
    snapshot_tx: watch::Sender<CatalogState>,
}

impl CatalogStore {
    pub fn new(api: ApiClient) -> Self {
        let state = CatalogState::default();
        let (snapshot_tx, _) = watch::channel(state.clone());
        Self {
            state,
            api,
            snapshot_tx,
        }
    }

    /// The current catalog state.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Subscribe to state snapshots.
    ///
    /// A new snapshot is published after every state-changing dispatch,
    /// synchronously with the transition itself.
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.snapshot_tx.subscribe()
    }

    fn dispatch(&mut self, action: Action) -> bool {
        tracing::debug!(action = action.name(), "dispatching");
        let changed = reducer(&mut self.state, action);
        if changed {
            self.snapshot_tx.send_replace(self.state.clone());
        }
        changed
    }

    /// Run the initial bulk fetch.
    ///
    /// Called once per session, before any interactive mutation. On
    /// success all four datasets replace the current state; on failure
    /// no partial data is adopted and [`CatalogState::error`] carries
    /// the fixed user-facing message.
    pub async fn load(&mut self) {
        self.dispatch(Action::CatalogFetch);

        match self.api.fetch_initial_data().await {
            Ok(data) => {
                self.dispatch(Action::CatalogDidLoad(data));
            }
            Err(err) => {
                tracing::warn!(error = %err, "initial catalog fetch failed");
                self.dispatch(Action::CatalogDidError(err.to_string()));
            }
        }
    }

    /// Create a product on the server, then append it locally.
    ///
    /// The appended product is the server's response (with its assigned
    /// id), not the raw input. A failure propagates without any local
    /// insert.
    pub async fn add_product(&mut self, input: ProductInput) -> Result<Product, ApiError> {
        let created = self.api.create_product(&input).await?;
        self.dispatch(Action::ProductDidCreate(created.clone()));
        Ok(created)
    }

    /// Update a product on the server, then replace it in place.
    ///
    /// Only the fields set on `patch` go on the wire; the stored product
    /// becomes the server's merged view. A failure propagates without
    /// touching local state.
    pub async fn update_product(&mut self, id: i64, patch: ProductPatch) -> Result<Product, ApiError> {
        let updated = self.api.update_product(id, &patch).await?;
        self.dispatch(Action::ProductDidUpdate(updated.clone()));
        Ok(updated)
    }
}
