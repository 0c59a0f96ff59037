use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::watch;

use crate::models::{Contact, ContactRow};
use crate::permissions::{PermissionStatus, Permissions};
use crate::store::ContactStore;
use crate::utils;

/// Prefix of the user-visible text carried by `LoadState::Error`.
const LOAD_ERROR_PREFIX: &str = "Error al cargar contactos: ";

/// The exhaustive set of states the contact list screen can be in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Contact access has not been granted; the UI shows the rationale and
    /// a grant action.
    AwaitingPermission,
    /// A fetch is in flight.
    Loading,
    /// The directory was read; the list may be empty.
    Loaded(Vec<Contact>),
    /// The fetch failed with user-visible text; `retry` re-runs it.
    Error(String),
}

/// Coordinates permission acquisition and the directory fetch, publishing
/// the state the contact list screen renders.
///
/// One loader is created per screen activation and dropped on navigation
/// away. The state lives in a watch channel: `subscribe` hands observers a
/// receiver, and every transition lands as one atomic replacement. The
/// transition methods can be called from any thread.
pub struct ContactLoader {
    permissions: Arc<dyn Permissions>,
    store: Arc<dyn ContactStore>,
    tx: watch::Sender<LoadState>,
}

impl ContactLoader {
    pub fn new(permissions: Arc<dyn Permissions>, store: Arc<dyn ContactStore>) -> Self {
        let (tx, _) = watch::channel(LoadState::AwaitingPermission);
        Self {
            permissions,
            store,
            tx,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LoadState {
        self.tx.borrow().clone()
    }

    /// Observe state replacements.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.tx.subscribe()
    }

    /// Entry point on screen activation: load immediately when access is
    /// already granted, otherwise keep awaiting permission.
    pub fn initialize(&self) {
        match self.permissions.check() {
            PermissionStatus::Granted => {
                if !self.begin_loading(awaiting) {
                    log::debug!("initialize ignored; loading already underway");
                }
            }
            PermissionStatus::Denied => {
                log::debug!("contact permission not granted yet");
            }
        }
    }

    /// The platform granted access. No-op unless still awaiting permission.
    pub fn on_permission_granted(&self) {
        if !self.begin_loading(awaiting) {
            log::debug!("permission grant ignored; loader already active");
        }
    }

    /// Ask the user for contact access; a grant starts the load, a denial
    /// keeps the loader awaiting permission.
    pub async fn request_permission(&self) {
        if self.permissions.request().await.is_granted() {
            self.on_permission_granted();
        } else {
            log::warn!("contact permission denied by the user");
        }
    }

    /// Re-run a failed fetch. No-op unless the current state is `Error`.
    pub fn retry(&self) {
        if !self.begin_loading(|state| matches!(state, LoadState::Error(_))) {
            log::debug!("retry ignored; no error to clear");
        }
    }

    // Atomic edge into Loading. The fetch is spawned only when the edge
    // fires, so at most one fetch is ever in flight and no stale result can
    // land over a newer one.
    fn begin_loading(&self, from: impl FnOnce(&LoadState) -> bool) -> bool {
        let entered = self.tx.send_if_modified(|state| {
            if from(state) {
                *state = LoadState::Loading;
                true
            } else {
                false
            }
        });
        if entered {
            self.spawn_fetch();
        }
        entered
    }

    fn spawn_fetch(&self) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        utils::spawn_async(async move {
            let next = match store.query_all().await {
                Ok(rows) => {
                    let contacts = collate(rows);
                    log::debug!("loaded {} contacts", contacts.len());
                    LoadState::Loaded(contacts)
                }
                Err(err) => {
                    log::warn!("contact fetch failed: {err}");
                    LoadState::Error(format!("{LOAD_ERROR_PREFIX}{err}"))
                }
            };
            // There is no cancellation: the one in-flight fetch runs to the
            // end and its result is applied even with every observer gone.
            tx.send_replace(next);
        });
    }
}

fn awaiting(state: &LoadState) -> bool {
    matches!(state, LoadState::AwaitingPermission)
}

// The directory keeps one row per phone number, so an id can repeat; keep
// the first row per id in display-name order.
fn collate(mut rows: Vec<ContactRow>) -> Vec<Contact> {
    rows.sort_by(|a, b| a.name().cmp(b.name()));
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert(row.id.clone()))
        .map(Contact::from)
        .collect()
}
