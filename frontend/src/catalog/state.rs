use crate::config::PanelOptions;
use crate::models::VideoEntry;
use crate::utils::{dedup_by_id, unique_id};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use yew::prelude::*;

/// A request the panel may have outstanding against the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Load,
    Add,
    Delete(String),
    DeleteAll,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub entries: Vec<VideoEntry>,
    pub loading: bool,
    pub error_message: Option<String>,
    pub add_dialog_open: bool,
    pub pending_url: String,
    pub pending: HashSet<Operation>,
}

impl CatalogState {
    /// State before the first load has answered.
    pub fn initial() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn is_pending(&self, op: &Operation) -> bool {
        self.pending.contains(op)
    }

    /// Mutations wait until the list is on screen.
    pub fn can_mutate(&self) -> bool {
        !self.loading && self.error_message.is_none()
    }
}

/// What the panel shows below its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    Loading,
    Error(String),
    Table { with_delete: bool },
}

impl CatalogState {
    pub fn body(&self, options: &PanelOptions) -> PanelBody {
        if self.loading {
            PanelBody::Loading
        } else if let Some(message) = &self.error_message {
            PanelBody::Error(message.clone())
        } else {
            PanelBody::Table {
                with_delete: !options.read_only,
            }
        }
    }

    /// Save in the add dialog stays disabled while this holds.
    pub fn saving(&self) -> bool {
        self.is_pending(&Operation::Add) || !self.can_mutate()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    LoadStarted,
    Loaded(Vec<VideoEntry>),
    LoadFailed(String),
    OpenDialog,
    CloseDialog,
    SetPendingUrl(String),
    Started(Operation),
    Finished(Operation),
    Added(VideoEntry),
    RemovedUrl(String),
    Cleared,
}

impl Reducible for CatalogState {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CatalogAction::LoadStarted => {
                next.loading = true;
                next.error_message = None;
            }
            CatalogAction::Loaded(entries) => {
                next.entries = dedup_by_id(entries);
                next.loading = false;
            }
            CatalogAction::LoadFailed(message) => {
                next.entries.clear();
                next.error_message = Some(message);
                next.loading = false;
            }
            CatalogAction::OpenDialog => next.add_dialog_open = true,
            CatalogAction::CloseDialog => {
                next.add_dialog_open = false;
                next.pending_url.clear();
            }
            CatalogAction::SetPendingUrl(url) => next.pending_url = url,
            CatalogAction::Started(op) => {
                next.pending.insert(op);
            }
            CatalogAction::Finished(op) => {
                next.pending.remove(&op);
            }
            CatalogAction::Added(entry) => {
                let id = unique_id(&entry.id, &next.entries);
                next.entries.push(VideoEntry { id, ..entry });
                next.add_dialog_open = false;
                next.pending_url.clear();
            }
            CatalogAction::RemovedUrl(url) => next.entries.retain(|entry| entry.url != url),
            CatalogAction::Cleared => next.entries.clear(),
        }
        Rc::new(next)
    }
}

/// Outstanding requests, checked before a new one is issued.
///
/// Clones share the same set. Render snapshots of [`CatalogState`] can be a
/// frame behind, so this is the authority on what may start.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Rc<RefCell<HashSet<Operation>>>);

impl InFlight {
    /// Claims `op`, or returns `None` if it is already outstanding.
    pub fn begin(&self, op: Operation) -> Option<InFlightGuard> {
        if !self.0.borrow_mut().insert(op.clone()) {
            return None;
        }
        Some(InFlightGuard {
            set: Rc::clone(&self.0),
            op,
        })
    }

    pub fn contains(&self, op: &Operation) -> bool {
        self.0.borrow().contains(op)
    }

    /// Any outstanding request other than a load.
    pub fn outstanding_mutation(&self) -> Option<Operation> {
        self.0
            .borrow()
            .iter()
            .find(|op| **op != Operation::Load)
            .cloned()
    }
}

/// Releases its operation when dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    set: Rc<RefCell<HashSet<Operation>>>,
    op: Operation,
}

impl InFlightGuard {
    pub fn operation(&self) -> &Operation {
        &self.op
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.set.borrow_mut().remove(&self.op);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: CatalogState, actions: Vec<CatalogAction>) -> CatalogState {
        let state = actions
            .into_iter()
            .fold(Rc::new(state), |state, action| state.reduce(action));
        (*state).clone()
    }

    fn entry(id: &str, url: &str) -> VideoEntry {
        VideoEntry::new(id, url)
    }

    #[test]
    fn load_failure_empties_the_list() {
        let state = apply(
            CatalogState::initial(),
            vec![
                CatalogAction::Loaded(vec![entry("1", "a")]),
                CatalogAction::LoadStarted,
                CatalogAction::LoadFailed("boom".to_string()),
            ],
        );
        assert!(state.entries.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error_message.as_deref(), Some("boom"));
        assert!(!state.can_mutate());
    }

    #[test]
    fn load_started_clears_previous_error() {
        let state = apply(
            CatalogState::initial(),
            vec![
                CatalogAction::LoadFailed("boom".to_string()),
                CatalogAction::LoadStarted,
            ],
        );
        assert!(state.loading);
        assert_eq!(state.error_message, None);
    }

    #[test]
    fn loaded_list_keeps_ids_unique() {
        let state = apply(
            CatalogState::initial(),
            vec![CatalogAction::Loaded(vec![
                entry("1", "a"),
                entry("1", "b"),
                entry("2", "c"),
            ])],
        );
        let ids: Vec<&str> = state.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert!(state.can_mutate());
    }

    #[test]
    fn added_entry_closes_dialog_and_avoids_id_clash() {
        let state = apply(
            CatalogState::default(),
            vec![
                CatalogAction::Loaded(vec![entry("1700000000000", "a")]),
                CatalogAction::OpenDialog,
                CatalogAction::SetPendingUrl("b".to_string()),
                CatalogAction::Added(entry("1700000000000", "b")),
            ],
        );
        assert_eq!(state.entries.len(), 2);
        assert_eq!(state.entries[1].id, "1700000000000-1");
        assert_eq!(state.entries[1].url, "b");
        assert!(!state.add_dialog_open);
        assert!(state.pending_url.is_empty());
    }

    #[test]
    fn removing_by_url_drops_every_match() {
        let state = apply(
            CatalogState::default(),
            vec![
                CatalogAction::Loaded(vec![entry("1", "a"), entry("2", "b"), entry("3", "a")]),
                CatalogAction::RemovedUrl("a".to_string()),
            ],
        );
        assert_eq!(state.entries, vec![entry("2", "b")]);
    }

    #[test]
    fn cancel_clears_input() {
        let state = apply(
            CatalogState::default(),
            vec![
                CatalogAction::OpenDialog,
                CatalogAction::SetPendingUrl("half typed".to_string()),
                CatalogAction::CloseDialog,
            ],
        );
        assert!(!state.add_dialog_open);
        assert!(state.pending_url.is_empty());
    }

    #[test]
    fn pending_operations_are_tracked() {
        let state = apply(
            CatalogState::default(),
            vec![
                CatalogAction::Started(Operation::Add),
                CatalogAction::Started(Operation::Delete("a".to_string())),
                CatalogAction::Finished(Operation::Add),
            ],
        );
        assert!(!state.is_pending(&Operation::Add));
        assert!(state.is_pending(&Operation::Delete("a".to_string())));
    }

    #[test]
    fn body_shows_loading_before_anything_else() {
        let mut state = CatalogState::initial();
        state.error_message = Some("stale".to_string());
        for options in [PanelOptions::viewer(), PanelOptions::manager()] {
            assert_eq!(state.body(&options), PanelBody::Loading);
        }
    }

    #[test]
    fn body_shows_only_the_error_after_failed_load() {
        let state = apply(
            CatalogState::initial(),
            vec![CatalogAction::LoadFailed("boom".to_string())],
        );
        assert_eq!(
            state.body(&PanelOptions::manager()),
            PanelBody::Error("boom".to_string())
        );
    }

    #[test]
    fn body_table_has_delete_column_only_for_manager() {
        let state = apply(
            CatalogState::initial(),
            vec![CatalogAction::Loaded(vec![entry("1", "a")])],
        );
        assert_eq!(
            state.body(&PanelOptions::viewer()),
            PanelBody::Table { with_delete: false }
        );
        assert_eq!(
            state.body(&PanelOptions::manager()),
            PanelBody::Table { with_delete: true }
        );
    }

    #[test]
    fn save_is_disabled_while_loading_or_adding() {
        let loaded = apply(CatalogState::initial(), vec![CatalogAction::Loaded(vec![])]);
        assert!(!loaded.saving());

        let reloading = apply(
            loaded.clone(),
            vec![CatalogAction::OpenDialog, CatalogAction::LoadStarted],
        );
        assert!(reloading.add_dialog_open);
        assert!(reloading.saving());

        let adding = apply(loaded, vec![CatalogAction::Started(Operation::Add)]);
        assert!(adding.saving());
    }

    #[test]
    fn in_flight_guard_blocks_duplicates_until_dropped() {
        let in_flight = InFlight::default();
        let guard = in_flight.begin(Operation::DeleteAll).unwrap();
        assert_eq!(guard.operation(), &Operation::DeleteAll);
        assert!(in_flight.begin(Operation::DeleteAll).is_none());
        assert!(in_flight.begin(Operation::Add).is_some());

        assert_eq!(in_flight.outstanding_mutation(), Some(Operation::DeleteAll));
        drop(guard);
        assert!(!in_flight.contains(&Operation::DeleteAll));
        assert_eq!(in_flight.outstanding_mutation(), None);
        assert!(in_flight.begin(Operation::DeleteAll).is_some());
    }
}
