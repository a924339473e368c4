//! The panel's operations against the video store.
//!
//! Each operation reports progress through `dispatch` and talks to the user
//! through a [`Prompter`]. Failures are shown to the user here; the returned
//! error is for logging only.

use crate::catalog::api::VideoStore;
use crate::catalog::prompt::Prompter;
use crate::catalog::state::{CatalogAction, InFlight, InFlightGuard, Operation};
use crate::config::PanelOptions;
use crate::error::CatalogError;
use crate::messages;
use crate::models::VideoEntry;
use crate::utils::{normalize_url, placeholder_id};
use std::future::Future;

fn claim(in_flight: &InFlight, op: Operation) -> Result<InFlightGuard, CatalogError> {
    in_flight.begin(op.clone()).ok_or_else(|| {
        log::debug!("Ignoring {op:?}, a request is already outstanding");
        CatalogError::InFlight(op)
    })
}

/// Claims a mutation. Mutations wait for an outstanding load so its list
/// cannot overwrite their result.
fn claim_mutation(in_flight: &InFlight, op: Operation) -> Result<InFlightGuard, CatalogError> {
    if in_flight.contains(&Operation::Load) {
        log::debug!("Ignoring {op:?} while the list is loading");
        return Err(CatalogError::InFlight(Operation::Load));
    }
    claim(in_flight, op)
}

async fn tracked<D, F, T>(dispatch: &D, guard: &InFlightGuard, request: F) -> T
where
    D: Fn(CatalogAction),
    F: Future<Output = T>,
{
    dispatch(CatalogAction::Started(guard.operation().clone()));
    let outcome = request.await;
    dispatch(CatalogAction::Finished(guard.operation().clone()));
    outcome
}

/// Replaces the local list with the store's. Runs once on mount.
pub async fn load_all<S, D>(store: &S, in_flight: &InFlight, dispatch: &D) -> Result<(), CatalogError>
where
    S: VideoStore,
    D: Fn(CatalogAction),
{
    // A list fetched while a mutation is outstanding may predate it.
    if let Some(op) = in_flight.outstanding_mutation() {
        log::debug!("Not loading while {op:?} is outstanding");
        return Err(CatalogError::InFlight(op));
    }
    let _guard = claim(in_flight, Operation::Load)?;
    dispatch(CatalogAction::LoadStarted);

    match store.list_videos().await {
        Ok(videos) => {
            log::info!("Loaded {} videos", videos.len());
            dispatch(CatalogAction::Loaded(videos));
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to load videos: {e}");
            dispatch(CatalogAction::LoadFailed(messages::LOAD_FAILED.to_string()));
            Err(e.into())
        }
    }
}

/// Re-fetches the list on demand.
pub async fn reload<S, D>(store: &S, in_flight: &InFlight, dispatch: &D) -> Result<(), CatalogError>
where
    S: VideoStore,
    D: Fn(CatalogAction),
{
    log::debug!("Reloading video list");
    load_all(store, in_flight, dispatch).await
}

pub async fn add_entry<S, P, D>(
    store: &S,
    prompter: &P,
    in_flight: &InFlight,
    options: &PanelOptions,
    input: &str,
    dispatch: &D,
) -> Result<(), CatalogError>
where
    S: VideoStore,
    P: Prompter,
    D: Fn(CatalogAction),
{
    if options.read_only {
        return Err(CatalogError::ReadOnly);
    }
    let Some(url) = normalize_url(input) else {
        prompter.alert(messages::URL_REQUIRED);
        return Err(CatalogError::EmptyUrl);
    };
    let guard = claim_mutation(in_flight, Operation::Add)?;

    match tracked(dispatch, &guard, store.add_video(url)).await {
        Ok(assigned) => {
            // Placeholder ids are replaced by the store's on the next load.
            let id = assigned.unwrap_or_else(placeholder_id);
            log::info!("Added video {url} as {id}");
            dispatch(CatalogAction::Added(VideoEntry::new(id, url)));
            if options.announce_success {
                prompter.alert(messages::ADD_SUCCEEDED);
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to add video {url}: {e}");
            prompter.alert(&e.add_failure_message());
            Err(e.into())
        }
    }
}

/// Deletes by `url`, the only key the store accepts. Every local entry with
/// that url goes, matching what the store removes.
pub async fn delete_entry<S, P, D>(
    store: &S,
    prompter: &P,
    in_flight: &InFlight,
    options: &PanelOptions,
    url: &str,
    dispatch: &D,
) -> Result<(), CatalogError>
where
    S: VideoStore,
    P: Prompter,
    D: Fn(CatalogAction),
{
    if options.read_only {
        return Err(CatalogError::ReadOnly);
    }
    let guard = claim_mutation(in_flight, Operation::Delete(url.to_string()))?;
    if options.confirm_before_delete && !prompter.confirm(messages::CONFIRM_DELETE) {
        return Err(CatalogError::Declined);
    }

    match tracked(dispatch, &guard, store.delete_video(url)).await {
        Ok(()) => {
            log::info!("Deleted video {url}");
            dispatch(CatalogAction::RemovedUrl(url.to_string()));
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete video {url}: {e}");
            prompter.alert(messages::DELETE_FAILED);
            Err(e.into())
        }
    }
}

pub async fn delete_all<S, P, D>(
    store: &S,
    prompter: &P,
    in_flight: &InFlight,
    options: &PanelOptions,
    dispatch: &D,
) -> Result<(), CatalogError>
where
    S: VideoStore,
    P: Prompter,
    D: Fn(CatalogAction),
{
    if options.read_only {
        return Err(CatalogError::ReadOnly);
    }
    let guard = claim_mutation(in_flight, Operation::DeleteAll)?;
    if options.confirm_before_delete && !prompter.confirm(messages::CONFIRM_DELETE_ALL) {
        return Err(CatalogError::Declined);
    }

    match tracked(dispatch, &guard, store.delete_all_videos()).await {
        Ok(()) => {
            log::info!("Deleted all videos");
            dispatch(CatalogAction::Cleared);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete all videos: {e}");
            prompter.alert(messages::DELETE_ALL_FAILED);
            Err(e.into())
        }
    }
}
