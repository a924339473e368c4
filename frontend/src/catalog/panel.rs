use crate::catalog::api::HttpVideoStore;
use crate::catalog::components::{
    AddVideoDialog, ErrorMessage, LoadingIndicator, PanelHeader, VideoTable,
};
use crate::catalog::ops::{add_entry, delete_all, delete_entry, load_all, reload};
use crate::catalog::prompt::BrowserPrompter;
use crate::catalog::state::{CatalogAction, CatalogState, InFlight, Operation, PanelBody};
use crate::config::{ApiConfig, PanelOptions};
use crate::error::CatalogError;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoCatalogPanelProps {
    #[prop_or_default]
    pub options: PanelOptions,
}

fn report(op: &str, result: Result<(), CatalogError>) {
    match result {
        Ok(()) => {}
        Err(e @ (CatalogError::Declined | CatalogError::InFlight(_))) => {
            log::debug!("{op} skipped: {e}")
        }
        Err(e) => log::debug!("{op} failed: {e}"),
    }
}

#[function_component(VideoCatalogPanel)]
pub fn video_catalog_panel(props: &VideoCatalogPanelProps) -> Html {
    let options = props.options;
    let state = use_reducer(CatalogState::initial);
    let in_flight = use_memo((), |_| InFlight::default());
    let store = use_memo((), |_| HttpVideoStore::new(ApiConfig::from_env()));

    let dispatch_fn = {
        let dispatcher = state.dispatcher();
        move |action: CatalogAction| dispatcher.dispatch(action)
    };

    // Load videos on component mount
    {
        let store = (*store).clone();
        let in_flight = (*in_flight).clone();
        let dispatch = dispatch_fn.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                report("load", load_all(&store, &in_flight, &dispatch).await);
            });
            || ()
        });
    }

    let on_reload = {
        let store = store.clone();
        let in_flight = in_flight.clone();
        let dispatch = dispatch_fn.clone();

        Callback::from(move |_: MouseEvent| {
            let store = (*store).clone();
            let in_flight = (*in_flight).clone();
            let dispatch = dispatch.clone();

            wasm_bindgen_futures::spawn_local(async move {
                report("reload", reload(&store, &in_flight, &dispatch).await);
            });
        })
    };

    let on_open_dialog = {
        let dispatch = dispatch_fn.clone();
        Callback::from(move |_: MouseEvent| dispatch(CatalogAction::OpenDialog))
    };

    let on_cancel_dialog = {
        let dispatch = dispatch_fn.clone();
        Callback::from(move |_: ()| dispatch(CatalogAction::CloseDialog))
    };

    let on_url_input = {
        let dispatch = dispatch_fn.clone();
        Callback::from(move |url: String| dispatch(CatalogAction::SetPendingUrl(url)))
    };

    let on_save = {
        let store = store.clone();
        let in_flight = in_flight.clone();
        let dispatch = dispatch_fn.clone();
        let pending_url = state.pending_url.clone();

        Callback::from(move |_: ()| {
            let store = (*store).clone();
            let in_flight = (*in_flight).clone();
            let dispatch = dispatch.clone();
            let url = pending_url.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result =
                    add_entry(&store, &BrowserPrompter, &in_flight, &options, &url, &dispatch)
                        .await;
                report("add", result);
            });
        })
    };

    let on_delete = {
        let store = store.clone();
        let in_flight = in_flight.clone();
        let dispatch = dispatch_fn.clone();

        Callback::from(move |url: String| {
            let store = (*store).clone();
            let in_flight = (*in_flight).clone();
            let dispatch = dispatch.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result =
                    delete_entry(&store, &BrowserPrompter, &in_flight, &options, &url, &dispatch)
                        .await;
                report("delete", result);
            });
        })
    };

    let on_delete_all = {
        let store = store.clone();
        let in_flight = in_flight.clone();
        let dispatch = dispatch_fn.clone();

        Callback::from(move |_: MouseEvent| {
            let store = (*store).clone();
            let in_flight = (*in_flight).clone();
            let dispatch = dispatch.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result =
                    delete_all(&store, &BrowserPrompter, &in_flight, &options, &dispatch).await;
                report("delete all", result);
            });
        })
    };

    let deleting: Vec<String> = state
        .pending
        .iter()
        .filter_map(|op| match op {
            Operation::Delete(url) => Some(url.clone()),
            _ => None,
        })
        .collect();

    html! {
        <div class="overflow-hidden rounded-2xl border border-gray-200 bg-white px-4 pb-3 pt-4 dark:border-gray-800 dark:bg-white/[0.03] sm:px-6">
            <PanelHeader
                count={state.entries.len()}
                read_only={options.read_only}
                reload_disabled={state.loading || !state.pending.is_empty()}
                busy={!state.can_mutate()}
                clearing={state.is_pending(&Operation::DeleteAll)}
                on_add={on_open_dialog}
                on_delete_all={on_delete_all}
                on_reload={on_reload}
            />

            {
                match state.body(&options) {
                    PanelBody::Loading => html! { <LoadingIndicator /> },
                    PanelBody::Error(message) => html! { <ErrorMessage error_message={Some(message)} /> },
                    PanelBody::Table { with_delete } => html! {
                        <VideoTable
                            entries={state.entries.clone()}
                            newest_first={options.newest_first}
                            on_delete={with_delete.then_some(on_delete)}
                            deleting={deleting}
                        />
                    },
                }
            }

            {
                if state.add_dialog_open && !options.read_only {
                    html! {
                        <AddVideoDialog
                            pending_url={state.pending_url.clone()}
                            saving={state.saving()}
                            on_input={on_url_input}
                            on_cancel={on_cancel_dialog}
                            on_save={on_save}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
