use crate::messages;
use crate::models::VideoEntry;
use crate::theme::use_theme;
use crate::utils::numbered_rows;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const VIDEO_ICON_SRC: &str = "/images/logo/icon_tiktok.png";

#[function_component(TrashIcon)]
fn trash_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M3 6h18" />
            <path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6" />
            <path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2" />
        </svg>
    }
}

#[function_component(PlusIcon)]
fn plus_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M5 12h14" />
            <path d="M12 5v14" />
        </svg>
    }
}

#[function_component(CloseIcon)]
fn close_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <p class="text-red-500">{ msg }</p>
        }
    } else {
        html! {}
    }
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator() -> Html {
    html! {
        <p class="text-gray-500">{ messages::LOADING }</p>
    }
}

#[derive(Properties, PartialEq)]
pub struct PanelHeaderProps {
    pub count: usize,
    pub read_only: bool,
    /// Disables reload while any request is outstanding.
    pub reload_disabled: bool,
    /// Disables add and delete-all.
    pub busy: bool,
    pub clearing: bool,
    pub on_add: Callback<MouseEvent>,
    pub on_delete_all: Callback<MouseEvent>,
    pub on_reload: Callback<MouseEvent>,
}

#[function_component(PanelHeader)]
pub fn panel_header(props: &PanelHeaderProps) -> Html {
    html! {
        <div class="flex flex-col gap-2 mb-4 sm:flex-row sm:items-center sm:justify-between">
            <h3 class="text-lg font-semibold text-gray-800 dark:text-white/90">
                { messages::panel_title(props.count) }
            </h3>

            <div class="flex gap-2 justify-end">
                <button
                    onclick={props.on_reload.clone()}
                    disabled={props.reload_disabled}
                    class="px-3 py-2 rounded border border-gray-300 text-gray-700 hover:bg-gray-100 dark:text-gray-200 dark:border-gray-700 dark:hover:bg-gray-800 disabled:opacity-50"
                >
                    { messages::RELOAD }
                </button>
                {
                    if props.read_only {
                        html! {}
                    } else {
                        html! {
                            <>
                                <button
                                    onclick={props.on_add.clone()}
                                    disabled={props.busy}
                                    class="p-2 rounded bg-green-500 hover:bg-green-600 text-white transition disabled:opacity-50"
                                >
                                    <PlusIcon />
                                </button>
                                <button
                                    onclick={props.on_delete_all.clone()}
                                    disabled={props.busy || props.clearing}
                                    class="p-2 rounded bg-red-500 hover:bg-red-600 text-white transition disabled:opacity-50"
                                >
                                    <TrashIcon />
                                </button>
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoTableProps {
    pub entries: Vec<VideoEntry>,
    pub newest_first: bool,
    /// `None` renders the table without a delete column.
    #[prop_or_default]
    pub on_delete: Option<Callback<String>>,
    /// Urls with an outstanding delete request.
    #[prop_or_default]
    pub deleting: Vec<String>,
}

#[function_component(VideoTable)]
pub fn video_table(props: &VideoTableProps) -> Html {
    let theme = use_theme();
    let with_delete = props.on_delete.is_some();
    let header_cell = "py-3 text-center text-gray-500";

    html! {
        <div class="max-w-full overflow-x-auto">
            <table class="min-w-full">
                <thead class="border-gray-100 dark:border-gray-800 border-y">
                    <tr>
                        <th class={classes!(header_cell, "w-1/10")}>{ messages::COLUMN_SEQUENCE }</th>
                        <th class={classes!(header_cell, "w-4/10")}>{ messages::COLUMN_ICON }</th>
                        <th class={classes!(header_cell, "w-4/10")}>{ messages::COLUMN_LINK }</th>
                        {
                            if with_delete {
                                html! { <th class={classes!(header_cell, "w-1/10")}>{ messages::COLUMN_DELETE }</th> }
                            } else {
                                html! {}
                            }
                        }
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100 dark:divide-gray-800">
                    {
                        numbered_rows(&props.entries, props.newest_first).into_iter().map(|(number, video)| {
                            html! {
                                <tr key={video.id.clone()}>
                                    <td class={classes!("py-3", "text-center", "font-medium", "w-1/10", theme.sequence_text_class())}>
                                        { number.to_string() }
                                    </td>
                                    <td class="py-5 w-4/10 text-center">
                                        <img
                                            src={VIDEO_ICON_SRC}
                                            alt="Thumbnail"
                                            class="w-8 h-10 object-fill rounded inline-block"
                                        />
                                    </td>
                                    <td class="py-3 text-center w-4/10">
                                        <a
                                            href={video.url.clone()}
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-blue-500 underline"
                                        >
                                            { messages::WATCH_VIDEO }
                                        </a>
                                    </td>
                                    {
                                        if let Some(on_delete) = &props.on_delete {
                                            let url = video.url.clone();
                                            let on_delete = on_delete.clone();
                                            html! {
                                                <td class="py-3 text-center w-1/10">
                                                    <button
                                                        onclick={Callback::from(move |_| on_delete.emit(url.clone()))}
                                                        disabled={props.deleting.contains(&video.url)}
                                                        class="text-red-500 hover:text-red-700 transition disabled:opacity-50"
                                                    >
                                                        <TrashIcon />
                                                    </button>
                                                </td>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </tr>
                            }
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AddVideoDialogProps {
    pub pending_url: String,
    pub saving: bool,
    pub on_input: Callback<String>,
    pub on_cancel: Callback<()>,
    pub on_save: Callback<()>,
}

#[function_component(AddVideoDialog)]
pub fn add_video_dialog(props: &AddVideoDialogProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_input.emit(input_value);
        })
    };

    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    let on_submit = {
        let on_save = props.on_save.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_save.emit(());
        })
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center" style="background-color: rgba(0, 0, 0, 0.8)">
            <form onsubmit={on_submit} class="bg-white dark:bg-gray-900 p-10 rounded-lg shadow-lg w-120">
                <div class="flex justify-between mb-3">
                    <h2 class="text-lg font-semibold text-gray-800 dark:text-white">{ messages::DIALOG_TITLE }</h2>
                    <button type="button" onclick={on_cancel.clone()} class="text-gray-500 hover:text-gray-700">
                        <CloseIcon />
                    </button>
                </div>
                <input
                    type="text"
                    class="w-full p-2 border rounded"
                    placeholder={messages::DIALOG_PLACEHOLDER}
                    value={props.pending_url.clone()}
                    oninput={on_input}
                    disabled={props.saving}
                />
                <div class="mt-4 flex justify-end gap-2">
                    <button type="button" onclick={on_cancel} class="px-4 py-2 bg-gray-300 rounded">
                        { messages::CANCEL }
                    </button>
                    <button
                        type="submit"
                        disabled={props.saving}
                        class="px-4 py-2 bg-blue-500 text-white rounded disabled:opacity-50"
                    >
                        { messages::SAVE }
                    </button>
                </div>
            </form>
        </div>
    }
}
