use crate::env_variable_utils::get_app_name;
use crate::router::Route;
use crate::theme::{Theme, ThemeContext};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub children: Children,
    pub title: String,
}

#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let app_name = use_memo((), |_| get_app_name());
    let theme_ctx = use_context::<ThemeContext>();

    {
        let title = format!("{} | {}", props.title, app_name);
        use_effect_with(title, |title| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(title);
            }
        });
    }

    let theme_toggle = match theme_ctx {
        Some(ctx) => {
            let label = match ctx.theme {
                Theme::Light => "🌙",
                Theme::Dark => "☀️",
            };
            let toggle = ctx.toggle.reform(|_: MouseEvent| ());
            html! {
                <button
                    onclick={toggle}
                    class="px-3 py-2 rounded border border-gray-300 dark:border-gray-700"
                >
                    { label }
                </button>
            }
        }
        None => html! {},
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-950 p-4">
            <div class="max-w-6xl mx-auto">
                <div class="flex justify-between items-center mb-6">
                    <h1 class="text-3xl font-bold text-gray-800 dark:text-white">
                        {&props.title}
                    </h1>
                    <div class="flex gap-4 items-center">
                        <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                            {"Videos"}
                        </Link<Route>>
                        <Link<Route> to={Route::Admin} classes="text-blue-600 hover:underline">
                            {"Admin"}
                        </Link<Route>>
                        { theme_toggle }
                    </div>
                </div>
                <div class="grid grid-cols-12 gap-4 md:gap-6">
                    <div class="col-span-12">
                        { for props.children.iter() }
                    </div>
                </div>
            </div>
        </div>
    }
}
