mod catalog;
mod config;
mod env_variable_utils;
mod error;
mod layout;
mod logging;
mod messages;
mod models;
mod router;
mod theme;
mod utils;

use crate::env_variable_utils::{get_app_name, is_debug_mode, API_BASE_URL};
use crate::router::{switch, Route};
use crate::theme::ThemeProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    logging::init();
    let debug = is_debug_mode();
    logging::set_debug(debug);

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        &*API_BASE_URL,
        debug
    );

    yew::Renderer::<App>::new().render();
}
