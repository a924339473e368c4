use crate::catalog::panel::VideoCatalogPanel;
use crate::config::PanelOptions;
use crate::layout::DashboardLayout;
use crate::messages;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <DashboardLayout title="Dashboard">
                <VideoCatalogPanel options={PanelOptions::viewer()} />
            </DashboardLayout>
        },
        Route::Admin => html! {
            <DashboardLayout title="Admin">
                <VideoCatalogPanel options={PanelOptions::manager()} />
            </DashboardLayout>
        },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-950">
                <div class="bg-white dark:bg-gray-900 p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 dark:text-white mb-4">{ messages::NOT_FOUND }</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        { messages::BACK_HOME }
                    </Link<Route>>
                </div>
            </div>
        },
    }
}
