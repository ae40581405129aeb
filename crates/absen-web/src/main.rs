//! Absensi Portal Web Frontend
//!
//! A Yew-based web application for looking up mentee attendance and running
//! the admin dashboard.

use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod components;
mod config;
mod pages;
mod session;
mod utils;

use api::ApiClient;
use components::SessionGuard;
use config::AppConfig;
use pages::{AbsenPage, Dashboard, HomePage, LoginPage};
use session::SessionProvider;

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[at("/absen")]
    Absen,
    #[at("/admin")]
    Admin,
    #[at("/admin/login")]
    Login,
    #[at("/admin/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Absen => html! { <AbsenPage /> },
        Route::Admin => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! {
            <SessionGuard>
                <Dashboard />
            </SessionGuard>
        },
        Route::NotFound => html! {
            <div class="page-error">
                <h1>{ "404 - Halaman tidak ditemukan" }</h1>
                <Link<Route> to={Route::Home} classes="btn-link">{ "← Kembali ke Portal Absensi" }</Link<Route>>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    api: ApiClient,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <SessionProvider api={props.api.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionProvider>
    }
}

fn main() {
    let config = AppConfig::load();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));

    let api = ApiClient::new(&config.api_base_url);
    yew::Renderer::<App>::with_props(AppProps { api }).render();
}
