use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
pub mod common;
mod components;
pub mod hooks;
mod pages;
mod router;
pub mod settings;

use client::Repositories;
use crate::common::toast::ToastProvider;
pub use router::Route;

#[function_component(App)]
pub fn app() -> Html {
    let repositories = use_memo((), |_| api_client::repositories());

    html! {
        <ContextProvider<Repositories> context={(*repositories).clone()}>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={router::switch} />
                </BrowserRouter>
            </ToastProvider>
        </ContextProvider<Repositories>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    let settings = settings::current();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== RentAdmin Console Starting ===");
    log::debug!("API base URL: {}", settings.api_base_url);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
