//! Interactive frontend for the GPIB Jemaat Sejahtera Pasar Minggu site:
//! a one-page Yew application with section navigation, reveal-on-scroll
//! animation, a contact form with a simulated delivery path, and outbound
//! link helpers.

use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod actions;
pub mod config;
pub mod outbox;
pub mod utils;

pub mod components {
    pub mod contact_form;
    pub mod header;
    pub mod icon;
    pub mod modal;
    pub mod notification;
    pub mod reveal;
}
pub mod pages {
    pub mod home;
}
pub mod state {
    pub mod form;
    pub mod menu;
    pub mod notice;
    pub mod reveal;
    pub mod scroll;
}

use components::header::Header;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

/// Top-level catch for uncaught errors: logged and forwarded to the
/// tracking sink, never surfaced in the UI.
fn install_error_reporting() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let on_error = Closure::wrap(Box::new(move |e: web_sys::ErrorEvent| {
        log::error!("uncaught error: {}", e.message());
        actions::track_event(
            "javascript_error",
            serde_json::json!({
                "message": e.message(),
                "filename": e.filename(),
                "lineno": e.lineno(),
                "colno": e.colno(),
            }),
        );
    }) as Box<dyn FnMut(web_sys::ErrorEvent)>);
    if window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .is_ok()
    {
        on_error.forget();
    }
}

fn install_load_timing() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let on_load = Closure::wrap(Box::new(move || {
        let elapsed_ms = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        actions::track_event(
            "page_load_complete",
            serde_json::json!({ "load_time_ms": elapsed_ms }),
        );
    }) as Box<dyn FnMut()>);
    if window
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        .is_ok()
    {
        on_load.forget();
    }
}

/// Boots the application: logging, global reporting hooks, then the Yew
/// renderer.
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    install_error_reporting();
    install_load_timing();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
