use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod hooks;
mod host;
mod state {
    pub mod attention;
    pub mod menu;
    pub mod outside;
    pub mod scroll;
    pub mod theme;
}
mod components {
    pub mod background;
    pub mod button;
    pub mod hero;
    pub mod navbar;
    pub mod profile_sidebar;
}
mod pages {
    pub mod home;
}

use host::browser::{apply_theme_to_document, LocalStorage};
use host::Host;
use pages::home::Home;
use state::theme::ThemeStore;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let host = use_memo(|_| Host::browser(), ());
    let theme = use_memo(
        |_| {
            let store = ThemeStore::open(Rc::new(LocalStorage));
            apply_theme_to_document(store.preference());
            store
        },
        (),
    );

    use_effect_with_deps(
        move |store: &ThemeStore| {
            let subscription = store.subscribe(Callback::from(apply_theme_to_document));
            move || drop(subscription)
        },
        (*theme).clone(),
    );

    html! {
        <ContextProvider<Host> context={(*host).clone()}>
            <ContextProvider<ThemeStore> context={(*theme).clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<ThemeStore>>
        </ContextProvider<Host>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
