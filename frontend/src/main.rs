use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod loader;
mod supabase;
mod models {
    pub mod courses;
    pub mod hero;
    pub mod learning_process;
    pub mod navbar;
    pub mod reviews;
    pub mod statistics;
    pub mod video_samples;
    pub mod vision;
    pub mod why_us;
}
mod components {
    pub mod carousel;
    pub mod icons;
    pub mod nav;
    pub mod statistics;
}
mod sections {
    pub mod courses;
    pub mod hero;
    pub mod learning_process;
    pub mod reviews;
    pub mod video_samples;
    pub mod vision;
    pub mod why_us;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::nav::Navbar;
use pages::{
    home::Home,
    not_found::NotFound,
};


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
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <Switch<Route> render={switch} />
            <style>
                {r#"
                *, *::before, *::after { box-sizing: border-box; }
                body {
                    margin: 0;
                    font-family: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
                    color: #111827;
                    background: #fff;
                }
                img { max-width: 100%; }
                .icon { display: inline-block; flex-shrink: 0; vertical-align: middle; }
                .icon-xs { width: 0.875rem; height: 0.875rem; }
                .icon-sm { width: 1rem; height: 1rem; }
                .icon-md { width: 1.5rem; height: 1.5rem; }
                .icon-lg { width: 2.5rem; height: 2.5rem; }
                @keyframes spin { to { transform: rotate(360deg); } }
                @keyframes pulse { 50% { opacity: 0.5; } }
                "#}
            </style>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
