use log::{info, Level};
use yew::prelude::*;

mod config;
mod components {
    pub mod cta_button;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}
mod sections {
    pub mod hero;
    pub mod problem;
    pub mod solution;
    pub mod features;
    pub mod partner;
    pub mod team;
    pub mod achievements;
    pub mod cta;
    pub mod faq;
    pub mod footer;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
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
