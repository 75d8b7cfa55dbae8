mod codec;
mod components;
mod config;
mod csv;
mod export;
mod geo;
mod history;
mod loader;
mod model;
mod state;
mod url_state;
mod util;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
