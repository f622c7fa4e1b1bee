use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus_logger::init(level).expect("failed to init logger");
    dioxus::launch(ui::App);
}
