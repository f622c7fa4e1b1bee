use dioxus::desktop::Config;
use dioxus::desktop::WindowBuilder;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus_logger::init(level).expect("failed to init logger");

    let window = WindowBuilder::new().with_title("Wash History");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
