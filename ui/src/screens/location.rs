use api::Location;
use dioxus::prelude::*;

use crate::components::action_link::ActionLink;
use crate::components::pico::Card;
use crate::Screen;

/// Details of a wash location, reached from the history table.
#[component]
pub fn LocationScreen(location: Location) -> Element {
    let active_screen = use_context::<Signal<Screen>>();

    rsx! {
        Card {
            h3 { "{location.name}" }
            p {
                "{location.address}"
                br {}
                "{location.city}, {location.state}"
            }
            small {
                class: "muted",
                "{location.detail_path()}"
            }
            footer {
                ActionLink {
                    state: active_screen,
                    to: Screen::WashHistory,
                    "← Back to wash history"
                }
            }
        }
    }
}
