use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::pagination::Pagination;

/// Previous/next buttons, one button per page and a range summary.
///
/// Renders nothing when everything fits on one page.
#[component]
pub fn PaginationControls(pagination: Pagination, page: Signal<u32>) -> Element {
    if !pagination.shows_controls() {
        return rsx! {};
    }

    let current = pagination.page();

    rsx! {
        nav {
            class: "pagination",
            "aria-label": "Pagination",
            small {
                class: "pagination-summary",
                "{pagination.summary()}"
            }
            div {
                role: "group",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    disabled: !pagination.has_previous(),
                    on_click: move |_| page.set(current.saturating_sub(1).max(1)),
                    "Previous"
                }
                for number in pagination.page_numbers() {
                    Button {
                        key: "{number}",
                        button_type: page_button_type(number == current),
                        outline: number != current,
                        current: number == current,
                        on_click: move |_| page.set(number),
                        "{number}"
                    }
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    disabled: !pagination.has_next(),
                    on_click: move |_| page.set(current.saturating_add(1)),
                    "Next"
                }
            }
        }
    }
}

fn page_button_type(is_current: bool) -> ButtonType {
    if is_current {
        ButtonType::Primary
    } else {
        ButtonType::Secondary
    }
}
