//=============================================================================
// File: src/screens/wash_history.rs
//=============================================================================
use api::SubjectId;
use api::WashRecord;
use dioxus::prelude::*;

use crate::components::action_link::ActionLink;
use crate::components::empty_state::EmptyState;
use crate::components::pagination_controls::PaginationControls;
use crate::components::pico::Card;
use crate::formatting;
use crate::formatting::PLACEHOLDER;
use crate::history_state::HistoryView;
use crate::hooks::use_wash_history::use_wash_history;
use crate::Screen;

const WASHES_EMPTY_SVG: &str = include_str!("../../assets/svg/washes-empty.svg");

/// One wash: date, time, vehicle and location.
#[component]
fn WashRow(record: WashRecord) -> Element {
    let active_screen = use_context::<Signal<Screen>>();

    let date = formatting::local_date(&record.wash_date);
    let time = formatting::local_time(&record.wash_date);
    let exact = record.wash_date.to_rfc3339();
    let (plate, vehicle_detail) = formatting::vehicle_summary(record.vehicle.as_ref());

    rsx! {
        tr {
            td {
                title: "{exact}",
                "{date}"
            }
            td { "{time}" }
            td {
                strong { "{plate}" }
                if let Some(detail) = vehicle_detail {
                    br {}
                    small { "{detail}" }
                }
            }
            td {
                match record.location.as_ref() {
                    Some(location) => rsx! {
                        ActionLink {
                            state: active_screen,
                            href: location.detail_path(),
                            to: Screen::Location(location.clone()),
                            "{location.name}"
                        }
                    },
                    None => rsx! {
                        span { class: "placeholder", "{PLACEHOLDER}" }
                    },
                }
            }
        }
    }
}

#[component]
fn WashTable(records: Vec<WashRecord>) -> Element {
    rsx! {
        div {
            class: "table-scroll",
            table {
                thead { tr {
                    th { "Date" }
                    th { "Time" }
                    th { "Vehicle" }
                    th { "Location" }
                }}
                tbody {
                    for record in records.iter() {
                        WashRow {
                            key: "{record.id}",
                            record: record.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn WashHistoryScreen(subject: Signal<Option<SubjectId>>) -> Element {
    let mut history = use_wash_history(subject);
    let pagination = history.pagination();
    let page = history.page();
    let state_signal = history.state();
    let state = state_signal.read();

    let Some(client) = subject() else {
        return rsx! {
            Card {
                h3 { "Wash History" }
                EmptyState {
                    title: "No client selected".to_string(),
                    description: Some("Look up a client to see their wash history.".to_string()),
                }
            }
        };
    };

    rsx! {
        match state.view() {
            HistoryView::Loading => rsx! {
                Card {
                    h3 { "Wash History" }
                    p { "Loading..." }
                    progress {}
                }
            },
            HistoryView::Error { message, records } => rsx! {
                Card {
                    h3 { "Wash History" }
                    p { class: "error", "{message}" }
                    button { onclick: move |_| history.retry(), "Retry" }
                    if !records.is_empty() {
                        WashTable { records: records.to_vec() }
                        PaginationControls { pagination, page }
                    }
                }
            },
            HistoryView::Empty => rsx! {
                Card {
                    h3 { "Wash History" }
                    EmptyState {
                        title: "No washes yet".to_string(),
                        description: Some(format!("Client {client} has no recorded washes.")),
                        icon: rsx! {
                            span {
                                dangerous_inner_html: WASHES_EMPTY_SVG,
                                style: "width: 100%; height: 100%; display: flex; align-items: center; justify-content: center;",
                            }
                        }
                    }
                }
            },
            HistoryView::Populated { records, refreshing } => rsx! {
                Card {
                    h3 {
                        "Wash History "
                        small {
                            class: "muted",
                            "({pagination.total_items()})"
                        }
                    }
                    if refreshing {
                        progress {}
                    }
                    WashTable { records: records.to_vec() }
                    PaginationControls { pagination, page }
                }
            },
        }
    }
}
