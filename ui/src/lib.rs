// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
mod components;
pub mod formatting;
pub mod history_state;
pub mod hooks;
pub mod pagination;
mod screens;

use api::ApiConfig;
use api::Location;
use api::SubjectId;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use screens::location::LocationScreen;
use screens::wash_history::WashHistoryScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Screen {
    #[default]
    WashHistory,
    Location(Location),
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::WashHistory => "Wash History",
            Screen::Location(_) => "Location",
        }
    }
}

/// Client lookup form.  Submitting a valid id selects that client.
#[component]
fn ClientLookup(subject: Signal<Option<SubjectId>>) -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut lookup_input = use_signal(|| {
        let initial = *subject.peek();
        initial.map(|s| s.to_string()).unwrap_or_default()
    });
    let mut lookup_error = use_signal(|| None::<String>);
    let invalid = if lookup_error.read().is_some() { "true" } else { "false" };

    rsx! {
        form {
            class: "client-lookup",
            onsubmit: move |evt| {
                evt.prevent_default();

                match SubjectId::parse_optional(&lookup_input.read()) {
                    Ok(selected) => {
                        lookup_error.set(None);
                        if *subject.peek() != selected {
                            subject.set(selected);
                        }
                        active_screen.set(Screen::WashHistory);
                    }
                    Err(e) => {
                        dioxus_logger::tracing::warn!("Invalid client id input: {}", e);
                        lookup_error.set(Some("Client ID must be a number.".to_string()));
                    }
                }
            },
            div {
                role: "group",
                input {
                    r#type: "text",
                    inputmode: "numeric",
                    placeholder: "Client ID",
                    value: "{lookup_input}",
                    "aria-invalid": invalid,
                    oninput: move |event| lookup_input.set(event.value()),
                }
                button {
                    r#type: "submit",
                    "Show history"
                }
            }
            if let Some(msg) = lookup_error() {
                small { "{msg}" }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let layout_css = r#"
    html, body {
        height: 100%;
        margin: 0;
    }

    .app-main-container header nav {
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .client-lookup {
        margin-bottom: 0;
        min-width: 18rem;
    }

    .table-scroll {
        max-height: 65vh;
        overflow-y: auto;
    }

    .table-scroll th {
        position: sticky;
        top: 0;
        background: var(--pico-card-background-color);
        z-index: 10;
    }

    .placeholder, .muted {
        color: var(--pico-muted-color);
    }

    .error {
        color: var(--pico-del-color);
    }

    .pagination {
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
        margin-top: 1rem;
    }

    .pagination [role="group"] {
        width: auto;
        margin-bottom: 0;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{layout_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // read once; the env does not change while the app runs.
    let app_state = use_hook(|| {
        let config = ApiConfig::from_env();
        dioxus_logger::tracing::info!("wash history api: {}", config.base_url());
        AppState::new(config)
    });

    rsx! {
        LoadedApp {
            app_state,
        }
    }
}

/// This component holds the main app logic.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    let initial_subject = app_state.config.default_subject();

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let subject_signal = use_signal(|| initial_subject);
    use_context_provider(|| AppStateMut {
        subject: subject_signal,
    });
    let subject = use_context::<AppStateMut>().subject;

    let active_screen = use_signal(Screen::default);
    use_context_provider(|| active_screen);

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                strong { "{active_screen.read().name()}" }
                            }
                        }
                        ul {
                            li {
                                ClientLookup { subject }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::WashHistory => rsx! {
                            WashHistoryScreen { subject }
                        },
                        Screen::Location(location) => rsx! {
                            LocationScreen {
                                key: "{location.id}",
                                location: location.clone(),
                            }
                        },
                    }
                }
            }
        }
    }
}
