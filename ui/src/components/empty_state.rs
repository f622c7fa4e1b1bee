use dioxus::prelude::*;

const PANEL_STYLE: &str = "
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 2rem;
    text-align: center;
    color: var(--pico-muted-color);
    border: 2px dashed var(--pico-card-border-color);
    border-radius: var(--pico-border-radius);
    margin: 1rem 0;
";

/// 8rem square, scaled down on small screens.
const ICON_STYLE: &str = "
    width: min(8rem, 25vmin);
    height: min(8rem, 25vmin);
    margin-bottom: 1rem;
    color: var(--pico-primary-background);
    opacity: 0.8;
";

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    icon: Option<Element>,
}

/// Placeholder panel for a list with nothing in it.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state",
            style: PANEL_STYLE,

            if let Some(icon) = props.icon {
                div { style: ICON_STYLE, {icon} }
            }

            h4 {
                style: "margin-bottom: 0.5rem;",
                "{props.title}"
            }

            if let Some(desc) = props.description {
                p {
                    style: "max-width: 400px; margin: 0 auto;",
                    "{desc}"
                }
            }
        }
    }
}
