use dioxus::prelude::*;

use crate::Screen;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    /// Screen signal to update when the link is followed.
    #[props(optional)]
    pub state: Option<Signal<Screen>>,

    #[props(optional)]
    pub to: Option<Screen>,

    /// Path shown by the browser for the target, eg on hover.
    #[props(optional)]
    pub href: Option<String>,

    pub children: Element,
}

/// An anchor that switches screens in-app instead of loading `href`.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    let href = props.href.clone().unwrap_or_else(|| "#".to_string());

    rsx! {
        a {
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();

                if let (Some(mut state_signal), Some(target)) = (props.state, &props.to) {
                    state_signal.set(target.clone());
                }
            },
            {props.children}
        }
    }
}
