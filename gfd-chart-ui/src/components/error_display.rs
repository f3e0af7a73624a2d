//! Banner shown when one of the embedded datasets fails to load.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// What went wrong, in the provider's words.
    pub message: String,
    /// Optional recovery hint shown under the message.
    #[props(default = String::new())]
    pub hint: String,
}

/// A full-width banner for dataset errors.
///
/// Chart-level failures never reach this component; those render as
/// placeholder figures inside their own containers. This banner is for the
/// load path only, where no chart exists yet.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 14px 18px; margin: 12px 0; background: #FDECEA; color: #8C1D18; border-left: 4px solid #B3261E; border-radius: 2px;",
            div {
                style: "font-weight: 600; margin-bottom: 4px;",
                "Dashboard data unavailable"
            }
            div { "{props.message}" }
            if !props.hint.is_empty() {
                div {
                    style: "margin-top: 6px; font-size: 12px; color: #5F2120;",
                    "{props.hint}"
                }
            }
        }
    }
}
