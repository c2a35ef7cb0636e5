use dioxus::prelude::*;

/// Content card with an optional title, placed inside the shell.
#[component]
pub fn Page(title: Option<String>, subtitle: Option<String>, children: Element) -> Element {
    rsx!(
        div {
            class: "page",
            if let Some(title) = title {
                div {
                    class: "page-header",
                    h1 { "{title}" }
                    if let Some(subtitle) = subtitle {
                        p { class: "page-header-subtitle", "{subtitle}" }
                    }
                }
            }
            div { class: "page-content", {children} }
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        div {
            class: "auth-page",
            div {
                h1 { "{status}" }
                p { class: "error", "{message}" }
            }
        }
    )
}
