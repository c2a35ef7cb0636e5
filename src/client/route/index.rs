use dioxus::prelude::*;

use crate::client::{constant::HOME_PATH, router::route_for};

/// `/` has no page of its own and forwards to the home page.
#[component]
pub fn Index() -> Element {
    let nav = navigator();

    use_effect(move || {
        nav.replace(route_for(HOME_PATH));
    });

    rsx!()
}
