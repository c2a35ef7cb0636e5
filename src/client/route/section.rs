use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::ViewOutlet,
    constant::HOME_PATH,
    navigation::RouteTable,
    router::route_for,
};

/// Serves every registry path by looking it up in the compiled route table.
///
/// Paths that are not registered redirect to the home page.
#[component]
pub fn Section(segments: Vec<String>) -> Element {
    let table = use_context::<Rc<RouteTable>>();
    let nav = navigator();

    let path = format!("/{}", segments.join("/"));
    let view = table.view(&path);
    let known = view.is_some();

    use_effect(use_reactive!(|(known, path)| {
        if !known {
            tracing::debug!("No route registered for {}, redirecting home", path);
            nav.replace(route_for(HOME_PATH));
        }
    }));

    match view {
        Some(view) => rsx! {
            ViewOutlet { view }
        },
        None => rsx!(),
    }
}
