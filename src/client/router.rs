use dioxus::prelude::*;

use crate::client::{
    component::{PublicOnly, RequiresSession, Shell},
    route::{Index, Login, Register, Section},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PublicOnly)]
        #[route("/login?:redirect")]
        Login { redirect: String },

        #[route("/register")]
        Register {},
    #[end_layout]

    #[layout(RequiresSession)]
    #[layout(Shell)]
        #[route("/")]
        Index {},

        // Every registry path is served here and resolved against the route table
        #[route("/:..segments")]
        Section { segments: Vec<String> },
}

/// Maps a plain path onto the route enum, falling back to the index route.
pub fn route_for(path: &str) -> Route {
    path.parse::<Route>().unwrap_or(Route::Index {})
}

/// Request path of a route without its query string.
pub fn route_path(route: &Route) -> String {
    let full = route.to_string();
    match full.split_once('?') {
        Some((path, _)) => path.to_string(),
        None => full,
    }
}
