use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::page::ErrorPage,
    config::AppConfig,
    error::AppError,
    model::auth::AuthContext,
    navigation::{registry, RouteTable},
    router::Route,
    session::{CookieOptions, CookieStore, SessionStore},
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, PartialEq)]
struct Startup {
    config: AppConfig,
    table: Rc<RouteTable>,
}

fn startup() -> Result<Startup, AppError> {
    let config = AppConfig::from_env()?;
    let table = RouteTable::compile(registry::registry(), &registry::sider())?;

    tracing::info!(
        "Compiled {} routes and {} top-level menu entries",
        table.routes().len(),
        table.menu().len()
    );

    Ok(Startup {
        config,
        table: Rc::new(table),
    })
}

fn session_store(config: &AppConfig) -> Rc<dyn SessionStore> {
    Rc::new(CookieStore::new(CookieOptions::with_max_age(
        config.session_max_age,
    )))
}

#[component]
pub fn App() -> Element {
    let startup = use_hook(|| {
        startup().inspect_err(|e| tracing::error!("Failed to start console: {}", e))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match startup {
            Ok(Startup { config, table }) => rsx! {
                Console { config, table }
            },
            Err(e) => rsx! {
                ErrorPage { status: 500, message: "{e}" }
            },
        }
    }
}

/// Provides the configuration, route table and session to the router.
#[component]
fn Console(config: AppConfig, table: Rc<RouteTable>) -> Element {
    use_context_provider(|| AuthContext::new(session_store(&config)));
    use_context_provider(|| table);
    use_context_provider(|| config.clone());

    rsx! {
        Title { "{config.site_name}" }
        Router::<Route> {}
    }
}
