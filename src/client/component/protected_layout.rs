use dioxus::prelude::*;

use crate::client::{
    constant::LOGIN_PATH,
    model::auth::{AuthContext, GuardDecision, GuardPolicy},
    router::{route_for, route_path, Route},
};

#[component]
pub fn RequiresSession() -> Element {
    rsx! {
        GuardLayout { policy: GuardPolicy::Protected }
    }
}

#[component]
pub fn PublicOnly() -> Element {
    rsx! {
        GuardLayout { policy: GuardPolicy::PublicOnly }
    }
}

fn redirect_target(to: &str, return_to: &Option<String>) -> Route {
    if to == LOGIN_PATH {
        Route::Login {
            redirect: return_to.clone().unwrap_or_default(),
        }
    } else {
        route_for(to)
    }
}

/// Evaluates the guard on every render and only mounts the outlet when the
/// session satisfies `policy`.
#[component]
fn GuardLayout(policy: GuardPolicy) -> Element {
    let auth = use_context::<AuthContext>();
    let route = use_route::<Route>();
    let nav = navigator();

    let remembered = match &route {
        Route::Login { redirect } if !redirect.is_empty() => Some(redirect.as_str()),
        _ => None,
    };
    let decision = auth.check(policy, &route_path(&route), remembered);

    use_effect(use_reactive!(|(decision)| {
        if let GuardDecision::Redirect {
            to,
            replace,
            return_to,
        } = &decision
        {
            let target = redirect_target(to, return_to);
            if *replace {
                nav.replace(target);
            } else {
                nav.push(target);
            }
        }
    }));

    rsx! {
        if decision == GuardDecision::Render {
            Outlet::<Route> {}
        }
        // Nothing is rendered while the redirect is pending
    }
}
