use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaRightFromBracket, FaUser},
    Icon,
};
use dioxus_logger::tracing;

use crate::client::{model::auth::AuthContext, router::Route};

#[cfg(feature = "web")]
use crate::client::{api::logout, config::AppConfig};

/// Avatar and name of the signed-in user with a logout action.
#[component]
pub fn UserMenu() -> Element {
    let auth = use_context::<AuthContext>();
    #[cfg(feature = "web")]
    let config = use_context::<AppConfig>();
    let nav = navigator();
    let mut open = use_signal(|| false);

    let Some(user) = auth.user() else {
        return rsx!();
    };

    let on_logout = move |_: MouseEvent| {
        let mut auth = auth.clone();
        #[cfg(feature = "web")]
        let config = config.clone();

        spawn(async move {
            #[cfg(feature = "web")]
            logout(&config, &mut auth).await;

            if let Err(e) = auth.sign_out() {
                tracing::error!("Failed to clear session: {}", e);
            }
            tracing::info!("Signed out");
            nav.replace(Route::Login {
                redirect: String::new(),
            });
        });
    };

    rsx!(div {
        class: "relative",
        div {
            class: "flex items-center gap-2 cursor-pointer",
            onclick: move |_| open.set(!open()),
            Icon {
                width: 16,
                height: 16,
                icon: FaUser
            }
            span { class: "username", "{user.username}" }
        }
        if open() {
            div {
                class: "absolute right-0 bg-base-100 text-base-content shadow",
                button {
                    class: "btn btn-ghost flex gap-2 items-center",
                    onclick: on_logout,
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaRightFromBracket
                    }
                    "退出登录"
                }
            }
        }
    })
}
