use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaBars, Icon};

use crate::client::{
    component::UserMenu,
    config::AppConfig,
    constant::HOME_PATH,
    router::route_for,
};

#[component]
pub fn Header(collapsed: bool, on_toggle: EventHandler<()>) -> Element {
    let config = use_context::<AppConfig>();
    let toggle_label = if collapsed { "Expand menu" } else { "Collapse menu" };

    rsx!(div {
        class: "header",
        div {
            class: "flex items-center gap-3",
            button {
                class: "btn btn-ghost",
                title: toggle_label,
                onclick: move |_| on_toggle.call(()),
                Icon {
                    width: 18,
                    height: 18,
                    icon: FaBars
                }
            }
            Link {
                to: route_for(HOME_PATH),
                p {
                    class: "md:text-xl text-wrap",
                    "{config.site_name}"
                }
            }
        }
        UserMenu {}
    })
}
