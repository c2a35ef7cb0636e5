use std::rc::Rc;

use dioxus::prelude::*;

use crate::client::{
    component::icon::MenuIconView,
    navigation::{MenuEntry, RouteTable},
    router::route_for,
};

#[component]
pub fn Sidebar(collapsed: bool, path: String) -> Element {
    let table = use_context::<Rc<RouteTable>>();
    let selected = table.selected_keys(&path);
    let class = if collapsed { "sider collapsed" } else { "sider" };

    rsx!(nav {
        class: "{class}",
        for entry in table.menu().iter().cloned() {
            MenuItem {
                key: "{entry.key}",
                entry,
                selected: selected.clone(),
                collapsed,
            }
        }
    })
}

/// One menu entry and, for categories, its submenu.
///
/// Submenus on the path to the current page start open.
#[component]
fn MenuItem(entry: MenuEntry, selected: Vec<String>, collapsed: bool) -> Element {
    let on_path = selected.contains(&entry.key);
    let is_current = selected.last() == Some(&entry.key);
    let mut open = use_signal(|| on_path);

    let class = if is_current {
        "menu-item selected"
    } else {
        "menu-item"
    };

    rsx!(div {
        div {
            class: "{class}",
            onclick: move |_| open.set(!open()),
            if let Some(icon) = entry.icon {
                MenuIconView { icon }
            }
            if !collapsed {
                match &entry.target {
                    Some(target) => rsx!(Link { to: route_for(target), "{entry.label}" }),
                    None => rsx!(span { "{entry.label}" }),
                }
            }
        }
        if let Some(children) = entry.children.clone() {
            if open() && !collapsed {
                div {
                    class: "submenu",
                    for child in children {
                        MenuItem {
                            key: "{child.key}",
                            entry: child,
                            selected: selected.clone(),
                            collapsed,
                        }
                    }
                }
            }
        }
    })
}
