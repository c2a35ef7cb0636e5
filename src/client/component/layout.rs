use std::rc::Rc;

use dioxus::prelude::*;

use crate::client::{
    component::{ChatPanel, Header, Sidebar},
    model::sidebar::SidebarState,
    navigation::{Crumb, RouteTable},
    router::{route_for, route_path, Route},
};

/// Persistent chrome around every signed-in page.
///
/// ```text
/// +---------------------------------------------+
/// |                  Header                     |
/// |---------------------------------------------|
/// | Sidebar | Breadcrumbs                       |
/// |         |-----------------------------------|
/// |         |         Content (Outlet)          |
/// |         |                    [ChatPanel]    |
/// +---------------------------------------------+
/// ```
///
/// Resizing and toggling only update the sidebar flags; the outlet stays
/// mounted as it is.
#[component]
pub fn Shell() -> Element {
    let mut sidebar = use_signal(|| SidebarState::for_viewport(viewport_width()));
    let table = use_context::<Rc<RouteTable>>();
    let route = use_route::<Route>();

    let path = route_path(&route);
    let crumbs = table.breadcrumbs(&path);
    let state = sidebar();

    rsx!(div {
        class: "shell",
        onresize: move |evt| {
            let width = viewport_width().or_else(|| evt.get_border_box_size().ok().map(|size| size.width));
            if let Some(width) = width {
                sidebar.set(sidebar().resize(width));
            }
        },
        Header {
            collapsed: state.collapsed,
            on_toggle: move |_| sidebar.set(sidebar().toggle()),
        }
        div {
            class: "shell-body",
            if !(state.collapsed && state.mobile) {
                Sidebar { collapsed: state.collapsed, path: path.clone() }
            }
            main {
                class: "content",
                Breadcrumbs { crumbs }
                Outlet::<Route> {}
            }
        }
        ChatPanel {}
    })
}

/// Width of the browser viewport in CSS pixels.
#[cfg(feature = "web")]
fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(feature = "web"))]
fn viewport_width() -> Option<f64> {
    None
}

#[component]
fn Breadcrumbs(crumbs: Vec<Crumb>) -> Element {
    let last = crumbs.len().saturating_sub(1);

    rsx!(div {
        class: "breadcrumbs",
        for (position, crumb) in crumbs.into_iter().enumerate() {
            if position > 0 {
                span { " / " }
            }
            match crumb.target {
                Some(target) if position != last => rsx!(Link { to: route_for(&target), "{crumb.label}" }),
                _ => rsx!(span { "{crumb.label}" }),
            }
        }
    })
}
