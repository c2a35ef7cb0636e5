use dioxus::prelude::*;

use crate::client::{component::Page, router::route_for};

#[component]
pub fn UserManagement() -> Element {
    rsx! {
        Page {
            title: "用户管理",
            Link { class: "btn btn-primary", to: route_for("/userCenter/userAdd"), "新增用户" }
            Link { class: "btn btn-link", to: route_for("/userCenter/userDetail"), "查看详情" }
        }
    }
}

#[component]
pub fn UserAdd() -> Element {
    rsx! {
        Page { title: "用户新增",
            Link { to: route_for("/userCenter/userManagement"), "返回列表" }
        }
    }
}

#[component]
pub fn UserDetail() -> Element {
    rsx! {
        Page { title: "用户详情",
            Link { to: route_for("/userCenter/userManagement"), "返回列表" }
        }
    }
}
