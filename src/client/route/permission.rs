use dioxus::prelude::*;

use crate::client::{component::Page, router::route_for};

#[component]
pub fn PermissionList() -> Element {
    rsx! {
        Page {
            title: "权限列表",
            div {
                class: "flex gap-2",
                Link { class: "btn btn-primary", to: route_for("/permission/add"), "新增权限" }
                Link { class: "btn btn-link", to: route_for("/permission/edit"), "编辑" }
                Link { class: "btn btn-link", to: route_for("/permission/detail"), "详情" }
            }
        }
    }
}

#[component]
pub fn PermissionAdd() -> Element {
    rsx! {
        Page { title: "新增权限", BackToList {} }
    }
}

#[component]
pub fn PermissionEdit() -> Element {
    rsx! {
        Page { title: "编辑权限", BackToList {} }
    }
}

#[component]
pub fn PermissionDetail() -> Element {
    rsx! {
        Page { title: "权限详情", BackToList {} }
    }
}

#[component]
fn BackToList() -> Element {
    rsx!(Link { to: route_for("/permission/list"), "返回列表" })
}
