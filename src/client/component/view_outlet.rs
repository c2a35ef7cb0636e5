use dioxus::prelude::*;

use crate::client::{
    navigation::View,
    route::{
        home::Home,
        permission::{PermissionAdd, PermissionDetail, PermissionEdit, PermissionList},
        setting::{PersonalInfo, SecuritySetting, SettingCenter, ThemeSetting},
        user_center::{UserAdd, UserDetail, UserManagement},
    },
};

/// Renders the page bound to a registry view.
#[component]
pub fn ViewOutlet(view: View) -> Element {
    match view {
        View::Home => rsx!(Home {}),
        View::UserManagement => rsx!(UserManagement {}),
        View::UserAdd => rsx!(UserAdd {}),
        View::UserDetail => rsx!(UserDetail {}),
        View::PermissionList => rsx!(PermissionList {}),
        View::PermissionAdd => rsx!(PermissionAdd {}),
        View::PermissionEdit => rsx!(PermissionEdit {}),
        View::PermissionDetail => rsx!(PermissionDetail {}),
        View::SettingCenter => rsx!(SettingCenter {}),
        View::PersonalInfo => rsx!(PersonalInfo {}),
        View::SecuritySetting => rsx!(SecuritySetting {}),
        View::ThemeSetting => rsx!(ThemeSetting {}),
    }
}
