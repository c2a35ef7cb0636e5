use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::{icon::MenuIconView, Page},
    model::auth::AuthContext,
    navigation::RouteTable,
    router::route_for,
};

/// Landing page of the settings center, linking to its sections.
#[component]
pub fn SettingCenter() -> Element {
    let table = use_context::<Rc<RouteTable>>();
    let sections = table
        .menu()
        .iter()
        .find(|entry| entry.target.as_deref() == Some("/setting"))
        .and_then(|entry| entry.children.clone())
        .unwrap_or_default();

    rsx! {
        Page {
            title: "设置中心",
            ul {
                class: "flex flex-col gap-2",
                for section in sections {
                    li {
                        key: "{section.key}",
                        class: "flex items-center gap-2",
                        if let Some(icon) = section.icon {
                            MenuIconView { icon }
                        }
                        if let Some(target) = section.target {
                            Link { to: route_for(&target), "{section.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PersonalInfo() -> Element {
    let auth = use_context::<AuthContext>();

    rsx! {
        Page {
            title: "个人中心",
            match auth.user() {
                Some(user) => rsx! {
                    dl {
                        dt { "用户名" }
                        dd { "{user.username}" }
                        dt { "用户 ID" }
                        dd { "{user.id}" }
                        if let Some(gender) = user.gender {
                            dt { "性别" }
                            dd { "{gender}" }
                        }
                    }
                },
                None => rsx!(p { "未获取到用户信息" }),
            }
        }
    }
}

#[component]
pub fn SecuritySetting() -> Element {
    rsx! {
        Page {
            title: "安全设置",
            p { "修改密码与绑定邮箱" }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Value written to the `data-theme` attribute of the root element.
    fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(feature = "web")]
fn apply_theme(theme: Theme) -> Result<(), String> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or_else(|| "no document element".to_string())?;

    root.set_attribute("data-theme", theme.as_str())
        .map_err(|e| format!("{:?}", e))
}

#[cfg(not(feature = "web"))]
fn apply_theme(_theme: Theme) -> Result<(), String> {
    Err("themes require the web feature".to_string())
}

#[component]
pub fn ThemeSetting() -> Element {
    let mut theme = use_signal(|| Theme::Light);

    use_effect(move || {
        let selected = theme();
        if let Err(e) = apply_theme(selected) {
            tracing::warn!("Failed to apply {} theme: {}", selected.as_str(), e);
        }
    });

    rsx! {
        Page {
            title: "主题设置",
            div {
                class: "flex gap-4",
                for option in [Theme::Light, Theme::Dark] {
                    label {
                        key: "{option.as_str()}",
                        input {
                            r#type: "radio",
                            name: "theme",
                            checked: theme() == option,
                            onchange: move |_| theme.set(option),
                        }
                        " {option.as_str()}"
                    }
                }
            }
        }
    }
}
