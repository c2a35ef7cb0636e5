use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{config::AppConfig, constant::LOGIN_PATH, model::auth::AuthContext, router::route_for},
    model::auth::RegisterDto,
};

#[cfg(feature = "web")]
use crate::client::{api::register, router::Route};

/// Checks the fields that can be verified without the backend.
pub fn check_registration(payload: &RegisterDto) -> Result<(), String> {
    if payload.username.trim().is_empty() || payload.email.trim().is_empty() {
        return Err("请填写用户名和邮箱".to_string());
    }
    if payload.password.is_empty() {
        return Err("请输入密码".to_string());
    }
    if payload.password != payload.confirm_password {
        return Err("两次输入的密码不一致".to_string());
    }
    Ok(())
}

#[component]
pub fn Register() -> Element {
    let auth = use_context::<AuthContext>();
    let config = use_context::<AppConfig>();
    #[cfg_attr(not(feature = "web"), allow(unused_variables))]
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let site_name = config.site_name.clone();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = RegisterDto {
            username: username().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            confirm_password: confirm_password(),
        };
        if let Err(message) = check_registration(&payload) {
            error.set(Some(message));
            return;
        }

        #[cfg_attr(not(feature = "web"), allow(unused_mut, unused_variables))]
        let mut auth = auth.clone();
        #[cfg_attr(not(feature = "web"), allow(unused_variables))]
        let config = config.clone();

        loading.set(true);
        error.set(None);

        spawn(async move {
            #[cfg(feature = "web")]
            match register(&config, &mut auth, &payload).await {
                Ok(()) => {
                    tracing::info!("Registered {}", payload.username);
                    nav.push(Route::Login {
                        redirect: String::new(),
                    });
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    error.set(Some(format!("注册失败：{}", e)));
                }
            }

            #[cfg(not(feature = "web"))]
            {
                tracing::warn!("Registration for {} needs the web feature", payload.username);
                error.set(Some("注册服务不可用".to_string()));
            }

            loading.set(false);
        });
    };

    rsx! {
        Title { "Register | {site_name}" }
        div {
            class: "auth-page",
            form {
                class: "form",
                onsubmit: on_submit,
                h2 { "注册 {site_name}" }
                input {
                    placeholder: "用户名",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "邮箱",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "密码",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "确认密码",
                    value: "{confirm_password}",
                    oninput: move |evt| confirm_password.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "error", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    "注册"
                }
                p {
                    "已有账号？"
                    Link { to: route_for(LOGIN_PATH), "返回登录" }
                }
            }
        }
    }
}
