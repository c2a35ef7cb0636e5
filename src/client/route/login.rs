use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        config::AppConfig,
        constant::REGISTER_PATH,
        model::auth::{return_target, AuthContext},
        router::route_for,
    },
    model::auth::LoginDto,
};

#[cfg(feature = "web")]
use crate::client::{api::login, session::CookieOptions};

#[component]
pub fn Login(redirect: String) -> Element {
    let auth = use_context::<AuthContext>();
    let config = use_context::<AppConfig>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    #[cfg_attr(not(feature = "web"), allow(unused_mut))]
    let mut notice = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let site_name = config.site_name.clone();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }

        let payload = LoginDto {
            email: email().trim().to_string(),
            password: password(),
        };
        if payload.email.is_empty() || payload.password.is_empty() {
            error.set(Some("请输入邮箱和密码".to_string()));
            return;
        }

        let target = return_target(&redirect);
        #[cfg_attr(not(feature = "web"), allow(unused_mut, unused_variables))]
        let mut auth = auth.clone();
        #[cfg_attr(not(feature = "web"), allow(unused_variables))]
        let config = config.clone();

        loading.set(true);
        error.set(None);

        spawn(async move {
            #[cfg(feature = "web")]
            {
                match login(&config, &mut auth, &payload).await {
                    Ok(result) => {
                        let Some(user) = result.user_info else {
                            error.set(Some("登录失败，请检查邮箱和密码".to_string()));
                            loading.set(false);
                            return;
                        };

                        // Show the success state before the session exists; storing it
                        // makes the public-only guard leave this page at once
                        notice.set(Some("登录成功，正在跳转…".to_string()));
                        gloo_timers::future::TimeoutFuture::new(1_000).await;

                        let options = CookieOptions::with_max_age(config.session_max_age);
                        if let Err(e) = auth.sign_in(result.token.as_deref(), &user, &options) {
                            tracing::error!("Failed to store session: {}", e);
                            notice.set(None);
                            error.set(Some("无法保存登录状态，请检查浏览器 Cookie 设置".to_string()));
                            loading.set(false);
                            return;
                        }

                        tracing::info!("User {} signed in", user.username);
                        nav.replace(route_for(&target));
                    }
                    Err(e) => {
                        tracing::warn!("Login failed: {}", e);
                        error.set(Some("登录失败，请检查邮箱和密码".to_string()));
                    }
                }
            }

            #[cfg(not(feature = "web"))]
            {
                tracing::warn!("Login for {} needs the web feature, staying on {}", payload.email, target);
                error.set(Some("登录服务不可用".to_string()));
            }

            loading.set(false);
        });
    };

    rsx! {
        Title { "Login | {site_name}" }
        div {
            class: "auth-page",
            form {
                class: "form",
                onsubmit: on_submit,
                h2 { "{site_name}" }
                p { "标准化AI自主开发、编辑、上线和发布的平台" }
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
                if let Some(message) = error() {
                    p { class: "error", "{message}" }
                }
                if let Some(message) = notice() {
                    p { class: "notice", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "登录中…" } else { "登录" }
                }
                p {
                    "还没有账号？"
                    Link { to: route_for(REGISTER_PATH), "立即注册" }
                }
            }
        }
    }
}
