use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaPaperPlane, FaRobot, FaXmark},
    Icon,
};
use dioxus_logger::tracing;

use crate::client::{
    config::AppConfig,
    model::chat::{ChatLog, ChatRole},
};

#[cfg(feature = "web")]
use crate::client::api::stream_chat;

const FAILURE_NOTICE: &str = "抱歉，处理您的请求时出错了。请稍后再试。";

/// Floating assistant that streams replies from the configured chat endpoint.
#[component]
pub fn ChatPanel() -> Element {
    let config = use_context::<AppConfig>();
    let mut log = use_signal(ChatLog::default);
    let mut input = use_signal(String::new);
    let mut open = use_signal(|| false);
    let model = config.chat_model.clone();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(history) = log.write().send(&input()) else {
            return;
        };
        input.set(String::new());
        #[cfg_attr(not(feature = "web"), allow(unused_variables))]
        let config = config.clone();

        spawn(async move {
            #[cfg(feature = "web")]
            match stream_chat(&config, history, move |event| log.write().apply(event)).await {
                Ok(()) => log.write().finish(),
                Err(e) => {
                    tracing::warn!("Chat request failed: {}", e);
                    log.write().fail(FAILURE_NOTICE);
                }
            }

            #[cfg(not(feature = "web"))]
            {
                tracing::warn!("Chat with {} messages needs the web feature", history.len());
                log.write().fail(FAILURE_NOTICE);
            }
        });
    };

    if !open() {
        return rsx!(button {
            class: "chat-toggle btn btn-primary",
            title: "AI 助手",
            onclick: move |_| open.set(true),
            Icon {
                width: 18,
                height: 18,
                icon: FaRobot
            }
        });
    }

    let streaming = log.read().is_streaming();
    let messages = log.read().messages().to_vec();

    rsx!(div {
        class: "chat-panel",
        div {
            class: "chat-header",
            span { "AI 助手 · {model}" }
            div {
                class: "flex gap-2",
                button {
                    class: "btn btn-ghost",
                    disabled: streaming || messages.is_empty(),
                    onclick: move |_| log.write().clear(),
                    "清空"
                }
                button {
                    class: "btn btn-ghost",
                    title: "关闭",
                    onclick: move |_| open.set(false),
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaXmark
                    }
                }
            }
        }
        div {
            class: "chat-messages",
            for (index, message) in messages.clone().into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: match message.role {
                        ChatRole::User => "chat-message user",
                        ChatRole::Assistant => "chat-message assistant",
                    },
                    if message.streaming && message.content.is_empty() {
                        span { class: "chat-typing", "AI正在思考…" }
                    } else {
                        "{message.content}"
                    }
                }
            }
        }
        form {
            class: "chat-input",
            onsubmit: on_submit,
            textarea {
                rows: 3,
                placeholder: "输入问题…",
                value: "{input}",
                disabled: streaming,
                oninput: move |evt| input.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: streaming || input().trim().is_empty(),
                Icon {
                    width: 14,
                    height: 14,
                    icon: FaPaperPlane
                }
                "发送"
            }
        }
    })
}
