use dioxus::prelude::*;

use crate::client::{component::Page, config::AppConfig, model::auth::AuthContext};

#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthContext>();
    let config = use_context::<AppConfig>();

    let greeting = match auth.user() {
        Some(user) => format!("欢迎回来，{}", user.username),
        None => "欢迎".to_string(),
    };

    rsx! {
        Title { "Home | {config.site_name}" }
        Page {
            title: "Home",
            subtitle: greeting,
            p { "标准化AI完成代码生成、优化和单元测试，从需求到上线的全流程AI自动化。" }
        }
    }
}
