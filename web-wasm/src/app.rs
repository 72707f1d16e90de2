//! メインアプリケーションコンポーネント

use leptos::prelude::*;

use crate::components::{auth_page::AuthPage, food_page::FoodPage};

/// パスで画面を切り替える: /login -> 認証画面、それ以外は食品一覧
#[component]
pub fn App() -> impl IntoView {
    let pathname = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let is_login = pathname == "/login";

    view! {
        <Show when=move || is_login fallback=|| view! { <FoodPage /> }>
            <AuthPage />
        </Show>
    }
}
