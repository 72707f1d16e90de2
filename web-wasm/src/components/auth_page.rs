//! 認証ビュー
//!
//! ログイン/登録フォームの切り替えだけを持つ画面。
//! どちらのフォームもバックエンド連携はスタブ。

use leptos::prelude::*;

use food_app_common::AuthView;

use crate::components::{login_form::LoginForm, register_form::RegisterForm};

#[component]
pub fn AuthPage() -> impl IntoView {
    let (active_view, set_active_view) = signal(AuthView::default());

    view! {
        <div class="auth-container">
            <h2 class="auth-title">"Food App"</h2>

            <Show
                when=move || active_view.get() == AuthView::Login
                fallback=|| view! { <RegisterForm /> }
            >
                <LoginForm />
            </Show>

            <a
                class="auth-toggle-link"
                href="#"
                on:click=move |ev| {
                    ev.prevent_default();
                    set_active_view.update(|view| *view = view.toggle());
                }
            >
                {move || active_view.get().toggle_label()}
            </a>
        </div>
    }
}
