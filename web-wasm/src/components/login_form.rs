//! ログインフォームコンポーネント
//!
//! 必須チェックのみのスタブ。妥当な入力は送信されず、
//! コンソールに記録されるだけ。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use food_app_common::{validate_login, LoginFormErrors, LoginInput};

#[component]
pub fn LoginForm() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(LoginFormErrors::default());
    let (submitted, set_submitted) = signal(false);

    let current_input = move || LoginInput {
        username: username.get(),
        password: password.get(),
    };

    let revalidate = move || {
        if submitted.get() {
            set_errors.set(validate_login(&current_input()));
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitted.set(true);

        let input = current_input();
        let form_errors = validate_login(&input);
        if !form_errors.is_valid() {
            set_errors.set(form_errors);
            return;
        }
        set_errors.set(LoginFormErrors::default());

        // 認証連携はスコープ外。入力値を記録するのみ
        web_sys::console::log_2(
            &JsValue::from_str("Login data:"),
            &JsValue::from_str(&format!(
                "username={} password={}",
                input.username, input.password
            )),
        );
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <div class="form-group">
                <label for="username">"Username"</label>
                <input
                    type="text"
                    id="username"
                    class="login-input"
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        set_username.set(event_target_value(&ev));
                        revalidate();
                    }
                />
                <FieldError error=Signal::derive(move || errors.get().username) />
            </div>

            <div class="form-group">
                <label for="password">"Password"</label>
                <input
                    type="password"
                    id="password"
                    class="login-input"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        set_password.set(event_target_value(&ev));
                        revalidate();
                    }
                />
                <FieldError error=Signal::derive(move || errors.get().password) />
            </div>

            <button type="submit" class="btn btn-primary">"Login"</button>
        </form>
    }
}

/// フィールド単位のエラーメッセージ表示
#[component]
pub(crate) fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <span class="field-error">{move || error.get().unwrap_or_default()}</span>
        </Show>
    }
}
