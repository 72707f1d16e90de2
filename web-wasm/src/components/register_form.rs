//! 登録フォームコンポーネント
//!
//! username / password / confirmPassword をスキーマ検証する。
//! パスワードは8文字以上、確認フィールドは一致必須。
//! 妥当な入力でも送信はせず、コンソールに記録するのみ（スタブ）。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use food_app_common::{validate_register, RegisterFormErrors, RegisterInput};

use crate::components::login_form::FieldError;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (errors, set_errors) = signal(RegisterFormErrors::default());
    let (submitted, set_submitted) = signal(false);

    let current_input = move || RegisterInput {
        username: username.get(),
        password: password.get(),
        confirm_password: confirm_password.get(),
    };

    // 初回送信後は入力のたびに再検証する
    let revalidate = move || {
        if submitted.get() {
            set_errors.set(validate_register(&current_input()));
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitted.set(true);

        let input = current_input();
        let form_errors = validate_register(&input);
        if !form_errors.is_valid() {
            set_errors.set(form_errors);
            return;
        }
        set_errors.set(RegisterFormErrors::default());

        // 登録連携はスコープ外。入力値を記録するのみ
        web_sys::console::log_2(
            &JsValue::from_str("Form data:"),
            &JsValue::from_str(&format!(
                "username={} password={}",
                input.username, input.password
            )),
        );
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <div class="form-group">
                <label for="register-username">"Username"</label>
                <input
                    type="text"
                    id="register-username"
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        set_username.set(event_target_value(&ev));
                        revalidate();
                    }
                />
                <FieldError error=Signal::derive(move || errors.get().username) />
            </div>

            <div class="form-group">
                <label for="register-password">"Password"</label>
                <input
                    type="password"
                    id="register-password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        set_password.set(event_target_value(&ev));
                        revalidate();
                    }
                />
                <FieldError error=Signal::derive(move || errors.get().password) />
            </div>

            <div class="form-group">
                <label for="confirm-password">"Confirm Password"</label>
                <input
                    type="password"
                    id="confirm-password"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| {
                        set_confirm_password.set(event_target_value(&ev));
                        revalidate();
                    }
                />
                <FieldError error=Signal::derive(move || errors.get().confirm_password) />
            </div>

            <button type="submit" class="btn btn-primary">"Register"</button>
        </form>
    }
}
