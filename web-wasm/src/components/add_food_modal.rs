//! 食品追加モーダルコンポーネント
//!
//! name / calories / type の3フィールドを検証し、全て妥当なときだけ
//! POST /foods を発行する。成功時は作成済みレコードを親に渡して閉じ、
//! 失敗時はアラートを出してモーダルを開いたままにする（再送可能）。

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

use food_app_common::{validate_new_food, FoodFormErrors, FoodItem, NewFood};

use crate::api::foods::create_food;

#[component]
pub fn AddFoodModal<FC, FX>(on_created: FC, on_close: FX) -> impl IntoView
where
    FC: Fn(FoodItem) + 'static + Clone + Send,
    FX: Fn(()) + 'static + Clone + Send,
{
    let (name, set_name) = signal(String::new());
    let (calories_input, set_calories_input) = signal(String::new());
    let (food_type, set_food_type) = signal(String::new());
    let (errors, set_errors) = signal(FoodFormErrors::default());
    let (submitted, set_submitted) = signal(false);

    // caloriesは数値に解釈できない入力も不正値(0)として検証に落とす
    let current_input = move || NewFood {
        name: name.get(),
        calories: calories_input.get().trim().parse().unwrap_or(0.0),
        food_type: food_type.get(),
    };

    // 初回送信後は入力のたびに再検証する
    let revalidate = move || {
        if submitted.get() {
            set_errors.set(validate_new_food(&current_input()));
        }
    };

    let on_submit = {
        let on_created = on_created.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            set_submitted.set(true);

            let input = current_input();
            let form_errors = validate_new_food(&input);
            if !form_errors.is_valid() {
                // 検証に失敗した入力はネットワークに到達させない
                set_errors.set(form_errors);
                return;
            }
            set_errors.set(FoodFormErrors::default());

            let on_created = on_created.clone();
            spawn_local(async move {
                match create_food(&input).await {
                    Ok(food) => {
                        set_name.set(String::new());
                        set_calories_input.set(String::new());
                        set_food_type.set(String::new());
                        set_submitted.set(false);
                        on_created(food);
                    }
                    Err(e) => {
                        web_sys::console::error_2(&JsValue::from_str("Error adding food:"), &e);
                        gloo::dialogs::alert("Failed to add food item. Please try again later.");
                    }
                }
            });
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>"Add Food"</h2>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="food-name">"Food Name"</label>
                        <input
                            type="text"
                            id="food-name"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                set_name.set(event_target_value(&ev));
                                revalidate();
                            }
                        />
                        <FieldHelper
                            error=Signal::derive(move || errors.get().name)
                            helper="Please enter a food name."
                        />
                    </div>

                    <div class="form-group">
                        <label for="calories">"Calories"</label>
                        <input
                            type="number"
                            id="calories"
                            prop:value=move || calories_input.get()
                            on:input=move |ev| {
                                set_calories_input.set(event_target_value(&ev));
                                revalidate();
                            }
                        />
                        <FieldHelper
                            error=Signal::derive(move || errors.get().calories)
                            helper="Please enter calories."
                        />
                    </div>

                    <div class="form-group">
                        <label for="food-type">"Type"</label>
                        <input
                            type="text"
                            id="food-type"
                            prop:value=move || food_type.get()
                            on:input=move |ev| {
                                set_food_type.set(event_target_value(&ev));
                                revalidate();
                            }
                        />
                        <FieldHelper
                            error=Signal::derive(move || errors.get().food_type)
                            helper="Please enter a food type."
                        />
                    </div>

                    <div class="modal-actions">
                        <button type="submit" class="btn btn-primary">"Add"</button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click={
                                let on_close = on_close.clone();
                                move |_| on_close(())
                            }
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// フィールド下の補助テキスト。エラーがあればそれを優先表示する
#[component]
fn FieldHelper(error: Signal<Option<String>>, helper: &'static str) -> impl IntoView {
    view! {
        <span class="helper-text" class:field-error=move || error.get().is_some()>
            {move || error.get().unwrap_or_else(|| helper.to_string())}
        </span>
    }
}
