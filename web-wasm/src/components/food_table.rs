//! 食品テーブルコンポーネント

use leptos::prelude::*;

use food_app_common::FoodItem;

/// 現在ページの食品を表形式で表示する
#[component]
pub fn FoodTable(foods: Signal<Vec<FoodItem>>) -> impl IntoView {
    view! {
        <table class="food-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Calories"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || foods.get()
                    key=|food| food.id
                    children=move |food| {
                        view! {
                            <tr>
                                <td>{food.id}</td>
                                <td>{food.name.clone()}</td>
                                <td>{food.calories}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
