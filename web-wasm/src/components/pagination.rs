//! ページネーションコンポーネント
//!
//! ページ番号ボタンの列。クリックはローカルな状態更新のみで、
//! 再取得は発生しない。

use leptos::prelude::*;

#[component]
pub fn Pagination<F>(
    page_count: Signal<usize>,
    current_page: Signal<usize>,
    on_page_change: F,
) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send,
{
    view! {
        <nav class="pagination">
            <For
                each=move || 1..=page_count.get()
                key=|page| *page
                children=move |page| {
                    let on_page_change = on_page_change.clone();
                    view! {
                        <button
                            class="page-button"
                            class:active=move || current_page.get() == page
                            on:click=move |_| on_page_change(page)
                        >
                            {page}
                        </button>
                    }
                }
            />
        </nav>
    }
}
