use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Левая колонка с навигацией; скрывается кнопкой в TopHeader
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--collapsed=move || !ctx.left_open.get()
            aria-label="Navigation"
        >
            {children()}
        </aside>
    }
}
