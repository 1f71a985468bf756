use crate::layout::global_context::{ActivePage, AppGlobalContext};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;
use thaw::*;

/// Стартовая страница с переходом на дашборд
#[component]
pub fn CoverPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <PageFrame page_id="cover--custom" category=PAGE_CAT_CUSTOM>
            <div class="cover-page__card">
                <div class="cover-page__logo">{icon("dashboard")}</div>
                <h1 class="cover-page__title">"eCommerce Dashboard"</h1>
                <p class="cover-page__subtitle">
                    "Orders, customers and revenue at a glance"
                </p>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(ActivePage::Dashboard)
                >
                    "Open dashboard"
                </Button>
            </div>
        </PageFrame>
    }
}
