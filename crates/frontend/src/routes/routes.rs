use crate::dashboards::EcommerceOverview;
use crate::domain::a001_order::ui::OrdersList;
use crate::layout::global_context::{ActivePage, AppGlobalContext};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::right::panel::RightPanel;
use crate::layout::Shell;
use crate::pages::cover::CoverPage;
use leptos::prelude::*;

#[component]
fn MainContent() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    move || match ctx.active_page.get() {
        ActivePage::Orders => view! { <OrdersList /> }.into_any(),
        // Cover рендерится вне Shell
        ActivePage::Dashboard | ActivePage::Cover => view! { <EcommerceOverview /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <MainContent /> }.into_any()
            right=|| view! { <RightPanel /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <Show
            when=move || ctx.active_page.get() != ActivePage::Cover
            fallback=|| view! { <CoverPage /> }
        >
            <MainLayout />
        </Show>
    }
}
