//! TopHeader: panel toggles, current page title, notifications and theme toggle.

use crate::domain::a001_order::state::use_dashboard;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let dashboard = use_dashboard();

    let unread = dashboard.feed.with_value(|feed| feed.unread_count());
    let is_sidebar_visible = move || ctx.left_open.get();
    let is_right_panel_visible = move || ctx.right_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Dashboards"</span>
                <span class="top-header__separator">"/"</span>
                <span class="top-header__page">{move || ctx.active_page.get().title()}</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />

                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                    {(unread > 0).then(|| view! { <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Danger>{unread.to_string()}</Badge> })}
                </button>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_right()
                    title=move || if is_right_panel_visible() { "Hide right panel" } else { "Show right panel" }
                >
                    {icon("panel-right")}
                </button>
            </div>
        </div>
    }
}
