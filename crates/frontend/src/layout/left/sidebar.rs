//! Sidebar with the dashboard navigation items

use crate::layout::global_context::{ActivePage, AppGlobalContext};
use crate::shared::icons::icon;
use leptos::prelude::*;

struct MenuItem {
    page: ActivePage,
    label: &'static str,
    icon: &'static str,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            page: ActivePage::Dashboard,
            label: "eCommerce",
            icon: "dashboard",
        },
        MenuItem {
            page: ActivePage::Orders,
            label: "Order List",
            icon: "orders",
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__group-label">"Dashboards"</div>
            {menu_items()
                .into_iter()
                .map(|item| {
                    let page = item.page;
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.is_active(page)
                            style:padding-left="12px"
                            on:click=move |_| ctx.navigate(page)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
