use crate::domain::a001_order::state::use_dashboard;
use crate::shared::components::{MetricFormat, StatCard};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::enums::OrderStatus;
use leptos::prelude::*;

/// eCommerce overview: summary stat cards and an order status breakdown
#[component]
pub fn EcommerceOverview() -> impl IntoView {
    let ctx = use_dashboard();
    let metrics = Signal::derive(move || ctx.store.with(|s| *s.metrics()));

    let status_counts = move || {
        ctx.store.with(|s| {
            OrderStatus::all()
                .into_iter()
                .map(|status| {
                    let count = s.orders().iter().filter(|o| o.status == status).count();
                    (status, count)
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <PageFrame page_id="d400_ecommerce_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"eCommerce"</h1>
                    <p class="page__breadcrumbs">"Dashboards / Default"</p>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-card-grid">
                    <StatCard
                        label="Customers"
                        icon_name="customers"
                        metric=Signal::derive(move || metrics.get().customers)
                        format=MetricFormat::Integer
                    />
                    <StatCard
                        label="Orders"
                        icon_name="orders"
                        metric=Signal::derive(move || metrics.get().orders)
                        format=MetricFormat::Integer
                    />
                    <StatCard
                        label="Revenue"
                        icon_name="revenue"
                        metric=Signal::derive(move || metrics.get().revenue)
                        format=MetricFormat::Money
                    />
                    <StatCard
                        label="Growth"
                        icon_name="growth"
                        metric=Signal::derive(move || metrics.get().growth)
                        format=MetricFormat::Percent
                    />
                </div>

                <div class="status-breakdown">
                    <h2 class="status-breakdown__title">"Orders by status"</h2>
                    <ul class="status-breakdown__list">
                        {move || {
                            status_counts()
                                .into_iter()
                                .map(|(status, count)| {
                                    view! {
                                        <li class="status-breakdown__item">
                                            <span class=status.css_modifier()></span>
                                            <span>{status.display_name()}</span>
                                            <span class="status-breakdown__count">{count}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </div>
        </PageFrame>
    }
}
