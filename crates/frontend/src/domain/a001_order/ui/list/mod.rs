use crate::domain::a001_order::state::{use_dashboard, DashboardContext};
use crate::shared::components::{PaginationControls, TableCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_order::{Order, OrderSortField};
use contracts::enums::OrderStatus;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Адрес, рядом с которым в таблице показывается иконка корзины
const TRASH_MARKED_ADDRESS: &str = "Nest Lane Olivette";

#[component]
pub fn OrdersList() -> impl IntoView {
    let ctx = use_dashboard();

    let info = Signal::derive(move || ctx.store.with(|s| s.pagination_info()));
    let page_numbers = Signal::derive(move || ctx.store.with(|s| s.page_numbers()));

    view! {
        <PageFrame page_id="a001_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Order List"</h1>
                    <p class="page__breadcrumbs">"Dashboards / Default"</p>
                </div>
            </div>

            <div class="page__content orders-card">
                <OrdersHeader ctx=ctx />
                <OrdersTable ctx=ctx />
                <PaginationControls
                    info=info
                    page_numbers=page_numbers
                    on_page_change=Callback::new(move |page| ctx.go_to_page(page))
                />
            </div>
        </PageFrame>
    }
}

#[component]
fn OrdersHeader(ctx: DashboardContext) -> impl IntoView {
    let search_query = Signal::derive(move || ctx.store.with(|s| s.state().search_query.clone()));
    let sort_by = move || ctx.store.with(|s| s.state().sort_by);
    let sort_order = move || ctx.store.with(|s| s.state().sort_order);

    let on_sort_field_change = move |ev: leptos::ev::Event| {
        match event_target_value(&ev).parse::<OrderSortField>() {
            Ok(field) => ctx.set_sort_by(field),
            Err(e) => log!("⚠️ {}", e),
        }
    };

    view! {
        <div class="orders-card__header">
            <div class="orders-card__toolbar">
                <h2 class="orders-card__title">"Order List"</h2>

                <div class="orders-card__actions">
                    <select
                        class="orders-card__sort-select"
                        on:change=on_sort_field_change
                        prop:value=move || sort_by().code()
                    >
                        {OrderSortField::all()
                            .into_iter()
                            .map(|field| {
                                view! {
                                    <option value=field.code() selected=move || sort_by() == field>
                                        {field.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button
                        class="orders-card__icon-btn"
                        on:click=move |_| ctx.set_sort_order(sort_order().toggled())
                        title="Sort direction"
                    >
                        {move || get_sort_indicator(true, sort_order())}
                    </button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.toggle_sort(OrderSortField::Date)
                    >
                        {icon("arrow-up-down")}
                    </Button>
                </div>
            </div>

            <SearchInput
                value=search_query
                on_change=Callback::new(move |query: String| ctx.set_search_query(query))
                placeholder="Search"
            />
        </div>
    }
}

#[component]
fn OrdersTable(ctx: DashboardContext) -> impl IntoView {
    let all_selected = Signal::derive(move || ctx.store.with(|s| s.is_all_visible_selected()));
    let visible_orders = move || ctx.store.with(|s| s.visible_orders());

    view! {
        <div class="table-wrapper">
            <table class="table orders-table">
                <thead>
                    <tr>
                        <TableCheckbox
                            header=true
                            checked=all_selected
                            on_change=Callback::new(move |_| ctx.select_all())
                            label="Select all orders"
                        />
                        {OrderSortField::all()
                            .into_iter()
                            .map(|field| view! { <SortableHeader ctx=ctx field=field /> })
                            .collect_view()}
                        <th class="table__header-cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible_orders
                        key=|order| order.id.clone()
                        children=move |order| view! { <OrderRow ctx=ctx order=order /> }
                    />
                </tbody>
            </table>
            <Show when=move || ctx.store.with(|s| s.visible_orders().is_empty())>
                <div class="table__empty">"No orders found"</div>
            </Show>
        </div>
    }
}

#[component]
fn SortableHeader(ctx: DashboardContext, field: OrderSortField) -> impl IntoView {
    let indicator = move || {
        ctx.store.with(|s| {
            let state = s.state();
            get_sort_indicator(state.sort_by == field, state.sort_order)
        })
    };

    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            on:click=move |_| ctx.toggle_sort(field)
        >
            {field.label()}
            <span class="table__sort-indicator">{indicator}</span>
        </th>
    }
}

#[component]
fn OrderRow(ctx: DashboardContext, order: Order) -> impl IntoView {
    let id = StoredValue::new(order.id.clone());
    let is_selected = Signal::derive(move || ctx.store.with(|s| s.is_selected(&id.get_value())));
    let query = move || ctx.store.with(|s| s.state().search_query.clone());

    let Order {
        order_id,
        user,
        project,
        address,
        date,
        status,
        ..
    } = order;

    let show_trash = address.contains(TRASH_MARKED_ADDRESS);
    let label = format!("Select order {}", order_id);

    // Текстовые ячейки с подсветкой поиска
    let order_id_cell = {
        let order_id = order_id.clone();
        move || highlight_matches(&order_id, &query())
    };
    let user_name_cell = {
        let name = user.name.clone();
        move || highlight_matches(&name, &query())
    };
    let project_cell = move || highlight_matches(&project, &query());
    let address_cell = {
        let address = address.clone();
        move || highlight_matches(&address, &query())
    };

    view! {
        <tr
            class="table__row"
            class:table__row--selected=move || is_selected.get()
        >
            <TableCheckbox
                checked=is_selected
                on_change=Callback::new(move |_| ctx.toggle_one(id.get_value()))
                label=label
            />
            <td class="table__cell table__cell--strong">{order_id_cell}</td>
            <td class="table__cell">
                <div class="order-user">
                    <div class="order-user__avatar">{user.avatar}</div>
                    <div class="order-user__name">{user_name_cell}</div>
                </div>
            </td>
            <td class="table__cell">{project_cell}</td>
            <td class="table__cell">
                <span>{address_cell}</span>
                {show_trash.then(|| view! { <span class="table__cell-icon">{icon("trash")}</span> })}
            </td>
            <td class="table__cell">
                <span class="table__cell-icon">{icon("calendar")}</span>
                <span>{date}</span>
            </td>
            <td class="table__cell">
                <StatusLabel status=status />
            </td>
            <td class="table__cell table__cell--actions">
                {(status == OrderStatus::Rejected).then(|| icon("more-horizontal"))}
            </td>
        </tr>
    }
}

#[component]
fn StatusLabel(status: OrderStatus) -> impl IntoView {
    view! {
        <div class="order-status">
            <span class=status.css_modifier()></span>
            <span class="order-status__text">{status.display_name()}</span>
        </div>
    }
}
