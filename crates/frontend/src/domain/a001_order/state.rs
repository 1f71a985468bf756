use contracts::dashboards::d400_ecommerce_overview::{seed_activity_feed, ActivityFeed};
use contracts::domain::a001_order::{OrderSortField, OrderStore};
use contracts::shared::config::DashboardConfig;
use contracts::shared::list_query::SortDirection;
use leptos::prelude::*;

/// Контекст дашборда: единственное хранилище заказов и состояния списка.
///
/// Каждое событие UI выполняет один `update` над хранилищем; производные
/// данные пересчитываются компонентами через `with`.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub store: RwSignal<OrderStore>,
    pub feed: StoredValue<ActivityFeed>,
}

impl DashboardContext {
    pub fn new(config: &DashboardConfig) -> Self {
        let store = OrderStore::seeded(config).expect("Seed orders must have unique ids");
        Self {
            store: RwSignal::new(store),
            feed: StoredValue::new(seed_activity_feed()),
        }
    }

    pub fn set_search_query(&self, query: String) {
        self.store.update(|s| s.set_search_query(query));
    }

    pub fn set_sort_by(&self, field: OrderSortField) {
        self.store.update(|s| s.set_sort_by(field));
    }

    pub fn set_sort_order(&self, direction: SortDirection) {
        self.store.update(|s| s.set_sort_order(direction));
    }

    pub fn toggle_sort(&self, field: OrderSortField) {
        self.store.update(|s| s.toggle_sort(field));
    }

    pub fn go_to_page(&self, page: usize) {
        self.store.update(|s| {
            s.go_to_page(page);
        });
    }

    pub fn toggle_one(&self, id: String) {
        self.store.update(|s| s.toggle_one(&id));
    }

    pub fn select_all(&self) {
        self.store.update(|s| s.select_all());
    }
}

/// Provides the dashboard store to children components.
#[component]
pub fn DashboardProvider(children: Children) -> impl IntoView {
    let config = DashboardConfig::embedded().expect("Embedded dashboard config is invalid");
    provide_context(DashboardContext::new(&config));

    children()
}

/// Hook to use the dashboard context.
pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>()
        .expect("use_dashboard must be used within a DashboardProvider")
}
