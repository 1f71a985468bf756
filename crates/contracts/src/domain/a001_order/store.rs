use super::aggregate::{Order, OrderSortField};
use super::seed::seed_orders;
use crate::dashboards::d400_ecommerce_overview::{seed_metrics, DashboardMetrics};
use crate::shared::config::{DashboardConfig, ListConfig};
use crate::shared::error::DashboardError;
use crate::shared::list_query::{
    filter_list, page_numbers, paginate, sort_list, PaginationInfo, SelectionSet, SortDirection,
};
use std::collections::HashSet;

/// Состояние списка заказов: поиск, сортировка, страница, выбранные строки
#[derive(Debug, Clone, PartialEq)]
pub struct OrderListState {
    pub search_query: String,
    pub sort_by: OrderSortField,
    pub sort_order: SortDirection,
    /// Номер текущей страницы, начиная с 1
    pub current_page_number: usize,
    /// Неизменен в течение сессии
    pub items_per_page: usize,
    pub selected_orders: SelectionSet,
}

impl OrderListState {
    pub fn from_config(list: &ListConfig) -> Self {
        Self {
            search_query: String::new(),
            sort_by: list.default_sort_by,
            sort_order: list.default_sort_order,
            current_page_number: 1,
            items_per_page: list.items_per_page,
            selected_orders: SelectionSet::new(),
        }
    }
}

impl Default for OrderListState {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default().list)
    }
}

/// Хранилище дашборда: заказы, сводные показатели и состояние списка.
///
/// Весь конвейер (фильтр → сортировка → страница) пересчитывается при
/// каждом обращении.
#[derive(Debug, Clone)]
pub struct OrderStore {
    orders: Vec<Order>,
    metrics: DashboardMetrics,
    state: OrderListState,
    max_visible_pages: usize,
}

impl OrderStore {
    pub fn new(
        orders: Vec<Order>,
        metrics: DashboardMetrics,
        config: &DashboardConfig,
    ) -> Result<Self, DashboardError> {
        config.validate()?;
        ensure_unique_ids(&orders)?;
        log::debug!("OrderStore initialized with {} orders", orders.len());
        Ok(Self {
            orders,
            metrics,
            state: OrderListState::from_config(&config.list),
            max_visible_pages: config.list.max_visible_pages,
        })
    }

    /// Хранилище с демонстрационными данными
    pub fn seeded(config: &DashboardConfig) -> Result<Self, DashboardError> {
        Self::new(seed_orders(), seed_metrics(), config)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn metrics(&self) -> &DashboardMetrics {
        &self.metrics
    }

    pub fn state(&self) -> &OrderListState {
        &self.state
    }

    pub fn selected_orders(&self) -> &SelectionSet {
        &self.state.selected_orders
    }

    // ------------------------------------------------------------------------
    // Изменение данных (компонентами не используется)
    // ------------------------------------------------------------------------

    pub fn set_orders(&mut self, orders: Vec<Order>) -> Result<(), DashboardError> {
        ensure_unique_ids(&orders)?;
        self.orders = orders;
        Ok(())
    }

    pub fn set_metrics(&mut self, metrics: DashboardMetrics) {
        self.metrics = metrics;
    }

    // ------------------------------------------------------------------------
    // События UI
    // ------------------------------------------------------------------------

    /// Номер страницы при этом не сбрасывается
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
    }

    pub fn set_sort_by(&mut self, field: OrderSortField) {
        self.state.sort_by = field;
    }

    pub fn set_sort_order(&mut self, direction: SortDirection) {
        self.state.sort_order = direction;
    }

    /// Клик по заголовку: то же поле меняет направление, новое поле
    /// сортируется по возрастанию.
    pub fn toggle_sort(&mut self, field: OrderSortField) {
        if self.state.sort_by == field {
            self.state.sort_order = self.state.sort_order.toggled();
        } else {
            self.state.sort_by = field;
            self.state.sort_order = SortDirection::Asc;
        }
        log::debug!(
            "sort: {} {}",
            self.state.sort_by.code(),
            self.state.sort_order.code()
        );
    }

    /// Устанавливает страницу без проверки верхней границы
    pub fn set_current_page_number(&mut self, page: usize) {
        if page == 0 {
            log::warn!("page number must start at 1, using 1");
        }
        self.state.current_page_number = page.max(1);
    }

    /// Переход на страницу из пагинатора. Номер вне `[1, total_pages]`
    /// игнорируется; возвращает, был ли переход выполнен.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if self.pagination_info().is_valid_page(page) {
            self.state.current_page_number = page;
            true
        } else {
            log::debug!("ignored navigation to page {}", page);
            false
        }
    }

    pub fn toggle_one(&mut self, id: &str) {
        self.state.selected_orders.toggle_one(id);
    }

    pub fn select_all(&mut self) {
        let visible = self.visible_orders();
        self.state
            .selected_orders
            .select_all(visible.iter().map(|order| order.id.as_str()));
    }

    // ------------------------------------------------------------------------
    // Производные данные
    // ------------------------------------------------------------------------

    pub fn filtered_orders(&self) -> Vec<Order> {
        filter_list(&self.orders, &self.state.search_query)
    }

    pub fn sorted_orders(&self) -> Vec<Order> {
        sort_list(
            &self.filtered_orders(),
            self.state.sort_by,
            self.state.sort_order,
        )
    }

    /// Заказы текущей страницы
    pub fn visible_orders(&self) -> Vec<Order> {
        paginate(
            &self.sorted_orders(),
            self.state.current_page_number,
            self.state.items_per_page,
        )
    }

    pub fn pagination_info(&self) -> PaginationInfo {
        PaginationInfo::new(
            self.state.current_page_number,
            self.filtered_orders().len(),
            self.state.items_per_page,
        )
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        let info = self.pagination_info();
        page_numbers(info.current_page, info.total_pages, self.max_visible_pages)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.selected_orders.contains(id)
    }

    pub fn is_all_visible_selected(&self) -> bool {
        self.state
            .selected_orders
            .is_all_selected(self.visible_orders().len())
    }
}

fn ensure_unique_ids(orders: &[Order]) -> Result<(), DashboardError> {
    let mut seen = HashSet::with_capacity(orders.len());
    for order in orders {
        if !seen.insert(order.id.as_str()) {
            return Err(DashboardError::DuplicateOrderId(order.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::OrderStatus;

    fn store() -> OrderStore {
        OrderStore::seeded(&DashboardConfig::default()).unwrap()
    }

    fn store_with_page_size(items_per_page: usize) -> OrderStore {
        let mut config = DashboardConfig::default();
        config.list.items_per_page = items_per_page;
        OrderStore::seeded(&config).unwrap()
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_defaults() {
        let store = store();
        let state = store.state();
        assert_eq!(state.search_query, "");
        assert_eq!(state.sort_by, OrderSortField::Date);
        assert_eq!(state.sort_order, SortDirection::Desc);
        assert_eq!(state.current_page_number, 1);
        assert_eq!(state.items_per_page, 10);
        assert!(state.selected_orders.is_empty());
    }

    #[test]
    fn test_kate_query_fits_on_one_page() {
        let mut store = store();
        store.set_search_query("Kate");

        assert_eq!(ids(&store.filtered_orders()), vec!["2", "6"]);
        // "feb 1, 2023" > "a minute ago"
        assert_eq!(ids(&store.visible_orders()), vec!["6", "2"]);

        let info = store.pagination_info();
        assert_eq!(info.total_pages, 1);
        assert_eq!(info.total_items, 2);
    }

    #[test]
    fn test_unfiltered_seed_is_single_page() {
        let store = store();
        let info = store.pagination_info();
        assert_eq!(info.total_pages, 1);
        assert!(!info.has_next_page);
        assert!(!info.has_previous_page);
        assert!(!info.should_show_controls());
        assert_eq!(store.visible_orders().len(), 10);
    }

    #[test]
    fn test_default_sort_is_lexical_date_descending() {
        let store = store();
        assert_eq!(
            ids(&store.visible_orders()),
            vec!["4", "1", "7", "8", "9", "10", "5", "6", "2", "3"]
        );
    }

    #[test]
    fn test_selection_survives_filtering() {
        let mut store = store();
        store.toggle_one("5");
        store.set_search_query("Kate");
        assert!(!ids(&store.visible_orders()).contains(&"5"));
        assert!(store.is_selected("5"));
    }

    #[test]
    fn test_select_all_is_scoped_to_visible_page() {
        let mut store = store_with_page_size(3);
        store.set_sort_by(OrderSortField::OrderId);
        store.set_sort_order(SortDirection::Asc);

        store.select_all();
        assert_eq!(store.selected_orders().ids(), ["1", "2", "3"].map(String::from));
        assert!(store.is_all_visible_selected());

        assert!(store.go_to_page(2));
        store.toggle_one("9");
        store.select_all();
        assert_eq!(store.selected_orders().ids(), ["4", "5", "6"].map(String::from));

        store.select_all();
        assert!(store.selected_orders().is_empty());
    }

    #[test]
    fn test_pages_reproduce_sorted_sequence() {
        let mut store = store_with_page_size(4);
        store.set_sort_by(OrderSortField::User);
        let total = store.pagination_info().total_pages;
        assert_eq!(total, 3);

        let mut joined = Vec::new();
        for page in 1..=total {
            store.set_current_page_number(page);
            joined.extend(store.visible_orders());
        }
        assert_eq!(joined, store.sorted_orders());
    }

    #[test]
    fn test_toggle_sort() {
        let mut store = store();
        store.toggle_sort(OrderSortField::Date);
        assert_eq!(store.state().sort_order, SortDirection::Asc);

        store.toggle_sort(OrderSortField::Project);
        assert_eq!(store.state().sort_by, OrderSortField::Project);
        assert_eq!(store.state().sort_order, SortDirection::Asc);

        store.toggle_sort(OrderSortField::Project);
        assert_eq!(store.state().sort_order, SortDirection::Desc);
    }

    #[test]
    fn test_go_to_page_rejects_out_of_range() {
        let mut store = store_with_page_size(4);
        assert!(!store.go_to_page(0));
        assert!(!store.go_to_page(4));
        assert!(store.go_to_page(3));
        assert_eq!(store.state().current_page_number, 3);
        assert_eq!(ids(&store.visible_orders()).len(), 2);
        assert_eq!(store.page_numbers(), vec![1, 2, 3]);
    }

    #[test]
    fn test_stale_page_after_filter_is_empty_not_panic() {
        let mut store = store_with_page_size(4);
        store.set_current_page_number(3);
        store.set_search_query("Kate");
        assert!(store.visible_orders().is_empty());
        assert!(!store.is_all_visible_selected());
    }

    #[test]
    fn test_sort_equal_keys_keeps_multiset() {
        let mut store = store();
        store.set_sort_by(OrderSortField::Status);
        let sorted = store.sorted_orders();

        let mut sorted_ids = ids(&sorted);
        sorted_ids.sort();
        let mut original_ids = ids(store.orders());
        original_ids.sort();
        assert_eq!(sorted_ids, original_ids);

        let statuses: Vec<_> = sorted.iter().map(|o| o.status.code()).collect();
        let mut expected = statuses.clone();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(statuses, expected);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut orders = seed_orders();
        orders[1].id = "1".to_string();
        let result = OrderStore::new(orders, seed_metrics(), &DashboardConfig::default());
        assert!(matches!(result, Err(DashboardError::DuplicateOrderId(id)) if id == "1"));
    }

    #[test]
    fn test_set_orders_keeps_view_state() {
        let mut store = store();
        store.set_search_query("lane");
        store.toggle_one("1");
        let replacement: Vec<Order> = seed_orders()
            .into_iter()
            .filter(|o| o.status == OrderStatus::Rejected)
            .collect();
        store.set_orders(replacement).unwrap();
        assert_eq!(store.orders().len(), 2);
        assert_eq!(store.state().search_query, "lane");
        assert!(store.is_selected("1"));
    }

    #[test]
    fn test_page_window_follows_small_config() {
        let mut config = DashboardConfig::default();
        config.list.items_per_page = 1;
        config.list.max_visible_pages = 2;
        let mut store = OrderStore::seeded(&config).unwrap();

        assert!(store.go_to_page(6));
        assert_eq!(store.page_numbers(), vec![6, 7]);
        assert!(store.go_to_page(10));
        assert_eq!(store.page_numbers(), vec![10]);
    }
}
