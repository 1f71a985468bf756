use crate::enums::OrderStatus;
use crate::shared::error::DashboardError;
use crate::shared::list_query::{compare_case_insensitive, Searchable, Sortable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

// ============================================================================
// Aggregate
// ============================================================================

/// Автор заказа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUser {
    pub name: String,
    /// Короткая подпись для аватара (инициалы)
    pub avatar: String,
}

/// Заказ в списке дашборда
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Уникальный идентификатор, ключ выбора строк
    pub id: String,

    /// Код заказа для отображения, например "#CM9801"
    #[serde(rename = "orderId")]
    pub order_id: String,

    pub user: OrderUser,
    pub project: String,
    pub address: String,

    /// Строка для отображения ("Just now", "Feb 2, 2023"); сортируется лексически
    pub date: String,

    pub status: OrderStatus,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        order_id: impl Into<String>,
        user: OrderUser,
        project: impl Into<String>,
        address: impl Into<String>,
        date: impl Into<String>,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: id.into(),
            order_id: order_id.into(),
            user,
            project: project.into(),
            address: address.into(),
            date: date.into(),
            status,
        }
    }
}

impl Searchable for Order {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.order_id.as_str(),
            self.user.name.as_str(),
            self.project.as_str(),
            self.address.as_str(),
            self.status.code(),
        ]
    }
}

impl Sortable for Order {
    type Field = OrderSortField;

    fn compare_by_field(&self, other: &Self, field: OrderSortField) -> Ordering {
        compare_case_insensitive(field.sort_key(self), field.sort_key(other))
    }
}

// ============================================================================
// Sort field
// ============================================================================

/// Поля, по которым можно сортировать список заказов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderSortField {
    OrderId,
    User,
    Project,
    Address,
    Date,
    Status,
}

impl OrderSortField {
    /// Значение поля, по которому сравниваются заказы.
    /// `User` сравнивается по имени пользователя.
    pub fn sort_key<'a>(&self, order: &'a Order) -> &'a str {
        match self {
            OrderSortField::OrderId => order.order_id.as_str(),
            OrderSortField::User => order.user.name.as_str(),
            OrderSortField::Project => order.project.as_str(),
            OrderSortField::Address => order.address.as_str(),
            OrderSortField::Date => order.date.as_str(),
            OrderSortField::Status => order.status.code(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            OrderSortField::OrderId => "orderId",
            OrderSortField::User => "user",
            OrderSortField::Project => "project",
            OrderSortField::Address => "address",
            OrderSortField::Date => "date",
            OrderSortField::Status => "status",
        }
    }

    /// Заголовок колонки
    pub fn label(&self) -> &'static str {
        match self {
            OrderSortField::OrderId => "Order ID",
            OrderSortField::User => "User",
            OrderSortField::Project => "Project",
            OrderSortField::Address => "Address",
            OrderSortField::Date => "Date",
            OrderSortField::Status => "Status",
        }
    }

    pub fn all() -> [OrderSortField; 6] {
        [
            OrderSortField::OrderId,
            OrderSortField::User,
            OrderSortField::Project,
            OrderSortField::Address,
            OrderSortField::Date,
            OrderSortField::Status,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|field| field.code() == code)
    }
}

impl FromStr for OrderSortField {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DashboardError::UnknownSortField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, user: &str, date: &str, status: OrderStatus) -> Order {
        Order::new(
            id,
            format!("#CM98{:0>2}", id),
            OrderUser {
                name: user.to_string(),
                avatar: String::new(),
            },
            "Project",
            "Address",
            date,
            status,
        )
    }

    #[test]
    fn test_user_field_compares_names_case_insensitively() {
        let a = order("1", "andi Lane", "x", OrderStatus::Complete);
        let b = order("2", "Drew Cano", "x", OrderStatus::Complete);
        assert_eq!(a.compare_by_field(&b, OrderSortField::User), Ordering::Less);
        assert_eq!(b.compare_by_field(&a, OrderSortField::User), Ordering::Greater);
    }

    #[test]
    fn test_date_is_compared_lexically() {
        let a = order("1", "A", "Yesterday", OrderStatus::Complete);
        let b = order("2", "A", "Feb 2, 2023", OrderStatus::Complete);
        assert_eq!(a.compare_by_field(&b, OrderSortField::Date), Ordering::Greater);
    }

    #[test]
    fn test_status_is_compared_by_code() {
        let a = order("1", "A", "x", OrderStatus::Approved);
        let b = order("2", "A", "x", OrderStatus::InProgress);
        assert_eq!(a.compare_by_field(&b, OrderSortField::Status), Ordering::Less);
    }

    #[test]
    fn test_status_code_is_searchable() {
        let o = order("1", "A", "x", OrderStatus::InProgress);
        assert!(o.matches_filter("in-prog"));
        assert!(!o.matches_filter("in progress"));
    }

    #[test]
    fn test_sort_field_codes() {
        for field in OrderSortField::all() {
            assert_eq!(field.code().parse::<OrderSortField>().unwrap(), field);
        }
        assert!("price".parse::<OrderSortField>().is_err());
        assert_eq!(
            serde_json::to_string(&OrderSortField::OrderId).unwrap(),
            "\"orderId\""
        );
    }

    #[test]
    fn test_searchable_fields_of_seed_orders() {
        use super::super::seed::seed_orders;
        use crate::shared::list_query::filter_list;

        let orders = seed_orders();
        let count = |query: &str| filter_list(&orders, query).len();

        // date и avatar в поиске не участвуют
        assert_eq!(count("feb"), 0);
        assert_eq!(count("KM"), 0);
        // orderId, address, project
        assert_eq!(count("#cm9807"), 1);
        assert_eq!(count("boston"), 1);
        assert_eq!(count("blog"), 1);
        // status по коду, без учёта регистра
        assert_eq!(count("REJECT"), 2);
    }
}
