//! Демонстрационные заказы, которыми заполняется хранилище при создании

use super::aggregate::{Order, OrderUser};
use crate::enums::OrderStatus;

fn user(name: &str, avatar: &str) -> OrderUser {
    OrderUser {
        name: name.to_string(),
        avatar: avatar.to_string(),
    }
}

pub fn seed_orders() -> Vec<Order> {
    vec![
        Order::new("1", "#CM9801", user("Natali Craig", "NC"), "Landing Page", "Meadow Lane Oakland", "Just now", OrderStatus::InProgress),
        Order::new("2", "#CM9802", user("Kate Morrison", "KM"), "CRM Admin pages", "Larry San Francisco", "A minute ago", OrderStatus::Complete),
        Order::new("3", "#CM9803", user("Drew Cano", "DC"), "Client Project", "Bagwell Avenue Ocala", "1 hour ago", OrderStatus::Pending),
        Order::new("4", "#CM9804", user("Orlando Diggs", "OD"), "Admin Dashboard", "Washburn Baton Rouge", "Yesterday", OrderStatus::Approved),
        Order::new("5", "#CM9805", user("Andi Lane", "AL"), "App Landing Page", "Nest Lane Olivette", "Feb 2, 2023", OrderStatus::Rejected),
        Order::new("6", "#CM9806", user("Kate Morrison", "KM"), "E-commerce Site", "Main Street Boston", "Feb 1, 2023", OrderStatus::InProgress),
        Order::new("7", "#CM9807", user("Drew Cano", "DC"), "Portfolio Website", "Oak Avenue Seattle", "Jan 31, 2023", OrderStatus::Complete),
        Order::new("8", "#CM9808", user("Natali Craig", "NC"), "Blog Platform", "Pine Street Denver", "Jan 30, 2023", OrderStatus::Pending),
        Order::new("9", "#CM9809", user("Orlando Diggs", "OD"), "Mobile App", "Cedar Lane Austin", "Jan 29, 2023", OrderStatus::Approved),
        Order::new("10", "#CM9810", user("Andi Lane", "AL"), "Analytics Dashboard", "Nest Lane Olivette", "Jan 28, 2023", OrderStatus::Rejected),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let orders = seed_orders();
        let ids: HashSet<_> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), orders.len());
        assert_eq!(orders.len(), 10);
    }

    #[test]
    fn test_seed_json_shape() {
        let value = serde_json::to_value(&seed_orders()[0]).unwrap();
        assert_eq!(value["orderId"], "#CM9801");
        assert_eq!(value["user"]["avatar"], "NC");
        assert_eq!(value["status"], "in-progress");
    }
}
