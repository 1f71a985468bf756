pub mod aggregate;
pub mod seed;
pub mod store;

pub use aggregate::{Order, OrderSortField, OrderUser};
pub use seed::seed_orders;
pub use store::{OrderListState, OrderStore};
