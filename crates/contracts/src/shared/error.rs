use thiserror::Error;

/// Ошибки слоя данных дашборда
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown order status: {0}")]
    UnknownStatus(String),

    #[error("unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),

    #[error("duplicate order id: {0}")]
    DuplicateOrderId(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
