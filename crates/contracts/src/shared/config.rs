use crate::domain::a001_order::OrderSortField;
use crate::shared::error::DashboardError;
use crate::shared::list_query::SortDirection;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub list: ListConfig,
}

/// Настройки списка заказов
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    /// Размер страницы, неизменен в течение сессии
    pub items_per_page: usize,
    /// Сколько номеров страниц показывать в пагинаторе
    pub max_visible_pages: usize,
    pub default_sort_by: OrderSortField,
    pub default_sort_order: SortDirection,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[list]
items_per_page = 10
max_visible_pages = 5
default_sort_by = "date"
default_sort_order = "desc"
"#;

impl DashboardConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(contents: &str) -> Result<Self, DashboardError> {
        let config: DashboardConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Embedded configuration
    pub fn embedded() -> Result<Self, DashboardError> {
        log::debug!("Using default embedded configuration");
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.list.items_per_page == 0 {
            return Err(DashboardError::InvalidConfig(
                "items_per_page must be positive".into(),
            ));
        }
        if self.list.max_visible_pages == 0 {
            return Err(DashboardError::InvalidConfig(
                "max_visible_pages must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            list: ListConfig {
                items_per_page: 10,
                max_visible_pages: 5,
                default_sort_by: OrderSortField::Date,
                default_sort_order: SortDirection::Desc,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = DashboardConfig::embedded();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.list.items_per_page, 10);
        assert_eq!(config.list.default_sort_by, OrderSortField::Date);
        assert_eq!(config.list.default_sort_order, SortDirection::Desc);
    }

    #[test]
    fn test_override_config() {
        let config = DashboardConfig::from_toml_str(
            r#"
[list]
items_per_page = 3
max_visible_pages = 7
default_sort_by = "orderId"
default_sort_order = "asc"
"#,
        )
        .unwrap();
        assert_eq!(config.list.items_per_page, 3);
        assert_eq!(config.list.max_visible_pages, 7);
        assert_eq!(config.list.default_sort_by, OrderSortField::OrderId);
        assert_eq!(config.list.default_sort_order, SortDirection::Asc);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = DashboardConfig::from_toml_str(
            r#"
[list]
items_per_page = 0
max_visible_pages = 5
default_sort_by = "date"
default_sort_order = "desc"
"#,
        );
        assert!(matches!(result, Err(DashboardError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_sort_field_is_parse_error() {
        let result = DashboardConfig::from_toml_str(
            r#"
[list]
items_per_page = 10
max_visible_pages = 5
default_sort_by = "price"
default_sort_order = "desc"
"#,
        );
        assert!(matches!(result, Err(DashboardError::ConfigParse(_))));
    }
}
