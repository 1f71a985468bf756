use crate::shared::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Статусы заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    /// Код статуса (участвует в поиске и сортировке)
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Complete => "complete",
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Rejected => "rejected",
        }
    }

    /// Человекочитаемое название: каждое слово кода с заглавной буквы
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Complete => "Complete",
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
        }
    }

    /// CSS-класс индикатора статуса в таблице
    pub fn css_modifier(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "status-dot status-dot--in-progress",
            OrderStatus::Complete => "status-dot status-dot--complete",
            OrderStatus::Pending => "status-dot status-dot--pending",
            OrderStatus::Approved => "status-dot status-dot--approved",
            OrderStatus::Rejected => "status-dot status-dot--rejected",
        }
    }

    /// Получить все статусы
    pub fn all() -> [OrderStatus; 5] {
        [
            OrderStatus::InProgress,
            OrderStatus::Complete,
            OrderStatus::Pending,
            OrderStatus::Approved,
            OrderStatus::Rejected,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|status| status.code() == code)
    }
}

impl FromStr for OrderStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DashboardError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_capitalizes_each_word() {
        assert_eq!(OrderStatus::InProgress.display_name(), "In Progress");
        assert_eq!(OrderStatus::Rejected.display_name(), "Rejected");
    }

    #[test]
    fn test_code_parsing() {
        for status in OrderStatus::all() {
            assert_eq!(status.code().parse::<OrderStatus>().unwrap(), status);
        }
        assert!(matches!(
            "cancelled".parse::<OrderStatus>(),
            Err(DashboardError::UnknownStatus(code)) if code == "cancelled"
        ));
    }

    #[test]
    fn test_serde_uses_kebab_case_codes() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: OrderStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(parsed, OrderStatus::Approved);
    }
}
