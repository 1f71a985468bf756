//! Универсальный конвейер представления списка: поиск, сортировка,
//! пагинация и выбор строк. Все функции чистые и не изменяют входные данные.
//!
//! ```text
//! items → filter_list → sort_list → paginate → (render)
//!                                       ↓
//!                                  SelectionSet
//! ```

pub mod filter;
pub mod pagination;
pub mod selection;
pub mod sort;

pub use filter::filter_list;
pub use pagination::{page_numbers, paginate, total_pages, PaginationInfo};
pub use selection::SelectionSet;
pub use sort::sort_list;

use crate::shared::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Текстовые поля, по которым выполняется поиск
    fn searchable_fields(&self) -> Vec<&str>;

    /// Проверяет, содержит ли хотя бы одно поле подстроку.
    /// `filter_lower` должен быть уже приведён к нижнему регистру.
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.searchable_fields()
            .iter()
            .any(|value| value.to_lowercase().contains(filter_lower))
    }
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Перечисление полей, по которым можно сортировать
    type Field: Copy;

    /// Сравнивает два объекта по указанному полю (по возрастанию)
    fn compare_by_field(&self, other: &Self, field: Self::Field) -> Ordering;
}

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn code(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Asc)
    }

    /// Применяет направление к результату сравнения по возрастанию
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(DashboardError::UnknownSortDirection(other.to_string())),
        }
    }
}

/// Сравнение строк без учёта регистра
pub fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_toggle_and_parse() {
        assert_eq!(SortDirection::default(), SortDirection::Desc);
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_compare_case_insensitive() {
        assert_eq!(compare_case_insensitive("kate", "KATE"), Ordering::Equal);
        assert_eq!(compare_case_insensitive("andi", "Drew"), Ordering::Less);
        // по байтам 'B' < 'a'
        assert_eq!(compare_case_insensitive("a", "B"), Ordering::Less);
        assert_eq!("a".cmp("B"), Ordering::Greater);
    }
}
