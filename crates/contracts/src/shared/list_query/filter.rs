use super::Searchable;

/// Фильтрует список по поисковому запросу (подстрока, без учёта регистра).
///
/// Пустой запрос возвращает все элементы. Порядок элементов сохраняется.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    let filter_lower = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        title: &'static str,
        note: &'static str,
    }

    impl Searchable for Row {
        fn searchable_fields(&self) -> Vec<&str> {
            vec![self.title, self.note]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { title: "Alpha", note: "first" },
            Row { title: "Beta", note: "ALPHA copy" },
            Row { title: "Gamma", note: "third" },
        ]
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        assert_eq!(filter_list(&rows(), ""), rows());
    }

    #[test]
    fn test_filter_matches_any_field_case_insensitively() {
        let result = filter_list(&rows(), "aLpHa");
        let titles: Vec<_> = result.iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        assert!(filter_list(&rows(), "delta").is_empty());
    }

    #[test]
    fn test_whitespace_is_part_of_query() {
        let result = filter_list(&rows(), "a c");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Beta");
    }
}
