use serde::{Deserialize, Serialize};

/// Состояние пагинации для отображения в UI (страницы нумеруются с 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PaginationInfo {
    pub fn new(current_page: usize, total_items: usize, items_per_page: usize) -> Self {
        let total_pages = total_pages(total_items, items_per_page);
        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        }
    }

    /// Пагинатор скрывается, когда страниц не больше одной
    pub fn should_show_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// Допустимый номер страницы для перехода
    pub fn is_valid_page(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages
    }
}

/// `ceil(total_items / page_size)`; 0 для пустого списка
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Возвращает срез `[(page-1)*page_size, page*page_size)`, обрезанный по длине.
/// Страница вне диапазона даёт пустой результат.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}

/// Номера страниц для пагинатора: не больше `max_visible`, текущая страница
/// всегда внутри окна (для окна из 5 оно начинается за две страницы до текущей).
pub fn page_numbers(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if total_pages <= max_visible {
        return (1..=total_pages).collect();
    }
    let offset = max_visible.saturating_sub(1) / 2;
    let start = current_page.saturating_sub(offset).max(1);
    let end = total_pages.min(start + max_visible - 1);
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_pages_cover_input_without_gaps() {
        let items: Vec<u32> = (0..23).collect();
        let pages = total_pages(items.len(), 5);
        assert_eq!(pages, 5);

        let joined: Vec<u32> = (1..=pages).flat_map(|p| paginate(&items, p, 5)).collect();
        assert_eq!(joined, items);
        assert_eq!(paginate(&items, 5, 5), vec![20, 21, 22]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items = vec!['a', 'b', 'c'];
        assert!(paginate(&items, 0, 2).is_empty());
        assert!(paginate(&items, 3, 2).is_empty());
        assert!(paginate(&items, usize::MAX, 2).is_empty());
        assert!(paginate::<char>(&[], 1, 2).is_empty());
    }

    #[test]
    fn test_navigation_bounds() {
        let info = PaginationInfo::new(1, 10, 10);
        assert_eq!(info.total_pages, 1);
        assert!(!info.has_next_page);
        assert!(!info.has_previous_page);
        assert!(!info.should_show_controls());

        let info = PaginationInfo::new(2, 25, 10);
        assert!(info.has_next_page);
        assert!(info.has_previous_page);
        assert!(info.is_valid_page(3));
        assert!(!info.is_valid_page(4));
        assert!(!info.is_valid_page(0));

        let empty = PaginationInfo::new(1, 0, 10);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_next_page);
        assert!(!empty.is_valid_page(1));
    }

    #[test]
    fn test_page_numbers_window() {
        assert_eq!(page_numbers(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_numbers(1, 0, 5), Vec::<usize>::new());
        assert_eq!(page_numbers(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(6, 10, 5), vec![4, 5, 6, 7, 8]);
        // у конца окно укорачивается, а не сдвигается
        assert_eq!(page_numbers(10, 10, 5), vec![8, 9, 10]);
    }

    #[test]
    fn test_small_window_contains_current_page() {
        assert_eq!(page_numbers(6, 10, 1), vec![6]);
        assert_eq!(page_numbers(6, 10, 2), vec![6, 7]);
        assert_eq!(page_numbers(10, 10, 2), vec![10]);
        assert_eq!(page_numbers(6, 10, 3), vec![5, 6, 7]);
        for max_visible in 1..=6 {
            for current in 1..=10 {
                let window = page_numbers(current, 10, max_visible);
                assert!(window.contains(&current), "{current} not in {window:?}");
                assert!(window.len() <= max_visible);
            }
        }
    }
}
