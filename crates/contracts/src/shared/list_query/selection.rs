use serde::{Deserialize, Serialize};

/// Набор выбранных идентификаторов строк.
///
/// Хранит порядок добавления. Не очищается при смене фильтра или страницы:
/// идентификаторы, которые больше не видны, остаются выбранными.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Добавляет id, если его нет, иначе удаляет
    pub fn toggle_one(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// Переключатель "выбрать все" для видимой страницы.
    ///
    /// Если размер выбора равен числу видимых строк (и оно не ноль), выбор
    /// сбрасывается. Иначе выбор заменяется ровно на видимые id, в том числе
    /// теряются id с других страниц. Сравниваются только размеры.
    pub fn select_all<'a, I>(&mut self, visible_ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let visible: Vec<String> = visible_ids.into_iter().map(str::to_string).collect();
        if !visible.is_empty() && self.ids.len() == visible.len() {
            self.ids.clear();
        } else {
            self.ids = visible;
        }
    }

    /// Состояние чекбокса "выбрать все" в заголовке таблицы
    pub fn is_all_selected(&self, visible_count: usize) -> bool {
        visible_count > 0 && self.ids.len() == visible_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut selection = SelectionSet::new();
        selection.toggle_one("1");
        let before = selection.clone();

        selection.toggle_one("7");
        assert!(selection.contains("7"));
        selection.toggle_one("7");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_toggle_accepts_unknown_ids() {
        let mut selection = SelectionSet::new();
        selection.toggle_one("does-not-exist");
        assert_eq!(selection.ids(), ["does-not-exist".to_string()]);
    }

    #[test]
    fn test_select_all_toggles() {
        let mut selection = SelectionSet::new();
        let visible = ["1", "2", "3"];

        selection.select_all(visible);
        assert_eq!(selection.len(), 3);
        assert!(selection.is_all_selected(3));

        selection.select_all(visible);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_replaces_partial_selection() {
        let mut selection = SelectionSet::new();
        selection.toggle_one("2");
        selection.toggle_one("99");
        selection.select_all(["1", "2", "3"]);
        assert_eq!(selection.ids(), ["1", "2", "3"].map(String::from));
    }

    #[test]
    fn test_select_all_compares_sizes_only() {
        // другая страница того же размера: выбор сбрасывается
        let mut selection = SelectionSet::new();
        selection.select_all(["1", "2"]);
        selection.select_all(["3", "4"]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_on_empty_page() {
        let mut selection = SelectionSet::new();
        selection.toggle_one("5");
        selection.select_all(std::iter::empty());
        assert!(selection.is_empty());
        assert!(!selection.is_all_selected(0));
    }
}
