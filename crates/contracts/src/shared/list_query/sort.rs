use super::{SortDirection, Sortable};

/// Сортирует список по указанному полю, возвращая новый вектор.
///
/// По убыванию используется обратный компаратор, а не разворот результата
/// сортировки по возрастанию. Относительный порядок элементов с равными
/// ключами не гарантируется.
pub fn sort_list<T: Sortable + Clone>(
    items: &[T],
    field: T::Field,
    direction: SortDirection,
) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| direction.apply(a.compare_by_field(b, field)));
    sorted
}
