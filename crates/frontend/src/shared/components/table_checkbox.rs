use leptos::prelude::*;

/// Компонент чекбокса для таблицы с единым BEM-стилем
///
/// Рендерит <td> (или <th> в заголовке) с чекбоксом внутри.
/// Клик на чекбокс не вызывает клик на строку (stop_propagation).
///
/// # BEM классы
/// - `.table__cell--checkbox` - обёртка
/// - `.table__checkbox` - input элемент
///
/// # Пример использования
/// ```rust,ignore
/// <TableCheckbox
///     checked=Signal::derive(move || ctx.store.with(|s| s.is_selected(&id)))
///     on_change=Callback::new(move |_| ctx.toggle_one(id.clone()))
///     label=format!("Select order {}", order_id)
/// />
/// ```
#[component]
pub fn TableCheckbox(
    /// Сигнал состояния чекбокса
    #[prop(into)]
    checked: Signal<bool>,
    /// Callback вызывается при изменении состояния
    on_change: Callback<bool>,
    /// aria-label для чекбокса
    #[prop(optional, into)]
    label: String,
    /// Рендерить как ячейку заголовка
    #[prop(optional)]
    header: bool,
) -> impl IntoView {
    let input = view! {
        <input
            type="checkbox"
            class="table__checkbox"
            aria-label=label
            prop:checked=checked
            on:change=move |ev| {
                let checked = event_target_checked(&ev);
                on_change.run(checked);
            }
        />
    };

    if header {
        view! {
            <th class="table__cell table__cell--checkbox">{input}</th>
        }
        .into_any()
    } else {
        view! {
            <td
                class="table__cell table__cell--checkbox"
                on:click=|e| e.stop_propagation()
            >
                {input}
            </td>
        }
        .into_any()
    }
}
