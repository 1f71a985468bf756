use crate::shared::icons::icon;
use contracts::shared::list_query::PaginationInfo;
use leptos::prelude::*;

/// PaginationControls component - prev/next buttons and a window of page numbers
///
/// Pages are 1-indexed. Hidden entirely when there is at most one page.
#[component]
pub fn PaginationControls(
    /// Current pagination state
    #[prop(into)]
    info: Signal<PaginationInfo>,

    /// Page numbers to render as buttons
    #[prop(into)]
    page_numbers: Signal<Vec<usize>>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || info.get().should_show_controls()>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let current = info.get().current_page;
                        on_page_change.run(current.saturating_sub(1));
                    }
                    disabled=move || !info.get().has_previous_page
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>

                <For
                    each=move || page_numbers.get()
                    key=|page| *page
                    children=move |page| {
                        view! {
                            <button
                                class="pagination-btn pagination-btn--page"
                                class:pagination-btn--active=move || info.get().current_page == page
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    }
                />

                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let current = info.get().current_page;
                        on_page_change.run(current + 1);
                    }
                    disabled=move || !info.get().has_next_page
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>

                <span class="pagination-info">
                    {move || {
                        let info = info.get();
                        format!("{} / {} ({})", info.current_page, info.total_pages, info.total_items)
                    }}
                </span>
            </div>
        </Show>
    }
}
