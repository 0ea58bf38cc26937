use model::PageInfo;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page_info: PageInfo,
    /// Rows currently on screen
    pub shown: usize,
    /// A fetch is in flight; every control is disabled
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub on_prev: Callback<()>,
    #[prop_or_default]
    pub on_next: Callback<()>,
}

fn page_label(page_info: &PageInfo, shown: usize) -> String {
    match page_info {
        PageInfo::Paged { page, total_pages: Some(pages), total: Some(total), .. } => {
            format!("Page {} of {} ({} items)", page, pages, total)
        }
        PageInfo::Paged { page, total_pages: Some(pages), .. } => format!("Page {} of {}", page, pages),
        PageInfo::Paged { page, .. } => format!("Page {}", page),
        PageInfo::Cursor { total: Some(total), .. } => format!("{} of {} shown", shown, total),
        PageInfo::Cursor { .. } => format!("{} shown", shown),
    }
}

/// Prev/Next controls for page-numbered lists, "Load more" for cursor
/// lists.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let label = page_label(&props.page_info, props.shown);

    let on_prev = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_prev.emit(());
        })
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_next.emit(());
        })
    };

    match &props.page_info {
        PageInfo::Paged { page, has_prev_page, has_next_page, .. } => {
            let can_prev = !props.loading && (*has_prev_page || *page > 1);
            let can_next = !props.loading && *has_next_page;
            html! {
                <div class="flex justify-center items-center gap-2 my-4">
                    <button class="btn btn-sm" disabled={!can_prev} onclick={on_prev}>
                        <i class="fas fa-chevron-left"></i>
                        {" Prev"}
                    </button>
                    <span class="text-sm text-base-content/70 px-2">{label}</span>
                    <button class="btn btn-sm" disabled={!can_next} onclick={on_next}>
                        {"Next "}
                        <i class="fas fa-chevron-right"></i>
                    </button>
                </div>
            }
        }
        PageInfo::Cursor { next_cursor, has_more, .. } => {
            let can_more = !props.loading && *has_more && next_cursor.is_some();
            html! {
                <div class="flex justify-between items-center my-4">
                    <span class="text-sm text-base-content/70">{label}</span>
                    <button class="btn btn-sm btn-outline" disabled={!can_more} onclick={on_next}>
                        if props.loading {
                            <span class="loading loading-spinner loading-xs"></span>
                        }
                        {"Load more"}
                    </button>
                </div>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label() {
        let paged = PageInfo::Paged {
            page: 2,
            total_pages: Some(5),
            total: Some(48),
            has_next_page: true,
            has_prev_page: true,
        };
        assert_eq!(page_label(&paged, 10), "Page 2 of 5 (48 items)");

        let cursor = PageInfo::Cursor { next_cursor: None, has_more: false, total: None };
        assert_eq!(page_label(&cursor, 3), "3 shown");
    }
}
