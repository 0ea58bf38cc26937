use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    #[prop_or_default]
    pub value: Option<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub on_search: Callback<Option<String>>,
}

/// Submits on Enter or the button; an empty box clears the search.
#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let input_ref = use_node_ref();

    let onsubmit = {
        let input_ref = input_ref.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let term = input.value().trim().to_string();
            on_search.emit((!term.is_empty()).then_some(term));
        })
    };

    html! {
        <form class="join" {onsubmit}>
            <input
                ref={input_ref}
                type="search"
                class="input input-bordered input-sm join-item"
                placeholder={props.placeholder.clone()}
                value={props.value.clone().unwrap_or_default()}
            />
            <button type="submit" class="btn btn-sm join-item">
                <i class="fas fa-search"></i>
            </button>
        </form>
    }
}
