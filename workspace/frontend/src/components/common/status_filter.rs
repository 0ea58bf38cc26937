use ::common::humanize;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const ALL: &str = "ALL";

#[derive(Properties, PartialEq)]
pub struct StatusFilterProps {
    pub options: Vec<&'static str>,
    pub selected: Option<String>,
    pub on_change: Callback<Option<String>>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Status select with an "All" entry that clears the filter.
#[function_component(StatusFilter)]
pub fn status_filter(props: &StatusFilterProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            log::debug!("Status filter changed to {}", value);
            on_change.emit((value != ALL).then_some(value));
        })
    };

    let selected = props.selected.as_deref().unwrap_or(ALL);

    html! {
        <select class="select select-bordered select-sm" {onchange} disabled={props.disabled}>
            <option value={ALL} selected={selected == ALL}>{"All statuses"}</option>
            {for props.options.iter().map(|option| html! {
                <option value={*option} selected={selected == *option}>{humanize(option)}</option>
            })}
        </select>
    }
}
