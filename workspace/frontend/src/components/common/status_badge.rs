use ::common::{humanize, status_badge_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: Option<AttrValue>,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    match &props.status {
        Some(status) => html! {
            <span class={classes!("badge", status_badge_class(status))}>{humanize(status)}</span>
        },
        None => html! { <span class="text-base-content/50">{"-"}</span> },
    }
}
