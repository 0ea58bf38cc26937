use yew::prelude::*;

use crate::components::disputes::{DisputeDetail, Disputes};
use crate::components::layout::layout::Layout;

#[function_component(DisputesPage)]
pub fn disputes_page() -> Html {
    let refresh_trigger = use_state(|| 0);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            log::debug!("Disputes page refresh triggered");
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    html! {
        <Layout title="Disputes" on_refresh={Some(on_refresh)}>
            <Disputes key={*refresh_trigger} />
        </Layout>
    }
}

#[derive(Properties, PartialEq)]
pub struct DisputeDetailPageProps {
    pub id: String,
}

#[function_component(DisputeDetailPage)]
pub fn dispute_detail_page(props: &DisputeDetailPageProps) -> Html {
    let refresh_trigger = use_state(|| 0);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| refresh_trigger.set(*refresh_trigger + 1))
    };

    html! {
        <Layout title="Dispute" on_refresh={Some(on_refresh)}>
            <DisputeDetail key={*refresh_trigger} id={props.id.clone()} />
        </Layout>
    }
}
