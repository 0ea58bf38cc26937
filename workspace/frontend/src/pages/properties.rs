use yew::prelude::*;

use crate::components::layout::layout::Layout;
use crate::components::properties::Properties;

#[function_component(PropertiesPage)]
pub fn properties_page() -> Html {
    let refresh_trigger = use_state(|| 0);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            log::debug!("Properties page refresh triggered");
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    html! {
        <Layout title="Property Verification" on_refresh={Some(on_refresh)}>
            <Properties key={*refresh_trigger} />
        </Layout>
    }
}
