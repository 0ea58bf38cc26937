use yew::prelude::*;

use crate::components::layout::layout::Layout;
use crate::components::payouts::{Payouts, WalletView};

#[function_component(PayoutsPage)]
pub fn payouts_page() -> Html {
    let refresh_trigger = use_state(|| 0);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            log::debug!("Payouts page refresh triggered");
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    html! {
        <Layout title="Payouts" on_refresh={Some(on_refresh)}>
            <Payouts key={*refresh_trigger} />
        </Layout>
    }
}

#[function_component(WalletPage)]
pub fn wallet_page() -> Html {
    let generation = use_state(|| 0u32);

    let on_refresh = {
        let generation = generation.clone();
        Callback::from(move |_| generation.set(*generation + 1))
    };

    html! {
        <Layout title="Wallet" on_refresh={Some(on_refresh)}>
            <WalletView generation={*generation} />
        </Layout>
    }
}
