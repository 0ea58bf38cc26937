use yew::prelude::*;

use crate::components::bookings::{BookingDetail, Bookings};
use crate::components::layout::layout::Layout;

#[function_component(BookingsPage)]
pub fn bookings_page() -> Html {
    let refresh_trigger = use_state(|| 0);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            log::debug!("Bookings page refresh triggered");
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    html! {
        <Layout title="Bookings" on_refresh={Some(on_refresh)}>
            <Bookings key={*refresh_trigger} />
        </Layout>
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingDetailPageProps {
    pub id: String,
}

#[function_component(BookingDetailPage)]
pub fn booking_detail_page(props: &BookingDetailPageProps) -> Html {
    let refresh_trigger = use_state(|| 0);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| refresh_trigger.set(*refresh_trigger + 1))
    };

    html! {
        <Layout title="Booking" on_refresh={Some(on_refresh)}>
            <BookingDetail key={*refresh_trigger} id={props.id.clone()} />
        </Layout>
    }
}
