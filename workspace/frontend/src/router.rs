use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::components::settings::Settings;
use crate::pages::bookings::{BookingDetailPage, BookingsPage};
use crate::pages::disputes::{DisputeDetailPage, DisputesPage};
use crate::pages::payouts::{PayoutsPage, WalletPage};
use crate::pages::properties::PropertiesPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/bookings")]
    Bookings,
    #[at("/bookings/:id")]
    BookingDetail { id: String },
    #[at("/properties")]
    Properties,
    #[at("/disputes")]
    Disputes,
    #[at("/disputes/:id")]
    DisputeDetail { id: String },
    #[at("/payouts")]
    Payouts,
    #[at("/wallet")]
    Wallet,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Bookings => {
            log::trace!("Rendering Bookings page");
            html! { <BookingsPage /> }
        }
        Route::BookingDetail { id } => {
            log::trace!("Rendering Booking detail page for {}", id);
            html! { <BookingDetailPage {id} /> }
        }
        Route::Properties => {
            log::trace!("Rendering Properties page");
            html! { <PropertiesPage /> }
        }
        Route::Disputes => {
            log::trace!("Rendering Disputes page");
            html! { <DisputesPage /> }
        }
        Route::DisputeDetail { id } => {
            log::trace!("Rendering Dispute detail page for {}", id);
            html! { <DisputeDetailPage {id} /> }
        }
        Route::Payouts => {
            log::trace!("Rendering Payouts page");
            html! { <PayoutsPage /> }
        }
        Route::Wallet => {
            log::trace!("Rendering Wallet page");
            html! { <WalletPage /> }
        }
        Route::Settings => {
            log::trace!("Rendering Settings page");
            html! { <Layout title="Settings"><Settings /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1 class="text-2xl font-bold">{"404 Not Found"}</h1></Layout> }
        }
    }
}
