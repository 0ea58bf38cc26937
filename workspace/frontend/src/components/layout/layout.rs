//! Page frame shared by every screen.

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::breadcrumb::Breadcrumb;
use super::navbar::Navbar;
use super::sidebar::Sidebar;
use crate::Route;

/// Checkbox that opens the sidebar on narrow screens.
pub(crate) const DRAWER_ID: &str = "rentadmin-drawer";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: AttrValue,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
}

/// Sidebar entry a route belongs to. Detail pages light up their list.
pub fn section(route: &Route) -> Route {
    match route {
        Route::Home | Route::BookingDetail { .. } => Route::Bookings,
        Route::DisputeDetail { .. } => Route::Disputes,
        other => other.clone(),
    }
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let active = use_route::<Route>().map(|route| section(&route));
    let drawer = use_node_ref();

    let on_navigate = {
        let drawer = drawer.clone();
        Callback::from(move |_: ()| {
            if let Some(toggle) = drawer.cast::<HtmlInputElement>() {
                toggle.set_checked(false);
            }
        })
    };

    html! {
        <div class="drawer lg:drawer-open">
            <input id={DRAWER_ID} ref={drawer} type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex min-h-screen flex-col bg-base-200">
                <Navbar title={props.title.clone()} on_refresh={props.on_refresh.clone()} />
                <div class="flex flex-1 flex-col gap-4 p-6">
                    <Breadcrumb />
                    <main class="flex-1">{ for props.children.iter() }</main>
                </div>
            </div>
            <Sidebar {active} {on_navigate} />
        </div>
    }
}
