use yew::prelude::*;
use yew_router::prelude::*;

use super::layout::DRAWER_ID;
use crate::Route;

struct NavItem {
    label: &'static str,
    icon: &'static str,
    route: Route,
}

fn resources() -> [NavItem; 5] {
    [
        NavItem { label: "Bookings", icon: "fas fa-calendar-alt", route: Route::Bookings },
        NavItem { label: "Properties", icon: "fas fa-building", route: Route::Properties },
        NavItem { label: "Disputes", icon: "fas fa-gavel", route: Route::Disputes },
        NavItem { label: "Payouts", icon: "fas fa-money-check-alt", route: Route::Payouts },
        NavItem { label: "Wallet", icon: "fas fa-wallet", route: Route::Wallet },
    ]
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Section to highlight
    #[prop_or_default]
    pub active: Option<Route>,
    pub on_navigate: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    let entry = |item: NavItem| {
        let is_active = props.active.as_ref() == Some(&item.route);
        let onclick = props.on_navigate.reform(|_: MouseEvent| ());
        html! {
            <li {onclick}>
                <Link<Route> to={item.route} classes={classes!(is_active.then_some("active"))}>
                    <i class={classes!(item.icon, "w-5")}></i>
                    {item.label}
                </Link<Route>>
            </li>
        }
    };
    let settings = NavItem { label: "Settings", icon: "fas fa-cog", route: Route::Settings };

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for={DRAWER_ID}></label>
            <aside class="flex min-h-full w-64 flex-col border-r border-base-300 bg-base-100">
                <div class="flex items-center gap-2 px-6 py-5">
                    <i class="fas fa-house-user text-primary text-xl"></i>
                    <span class="text-lg font-bold">{"RentAdmin"}</span>
                    <span class="badge badge-ghost badge-sm">{"staff"}</span>
                </div>
                <ul class="menu flex-1 px-3">
                    <li class="menu-title">{"Operations"}</li>
                    {for resources().into_iter().map(&entry)}
                </ul>
                <ul class="menu px-3 pb-4">
                    {entry(settings)}
                </ul>
            </aside>
        </div>
    }
}
