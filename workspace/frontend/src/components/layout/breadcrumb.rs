use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[derive(Clone, PartialEq)]
struct BreadcrumbItem {
    label: String,
    route: Route,
}

impl BreadcrumbItem {
    fn new(label: impl Into<String>, route: Route) -> Self {
        Self { label: label.into(), route }
    }
}

fn trail(route: &Route) -> Vec<BreadcrumbItem> {
    let home = BreadcrumbItem::new("Home", Route::Home);
    match route {
        Route::Home => vec![home],
        Route::Bookings => vec![home, BreadcrumbItem::new("Bookings", Route::Bookings)],
        Route::BookingDetail { id } => vec![
            home,
            BreadcrumbItem::new("Bookings", Route::Bookings),
            BreadcrumbItem::new(format!("Booking {}", id), route.clone()),
        ],
        Route::Properties => vec![home, BreadcrumbItem::new("Properties", Route::Properties)],
        Route::Disputes => vec![home, BreadcrumbItem::new("Disputes", Route::Disputes)],
        Route::DisputeDetail { id } => vec![
            home,
            BreadcrumbItem::new("Disputes", Route::Disputes),
            BreadcrumbItem::new(format!("Dispute {}", id), route.clone()),
        ],
        Route::Payouts => vec![home, BreadcrumbItem::new("Payouts", Route::Payouts)],
        Route::Wallet => vec![home, BreadcrumbItem::new("Wallet", Route::Wallet)],
        Route::Settings => vec![home, BreadcrumbItem::new("Settings", Route::Settings)],
        Route::NotFound => vec![home, BreadcrumbItem::new("404", Route::NotFound)],
    }
}

#[function_component(Breadcrumb)]
pub fn breadcrumb() -> Html {
    let location = use_location();

    let breadcrumb_items = location
        .as_ref()
        .and_then(|loc| Route::recognize(loc.path()))
        .map(|route| trail(&route))
        .unwrap_or_else(|| vec![BreadcrumbItem::new("Home", Route::Home)]);

    html! {
        <div class="breadcrumbs text-sm py-0">
            <ul>
                {for breadcrumb_items.iter().enumerate().map(|(idx, item)| {
                    let is_last = idx == breadcrumb_items.len() - 1;
                    html! {
                        <li>
                            if is_last {
                                <span class="text-primary font-semibold">{&item.label}</span>
                            } else {
                                <Link<Route> to={item.route.clone()} classes="hover:text-primary">
                                    {&item.label}
                                </Link<Route>>
                            }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
