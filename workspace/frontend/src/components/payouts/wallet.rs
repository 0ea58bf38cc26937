use ::common::{format_amount, format_datetime, format_optional_amount, humanize, or_dash};
use controller::DetailState;
use model::Wallet;
use yew::prelude::*;

use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::hooks::{use_detail, use_repositories};

#[derive(Properties, PartialEq)]
pub struct WalletViewProps {
    /// Bumped by the page to force a reload
    #[prop_or_default]
    pub generation: u32,
}

fn render(wallet: &Wallet) -> Html {
    let currency = wallet.currency.as_deref();

    html! {
        <div class="flex flex-col gap-6">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-primary"><i class="fas fa-wallet text-3xl"></i></div>
                    <div class="stat-title">{"Balance"}</div>
                    <div class="stat-value">{format_optional_amount(wallet.balance, currency)}</div>
                    <div class="stat-desc">{format!("Updated {}", format_datetime(wallet.updated_at.as_ref()))}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Transactions"}</h2>
                    if wallet.transactions.is_empty() {
                        <p class="text-center text-base-content/60 py-8">{"No transactions."}</p>
                    } else {
                        <div class="overflow-x-auto">
                            <table class="table table-zebra">
                                <thead>
                                    <tr>
                                        <th>{"Date"}</th>
                                        <th>{"Type"}</th>
                                        <th>{"Category"}</th>
                                        <th>{"Description"}</th>
                                        <th class="text-right">{"Amount"}</th>
                                        <th class="text-right">{"Balance after"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {for wallet.transactions.iter().map(|tx| {
                                        let balance_after = tx.balance_after.map(|b| format_amount(b, currency));
                                        html! {
                                            <tr key={tx.id.clone()}>
                                                <td>{format_datetime(tx.created_at.as_ref())}</td>
                                                <td>{humanize(&tx.kind)}</td>
                                                <td>{or_dash(tx.category.as_deref())}</td>
                                                <td>{or_dash(tx.description.as_deref())}</td>
                                                <td class="text-right font-mono">{format_optional_amount(tx.amount, currency)}</td>
                                                <td class="text-right font-mono">{or_dash(balance_after.as_deref())}</td>
                                            </tr>
                                        }
                                    })}
                                </tbody>
                            </table>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(WalletView)]
pub fn wallet_view(props: &WalletViewProps) -> Html {
    let repos = use_repositories();
    let payouts = repos.payouts;
    let (state, reload) = use_detail(props.generation, move |_| {
        let payouts = payouts.clone();
        async move { payouts.wallet().await }
    });

    match state {
        DetailState::Loading => html! { <Loading text="Loading wallet..." /> },
        DetailState::Loaded(wallet) => render(&wallet),
        DetailState::Errored { message, .. } => {
            html! { <ErrorDisplay {message} on_retry={Some(reload)} /> }
        }
    }
}
