use ::common::{format_optional_amount, or_dash};
use model::{Payout, PayoutAction, ProcessDraft};
use web_sys::FormData;
use yew::prelude::*;

use crate::components::common::dialog::{form_text, ActionDialog};

#[derive(Properties, PartialEq)]
pub struct ProcessModalProps {
    pub payout: Payout,
    pub draft: ProcessDraft,
    pub submitting: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_submit: Callback<ProcessDraft>,
    pub on_close: Callback<()>,
}

#[function_component(ProcessModal)]
pub fn process_modal(props: &ProcessModalProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        let action = props.draft.action;
        Callback::from(move |data: FormData| {
            on_submit.emit(ProcessDraft {
                action,
                notes: form_text(&data, "notes"),
            })
        })
    };

    let (title, submit_label) = match props.draft.action {
        Some(PayoutAction::Reject) => ("Reject payout", "Reject"),
        _ => ("Approve payout", "Approve"),
    };
    let payout = &props.payout;
    let bank = format!(
        "{} {} ({})",
        or_dash(payout.bank_name.as_deref()),
        or_dash(payout.account_no.as_deref()),
        or_dash(payout.account_name.as_deref())
    );

    html! {
        <ActionDialog
            {title}
            subtitle={Some(AttrValue::from(or_dash(payout.requester_label())))}
            {submit_label}
            submitting={props.submitting}
            error={props.error.clone()}
            {on_submit}
            on_close={props.on_close.clone()}
        >
            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-title">{"Amount"}</div>
                    <div class="stat-value text-2xl">{format_optional_amount(payout.amount, None)}</div>
                    <div class="stat-desc">{bank}</div>
                </div>
            </div>
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{"Notes"}</span>
                    <span class="label-text-alt">{"Optional"}</span>
                </label>
                <textarea
                    name="notes"
                    class="textarea textarea-bordered w-full"
                    rows="3"
                    value={props.draft.notes.clone()}
                    disabled={props.submitting}
                />
            </div>
        </ActionDialog>
    }
}
