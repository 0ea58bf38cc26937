use ::common::or_dash;
use model::{Property, VerifyDraft};
use web_sys::FormData;
use yew::prelude::*;

use crate::components::common::dialog::{form_text, ActionDialog};

#[derive(Properties, PartialEq)]
pub struct VerifyModalProps {
    pub property: Property,
    pub draft: VerifyDraft,
    pub submitting: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_submit: Callback<VerifyDraft>,
    pub on_close: Callback<()>,
}

fn read_draft(data: &FormData) -> VerifyDraft {
    let decision = match form_text(data, "decision").as_str() {
        "approve" => Some(true),
        "reject" => Some(false),
        _ => None,
    };
    VerifyDraft {
        decision,
        rejection_reason: form_text(data, "rejection_reason"),
    }
}

#[function_component(VerifyModal)]
pub fn verify_modal(props: &VerifyModalProps) -> Html {
    // The reason box only exists while "Reject" is picked.
    let decision = use_state(|| props.draft.decision);

    let on_pick = |value: Option<bool>| {
        let decision = decision.clone();
        Callback::from(move |_: Event| decision.set(value))
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |data: FormData| on_submit.emit(read_draft(&data)))
    };

    let subtitle = format!(
        "{} - {}",
        or_dash(props.property.title.as_deref()),
        or_dash(props.property.landlord_label())
    );

    html! {
        <ActionDialog
            title="Verify property"
            subtitle={Some(AttrValue::from(subtitle))}
            submit_label="Save decision"
            submitting={props.submitting}
            error={props.error.clone()}
            {on_submit}
            on_close={props.on_close.clone()}
        >
            <div class="form-control">
                <label class="label cursor-pointer justify-start gap-3">
                    <input
                        type="radio"
                        name="decision"
                        value="approve"
                        class="radio radio-success"
                        checked={*decision == Some(true)}
                        onchange={on_pick(Some(true))}
                        disabled={props.submitting}
                    />
                    <span class="label-text">{"Approve"}</span>
                </label>
                <label class="label cursor-pointer justify-start gap-3">
                    <input
                        type="radio"
                        name="decision"
                        value="reject"
                        class="radio radio-error"
                        checked={*decision == Some(false)}
                        onchange={on_pick(Some(false))}
                        disabled={props.submitting}
                    />
                    <span class="label-text">{"Reject"}</span>
                </label>
            </div>

            if *decision == Some(false) {
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Rejection reason"}</span></label>
                    <textarea
                        name="rejection_reason"
                        class="textarea textarea-bordered w-full"
                        rows="3"
                        placeholder="At least 5 characters"
                        value={props.draft.rejection_reason.clone()}
                        disabled={props.submitting}
                    />
                </div>
            }
        </ActionDialog>
    }
}
