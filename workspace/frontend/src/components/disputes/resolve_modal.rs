use ::common::{humanize, or_dash};
use model::{Dispute, Resolution, ResolveDraft};
use web_sys::FormData;
use yew::prelude::*;

use crate::components::common::dialog::{form_text, ActionDialog};

#[derive(Properties, PartialEq)]
pub struct ResolveModalProps {
    pub dispute: Dispute,
    pub draft: ResolveDraft,
    pub submitting: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_submit: Callback<ResolveDraft>,
    pub on_close: Callback<()>,
}

fn read_draft(data: &FormData) -> ResolveDraft {
    ResolveDraft {
        resolution: form_text(data, "resolution").parse::<Resolution>().ok(),
        admin_notes: form_text(data, "admin_notes"),
    }
}

#[function_component(ResolveModal)]
pub fn resolve_modal(props: &ResolveModalProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |data: FormData| on_submit.emit(read_draft(&data)))
    };

    let selected = props.draft.resolution;

    html! {
        <ActionDialog
            title="Resolve dispute"
            subtitle={Some(AttrValue::from(or_dash(props.dispute.reason.as_deref())))}
            submit_label="Resolve"
            submitting={props.submitting}
            error={props.error.clone()}
            {on_submit}
            on_close={props.on_close.clone()}
        >
            <div class="form-control">
                <label class="label"><span class="label-text">{"Resolution"}</span></label>
                <select name="resolution" class="select select-bordered w-full" disabled={props.submitting}>
                    <option value="" selected={selected.is_none()} disabled=true>{"Choose a resolution"}</option>
                    {for Resolution::ALL.iter().map(|resolution| html! {
                        <option value={resolution.as_str()} selected={selected == Some(*resolution)}>
                            {humanize(resolution.as_str())}
                        </option>
                    })}
                </select>
            </div>
            <div class="form-control">
                <label class="label"><span class="label-text">{"Admin notes"}</span></label>
                <textarea
                    name="admin_notes"
                    class="textarea textarea-bordered w-full"
                    rows="4"
                    placeholder="At least 5 characters"
                    value={props.draft.admin_notes.clone()}
                    disabled={props.submitting}
                />
            </div>
        </ActionDialog>
    }
}
