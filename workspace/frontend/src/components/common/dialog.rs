use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActionDialogProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub submit_label: AttrValue,
    pub submitting: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_submit: Callback<FormData>,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Modal frame around an action form. Hands the form's data to
/// `on_submit`; closing is disabled while a submission runs.
#[function_component(ActionDialog)]
pub fn action_dialog(props: &ActionDialogProps) -> Html {
    let form_ref = use_node_ref();

    let on_submit = {
        let form_ref = form_ref.clone();
        let on_submit = props.on_submit.clone();
        let submitting = props.submitting;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submitting {
                return;
            }
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                log::error!("Action form is not mounted");
                return;
            };
            match FormData::new_with_form(&form) {
                Ok(data) => on_submit.emit(data),
                Err(e) => log::error!("Failed to read form data: {:?}", e),
            }
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        let submitting = props.submitting;
        Callback::from(move |_: MouseEvent| {
            if !submitting {
                on_close.emit(())
            }
        })
    };

    html! {
        <dialog class="modal modal-open">
            <div class="modal-box w-11/12 max-w-xl">
                <h3 class="font-bold text-lg">{&props.title}</h3>
                if let Some(subtitle) = &props.subtitle {
                    <p class="text-sm text-base-content/70">{subtitle}</p>
                }

                if let Some(error) = &props.error {
                    <div class="alert alert-error mt-4">
                        <i class="fas fa-exclamation-circle"></i>
                        <span>{error}</span>
                    </div>
                }

                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4">
                    { for props.children.iter() }

                    <div class="modal-action">
                        <button type="button" class="btn" onclick={on_close.clone()} disabled={props.submitting}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                            if props.submitting {
                                <span class="loading loading-spinner loading-sm"></span>
                                {"Submitting..."}
                            } else {
                                {&props.submit_label}
                            }
                        </button>
                    </div>
                </form>
            </div>
            <div class="modal-backdrop" onclick={on_close}></div>
        </dialog>
    }
}

/// Text value of a form field; missing fields read as empty.
pub fn form_text(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}
