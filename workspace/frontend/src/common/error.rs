use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Inline error panel with an optional retry button.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    let retry = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_: MouseEvent| {
            log::debug!("User clicked retry button");
            on_retry.emit(());
        });
        html! {
            <button class="btn btn-primary btn-sm" {onclick}>
                <i class="fas fa-redo"></i>
                {" Try Again"}
            </button>
        }
    });

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{"Something went wrong"}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
            {retry}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub message: String,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-2">
            <i class="fas fa-search text-4xl text-base-content/40"></i>
            <p class="text-lg font-semibold">{&props.message}</p>
        </div>
    }
}
