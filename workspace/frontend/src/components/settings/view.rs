use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::api_client::LocalStorageCredentials;
use crate::common::toast::ToastContext;
use crate::components::common::dialog::form_text;
use crate::settings::{self, normalize_base_url, parse_level, AppSettings};

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn read_form(data: &FormData, current: &AppSettings) -> Result<AppSettings, String> {
    Ok(AppSettings {
        api_base_url: normalize_base_url(&form_text(data, "api_base_url"))?,
        log_level: parse_level(&form_text(data, "log_level")).unwrap_or(current.log_level),
    })
}

#[function_component(Settings)]
pub fn settings() -> Html {
    let toasts = use_context::<ToastContext>();
    let form_ref = use_node_ref();
    let current = use_state(settings::current);
    let error = use_state(|| None::<String>);
    let token = LocalStorageCredentials::stored_token().unwrap_or_default();

    let onsubmit = {
        let form_ref = form_ref.clone();
        let current = current.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let data = match FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(e) => {
                    log::error!("Failed to read settings form: {:?}", e);
                    return;
                }
            };

            let updated = match read_form(&data, &current) {
                Ok(updated) => updated,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };

            let saved = updated
                .save()
                .and_then(|_| LocalStorageCredentials::save_token(&form_text(&data, "token")));
            if let Err(e) = saved {
                log::error!("Failed to persist settings: {:?}", e);
                error.set(Some("Could not write to local storage".to_string()));
                return;
            }

            log::info!("Settings saved, API base URL is now {}", updated.api_base_url);
            settings::replace(updated.clone());
            current.set(updated);
            error.set(None);
            if let Some(toasts) = &toasts {
                toasts.show_info("Settings saved. Reload to reconnect.".to_string());
            }
        })
    };

    let on_reload = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("Reload failed: {:?}", e);
            }
        }
    });

    let level = current.log_level.as_str().to_lowercase();

    html! {
        <div class="card bg-base-100 shadow max-w-2xl">
            <form class="card-body" ref={form_ref} {onsubmit}>
                <h2 class="card-title">{"Connection Settings"}</h2>
                <p class="text-sm text-base-content/70">{format!("Current API: {}", current.api_base_url)}</p>

                if let Some(message) = &*error {
                    <div class="alert alert-error"><span>{message}</span></div>
                }

                <div class="form-control">
                    <label class="label">
                        <span class="label-text">{"API base URL"}</span>
                        <span class="label-text-alt">{"e.g. https://api.example.com/api/v1"}</span>
                    </label>
                    <input name="api_base_url" type="url" class="input input-bordered w-full" value={current.api_base_url.clone()} />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Log level"}</span></label>
                    <select name="log_level" class="select select-bordered">
                        {for LEVELS.iter().map(|l| html! {
                            <option value={*l} selected={level == *l}>{*l}</option>
                        })}
                    </select>
                </div>
                <div class="form-control">
                    <label class="label">
                        <span class="label-text">{"Access token"}</span>
                        <span class="label-text-alt">{"Sent as a bearer token"}</span>
                    </label>
                    <input name="token" type="password" class="input input-bordered w-full" value={token} />
                </div>

                <div class="card-actions justify-end mt-4">
                    <button type="button" class="btn" onclick={on_reload}>{"Reload"}</button>
                    <button type="submit" class="btn btn-primary">{"Save"}</button>
                </div>
            </form>
        </div>
    }
}
