use crate::components::layout::Layout;
use crate::models::{EnterRequest, ProfileResponse};
use gloo_net::http::Request;
use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;

/// Nickname sign-in. The server reuses an existing user with the same
/// nickname, so this doubles as registration.
#[component]
pub fn EnterPage() -> impl IntoView {
    let (nickname, set_nickname) = create_signal(String::new());
    let (error, set_error) = create_signal(Option::<String>::None);

    let navigate = use_navigate();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = EnterRequest {
            nickname: nickname.get(),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let request = match Request::post("/api/users/enter").json(&payload) {
                Ok(request) => request,
                Err(err) => {
                    logging::error!("Failed to encode sign-in payload: {}", err);
                    return;
                }
            };

            match request.send().await {
                Ok(response) if response.ok() => {
                    if let Ok(body) = response.json::<ProfileResponse>().await {
                        logging::log!("Signed in as {}", body.profile.nickname);
                    }
                    navigate("/", Default::default());
                }
                Ok(_) => {
                    set_error.set(Some("Pick a non-empty nickname".to_string()));
                }
                Err(err) => {
                    set_error.set(Some(format!("Sign-in failed: {}", err)));
                }
            }
        });
    };

    view! {
        <Layout title="Enter">
            <form class="enter-form" on:submit=handle_submit>
                <input
                    type="text"
                    placeholder="Nickname"
                    on:input=move |e| set_nickname.set(event_target_value(&e))
                />
                <button type="submit">{ "Enter" }</button>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            </form>
        </Layout>
    }
}
