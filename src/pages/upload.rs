use crate::components::layout::Layout;
use crate::models::{NewProduct, ProductResponse};
use gloo_net::http::Request;
use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;

/// Form for listing a new product. Posts the payload and goes back to the
/// feed once the server confirms it.
#[component]
pub fn UploadPage() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (price, set_price) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (error, set_error) = create_signal(Option::<String>::None);

    let navigate = use_navigate();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = NewProduct {
            name: name.get(),
            price: price.get().parse::<i64>().unwrap_or(0),
            description: description.get(),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let request = match Request::post("/api/product").json(&payload) {
                Ok(request) => request,
                Err(err) => {
                    logging::error!("Failed to encode product payload: {}", err);
                    return;
                }
            };

            match request.send().await {
                Ok(response) if response.ok() => {
                    if let Ok(body) = response.json::<ProductResponse>().await {
                        logging::log!("Listed product {}", body.product.id);
                    }
                    navigate("/", Default::default());
                }
                Ok(response) => {
                    set_error.set(Some(format!("Upload rejected ({})", response.status())));
                }
                Err(err) => {
                    set_error.set(Some(format!("Upload failed: {}", err)));
                }
            }
        });
    };

    view! {
        <Layout title="Upload Product">
            <form class="upload-form" on:submit=handle_submit>
                <input
                    type="text"
                    placeholder="Name"
                    on:input=move |e| set_name.set(event_target_value(&e))
                />
                <input
                    type="number"
                    placeholder="Price"
                    on:input=move |e| set_price.set(event_target_value(&e))
                />
                <textarea
                    placeholder="Description"
                    on:input=move |e| set_description.set(event_target_value(&e))
                />
                <button type="submit">{ "Upload product" }</button>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            </form>
        </Layout>
    }
}
