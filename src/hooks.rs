/// Client-side data fetching. Each hook wraps one API endpoint in a
/// resource keyed on the endpoint path, so every component asking for the
/// same key shares one cached fetch.
use crate::models::{Profile, ProfileResponse, ProductsResponse, ReviewsResponse};
use gloo_net::http::Request;
use leptos::*;
use serde::de::DeserializeOwned;

/// GET `path` and decode the JSON body. Any transport or decode failure
/// collapses into `None`, which the views render the same as "still
/// loading".
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Option<T> {
    let response = Request::get(path).send().await.ok()?;
    response.json::<T>().await.ok()
}

/// The signed-in user's profile, or `None` while loading or signed out.
/// Resolved on its own so pages can personalize without blocking on it.
pub fn use_user() -> Resource<&'static str, Option<Profile>> {
    create_local_resource(
        || "/api/users/me",
        |path| async move {
            fetch_json::<ProfileResponse>(path)
                .await
                .map(|data| data.profile)
        },
    )
}

/// The full product collection.
pub fn use_products() -> Resource<&'static str, Option<ProductsResponse>> {
    create_local_resource(|| "/api/product", |path| async move {
        fetch_json::<ProductsResponse>(path).await
    })
}

/// Reviews received by the signed-in user. Signed-out sessions get an
/// empty list from the server, not an error.
pub fn use_reviews() -> Resource<&'static str, Option<ReviewsResponse>> {
    create_local_resource(|| "/api/reviews", |path| async move {
        fetch_json::<ReviewsResponse>(path).await
    })
}
