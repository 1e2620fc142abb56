use crate::components::layout::Layout;
use crate::hooks::{use_reviews, use_user};
use leptos::*;
use leptos_router::A;

/// The signed-in user's profile with the reviews other users left for
/// them, newest first. Signed out, both sections stay empty.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let user = use_user();
    let reviews = use_reviews();

    view! {
        <Layout title="Profile" has_tab_bar=true>
            <div class="profile-header">
                {move || match user.get().flatten() {
                    Some(profile) => view! {
                        <p class="profile-nickname">{profile.nickname}</p>
                    }.into_view(),
                    None => view! {
                        <p class="profile-nickname">
                            <A href="/enter">{ "Sign in" }</A>
                            { " to see your reviews" }
                        </p>
                    }.into_view(),
                }}
            </div>
            <ul class="reviews-list">
                {move || {
                    reviews
                        .get()
                        .flatten()
                        .map(|data| data.reviews)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|review| view! {
                            <li class="review-row">
                                <span class="review-author">{review.created_by.nickname}</span>
                                <span class="review-score">{format!("{}/5", review.score)}</span>
                                <p class="review-body">{review.review}</p>
                            </li>
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </Layout>
    }
}
