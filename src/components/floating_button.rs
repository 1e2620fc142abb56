use leptos::*;
use leptos_router::A;

/// Round action button pinned to the lower-right corner of the feed.
#[component]
pub fn FloatingButton(#[prop(into)] href: String, children: Children) -> impl IntoView {
    view! {
        <A href=href class="floating-button">
            {children()}
        </A>
    }
}
