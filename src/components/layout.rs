use leptos::*;
use leptos_router::A;

/// Shared page chrome: a top bar with either the logo or a page title,
/// the page body, and an optional bottom tab bar.
#[component]
pub fn Layout(
    #[prop(optional)] logo: bool,
    #[prop(optional)] has_tab_bar: bool,
    #[prop(optional, into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="layout">
            <header class="top-bar">
                {logo.then(|| view! { <span class="top-bar-logo">{ "fleamarket" }</span> })}
                {(!title.is_empty()).then(|| view! { <h1 class="top-bar-title">{title.clone()}</h1> })}
            </header>
            <div class="page-body">{children()}</div>
            {has_tab_bar.then(|| view! {
                <nav class="tab-bar">
                    <A href="/">{ "Home" }</A>
                    <A href="/profile">{ "Profile" }</A>
                    <A href="/enter">{ "Sign in" }</A>
                </nav>
            })}
        </div>
    }
}
