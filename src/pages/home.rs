use crate::components::floating_button::FloatingButton;
use crate::components::item::Item;
use crate::components::layout::Layout;
use crate::hooks::{use_products, use_user};
use leptos::*;

/// Landing page: the product feed plus the button that leads to the
/// upload form. Renders an empty feed until the product fetch settles.
#[component]
pub fn HomePage() -> impl IntoView {
    let user = use_user();
    let products = use_products();

    view! {
        <Layout logo=true has_tab_bar=true>
            <p class="greeting">
                {move || user.get().flatten().map(|profile| format!("Signed in as {}", profile.nickname))}
            </p>
            <div class="product-feed">
                {move || {
                    products
                        .get()
                        .flatten()
                        .map(|data| data.products)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|product| view! {
                            // comment and heart counts are placeholders
                            // until counting is wired up
                            <Item
                                id=product.id
                                title=product.name
                                price=product.price
                                comments=1
                                hearts=1
                            />
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <FloatingButton href="/products/upload">
                <svg
                    class="icon"
                    fill="none"
                    stroke="currentColor"
                    viewBox="0 0 24 24"
                    aria-hidden="true"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M12 6v6m0 0v6m0-6h6m-6 0H6"
                    />
                </svg>
            </FloatingButton>
        </Layout>
    }
}
