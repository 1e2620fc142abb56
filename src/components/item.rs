/// Component to display one row of the product feed.
/// Renders the name, the price and the engagement counters.
use leptos::*;

#[component]
pub fn Item(
    id: i64,
    #[prop(into)] title: String,
    price: i64,
    comments: i64,
    hearts: i64,
) -> impl IntoView {
    view! {
        <div class="item-row" id=format!("product-{}", id)>
            <div class="item-body">
                <h3 class="item-title">{title}</h3>
                <span class="item-price">{format!("${}", price)}</span>
            </div>
            <div class="item-counters">
                <span class="item-comments">
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
                            d="M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z"
                        />
                    </svg>
                    {comments}
                </span>
                <span class="item-hearts">
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
                            d="M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z"
                        />
                    </svg>
                    {hearts}
                </span>
            </div>
        </div>
    }
}
