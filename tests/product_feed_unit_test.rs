// Browser-only view tests, run with `wasm-pack test --headless --chrome
// --features wasm-test --no-default-features`.
#![cfg(target_arch = "wasm32")]

use fleamarket::components::item::Item;
use fleamarket::pages::home::HomePage;
use gloo_timers::future::sleep;
use leptos::*;
use leptos_router::Router;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Helper to mount a view into a fresh container and return the container
fn mount_in_container(id: &str, component: impl FnOnce() -> View + 'static) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();

    let html_element = container
        .clone()
        .dyn_into::<web_sys::HtmlElement>()
        .expect("container was not an HtmlElement");
    leptos::mount_to(html_element, component);

    container
}

fn text_of(container: &web_sys::Element, selector: &str) -> String {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn test_item_row_shows_title_price_and_counters() {
    let container = mount_in_container("item-row-test", || {
        view! {
            <Item id=1 title="Chair" price=20 comments=1 hearts=1/>
        }
        .into_view()
    });

    sleep(Duration::from_millis(50)).await;

    assert_eq!(text_of(&container, ".item-title"), "Chair");
    assert_eq!(text_of(&container, ".item-price"), "$20");
    assert_eq!(text_of(&container, ".item-comments").trim(), "1");
    assert_eq!(text_of(&container, ".item-hearts").trim(), "1");

    // The row is addressable by its product ID
    assert!(container.query_selector("#product-1").unwrap().is_some());

    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().remove_child(&container).unwrap();
}

#[wasm_bindgen_test]
async fn test_home_renders_empty_feed_with_upload_button() {
    // No server behind the harness, so both fetches settle to None and
    // the page must fall back to the empty feed
    let container = mount_in_container("home-empty-test", || {
        view! {
            <Router>
                <HomePage/>
            </Router>
        }
        .into_view()
    });

    sleep(Duration::from_millis(400)).await;

    let feed = container
        .query_selector(".product-feed")
        .unwrap()
        .expect("feed region missing");
    let rows = feed.query_selector_all(".item-row").unwrap();
    assert_eq!(rows.length(), 0);

    // Page chrome still renders: tab bar and the upload control
    assert!(container.query_selector(".tab-bar").unwrap().is_some());
    let button = container
        .query_selector(".floating-button")
        .unwrap()
        .expect("upload button missing");
    let href = button.get_attribute("href").unwrap_or_default();
    assert!(
        href.ends_with("/products/upload"),
        "unexpected href: {}",
        href
    );

    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().remove_child(&container).unwrap();
}
