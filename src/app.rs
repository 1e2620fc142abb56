/// Application shell: shared metadata plus the router that maps each
/// path onto its page.
use crate::pages::enter::EnterPage;
use crate::pages::home::HomePage;
use crate::pages::profile::ProfilePage;
use crate::pages::upload::UploadPage;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/fleamarket.css"/>
        <Title text="fleamarket"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/products/upload" view=UploadPage/>
                    <Route path="/profile" view=ProfilePage/>
                    <Route path="/enter" view=EnterPage/>
                </Routes>
            </main>
        </Router>
    }
}
