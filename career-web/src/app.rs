//! Career Week App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::pages::LandingPage;
use crate::utils::constants::LOADING_ELEMENT_ID;

#[component]
pub fn App() -> impl IntoView {
    // Backup in case main() ran before the loading element existed
    Effect::new(move |_| hide_loading_screen());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}

/// Hide the static loading screen shipped in `index.html`.
pub fn hide_loading_screen() {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(LOADING_ELEMENT_ID))
    else {
        log::debug!("Loading element not found");
        return;
    };

    if let Err(err) = element.class_list().add_1("hidden") {
        log::warn!("Failed to hide loading screen: {:?}", err);
    }
    if let Err(err) = element.set_attribute("style", "display: none !important;") {
        log::warn!("Failed to hide loading screen: {:?}", err);
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="register-button">"Back to Career Week"</span>
                </A>
            </div>
        </div>
    }
}
