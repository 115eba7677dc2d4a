pub mod components;
pub mod data;
pub mod dom;
pub mod guide;
pub mod pages;
pub mod state;

use components::footer::Footer;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use pages::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="NFT Metadata Tampering" />
        <div class="min-h-screen bg-gray-900 text-white">
            <Home />
            <Footer />
        </div>
    }
}
