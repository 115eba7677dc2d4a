use leptos::prelude::*;

use crate::components::icons::ChevronDown;
use crate::dom;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="relative h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-purple-900/50 to-blue-900/50"></div>
            <div class="relative z-10 text-center px-4 max-w-4xl mx-auto">
                <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-clip-text text-transparent bg-gradient-to-r from-purple-400 to-cyan-400">
                    "NFT Metadata Tampering"
                </h1>
                <p class="text-xl md:text-2xl mb-8 text-gray-300">
                    "See how NFT metadata can change after minting and why it matters"
                </p>
                <button
                    on:click=move |_| dom::scroll_to_demo()
                    class="px-8 py-4 bg-purple-600 hover:bg-purple-700 rounded-lg text-lg font-semibold transition-all hover:scale-105"
                >
                    "Explore Metadata Changes"
                </button>
                <ChevronDown class="w-8 h-8 mx-auto mt-12 animate-bounce text-purple-400" />
            </div>
        </header>
    }
}
