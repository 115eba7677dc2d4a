use leptos::prelude::*;

use crate::components::badge::RarityBadge;
use crate::components::icons::ExternalLink;
use crate::state::DemoState;

/// The token as a marketplace would present it, rendered from whichever
/// record the toggle currently selects.
#[component]
pub fn NftCard(state: RwSignal<DemoState>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-2xl p-6 border border-purple-500/20 shadow-xl shadow-purple-500/10">
            <div class="relative">
                <img
                    src=move || state.get().current().image
                    alt="NFT artwork"
                    class="w-full h-[400px] object-cover rounded-lg mb-4 transition-all duration-500"
                />
                <div class="absolute top-2 right-2">
                    <RarityBadge state=state />
                </div>
            </div>
            <h3 class="text-2xl font-bold mb-4">{move || state.get().current().name}</h3>
            <div class="space-y-2">
                <p class="text-gray-400">
                    "Power Level: " {move || state.get().current().power_level}
                </p>
                <a
                    href=move || state.get().current().marketplace
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-purple-400 hover:text-purple-300 flex items-center gap-2"
                >
                    "View on Marketplace"
                    <ExternalLink class="w-4 h-4" />
                </a>
            </div>
        </div>
    }
}
