use leptos::prelude::*;

use crate::components::icons::AlertTriangle;
use crate::components::nft_card::NftCard;
use crate::dom::DEMO_SECTION_ID;
use crate::state::DemoState;

/// The interactive section: the NFT card next to the tampering toggle.
/// Owns the page's only piece of state.
#[component]
pub fn DemoSection() -> impl IntoView {
    let state = RwSignal::new(DemoState::new());

    view! {
        <section id=DEMO_SECTION_ID class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="grid md:grid-cols-2 gap-8 items-center">
                    <NftCard state=state />

                    <div class="space-y-6">
                        <div class="bg-gray-800/50 rounded-xl p-6 border border-red-500/20">
                            <div class="flex items-center gap-2 mb-4">
                                <AlertTriangle class="w-6 h-6 text-red-500" />
                                <h3 class="text-xl font-semibold">"Metadata Tampering Demo"</h3>
                            </div>
                            <p class="text-gray-400 mb-4">
                                "Toggle the switch below to see how NFT metadata can be altered \
                                 after minting, potentially deceiving buyers and collectors."
                            </p>
                            <button
                                on:click=move |_| state.update(|s| s.toggle())
                                class=move || state.get().toggle_button_class()
                            >
                                {move || state.get().toggle_label()}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
