use leptos::prelude::*;

use crate::state::DemoState;

/// Rarity pill overlaid on the NFT image. Green while the metadata is
/// genuine, red once tampered.
#[component]
pub fn RarityBadge(state: RwSignal<DemoState>) -> impl IntoView {
    view! {
        <span class=move || state.get().badge_class()>
            {move || state.get().current().rarity.label()}
        </span>
    }
}
