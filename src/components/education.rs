use leptos::prelude::*;

use crate::components::icons::{Download, ExternalLink, Shield};
use crate::data::{best_practices, storage_profiles, LEARN_MORE_URL};
use crate::dom;

#[component]
pub fn EducationSection() -> impl IntoView {
    let profiles = storage_profiles();
    let practices = best_practices();

    view! {
        <section class="py-20 px-4 bg-gray-800/50">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold mb-12 text-center">
                    "Understanding NFT Metadata Storage"
                </h2>

                <div class="grid md:grid-cols-2 gap-8 mb-16">
                    {profiles.into_iter().map(|profile| {
                        view! {
                            <div class=profile.card_class>
                                <div class="flex items-center gap-2 mb-4">
                                    {(profile.icon)()}
                                    <h3 class="text-xl font-semibold">{profile.title}</h3>
                                </div>
                                <ul class="space-y-2 text-gray-300">
                                    {profile.points.iter().map(|point| {
                                        view! { <li>{format!("\u{2022} {point}")}</li> }
                                    }).collect_view()}
                                </ul>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="bg-gray-800 p-8 rounded-xl border border-purple-500/20">
                    <h3 class="text-2xl font-bold mb-6">"Protecting Yourself"</h3>
                    <ul class="space-y-4 text-gray-300 mb-8">
                        {practices.into_iter().map(|practice| {
                            view! {
                                <li class="flex items-start gap-3">
                                    <div class="mt-1 p-1 bg-purple-500/20 rounded">
                                        <Shield class="w-4 h-4 text-purple-400" />
                                    </div>
                                    <span>{practice}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                    <div class="flex gap-4">
                        <a
                            href=LEARN_MORE_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 px-6 py-3 bg-purple-600 hover:bg-purple-700 rounded-lg transition-all"
                        >
                            "Learn More"
                            <ExternalLink class="w-4 h-4" />
                        </a>
                        <button
                            on:click=move |_| dom::save_guide()
                            class="flex items-center gap-2 px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg transition-all"
                        >
                            "Download Guide"
                            <Download class="w-4 h-4" />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
