use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-6 px-4 text-center bg-gray-800">
            <p class="font-bold text-gray-300">
                "An educational demo. No real tokens were harmed."
            </p>
        </footer>
    }
}
