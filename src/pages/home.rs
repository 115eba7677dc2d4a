use leptos::prelude::*;

use crate::components::demo::DemoSection;
use crate::components::education::EducationSection;
use crate::components::hero::Hero;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Hero />
        <DemoSection />
        <EducationSection />
    }
}
