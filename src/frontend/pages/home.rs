use leptos::prelude::*;

use crate::models::BRAND_NAME;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="min-h-screen pt-32 px-6 bg-white dark:bg-gray-900">
            <h1 class="max-w-7xl mx-auto text-4xl font-extrabold text-gray-900 dark:text-white">
                {BRAND_NAME}
            </h1>
        </section>
    }
}
