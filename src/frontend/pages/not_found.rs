//! 404 page, also the landing spot for menu targets without a page yet

use leptos::prelude::*;

use crate::models::BRAND_HREF;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-6 bg-white dark:bg-gray-900">
            <div class="text-center">
                <h1 class="text-8xl md:text-9xl font-extrabold text-blue-600 mb-4">"404"</h1>
                <p class="text-2xl font-semibold text-gray-800 dark:text-gray-100 mb-2">
                    "페이지를 찾을 수 없습니다"
                </p>
                <a href=BRAND_HREF class="text-blue-600 hover:text-blue-700 transition">"홈으로 돌아가기"</a>
            </div>
        </div>
    }
}
