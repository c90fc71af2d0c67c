use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::models::{
    AppBarState, Dropdown, BRAND_HREF, BRAND_NAME, CALL_TO_ACTION_LABEL, FEATURE_MENU,
    LANGUAGE_MENU, PRICING_HREF, PRICING_LABEL, SUPPORT_ITEMS,
};
use crate::services::{apply_theme, DocumentRoot, OutsideClickWatcher, WindowPointerSource};

const PANEL_ITEM_CLASS: &str =
    "block px-4 py-2 hover:bg-gray-100 dark:hover:bg-gray-700 cursor-pointer";

/// Fixed application header with the feature, support and language dropdowns.
#[component]
pub fn AppBar() -> impl IntoView {
    let state = RwSignal::new(AppBarState::new());
    let header_ref = NodeRef::<Div>::new();

    let dark_mode = Memo::new(move |_| state.with(|s| s.dark_mode()));

    // Outside click closes the open dropdown for as long as the bar is mounted.
    let watcher = OutsideClickWatcher::start(&WindowPointerSource::new(header_ref), move |origin| {
        state.update(|s| s.handle_pointer_down(origin));
    });
    on_cleanup(move || drop(watcher));

    Effect::new(move |_| {
        if let Err(e) = apply_theme(&DocumentRoot, dark_mode.get()) {
            log::warn!("Failed to apply theme: {}", e);
        }
    });

    let location = use_location();
    Effect::new(move |_| {
        let path = location.pathname.get();
        state.update(|s| s.route_changed(&path));
    });

    view! { <AppBarView state=state header_ref=header_ref/> }
}

/// Markup of the app bar, rendered from `state`.
///
/// Only the open dropdown's panel is in the tree; closed panels are not rendered.
#[component]
pub fn AppBarView(state: RwSignal<AppBarState>, header_ref: NodeRef<Div>) -> impl IntoView {
    let open = Memo::new(move |_| state.with(|s| s.open_dropdown()));
    let is_open = move |dropdown: Dropdown| open.get() == Some(dropdown);
    let toggle = move |dropdown: Dropdown| state.update(|s| s.toggle_dropdown(dropdown));

    view! {
        <header class="w-full px-6 py-3 bg-white dark:bg-gray-900 shadow-sm fixed top-0 z-50">
            <div class="max-w-7xl mx-auto flex items-center justify-between" node_ref=header_ref>
                <div class="flex items-center space-x-8">
                    <a href=BRAND_HREF class="text-xl font-extrabold text-blue-600">
                        {BRAND_NAME}
                    </a>

                    // Desktop nav
                    <nav class="hidden md:flex space-x-6 text-sm font-medium text-gray-800 dark:text-gray-200">
                        <div class="relative">
                            <button
                                class="hover:text-blue-600 transition"
                                on:click=move |_| toggle(Dropdown::Features)
                            >
                                {Dropdown::Features.trigger_label()}
                                " "
                                <span class="ml-1">"▼"</span>
                            </button>
                            <Show when=move || is_open(Dropdown::Features)>
                                <div data-dropdown=Dropdown::Features.as_str() class="absolute left-0 mt-2 w-48 bg-white dark:bg-gray-800 shadow-md rounded-md z-10">
                                    <ul class="text-sm text-gray-700 dark:text-gray-200">
                                        {FEATURE_MENU
                                            .iter()
                                            .map(|entry| view! {
                                                <li>
                                                    <a href=entry.feature_href() class=PANEL_ITEM_CLASS>
                                                        {entry.label}
                                                    </a>
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </Show>
                        </div>
                        <a href=PRICING_HREF class="hover:text-blue-600 transition">
                            {PRICING_LABEL}
                        </a>
                        <div class="relative">
                            <button
                                class="hover:text-blue-600 transition"
                                on:click=move |_| toggle(Dropdown::Support)
                            >
                                {Dropdown::Support.trigger_label()}
                                " "
                                <span class="ml-1">"▼"</span>
                            </button>
                            <Show when=move || is_open(Dropdown::Support)>
                                <div data-dropdown=Dropdown::Support.as_str() class="absolute left-0 mt-2 w-40 bg-white dark:bg-gray-800 shadow-md rounded-md z-10">
                                    <ul class="text-sm text-gray-700 dark:text-gray-200">
                                        {SUPPORT_ITEMS
                                            .iter()
                                            .map(|item| view! { <li class=PANEL_ITEM_CLASS>{*item}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </Show>
                        </div>
                    </nav>
                </div>

                <div class="hidden md:flex items-center space-x-4 text-sm relative">
                    // The label stays fixed; picking a language is not wired up.
                    <div
                        class="cursor-pointer hover:text-blue-600 text-gray-700 dark:text-gray-300"
                        on:click=move |_| toggle(Dropdown::Language)
                    >
                        "🌐 "
                        <span class="ml-1">{Dropdown::Language.trigger_label()}</span>
                        " "
                        <span class="ml-1">"▼"</span>
                    </div>
                    <Show when=move || is_open(Dropdown::Language)>
                        <div data-dropdown=Dropdown::Language.as_str() class="absolute right-24 top-10 w-32 bg-white dark:bg-gray-800 shadow-md rounded-md z-10">
                            <ul class="text-sm text-gray-700 dark:text-gray-200">
                                {LANGUAGE_MENU
                                    .iter()
                                    .map(|lang| view! { <li class=PANEL_ITEM_CLASS>{lang.label}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    </Show>

                    <button
                        class="w-10 h-6 bg-gray-300 dark:bg-gray-700 rounded-full flex items-center px-1 transition-colors"
                        aria-label="Toggle dark mode"
                        on:click=move |_| state.update(|s| {
                            s.toggle_dark_mode();
                        })
                    >
                        <div class=move || {
                            format!(
                                "w-4 h-4 bg-white dark:bg-black rounded-full transform transition-transform {}",
                                state.with(|s| s.theme_knob_class()),
                            )
                        }></div>
                    </button>

                    <button class="bg-blue-600 text-white px-4 py-1.5 rounded hover:bg-blue-700 transition">
                        {CALL_TO_ACTION_LABEL}
                    </button>
                </div>

                <button
                    class="md:hidden focus:outline-none"
                    aria-label="Open menu"
                    on:click=move |_| state.update(|s| {
                        s.toggle_mobile_menu();
                    })
                >
                    <svg
                        class="w-6 h-6 text-gray-800 dark:text-white"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        viewBox="0 0 24 24"
                    >
                        <path stroke-linecap="round" stroke-linejoin="round" d="M4 6h16M4 12h16M4 18h16"/>
                    </svg>
                </button>
            </div>

            // TODO: mobile panel; the trigger only flips `mobile_menu_open` for now.
        </header>
    }
}
