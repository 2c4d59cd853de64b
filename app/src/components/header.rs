use leptos::{ev, prelude::*};

use crate::components::admin_login;

/// In-page anchors, in page order.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Experience", "#experience"),
    ("Projects", "#projects"),
    ("Skills", "#skills"),
    ("Contact", "#contact"),
];

pub fn component() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="fixed top-0 right-0 left-0 z-10 py-4 px-4 md:px-6 bg-[#1e1e1e]/80 backdrop-blur-md">
            <div class="container mx-auto max-w-5xl">
                <nav class="flex flex-row justify-between items-center text-white">
                    <a href="#" aria-label="Home" class="text-lg font-bold transition-all duration-500 sm:text-2xl hover:text-[#ffef5c]">
                        "Z.Bidouli"
                    </a>
                    <div class="hidden flex-row gap-2 items-center md:flex">
                        {NAV_ITEMS.map(|(label, href)| view! {
                            <a href=href class="py-2 px-3 text-sm text-gray-300 rounded-lg transition-colors hover:text-[#ffef5c]">{label}</a>
                        })}
                        {admin_login::component()}
                    </div>
                    <button
                        class="p-2 md:hidden"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <svg class="size-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d=move || if menu_open.get() { "M6 18L18 6M6 6l12 12" } else { "M4 6h16M4 12h16M4 18h16" }
                            />
                        </svg>
                    </button>
                </nav>
                <Show when=move || menu_open.get()>
                    <div class="flex flex-col gap-1 pt-4 md:hidden">
                        {NAV_ITEMS.map(|(label, href)| {
                            a_closing(label, href, menu_open)
                        })}
                    </div>
                </Show>
            </div>
        </header>
    }
}

fn a_closing(label: &'static str, href: &'static str, menu_open: RwSignal<bool>) -> impl IntoView {
    leptos::html::a()
        .href(href)
        .class("py-2 px-3 text-gray-300 rounded-lg hover:text-[#ffef5c]")
        .on(ev::click, move |_| menu_open.set(false))
        .child(label)
}
