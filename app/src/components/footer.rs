use chrono::{Datelike as _, Utc};
use leptos::{
    html::{a, div, footer, h3, li, p, ul},
    prelude::*,
};

use crate::components::icons;
use crate::hooks::use_collection;
use crate::types::SocialLink;

const QUICK_LINKS: [&str; 4] = ["About", "Projects", "Experience", "Contact"];

pub fn component() -> impl IntoView {
    let links = use_collection::<SocialLink>();

    footer()
        .class("py-10 px-4 border-t border-white/10 bg-[#1e1e1e]")
        .child(
            div().class("container grid gap-8 mx-auto max-w-5xl md:grid-cols-3").child((
                p().class("text-sm text-gray-400").child(
                    "Full-stack engineer crafting elegant digital solutions with clean code and innovative design.",
                ),
                div().child((
                    h3().class("mb-3 font-semibold").child("Quick Links"),
                    ul().class("space-y-2 text-sm text-gray-400").child(QUICK_LINKS.map(|label| {
                        li().child(
                            a().href(format!("#{}", label.to_lowercase()))
                                .class("hover:text-[#ffef5c]")
                                .child(label),
                        )
                    })),
                )),
                move || {
                    let links = links.data();
                    (!links.is_empty()).then(|| social_links(links))
                },
            )),
        )
        .child(
            p().class("mt-8 text-sm text-center text-gray-500")
                .child(format!("\u{a9} {} Zakaria. All rights reserved.", Utc::now().year())),
        )
}

fn social_links(links: Vec<SocialLink>) -> impl IntoView {
    div().child((
        h3().class("mb-3 font-semibold").child("Connect"),
        div().class("flex flex-row gap-3").child(
            links
                .into_iter()
                .map(|link| {
                    a().href(link.url)
                        .target("_blank")
                        .rel("noopener noreferrer")
                        .aria_label(format!("Visit my {} profile", link.platform))
                        .class("transition-all duration-500 text-white hover:text-[#ffef5c]")
                        .child(icons::component(icons::for_platform(&link.platform), "size-6"))
                })
                .collect_view(),
        ),
    ))
}
