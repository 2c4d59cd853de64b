//! Landing section: headline, calls to action, and social links.
//!
//! The "Download CV" link points at the latest uploaded résumé and is
//! rendered disabled until one exists.

use icondata::{BsArrowRight, BsDownload};
use leptos::prelude::*;

use crate::components::icons;
use crate::hooks::{use_collection, use_latest_resume};
use crate::types::SocialLink;

pub fn component() -> impl IntoView {
    let resume = use_latest_resume();
    let links = use_collection::<SocialLink>();

    let download = move || match resume.data() {
        Some(resume) => view! {
            <a
                href=resume.file_url
                download=resume.original_filename
                aria-label="Download CV"
                class="flex gap-2 justify-center items-center py-3.5 px-8 font-semibold rounded-lg border-2 transition-all duration-300 border-white/20 hover:border-[#ffef5c]/50"
            >
                {icons::component(BsDownload, "size-4")}
                "Download CV"
            </a>
        }
        .into_any(),
        None => view! {
            <button
                disabled
                aria-label="Download CV"
                title="No CV uploaded yet"
                class="flex gap-2 justify-center items-center py-3.5 px-8 font-semibold rounded-lg border-2 opacity-50 cursor-not-allowed border-white/20"
            >
                {icons::component(BsDownload, "size-4")}
                "Download CV"
            </button>
        }
        .into_any(),
    };

    view! {
        <section id="home" class="flex relative justify-center items-center px-4 min-h-screen">
            <div class="mx-auto max-w-4xl text-center">
                <p class="mb-6 text-sm tracking-widest text-gray-400 uppercase">"who am I ?"</p>
                <h1 class="mb-6 text-5xl font-extrabold leading-tight sm:text-6xl md:text-7xl">
                    "Software Engineer & "
                    <span class="text-[#ffef5c]">"Creative Developer"</span>
                </h1>
                <p class="mx-auto mb-10 max-w-2xl text-lg leading-relaxed text-gray-300 sm:text-xl">
                    "I craft elegant, performant digital experiences. Specializing in full-stack development with a passion for intuitive interfaces, and scalable solutions."
                </p>
                <div class="flex flex-col gap-4 justify-center mb-12 sm:flex-row">
                    <a
                        href="#projects"
                        class="flex gap-2 justify-center items-center py-3.5 px-8 font-semibold rounded-lg transition-all duration-300 bg-[#ffef5c] text-[#1e1e1e] hover:bg-[#ffef5c]/90"
                    >
                        "View My Work"
                        {icons::component(BsArrowRight, "size-4")}
                    </a>
                    {download}
                </div>
                {move || {
                    let links = links.data();
                    (!links.is_empty()).then(|| view! {
                        <div class="flex gap-4 justify-center">
                            {links.into_iter().map(|link| view! {
                                <a
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=format!("Visit my {} profile", link.platform)
                                    class="p-3 rounded-lg border transition-all duration-300 border-white/10 hover:text-[#ffef5c] hover:border-[#ffef5c]/50"
                                >
                                    {icons::component(icons::for_platform(&link.platform), "size-5")}
                                </a>
                            }).collect_view()}
                        </div>
                    })
                }}
            </div>
        </section>
    }
}
