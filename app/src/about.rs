use leptos::{
    html::{div, h2, p, section},
    prelude::*,
};

use crate::components::status;
use crate::hooks::use_collection;
use crate::resource::Status;
use crate::types::{AboutSection, Stat};

const FALLBACK_BIO: &str = "I'm a passionate software engineer with a strong foundation in both frontend and backend technologies.";

/// Renders the about text and the headline stats.
///
/// An empty about collection falls back to a default bio instead of an
/// empty-state block; stats are simply omitted when there are none.
pub fn component() -> impl IntoView {
    let about = use_collection::<AboutSection>();
    let stats = use_collection::<Stat>();

    let stale = {
        let about = about.clone();
        move || status::stale(about.with(|state| state.stale_error().map(str::to_owned)))
    };

    let body = move || {
        about.with(|state| match state.status() {
            Status::Loading => status::loading("about").into_any(),
            Status::Failed(message) => status::failed(message.to_owned()).into_any(),
            Status::Empty => p().class("text-lg leading-relaxed text-gray-300").child(FALLBACK_BIO).into_any(),
            Status::Ready(sections) => sections
                .iter()
                .map(|section| {
                    p().class("text-lg leading-relaxed text-gray-300")
                        .child(section.content.clone())
                })
                .collect_view()
                .into_any(),
        })
    };

    let stat_grid = move || {
        let stats = stats.data();
        (!stats.is_empty()).then(|| {
            div().class("grid grid-cols-2 gap-6 md:grid-cols-4").child(
                stats
                    .into_iter()
                    .map(|stat| {
                        div().class("p-6 text-center rounded-xl border bg-card border-white/10").child((
                            div().class("mb-2 text-4xl font-bold text-[#ffef5c]").child(stat.number),
                            div().class("text-sm text-gray-400").child(stat.label),
                        ))
                    })
                    .collect_view(),
            )
        })
    };

    section().id("about").class("py-24 px-4 sm:px-6 lg:px-8").child(
        div().class("mx-auto max-w-5xl").child((
            h2().class("mb-12 text-4xl font-bold text-center sm:text-5xl").child("About Me"),
            div().class("grid gap-12 md:grid-cols-2").child((
                div().class("space-y-6").child((stale, body)),
                stat_grid,
            )),
        )),
    )
}
