// Portfolio site: client core and page sections
use crate::admin::provide_admin_context;
use crate::components::{error_template, footer, header};
use crate::config::SiteConfig;
use leptos::{
    html::{body, head, html, meta},
    logging,
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    SsrMode, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

mod about;
pub mod admin;
pub mod api;
mod components;
pub mod config;
mod contact;
mod experience;
pub mod forms;
mod hero;
pub mod hooks;
mod projects;
pub mod reorder;
pub mod resource;
mod skills;
pub mod types;
pub mod validation;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            meta()
                .name("description")
                .content("Software engineer portfolio: projects, experience, and skills."),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/portfolio.css")
                    .build(),
            ),
            Title(
                TitleProps::builder()
                    .text("Portfolio \u{2013} Software Engineer & Creative Developer")
                    .build(),
            ),
        )),
        body().class("bg-[#1e1e1e]").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

fn home() -> impl IntoView {
    (
        hero::component(),
        about::component(),
        experience::component(),
        projects::component(),
        skills::component(),
        contact::component(),
    )
}

#[must_use]
pub fn component() -> impl IntoView {
    let config = SiteConfig::from_build_env();
    if cfg!(debug_assertions) {
        logging::log!("Portfolio API: {}", config.api_base_url);
    }
    provide_admin_context(&config);
    provide_context(config);

    view! {
        <Router>
            <div class="overflow-auto text-white font-poppins">
                {header::component}
                <main class="pt-16">
                    <FlatRoutes fallback=error_template::not_found>
                        <Route path=StaticSegment("") view=home ssr=SsrMode::OutOfOrder/>
                    </FlatRoutes>
                </main>
                {footer::component}
            </div>
        </Router>
    }
}
