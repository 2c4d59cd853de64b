//! Inline SVG rendering of `icondata` icons, plus the icon lookup used for
//! social links.

use icondata::{BsEnvelope, BsGithub, BsGlobe, BsLinkedin, BsTwitter, Icon};
use leptos::{prelude::*, svg::svg};

/// Renders `icon` as an inline SVG sized by `class`.
pub fn component(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("fill", "currentColor")
        .attr("aria-hidden", "true")
        .class(class)
        .inner_html(icon.data)
}

/// Icon for a social platform name, as entered in the API (case-insensitive).
pub fn for_platform(platform: &str) -> Icon {
    match platform.trim().to_ascii_lowercase().as_str() {
        "github" => BsGithub,
        "linkedin" => BsLinkedin,
        "email" | "mail" => BsEnvelope,
        "x" | "twitter" => BsTwitter,
        _ => BsGlobe,
    }
}
