//! This module defines the `loader` component, a small spinner shown while a
//! section waits for its first fetch.

use leptos::{
    html::{div, p},
    prelude::*,
};

/// Renders a spinning ring with a "Loading..." caption.
pub fn component() -> impl IntoView {
    div()
        .class("flex absolute inset-0 flex-col gap-1 justify-center items-center m-auto")
        .child((
            div().class("rounded-full border-2 animate-spin size-8 border-[#ffef5c] border-t-transparent"),
            p().class("text-sm italic text-gray-400").child("Loading..."),
        ))
}
