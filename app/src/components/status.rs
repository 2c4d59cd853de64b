//! Placeholder blocks shown by a section instead of its content: while the
//! first fetch is pending, after a failed fetch, or when a collection is empty.
//! [`stale`] sits above content kept on screen after a failed refresh.

use leptos::{
    html::{div, p},
    prelude::*,
};

use crate::components::loader;

pub fn loading(noun: &'static str) -> impl IntoView {
    div().class("relative h-24").child((
        loader::component(),
        p().class("sr-only").child(format!("Loading {noun}...")),
    ))
}

pub fn failed(message: String) -> impl IntoView {
    div()
        .class("p-4 text-center rounded-lg border text-red-300 bg-red-500/10 border-red-500/20")
        .attr("role", "alert")
        .child(format!("Error: {message}"))
}

pub fn empty(message: &'static str) -> impl IntoView {
    div()
        .class("py-12 text-center text-gray-400 rounded-xl border bg-card border-white/10")
        .child(message)
}

/// Inline notice above content that is still shown after a failed refresh.
pub fn stale(message: Option<String>) -> impl IntoView {
    message.map(|message| {
        p().class("mb-4 text-sm text-center text-red-300")
            .attr("role", "status")
            .child(format!("Could not refresh: {message}"))
    })
}
