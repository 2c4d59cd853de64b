//! Fallback page for unknown routes.
//!
//! Only one page exists, so the only application error is `NotFound`. On the
//! server the response status is set from the first error found.

use http::status::StatusCode;
use icondata::BsArrowLeft;
use leptos::{
    html::{a, div, h1, p},
    prelude::*,
};
use thiserror::Error;

use crate::components::icons;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Collects the `AppError`s out of an error set, ignoring foreign error types.
fn app_errors(errors: &Errors) -> Vec<AppError> {
    errors
        .iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect()
}

pub fn component(errors: Errors) -> impl IntoView {
    let mut errors = app_errors(&errors);
    if errors.is_empty() {
        errors.push(AppError::NotFound);
    }

    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(errors[0].status_code());
    }

    div().class("grid place-content-center px-4 min-h-screen antialiased").child((
        h1().class("mb-6 text-4xl font-bold text-center").child(if errors.len() > 1 { "Errors" } else { "Error" }),
        errors
            .into_iter()
            .map(|error| {
                p().class("text-xl tracking-widest text-center text-gray-400 uppercase")
                    .child(format!("{}| {error}", error.status_code().as_u16()))
            })
            .collect_view(),
        a().href("/")
            .class("flex gap-2 justify-center items-center mt-6 duration-200 hover:text-[#ffef5c]")
            .child((icons::component(BsArrowLeft, "size-4"), "Go back home")),
    ))
}

/// The fallback used by the router for any path other than the home page.
pub fn not_found() -> impl IntoView {
    let mut errors = Errors::default();
    errors.insert_with_default_key(AppError::NotFound);
    component(errors)
}
