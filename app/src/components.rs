//! Reusable UI pieces shared by the page sections.
//!
//! Sections own their data through the resource hooks; the components here
//! only render what they are handed, apart from the header and footer which
//! read the admin context and the social links themselves.

pub mod admin_login;
pub mod edit_project;
pub mod error_template;
pub mod footer;
pub mod header;
pub mod icons;
pub mod loader;
pub mod status;
