//! Workspace root package.
//!
//! Holds no code of its own; it exists so the cross-crate integration tests in
//! `tests/` can drive the `app` client core against an in-process fake of the
//! portfolio REST API.
