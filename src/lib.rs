//! Login service that answers in the caller's language.
//!
//! A request's locale is negotiated from its `culture` query parameter or
//! `Accept-Language` header; the login handler validates the body and
//! replies with a localized, interpolated message.

pub mod auth;
pub mod config;
pub mod error;
pub mod i18n;
pub mod server;
