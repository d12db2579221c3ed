//! Request guards that run before a handler body.

pub mod auth;
