// This crate holds the in-memory core of the phantom backend: opaque
// identifier minting plus the user and session registries the HTTP
// handlers mutate.

pub mod session;
pub mod token;
pub mod user;
