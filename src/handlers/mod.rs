pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod market;
pub(crate) mod requests;
