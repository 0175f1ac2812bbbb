//! Core type definitions for the roster service.
//!
//! This crate defines the domain types shared by the registry and the HTTP
//! front end:
//! - [`UserId`], the registry-issued identifier
//! - [`User`], a stored user record
//! - [`NewUser`], the client-supplied shape used to create a record
//!
//! None of these types know how they travel over the wire. The HTTP crate
//! owns the versioned encode/decode mapping.

mod ids;
mod user;

pub use ids::UserId;
pub use user::{NewUser, User};
