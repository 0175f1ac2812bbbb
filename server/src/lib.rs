//! HTTP API for the roster user registry.
//!
//! Exposes the registry's five operations as REST routes under a
//! configurable base path:
//!
//! | Method | Path                  | Success                  | Failure |
//! |--------|-----------------------|--------------------------|---------|
//! | POST   | `/users`              | 200 + created user       |         |
//! | GET    | `/users`              | 200 + all users          |         |
//! | GET    | `/users/{id}`         | 200 + user               | 404     |
//! | GET    | `/users/filter?name=` | 200 + matching users     |         |
//! | DELETE | `/users/{id}`         | 204                      | 404     |

mod api;
mod config;
mod shutdown;
pub mod wire;

pub use api::{build_router, ApiError};
pub use config::ServerConfig;
pub use shutdown::shutdown_signal;
