//! Request handlers.
//!
//! Handlers validate input, delegate to the generator and the repository
//! in `roomlens-db`, and map errors via [`AppError`](crate::error::AppError).

pub mod rooms;
