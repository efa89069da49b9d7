//! Domain types and validation for the RoomLens renovation estimator.
//!
//! Everything in this crate is pure: the closed room/rating/tier enums,
//! the wire request/response shapes, request validation, scenario
//! normalization, and the prompt sent to the generative model. I/O lives
//! in the `db`, `gemini`, `api`, and `client` crates.

pub mod analysis;
pub mod error;
pub mod generator;
pub mod room;
