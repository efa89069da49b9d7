//! Mobile-side capture and analysis flow, expressed as a library.
//!
//! The device pieces (camera, gallery, permission prompts) sit behind the
//! [`picker::ImagePicker`] trait. What this crate owns is the contract
//! behaviour around them: the downscale/recompress/base64 pipeline, the
//! single-slot in-flight guards, and the `Idle -> Loading -> {Result |
//! Error}` state machine driving one request against the analysis
//! endpoint.

pub mod api;
pub mod capture;
pub mod encode;
pub mod error;
pub mod orchestrator;
pub mod picker;
