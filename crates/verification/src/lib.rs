//! Core library for the BokaBoka professional verification service.
//!
//! Professionals on the marketplace submit an identity document and a selfie
//! during onboarding. This crate runs the automated checks, applies the
//! decision policy, and tracks the resulting records through admin review.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod verification;
