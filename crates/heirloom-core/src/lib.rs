// ABOUTME: Core types and constants for the Heirloom shopping-list engine
// ABOUTME: Foundation crate with error handling, unit constants, and recipe models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

#![deny(unsafe_code)]

//! # Heirloom Core
//!
//! Foundation crate providing shared types and constants for the Heirloom
//! shopping-list engine. This crate changes infrequently, so the pipeline crate
//! can be rebuilt without recompiling it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion factors, environment variable names, list defaults
//! - **models**: `Recipe` input records

/// Unified error handling system with standard error codes
pub mod errors;

/// Constants organized by domain
pub mod constants;

/// Recipe models shared by the pipeline and its front ends
pub mod models;
