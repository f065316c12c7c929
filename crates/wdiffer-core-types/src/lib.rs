//! Core types shared across wdiffer facilities
//!
//! This crate provides the schema constants used by both the error and
//! logging facilities, so that the core library and the CLI agree on the
//! names of structured log fields and lifecycle events.

pub mod schema;
