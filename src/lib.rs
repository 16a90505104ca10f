//! Yordlepedia Library
//!
//! This module exposes the Riot client, statistics pipeline, and HTTP server
//! for use in integration tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod riot;
pub mod server;
pub mod service;
pub mod stats;
