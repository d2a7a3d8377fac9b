//! Lead Relay API Library
//!
//! This library provides the core functionality for the lead-capture relay
//! service: a validation schema for lead records and a relay that forwards
//! validated leads to an external automation webhook.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Core data models.
//! - `relay`: Webhook relay client.
//! - `validation`: Lead validation rules.

// Re-export primary modules for shared use in tests
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod relay;
pub mod validation;
