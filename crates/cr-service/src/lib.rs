//! Classroom (CR) Service Library
//!
//! This library provides the backend for the classroom video application:
//! short-lived room-scoped video access credentials, class scheduling, and
//! attendance logging.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `crypto` - Access token claims and JWT signing
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `models` - Data models and request validation
//! - `repositories` - Storage layer (in-memory)
//! - `routes` - Router and application state
//! - `services` - Business logic layer

pub mod config;
pub mod crypto;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
