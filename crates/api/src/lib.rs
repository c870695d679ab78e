//! Medrec API server library.
//!
//! Exposes the building blocks (config, state, error handling, mapper,
//! service, routes) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;
pub mod service;
pub mod state;
