//! Error handling for the judgment engine.

pub mod domain;

pub use domain::DomainError;
