//! Founders Pact - Co-Founder Agreement Wizard
//!
//! This crate implements a multi-step wizard that accumulates the terms of a
//! co-founder agreement and projects the accumulated record into formatted
//! legal documents (preliminary and comprehensive agreements, employment
//! contracts, and articles of association).

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
