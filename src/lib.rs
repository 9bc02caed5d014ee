//! Ledgergate - identity, session, and billing edge service
//!
//! This crate implements the authenticated edge of the Ledgergate SaaS:
//! bearer-credential validation, role checks, cookie-backed sessions,
//! payment gateway pass-through, and webhook signature verification.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
