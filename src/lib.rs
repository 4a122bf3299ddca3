//! Duet - Couples Intimacy Companion Backend
//!
//! This crate implements the erotic blueprint framework for couples:
//! quiz scoring, compatibility insights, and AI-generated suggestions
//! delivered through a JSON HTTP API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
