//! # ALI Rust Backend
//!
//! Airport lounge crowd forecasting and operations analytics engine.
//!
//! This crate forecasts short-horizon crowd levels for an airport lounge and
//! derives operational recommendations (staffing, catering, cost, surge
//! alerts) from the forecast. The pipeline is synchronous: historical
//! loading, an autoregressive 6-step rollout over an opaque prediction
//! backend, a flight-schedule adjustment, and a set of pure analytics
//! derivations. A feature-gated Axum REST API publishes the results as
//! plain JSON.
//!
//! ## Architecture
//!
//! - [`api`]: DTO types shared across the layers
//! - [`config`]: `lounge.toml` support and analytics constants
//! - [`data`]: historical series loading and feature derivation
//! - [`forecast`]: autoregressive rollout over a pluggable [`forecast::Predictor`]
//! - [`services`]: schedule adjustment, derived analytics, orchestration
//! - [`http`]: Axum-based HTTP server (feature `http-server`)

pub mod api;

pub mod config;
pub mod data;
pub mod error;

pub mod forecast;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
