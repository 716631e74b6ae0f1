//! Bollinger Bands computation engine with an HTTP serving boundary.
//!
//! The numeric core lives in [`indicators`]: input validation, the rolling
//! SMA / sample-standard-deviation band computation, and the offset shift.
//! [`services`] loads candle data, [`core`] exposes it over HTTP, and the
//! chart/UI side is an external consumer of the computed band points.

pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
