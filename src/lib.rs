//! lokiq
//!
//! Terminal query editor for Loki log queries.
//!
//! Pure Core / Impure Shell: `state` holds the line-limit normalizer,
//! the propagation rule and the other transitions as plain functions;
//! `view` drives them from a crossterm event loop.

pub mod config;
pub mod host;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;
