//! Kitchen ETA engine
//!
//! Predicts when each in-flight order will be ready and, for deliveries, when
//! it will reach the customer, from a snapshot of orders, the staff on shift
//! and per-zone travel estimates.

pub mod cli;
pub mod config;
pub mod defaults;
pub mod handlers;
pub mod services;
pub mod types;
