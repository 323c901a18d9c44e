//! Digsip Infrastructure Layer
pub mod dns;
pub mod logging;
