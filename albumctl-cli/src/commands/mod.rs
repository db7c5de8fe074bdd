//! Command implementations for albumctl

pub mod serve;
