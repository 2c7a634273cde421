//! # State Module
//!
//! The vault stores no account data, so "state" here is the address rule and
//! the lifecycle of the lamport account at that address.

pub mod vault;

pub use vault::*;
