//! Native build tooling.
//!
//! This module holds the tool chain abstraction that locates compilers,
//! linkers and archivers and hands out adapters for them.

pub mod toolchain;

pub use toolchain::{
    Adapter, Availability, GppToolChain, NativeTool, ToolchainError, UnavailableReason,
};
