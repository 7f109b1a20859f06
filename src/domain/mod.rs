//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types and pure business logic
//! - `wire.rs` — Raw serde structs matching backend requests and responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — App-owned state containers with update methods
//! - `client.rs` — Sub-client with HTTP methods

pub mod cart;
pub mod product;
