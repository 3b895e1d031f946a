//! Core types for the fixturegen framework.
//!
//! This crate provides the foundational types used across the framework,
//! including:
//!
//! - [`TypeKey`] - Identity of a target type (concrete or `dyn Trait`)
//! - [`Catalog`] - Registry of generatable type descriptors
//! - [`ConcreteSpec`] - Builder for registering a concrete type
//! - [`ParamType`] - Classification of a constructor parameter
//! - [`Args`] - Typed access to generated constructor arguments
//! - [`GenerateError`] - Fault taxonomy shared with the engine
//!
//! # Architecture
//!
//! The fixture-core crate sits at the foundation of the framework:
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    └─── fixture-generator  (recursive engine, depends on the catalog)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{Catalog, ConcreteSpec, ParamType};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let mut catalog = Catalog::new();
//! catalog.register(
//!     ConcreteSpec::<Point>::new().constructor(
//!         vec![ParamType::primitive::<i32>(), ParamType::primitive::<i32>()],
//!         |args| {
//!             Ok(Point {
//!                 x: args.take()?,
//!                 y: args.take()?,
//!             })
//!         },
//!     ),
//! );
//! ```

pub mod args;
pub mod catalog;
pub mod error;

// Re-exports for convenience
pub use args::{Arg, Args};
pub use catalog::{
    Catalog, ConcreteEntry, ConcreteSpec, ConstructorSpec, ContainerKind, EntryKind, ParamType,
    TypeEntry, TypeKey,
};
pub use error::GenerateError;
