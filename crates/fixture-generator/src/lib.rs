//! Recursive fixture generator for the fixturegen framework.
//!
//! This crate provides the [`Engine`] which produces randomly-valued,
//! fully-populated instances of catalog-registered types. The engine uses
//! a seeded RNG to ensure reproducibility across runs with the same seed.
//!
//! # Architecture
//!
//! ```text
//! Catalog (type descriptors)
//!        │
//!        ▼
//! ┌─────────────────┐     primitives  (per-type random producers)
//! │     Engine      │────▶ collection  (fixed-size sequence synthesis)
//! │                 │────▶ resolver    (contract → concrete pick)
//! │  - rng (StdRng) │
//! │  - depth bound  │
//! └────────┬────────┘
//!          │
//!          ▼
//!    generated instance (owned by the caller)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{Catalog, ConcreteSpec, ParamType};
//! use fixture_generator::Engine;
//!
//! #[derive(Debug)]
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
//!
//! let mut engine = Engine::new(&catalog, 42);
//! let point: Point = engine.generate().unwrap();
//! println!("Generated point: {point:?}");
//! ```
//!
//! # Generation rules
//!
//! - Constructor parameters are classified as primitive, container, or
//!   composite, and produced by the matching component.
//! - Among a type's constructors, one is picked uniformly at random.
//! - A `dyn Trait` contract is resolved to a random generatable
//!   implementer; resolution does not consume a recursion level.
//! - Composite expansion deeper than [`MAX_DEPTH`] yields an absent value
//!   instead of recursing further, which bounds every call tree.

pub mod collection;
pub mod engine;
pub mod primitives;
pub mod resolver;

// Re-exports for convenience
pub use collection::SEQUENCE_LEN;
pub use engine::{Engine, MAX_DEPTH};
pub use primitives::PrimitiveRegistry;
