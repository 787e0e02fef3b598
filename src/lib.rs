//! # Design Patterns
//!
//! Classic object-oriented design patterns expressed with Rust traits,
//! each module a small self-contained example with its own tests.
//!
//! ## Patterns Covered
//!
//! 1. **Observer** - subject/observer registry with identity-based registration
//! 2. **Abstract Factory** - families of car parts
//! 3. **Factory Method** - parcel senders
//! 4. **Static Factory** - provider framework driven by metadata
//! 5. **Decorator** - racket price surcharges
//! 6. **Builder** - drink orders assembled by a bartender
//! 7. **Composite** - computers priced from their parts
//! 8. **State** - audio player transitions
//! 9. **Strategy** - interchangeable audio backends
//! 10. **Command** - invoker and receiver with undo
//! 11. **Template Method** - audio decoders with hooks
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run --bin patterns
//! RUST_LOG=debug cargo run --bin patterns -- modules.toml
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enums for fallible patterns
//! - `log` / `env_logger` - logging of pattern actions
//! - `serde` / `toml` - provider metadata files
//! - `indexmap` - insertion-ordered observer registry
//! - `uuid` - observer identifiers

pub mod abstract_factory;
pub mod builder;
pub mod command;
pub mod composite;
pub mod decorator;
pub mod factory_method;
pub mod observer;
pub mod state;
pub mod static_factory;
pub mod strategy;
pub mod template_method;
