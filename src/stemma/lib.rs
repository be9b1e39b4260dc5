//! # Stemma Architecture
//!
//! Stemma is a **UI-agnostic hierarchy library**: it turns a flat,
//! parent-referencing collection of records into a rooted tree and answers
//! structural queries against it. The bundled CLI is just one client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, loads JSON input, formats output       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The Hierarchy facade: build once, query forever          │
//! │  - Returns structured Result/Option types                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: validation, root resolution, walks  │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Layer (model.rs, store.rs, index.rs, tree.rs)         │
//! │  - Records, the ordered flat store, the children index,     │
//! │    and the arena-backed immutable tree                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The construction pipeline
//!
//! [`Hierarchy::build`](api::Hierarchy::build) validates the store (empty
//! input, missing parent fields, dangling references, root count), resolves
//! the unique self-referencing root (or accepts a forced one), derives the
//! parent→children index in one pass, and materializes the tree iteratively.
//! It either fully succeeds or fails with exactly one
//! [`StemmaError`](error::StemmaError) — there is no partially built state.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, and never assumes a terminal.
//! The only I/O in the library is the opt-in JSON file loader on
//! [`FlatStore`](store::FlatStore), used by the CLI.
//!
//! ## Concurrency
//!
//! Construction consumes the store by value, so the snapshot cannot be
//! mutated behind the hierarchy's back. Everything a [`api::Hierarchy`]
//! owns is immutable after construction; queries take `&self` and any
//! number of readers may run concurrently.
//!
//! ## Example
//!
//! ```
//! use stemma::api::Hierarchy;
//! use stemma::model::{NodeId, Record};
//! use stemma::store::FlatStore;
//!
//! let mut store = FlatStore::new();
//! let root = NodeId::from("root");
//! store.insert(root.clone(), Record::child_of(&root).with_attr("name", "Everything"));
//! store.insert(NodeId::from("fruit"), Record::child_of(&root).with_attr("name", "Fruit"));
//!
//! let hierarchy = Hierarchy::build(store)?;
//! let children = hierarchy.children_of(None).expect("dataset has links");
//! assert_eq!(children[0].name, "Fruit");
//! # Ok::<(), stemma::error::StemmaError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The `Hierarchy` facade — entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`model`]: Node ids and attribute records
//! - [`store`]: The ordered flat input mapping
//! - [`index`]: Precomputed parent→children lookup
//! - [`tree`]: The arena-backed materialized tree
//! - [`render`]: Presentation helpers (indented listing, HTML list)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod index;
pub mod model;
pub mod render;
pub mod store;
pub mod tree;
