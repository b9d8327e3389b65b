//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic todo-list library**. This is not a CLI application that
//! happens to have some library code—it's a library that happens to have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the todoz binary, or any other presentation layer) │
//! │  - Parses input, formats output, owns the terminal          │
//! │  - Forwards user intents as direct calls into the engine    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (engine.rs)                                         │
//! │  - Owns the canonical record collection, filter criteria,   │
//! │    and page state                                           │
//! │  - Applies mutations; derives the visible slice and the     │
//! │    page-control row                                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sources (source.rs)                                        │
//! │  - Abstract DataSource trait                                │
//! │  - SampleSource (built-in fixture), RemoteSource (demo API) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the engine inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same engine could sit behind a web view, a TUI, or a REST handler.
//!
//! ## Mutation Semantics
//!
//! Record mutations are synchronous and total: a blank text on add/edit, or an
//! unknown id on toggle/remove/edit, is a silent no-op rather than an error. The
//! presentation layer only ever supplies ids it just rendered, so an unknown id is
//! not actionable. Errors are reserved for the fallible edges: fetching from a
//! data source and reading/writing configuration.
//!
//! ## Module Overview
//!
//! - [`engine`]: The [`engine::TodoView`] engine—entry point for all operations
//! - [`model`]: The [`model::TodoRecord`] type and text validation
//! - [`filter`]: Filter criteria and the match predicate
//! - [`pager`]: Slice windowing and the page-number display list
//! - [`source`]: Data-source collaborators (fixture and remote)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod model;
pub mod pager;
pub mod source;
