//! # Stencil Architecture
//!
//! Stencil is a **UI-agnostic scaffolding library** with a CLI client on top.
//! Given a validated project name and a pair of flags, it materializes a new
//! agent-service project from a template tree, rewriting the template's
//! placeholder identifier throughout.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, prompts, prints colored messages       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Sequences the pipeline stages for one run                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - resolve → copy → substitute → readme                     │
//! │  - Pure logic, no I/O assumptions whatsoever                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - Abstract TemplateSource trait                            │
//! │  - GitSource (production), DirSource (offline/testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. User-facing text
//! travels as leveled [`commands::CmdMessage`] values that the CLI prints.
//!
//! ## Resource Discipline
//!
//! The fetched template lives in a [`tempfile::TempDir`] owned by
//! [`source::FetchedTemplate`]; dropping it removes the checkout, so no run
//! leaks a temporary directory no matter how it terminates.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for a scaffolding run
//! - [`commands`]: Pipeline stages (resolve, copy, substitute, readme)
//! - [`source`]: Template acquisition (git clone or local directory)
//! - [`model`]: Core data types (`ProjectName`, `ScaffoldRequest`)
//! - [`templates`]: Placeholder constants, copy manifest, README sections
//! - [`config`]: User configuration (template repository override)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod templates;

#[cfg(any(test, feature = "test_utils"))]
pub mod testutil;
