// src/specs/mod.rs
//! # Catalog “specs” module
//!
//! Page-specific reading of the two catalog payloads. Each reader knows *where
//! the values live in the markup* and how to pull them out with `core::markup`.
//!
//! ## What lives here
//! - `search` – the multi-result search response → ordered `CandidateItem`s.
//! - `thing` – the single-item detail response → one `GameRecord`.
//!
//! ## What does **not** live here
//! - **Networking** – callers hand in the raw text (`lookup::Catalog` fetches it).
//! - **Choosing between candidates** – that's `select`.
//! - **Presentation** – GUI/CLI format fields; specs only extract.
//!
//! ## Conventions & invariants
//! - Extraction never fails per field. A missing value is `Field::Unknown`.
//! - Document order is preserved; nothing here sorts.
//! - Statistics that share tag names with other blocks are read from their
//!   containing section when it exists.
//!
//! ## Testing notes
//! Fixtures live in `tests/fixtures/`. Specs are testable offline against them.
pub mod search;
pub mod thing;
