//! # locv-core — Foundational Types for the Locale Validator
//!
//! Defines the canonical tree model every other crate in the workspace
//! operates on. A raw YAML document is normalized into a [`Node`] tree of
//! exactly two shapes (string leaves and ordered branches) so that the
//! traversal code downstream never inspects raw YAML value kinds.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `locv-*` crates (this is the leaf of the DAG).
//! - Normalization never fails; unrecognized scalars degrade to empty leaves.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod locale;
pub mod node;

pub use locale::{expected_root_language, LocaleCode};
pub use node::{join_path, key_to_string, Node};
