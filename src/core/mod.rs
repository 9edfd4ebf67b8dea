//! Core module - Tokenizing, counting, ranking and rendering
//!
//! This module provides:
//! - Token model and frequency map
//! - Split functions and the bounded token reader
//! - Mode dispatch (split + describe pairs)
//! - Ranking with a deterministic two-key order
//! - Rendering to tsv/jsonl/json
//! - Unicode names and printable classification

pub mod error;
pub mod mode;
pub mod model;
pub mod pipeline;
pub mod ranking;
pub mod render;
pub mod tokenizer;
pub mod unicode;
