//! Synthesizes a sample inventory catalog: a fixed list of seed items
//! followed by items generated from per-category product templates, written
//! as one json array.

pub mod catalog;
pub mod error;
pub mod item;
pub mod item_generator;
pub mod placeholder;
pub mod seed_items;
pub mod spec_table;
pub mod templates;
pub mod writer;
