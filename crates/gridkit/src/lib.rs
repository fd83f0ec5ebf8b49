//! Core engine for tabular content-collection layouts: field-support
//! classification, alias/translation field-path resolution, quick-filter
//! merging, and translation-aware edit payloads.
//!
//! The host application owns transport, rendering, and persistence; this
//! crate owns classification, parsing, derivation, and payload construction.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod api;
pub mod edits;
pub mod error;
pub mod field;
pub mod filter;
pub mod items;
pub mod lang;
pub mod layout;
pub mod resolve;
pub mod stores;
pub mod support;
pub mod translation;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Collection that holds the host's file rows.
///
/// The `$thumbnail` display affordance is only ever attached to fields from
/// this collection and must never reach the fetch API.
pub const SYSTEM_FILE_COLLECTION: &str = "directus_files";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        field::{FieldDescriptor, FieldKey},
        filter::{Filter, FilterEngine, FilterLogic, QuickFilterPreset},
        lang::Language,
        layout::LayoutOptions,
        support::SupportVerdict,
    };
}
