//! Field-support classification: which fields may be edited inline
//! without risking data corruption.

mod evaluate;
mod registry;

pub use evaluate::{SupportVerdict, evaluate, explain, is_editable};
pub use registry::{
    NON_EDITABLE_SYSTEM_FIELDS, READONLY_SYSTEM_FIELDS, SENSITIVE_NAME_PATTERNS, Support,
    interface_support, type_support,
};
