mod descriptor;
mod key;

pub use descriptor::FieldDescriptor;
pub use key::{FieldKey, language_variant_key, normalize_sort_key};
