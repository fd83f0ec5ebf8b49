use crate::{
    field::FieldDescriptor,
    support::registry::{READONLY_SYSTEM_FIELDS, Support, is_sensitive_key},
    support::{interface_support, type_support},
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// SupportVerdict
///
/// Whether a cell backed by this field may be edited inline. `Full` is the
/// only editable verdict; `Partial` signals a supported type that is not
/// inline-safe.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportVerdict {
    #[display("full")]
    Full,
    #[display("partial")]
    Partial,
    #[display("none")]
    None,
    #[display("readonly")]
    Readonly,
}

/// Interfaces with a dedicated safe image cell renderer. These override the
/// declared type entirely.
const IMAGE_INTERFACES: &[&str] = &["file-image", "image"];

/// Generic file interfaces. Never editable inline, even when the declared
/// type would otherwise be supported.
const FILE_INTERFACES: &[&str] = &["file", "files"];

/// Classify a field for inline editing. Pure function of its inputs;
/// first matching rule wins.
#[must_use]
pub fn evaluate(field: Option<&FieldDescriptor>, key: Option<&str>) -> SupportVerdict {
    let Some(field) = field else {
        return SupportVerdict::None;
    };

    if field.readonly {
        return SupportVerdict::Readonly;
    }

    if field.generated || field.primary_key || field.auto_increment {
        return SupportVerdict::Readonly;
    }

    if let Some(key) = key {
        if READONLY_SYSTEM_FIELDS.contains(&key) {
            return SupportVerdict::Readonly;
        }
        if is_sensitive_key(key) {
            return SupportVerdict::Readonly;
        }
    }

    let interface = field.interface.as_deref();

    // Image interfaces win over the type check: image cells render through
    // a dedicated component that cannot corrupt the underlying value.
    if let Some(interface) = interface {
        if IMAGE_INTERFACES.contains(&interface) {
            return SupportVerdict::Full;
        }
        if FILE_INTERFACES.contains(&interface) {
            return SupportVerdict::None;
        }
    }

    let type_level = type_support(&field.field_type);
    if type_level == Support::None {
        return SupportVerdict::None;
    }

    let Some(interface) = interface else {
        // A supported but interfaceless field is never Partial.
        return if type_level == Support::Full {
            SupportVerdict::Full
        } else {
            SupportVerdict::None
        };
    };

    let interface_level = interface_support(interface);
    if interface_level == Support::None {
        return SupportVerdict::None;
    }

    if type_level == Support::Full && interface_level == Support::Full {
        SupportVerdict::Full
    } else {
        SupportVerdict::Partial
    }
}

/// True when the field's verdict permits an inline write.
#[must_use]
pub fn is_editable(field: Option<&FieldDescriptor>, key: Option<&str>) -> bool {
    evaluate(field, key) == SupportVerdict::Full
}

/// Human-readable reason a field is or is not editable, mirroring the
/// decision order of [`evaluate`]. Empty only for the image-interface
/// special case.
#[must_use]
pub fn explain(field: Option<&FieldDescriptor>, key: Option<&str>) -> String {
    let Some(field) = field else {
        return "Field information not available".to_string();
    };

    if field.readonly {
        return "This field is configured as read-only".to_string();
    }
    if field.generated {
        return "Generated fields cannot be edited".to_string();
    }
    if field.primary_key {
        return "Primary key fields cannot be edited".to_string();
    }
    if field.auto_increment {
        return "Auto-increment fields cannot be edited".to_string();
    }

    if let Some(key) = key {
        if READONLY_SYSTEM_FIELDS.contains(&key) {
            return format!("System field \"{key}\" cannot be edited");
        }
        if is_sensitive_key(key) {
            return "Security-sensitive fields cannot be edited in table view".to_string();
        }
    }

    let interface = field.interface.as_deref();

    if let Some(interface) = interface {
        if IMAGE_INTERFACES.contains(&interface) {
            return String::new();
        }
        if FILE_INTERFACES.contains(&interface) {
            return "File fields (non-image) are not supported for inline editing. \
                    Please use the item detail view."
                .to_string();
        }
    }

    match type_support(&field.field_type) {
        Support::None => {
            return format!(
                "Field type \"{}\" is not yet supported for inline editing. \
                 Please use the item detail view.",
                field.field_type
            );
        }
        Support::Partial => {
            return format!(
                "Field type \"{}\" has limited support for inline editing. \
                 Some features may not work as expected.",
                field.field_type
            );
        }
        Support::Full => {}
    }

    let Some(interface) = interface else {
        return "No interface configured for this field".to_string();
    };

    match interface_support(interface) {
        Support::None => format!(
            "Interface \"{interface}\" is not yet supported for inline editing. \
             Please use the item detail view."
        ),
        Support::Partial => match interface {
            "tags" => "Tag fields have limited support. Complex tag operations \
                       should be done in the detail view."
                .to_string(),
            _ => format!("Interface \"{interface}\" has limited support for inline editing."),
        },
        Support::Full => "This field cannot be edited inline for unknown reasons".to_string(),
    }
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------
