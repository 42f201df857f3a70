//! Field schema registry.
//!
//! Every DSL object declares an ordered list of [`FieldSpec`] entries in a
//! `const` [`Schema`]. The same declaration drives encoding (entry order),
//! decoding (key resolution) and builder validation (required fields).
//!
//! Two entry roles cover the single-key dictionary shapes of the wire format:
//!
//! - [`FieldRole::WrapperKey`]: `{ "<field>": { ...body } }`, as in
//!   `{"term": {"status": {"value": "ok"}}}`
//! - [`FieldRole::SiblingKey`]: the field is whichever key no other entry
//!   claims, as in `{"terms": {"status": ["ok"], "boost": 2.0}}`

use crate::error::{Error, Result};

/// How a field appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Ordinary `"name": value` property.
    Property,
    /// The object's single outer key carries this field's value.
    WrapperKey,
    /// The one key of the object not matched by a property or variant.
    SiblingKey,
}

/// One entry of a schema: json name, requiredness and wire role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub role: FieldRole,
}

impl FieldSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            role: FieldRole::Property,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            role: FieldRole::Property,
        }
    }

    pub const fn wrapper_key(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            role: FieldRole::WrapperKey,
        }
    }

    pub const fn sibling_key(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            role: FieldRole::SiblingKey,
        }
    }

    /// Whether the field's value is carried by a JSON key rather than a property.
    pub const fn is_key(&self) -> bool {
        !matches!(self.role, FieldRole::Property)
    }
}

/// Declarative description of one DSL object type.
#[derive(Debug)]
pub struct Schema {
    /// Type name used in error messages.
    pub type_name: &'static str,
    /// Supertype entries, written and resolved before `fields`.
    pub parent: Option<&'static Schema>,
    pub fields: &'static [FieldSpec],
    /// Discriminator keys of an embedded tagged union, if any.
    pub variants: &'static [&'static str],
    /// Property a bare scalar body stands in for.
    pub shortcut: Option<&'static str>,
}

impl Schema {
    pub const fn new(type_name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self {
            type_name,
            parent: None,
            fields,
            variants: &[],
            shortcut: None,
        }
    }

    pub const fn extends(self, parent: &'static Schema) -> Self {
        Self {
            parent: Some(parent),
            ..self
        }
    }

    pub const fn with_variants(self, variants: &'static [&'static str]) -> Self {
        Self { variants, ..self }
    }

    pub const fn with_shortcut(self, property: &'static str) -> Self {
        Self {
            shortcut: Some(property),
            ..self
        }
    }

    /// All entries, supertype entries first.
    pub fn entries(&self) -> Vec<&FieldSpec> {
        let mut entries = self.parent.map(|p| p.entries()).unwrap_or_default();
        entries.extend(self.fields.iter());
        entries
    }

    /// Look up an ordinary property by its json name.
    pub fn property(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|f| f.role == FieldRole::Property && f.name == name)
            .or_else(|| self.parent.and_then(|p| p.property(name)))
    }

    /// The entry whose value lives in a JSON key, if this type has one.
    pub fn key_field(&self) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|f| f.is_key())
            .or_else(|| self.parent.and_then(|p| p.key_field()))
    }

    pub fn is_variant(&self, name: &str) -> bool {
        self.variants.contains(&name)
    }

    /// Unwrap a required value or report which field is missing.
    pub fn require<T>(&self, field: &'static str, value: Option<T>) -> Result<T> {
        value.ok_or_else(|| self.missing(field))
    }

    /// Unwrap a required sibling key, rejecting names the reader would
    /// claim as a property or variant.
    pub fn require_sibling_key(&self, field: &'static str, value: Option<String>) -> Result<String> {
        let key = self.require(field, value)?;
        if self.property(&key).is_some() || self.is_variant(&key) {
            return Err(Error::ReservedKey {
                type_name: self.type_name,
                key,
            });
        }
        Ok(key)
    }

    /// Required list fields must hold at least one element.
    pub fn require_list<T>(&self, field: &'static str, values: Vec<T>) -> Result<Vec<T>> {
        if values.is_empty() {
            Err(self.missing(field))
        } else {
            Ok(values)
        }
    }

    pub fn missing(&self, field: &'static str) -> Error {
        debug_assert!(
            field.starts_with('<') || self.entries().iter().any(|f| f.name == field),
            "`{}` is not declared on {}",
            field,
            self.type_name
        );
        Error::MissingRequiredField {
            type_name: self.type_name,
            field,
        }
    }
}
