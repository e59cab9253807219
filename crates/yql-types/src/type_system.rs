//! YQL Type System
//!
//! This module defines the type descriptors attached to every runtime value:
//! - `Type` enum covering primitive, decimal, optional and container types
//! - `PrimitiveType` for the fixed set of scalar kinds
//! - Canonical YQL rendering used in diagnostics
//!
//! The YQL text is meant for humans reading errors and logs; it is not a
//! machine-readable format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar kinds supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Bool,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
    /// Calendar date
    Date,
    /// Point in time with second precision
    Datetime,
    /// Point in time with microsecond precision
    Timestamp,
    /// Signed time span with microsecond precision
    Interval,
    /// Arbitrary bytes
    String,
    /// UTF-8 text
    Utf8,
    Yson,
    Json,
    JsonDocument,
    Uuid,
    DyNumber,
}

impl PrimitiveType {
    /// Get the YQL name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Int8 => "Int8",
            Self::Uint8 => "Uint8",
            Self::Int16 => "Int16",
            Self::Uint16 => "Uint16",
            Self::Int32 => "Int32",
            Self::Uint32 => "Uint32",
            Self::Int64 => "Int64",
            Self::Uint64 => "Uint64",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Date => "Date",
            Self::Datetime => "Datetime",
            Self::Timestamp => "Timestamp",
            Self::Interval => "Interval",
            Self::String => "String",
            Self::Utf8 => "Utf8",
            Self::Yson => "Yson",
            Self::Json => "Json",
            Self::JsonDocument => "JsonDocument",
            Self::Uuid => "Uuid",
            Self::DyNumber => "DyNumber",
        }
    }

    /// Check if this type is an integer type
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Uint8
                | Self::Int16
                | Self::Uint16
                | Self::Int32
                | Self::Uint32
                | Self::Int64
                | Self::Uint64
        )
    }

    /// Check if this type is numeric
    pub const fn is_numeric(&self) -> bool {
        self.is_integer() || matches!(self, Self::Float | Self::Double)
    }

    /// Check if this type is temporal
    pub const fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date | Self::Datetime | Self::Timestamp | Self::Interval
        )
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named member of a struct type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructField {
    /// Field name
    pub name: String,
    /// Field type
    pub field_type: Type,
}

impl StructField {
    /// Create a new struct field
    pub fn new(name: impl Into<String>, field_type: Type) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// The complete YQL type representation
///
/// Every runtime value carries exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// Scalar type
    Primitive(PrimitiveType),
    /// Fixed-point decimal
    Decimal { precision: u32, scale: u32 },
    /// Nullable wrapper
    Optional(Box<Type>),
    /// Homogeneous list
    List(Box<Type>),
    /// List literal with no items and no declared item type
    EmptyList,
    /// Positional heterogeneous record
    Tuple(Vec<Type>),
    /// Named heterogeneous record (field order is significant)
    Struct(Vec<StructField>),
    /// Key/value mapping
    Dict { key: Box<Type>, value: Box<Type> },
    /// Dict literal with no entries and no declared key/value types
    EmptyDict,
}

impl Type {
    // === Constructors ===

    /// Create a primitive type
    pub const fn primitive(primitive: PrimitiveType) -> Self {
        Self::Primitive(primitive)
    }

    /// Create a decimal type
    pub const fn decimal(precision: u32, scale: u32) -> Self {
        Self::Decimal { precision, scale }
    }

    /// Create an optional type
    pub fn optional(inner: Type) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Create a list type
    pub fn list(item: Type) -> Self {
        Self::List(Box::new(item))
    }

    /// Create a tuple type
    pub fn tuple(items: Vec<Type>) -> Self {
        Self::Tuple(items)
    }

    /// Create a struct type from (name, type) pairs
    pub fn structure(fields: impl IntoIterator<Item = (impl Into<String>, Type)>) -> Self {
        Self::Struct(
            fields
                .into_iter()
                .map(|(name, field_type)| StructField::new(name, field_type))
                .collect(),
        )
    }

    /// Create a dict type
    pub fn dict(key: Type, value: Type) -> Self {
        Self::Dict {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    // === Type Properties ===

    /// Check if this is a primitive type
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Check if this is a decimal type
    pub fn is_decimal(&self) -> bool {
        matches!(self, Self::Decimal { .. })
    }

    /// Check if this is an optional type
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Check if this is a container type (list, tuple, struct or dict)
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::List(_)
                | Self::EmptyList
                | Self::Tuple(_)
                | Self::Struct(_)
                | Self::Dict { .. }
                | Self::EmptyDict
        )
    }

    /// Get the simple name of this type, without parameters
    pub fn name(&self) -> &'static str {
        match self {
            Self::Primitive(p) => p.name(),
            Self::Decimal { .. } => "Decimal",
            Self::Optional(_) => "Optional",
            Self::List(_) => "List",
            Self::EmptyList => "EmptyList",
            Self::Tuple(_) => "Tuple",
            Self::Struct(_) => "Struct",
            Self::Dict { .. } => "Dict",
            Self::EmptyDict => "EmptyDict",
        }
    }

    /// Render the canonical YQL notation, e.g. `Struct<'a':Int32,'b':Utf8>`
    pub fn yql(&self) -> String {
        self.to_string()
    }
}

impl From<PrimitiveType> for Type {
    fn from(primitive: PrimitiveType) -> Self {
        Self::Primitive(primitive)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{}", p),
            Self::Decimal { precision, scale } => write!(f, "Decimal({},{})", precision, scale),
            Self::Optional(inner) => write!(f, "Optional<{}>", inner),
            Self::List(item) => write!(f, "List<{}>", item),
            Self::EmptyList => write!(f, "EmptyList"),
            Self::Tuple(items) => {
                write!(f, "Tuple<")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ">")
            }
            Self::Struct(fields) => {
                write!(f, "Struct<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "'{}':{}", field.name, field.field_type)?;
                }
                write!(f, ">")
            }
            Self::Dict { key, value } => write!(f, "Dict<{},{}>", key, value),
            Self::EmptyDict => write!(f, "EmptyDict"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_yql() {
        assert_eq!(Type::primitive(PrimitiveType::Int32).yql(), "Int32");
        assert_eq!(Type::primitive(PrimitiveType::JsonDocument).yql(), "JsonDocument");
    }

    #[test]
    fn test_nested_yql() {
        let ty = Type::list(Type::optional(Type::decimal(22, 9)));
        assert_eq!(ty.yql(), "List<Optional<Decimal(22,9)>>");

        let ty = Type::dict(
            PrimitiveType::Utf8.into(),
            Type::tuple(vec![PrimitiveType::Int64.into(), Type::EmptyList]),
        );
        assert_eq!(ty.yql(), "Dict<Utf8,Tuple<Int64,EmptyList>>");
    }

    #[test]
    fn test_struct_yql_keeps_field_order() {
        let ty = Type::structure([
            ("b", Type::primitive(PrimitiveType::Utf8)),
            ("a", Type::primitive(PrimitiveType::Int32)),
        ]);
        assert_eq!(ty.yql(), "Struct<'b':Utf8,'a':Int32>");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(Type::tuple(vec![]).yql(), "Tuple<>");
        assert_eq!(Type::Struct(vec![]).yql(), "Struct<>");
        assert_eq!(Type::EmptyDict.yql(), "EmptyDict");
        assert!(Type::EmptyDict.is_container());
    }
}
