//! YQL Value types - runtime representation of all values
//!
//! This module defines the `Value` enum and its supporting types for
//! representing data exchanged with the engine. Values are immutable once
//! built; containers own their items.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use indexmap::IndexMap;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{DecimalValue, PrimitiveType, StructField, Type};

/// The primary value type for runtime values.
///
/// Each variant is one shape; a value never has more than one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Primitive scalar
    Scalar(Scalar),
    /// Fixed-point decimal
    Decimal(DecimalValue),
    /// Nullable wrapper around another value
    Optional(OptionalValue),
    /// Ordered homogeneous sequence
    List(ListValue),
    /// Ordered heterogeneous sequence
    Tuple(TupleValue),
    /// Named fields in declaration order
    Struct(StructValue),
    /// Key/value mapping
    Dict(DictValue),
}

impl Value {
    // === Scalar constructors ===

    pub fn bool(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }

    pub fn int8(value: i8) -> Self {
        Self::Scalar(Scalar::Int8(value))
    }

    pub fn uint8(value: u8) -> Self {
        Self::Scalar(Scalar::Uint8(value))
    }

    pub fn int16(value: i16) -> Self {
        Self::Scalar(Scalar::Int16(value))
    }

    pub fn uint16(value: u16) -> Self {
        Self::Scalar(Scalar::Uint16(value))
    }

    pub fn int32(value: i32) -> Self {
        Self::Scalar(Scalar::Int32(value))
    }

    pub fn uint32(value: u32) -> Self {
        Self::Scalar(Scalar::Uint32(value))
    }

    pub fn int64(value: i64) -> Self {
        Self::Scalar(Scalar::Int64(value))
    }

    pub fn uint64(value: u64) -> Self {
        Self::Scalar(Scalar::Uint64(value))
    }

    pub fn float(value: f32) -> Self {
        Self::Scalar(Scalar::Float(value))
    }

    pub fn double(value: f64) -> Self {
        Self::Scalar(Scalar::Double(value))
    }

    pub fn date(value: NaiveDate) -> Self {
        Self::Scalar(Scalar::Date(value))
    }

    pub fn datetime(value: DateTime<Utc>) -> Self {
        Self::Scalar(Scalar::Datetime(value))
    }

    pub fn timestamp(value: DateTime<Utc>) -> Self {
        Self::Scalar(Scalar::Timestamp(value))
    }

    pub fn interval(value: TimeDelta) -> Self {
        Self::Scalar(Scalar::Interval(value))
    }

    /// Create a YQL `String` (raw bytes) value
    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Self::Scalar(Scalar::String(value.into()))
    }

    /// Create a YQL `Utf8` value
    pub fn utf8(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Utf8(value.into()))
    }

    pub fn yson(value: impl Into<Vec<u8>>) -> Self {
        Self::Scalar(Scalar::Yson(value.into()))
    }

    pub fn json(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Json(value.into()))
    }

    pub fn json_document(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::JsonDocument(value.into()))
    }

    pub fn uuid(value: [u8; 16]) -> Self {
        Self::Scalar(Scalar::Uuid(value))
    }

    pub fn dy_number(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::DyNumber(value.into()))
    }

    /// Create a decimal value
    pub fn decimal(value: DecimalValue) -> Self {
        Self::Decimal(value)
    }

    // === Composite constructors ===

    /// Wrap a present value into `Optional<T>`
    pub fn optional(value: Value) -> Self {
        Self::Optional(OptionalValue {
            inner_type: value.get_type(),
            value: Some(Box::new(value)),
        })
    }

    /// Create a null `Optional<inner_type>`
    pub fn null(inner_type: Type) -> Self {
        Self::Optional(OptionalValue {
            inner_type,
            value: None,
        })
    }

    /// Create a list; the item type is taken from the first item.
    ///
    /// Without items the value has type `EmptyList`.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        let items: Vec<Value> = items.into_iter().collect();
        Self::List(ListValue {
            item_type: items.first().map(Value::get_type),
            items,
        })
    }

    /// Create a list of type `List<item_type>` with no items
    pub fn empty_list(item_type: Type) -> Self {
        Self::List(ListValue {
            item_type: Some(item_type),
            items: Vec::new(),
        })
    }

    /// Create a tuple
    pub fn tuple(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Tuple(TupleValue {
            items: items.into_iter().collect(),
        })
    }

    /// Create a struct from (name, value) pairs.
    ///
    /// A repeated name replaces the earlier value but keeps its position.
    pub fn structure(fields: impl IntoIterator<Item = (impl Into<String>, Value)>) -> Self {
        Self::Struct(StructValue {
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        })
    }

    /// Create a dict; key and value types are taken from the first entry.
    ///
    /// Without entries the value has type `EmptyDict`. A repeated key
    /// replaces the earlier value.
    pub fn dict(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let entries: IndexMap<Value, Value> = entries.into_iter().collect();
        let entry_type = entries
            .first()
            .map(|(key, value)| (key.get_type(), value.get_type()));
        Self::Dict(DictValue {
            entry_type,
            entries,
        })
    }

    /// Create a dict of type `Dict<key_type,value_type>` with no entries
    pub fn empty_dict(key_type: Type, value_type: Type) -> Self {
        Self::Dict(DictValue {
            entry_type: Some((key_type, value_type)),
            entries: IndexMap::new(),
        })
    }

    // === Inspection ===

    /// Get the type of this value
    pub fn get_type(&self) -> Type {
        match self {
            Self::Scalar(scalar) => Type::Primitive(scalar.primitive_type()),
            Self::Decimal(decimal) => decimal.decimal_type(),
            Self::Optional(optional) => Type::optional(optional.inner_type.clone()),
            Self::List(list) => match &list.item_type {
                Some(item_type) => Type::list(item_type.clone()),
                None => Type::EmptyList,
            },
            Self::Tuple(tuple) => Type::Tuple(tuple.items.iter().map(Value::get_type).collect()),
            Self::Struct(st) => Type::Struct(
                st.fields
                    .iter()
                    .map(|(name, value)| StructField::new(name.clone(), value.get_type()))
                    .collect(),
            ),
            Self::Dict(dict) => match &dict.entry_type {
                Some((key, value)) => Type::dict(key.clone(), value.clone()),
                None => Type::EmptyDict,
            },
        }
    }

    /// Canonical YQL rendering of this value's type
    pub fn yql(&self) -> String {
        self.get_type().yql()
    }

    /// Check if this is a null optional
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Optional(OptionalValue { value: None, .. }))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<&DecimalValue> {
        match self {
            Self::Decimal(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_optional(&self) -> Option<&OptionalValue> {
        match self {
            Self::Optional(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListValue> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&TupleValue> {
        match self {
            Self::Tuple(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&DictValue> {
        match self {
            Self::Dict(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{}", s),
            Self::Decimal(d) => write!(f, "{}", d),
            Self::Optional(o) => match &o.value {
                Some(v) => write!(f, "{}", v),
                None => write!(f, "NULL"),
            },
            Self::List(l) => {
                write!(f, "[")?;
                write_joined(f, l.items.iter())?;
                write!(f, "]")
            }
            Self::Tuple(t) => {
                write!(f, "(")?;
                write_joined(f, t.items.iter())?;
                write!(f, ")")
            }
            Self::Struct(s) => {
                write!(f, "<|")?;
                for (i, (name, value)) in s.fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}:{}", name, value)?;
                }
                write!(f, "|>")
            }
            Self::Dict(d) => {
                write!(f, "{{")?;
                for (i, (key, value)) in d.entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a Value>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

// ============================================================================
// Scalars
// ============================================================================

/// Primitive scalar payload
///
/// Floating point payloads compare and hash by bit pattern, so `NaN` equals
/// itself and `0.0` differs from `-0.0`. This keeps values usable as dict keys.
#[derive(Debug, Clone)]
pub enum Scalar {
    Bool(bool),
    Int8(i8),
    Uint8(u8),
    Int16(i16),
    Uint16(u16),
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
    Float(f32),
    Double(f64),
    Date(NaiveDate),
    Datetime(DateTime<Utc>),
    Timestamp(DateTime<Utc>),
    Interval(TimeDelta),
    /// Raw bytes (YQL `String`)
    String(Vec<u8>),
    Utf8(String),
    Yson(Vec<u8>),
    Json(String),
    JsonDocument(String),
    Uuid([u8; 16]),
    DyNumber(String),
}

impl Scalar {
    /// Get the primitive type of this scalar
    pub fn primitive_type(&self) -> PrimitiveType {
        match self {
            Self::Bool(_) => PrimitiveType::Bool,
            Self::Int8(_) => PrimitiveType::Int8,
            Self::Uint8(_) => PrimitiveType::Uint8,
            Self::Int16(_) => PrimitiveType::Int16,
            Self::Uint16(_) => PrimitiveType::Uint16,
            Self::Int32(_) => PrimitiveType::Int32,
            Self::Uint32(_) => PrimitiveType::Uint32,
            Self::Int64(_) => PrimitiveType::Int64,
            Self::Uint64(_) => PrimitiveType::Uint64,
            Self::Float(_) => PrimitiveType::Float,
            Self::Double(_) => PrimitiveType::Double,
            Self::Date(_) => PrimitiveType::Date,
            Self::Datetime(_) => PrimitiveType::Datetime,
            Self::Timestamp(_) => PrimitiveType::Timestamp,
            Self::Interval(_) => PrimitiveType::Interval,
            Self::String(_) => PrimitiveType::String,
            Self::Utf8(_) => PrimitiveType::Utf8,
            Self::Yson(_) => PrimitiveType::Yson,
            Self::Json(_) => PrimitiveType::Json,
            Self::JsonDocument(_) => PrimitiveType::JsonDocument,
            Self::Uuid(_) => PrimitiveType::Uuid,
            Self::DyNumber(_) => PrimitiveType::DyNumber,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int8(a), Self::Int8(b)) => a == b,
            (Self::Uint8(a), Self::Uint8(b)) => a == b,
            (Self::Int16(a), Self::Int16(b)) => a == b,
            (Self::Uint16(a), Self::Uint16(b)) => a == b,
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Uint32(a), Self::Uint32(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::Uint64(a), Self::Uint64(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Double(a), Self::Double(b)) => a.to_bits() == b.to_bits(),
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Datetime(a), Self::Datetime(b)) => a == b,
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            (Self::Interval(a), Self::Interval(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Utf8(a), Self::Utf8(b)) => a == b,
            (Self::Yson(a), Self::Yson(b)) => a == b,
            (Self::Json(a), Self::Json(b)) => a == b,
            (Self::JsonDocument(a), Self::JsonDocument(b)) => a == b,
            (Self::Uuid(a), Self::Uuid(b)) => a == b,
            (Self::DyNumber(a), Self::DyNumber(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Bool(v) => v.hash(state),
            Self::Int8(v) => v.hash(state),
            Self::Uint8(v) => v.hash(state),
            Self::Int16(v) => v.hash(state),
            Self::Uint16(v) => v.hash(state),
            Self::Int32(v) => v.hash(state),
            Self::Uint32(v) => v.hash(state),
            Self::Int64(v) => v.hash(state),
            Self::Uint64(v) => v.hash(state),
            Self::Float(v) => v.to_bits().hash(state),
            Self::Double(v) => v.to_bits().hash(state),
            Self::Date(v) => v.hash(state),
            Self::Datetime(v) | Self::Timestamp(v) => v.hash(state),
            Self::Interval(v) => v.hash(state),
            Self::String(v) | Self::Yson(v) => v.hash(state),
            Self::Utf8(v) | Self::Json(v) | Self::JsonDocument(v) | Self::DyNumber(v) => {
                v.hash(state)
            }
            Self::Uuid(v) => v.hash(state),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int8(v) => write!(f, "{}", v),
            Self::Uint8(v) => write!(f, "{}", v),
            Self::Int16(v) => write!(f, "{}", v),
            Self::Uint16(v) => write!(f, "{}", v),
            Self::Int32(v) => write!(f, "{}", v),
            Self::Uint32(v) => write!(f, "{}", v),
            Self::Int64(v) => write!(f, "{}", v),
            Self::Uint64(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
            Self::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Self::Datetime(v) => write!(f, "{}", v.format("%Y-%m-%dT%H:%M:%SZ")),
            Self::Timestamp(v) => write!(f, "{}", v.format("%Y-%m-%dT%H:%M:%S%.6fZ")),
            Self::Interval(v) => write!(f, "{}us", interval_micros(v)),
            Self::String(v) | Self::Yson(v) => write!(f, "{:?}", String::from_utf8_lossy(v)),
            Self::Utf8(v) | Self::Json(v) | Self::JsonDocument(v) => write!(f, "{:?}", v),
            Self::DyNumber(v) => write!(f, "{}", v),
            Self::Uuid(v) => {
                for (i, byte) in v.iter().enumerate() {
                    if matches!(i, 4 | 6 | 8 | 10) {
                        write!(f, "-")?;
                    }
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

/// Whole microseconds in `span`, exact over the full `TimeDelta` range
fn interval_micros(span: &TimeDelta) -> i128 {
    i128::from(span.num_seconds()) * 1_000_000 + i128::from(span.subsec_nanos() / 1_000)
}

// ============================================================================
// Composite Types
// ============================================================================

/// Optional value: present or null, with its inner type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionalValue {
    inner_type: Type,
    value: Option<Box<Value>>,
}

impl OptionalValue {
    /// Get the wrapped value, `None` for null
    pub fn value(&self) -> Option<&Value> {
        self.value.as_deref()
    }

    pub fn inner_type(&self) -> &Type {
        &self.inner_type
    }
}

/// List of items sharing one type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListValue {
    /// `None` for an untyped empty list
    item_type: Option<Type>,
    items: Vec<Value>,
}

impl ListValue {
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn item_type(&self) -> Option<&Type> {
        self.item_type.as_ref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by index (0-based)
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }
}

/// Tuple - positional record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleValue {
    items: Vec<Value>,
}

impl TupleValue {
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }
}

/// Struct - record with named fields
///
/// Field order is part of the struct's type, so equality and hashing are
/// order sensitive.
#[derive(Debug, Clone)]
pub struct StructValue {
    fields: IndexMap<String, Value>,
}

impl StructValue {
    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl PartialEq for StructValue {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len() && self.fields.iter().eq(other.fields.iter())
    }
}

impl Eq for StructValue {}

impl Hash for StructValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.len().hash(state);
        for (name, value) in &self.fields {
            name.hash(state);
            value.hash(state);
        }
    }
}

/// Dict - mapping from key values to values
///
/// Equality ignores entry order; iteration follows insertion order.
#[derive(Debug, Clone)]
pub struct DictValue {
    /// `None` for an untyped empty dict
    entry_type: Option<(Type, Type)>,
    entries: IndexMap<Value, Value>,
}

impl DictValue {
    pub fn entries(&self) -> &IndexMap<Value, Value> {
        &self.entries
    }

    /// Look up the value stored under `key`
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter()
    }
}

impl PartialEq for DictValue {
    fn eq(&self, other: &Self) -> bool {
        self.entry_type == other.entry_type && self.entries == other.entries
    }
}

impl Eq for DictValue {}

impl Hash for DictValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entry_type.hash(state);
        self.entries.len().hash(state);
        // order-independent combination to agree with `PartialEq`
        let combined = self.entries.iter().fold(0u64, |acc, (key, value)| {
            let mut hasher = DefaultHasher::new();
            key.hash(&mut hasher);
            value.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });
        combined.hash(state);
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! scalar_from {
    ($($native:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$native> for Value {
                fn from(value: $native) -> Self {
                    Self::Scalar(Scalar::$variant(value))
                }
            }
        )+
    };
}

scalar_from! {
    bool => Bool,
    i8 => Int8,
    u8 => Uint8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    i64 => Int64,
    u64 => Uint64,
    f32 => Float,
    f64 => Double,
    NaiveDate => Date,
    DateTime<Utc> => Timestamp,
    TimeDelta => Interval,
    String => Utf8,
    Vec<u8> => String,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::utf8(value)
    }
}

impl From<DecimalValue> for Value {
    fn from(value: DecimalValue) -> Self {
        Self::Decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_types() {
        assert_eq!(Value::int32(1).yql(), "Int32");
        assert_eq!(Value::from("x").yql(), "Utf8");
        assert_eq!(Value::bytes(b"x".to_vec()).yql(), "String");
        assert_eq!(Value::from(1.5f64).yql(), "Double");
    }

    #[test]
    fn test_composite_types() {
        let list = Value::list([Value::int32(1), Value::int32(2)]);
        assert_eq!(list.yql(), "List<Int32>");
        assert_eq!(Value::list([]).yql(), "EmptyList");
        assert_eq!(Value::empty_list(Type::primitive(PrimitiveType::Utf8)).yql(), "List<Utf8>");

        let tuple = Value::tuple([Value::int32(1), Value::utf8("x")]);
        assert_eq!(tuple.yql(), "Tuple<Int32,Utf8>");

        let st = Value::structure([("a", Value::int32(1)), ("b", Value::utf8("x"))]);
        assert_eq!(st.yql(), "Struct<'a':Int32,'b':Utf8>");

        let dict = Value::dict([(Value::utf8("k"), Value::uint64(1))]);
        assert_eq!(dict.yql(), "Dict<Utf8,Uint64>");
        assert_eq!(Value::dict([]).yql(), "EmptyDict");

        let opt = Value::null(Type::primitive(PrimitiveType::Int32));
        assert_eq!(opt.yql(), "Optional<Int32>");
        assert!(opt.is_null());
        assert_eq!(Value::optional(Value::int8(1)).yql(), "Optional<Int8>");
    }

    #[test]
    fn test_struct_duplicate_name_keeps_first_position() {
        let st = Value::structure([
            ("a", Value::int32(1)),
            ("b", Value::int32(2)),
            ("a", Value::int32(3)),
        ]);
        let fields = st.as_struct().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("a"), Some(&Value::int32(3)));
        assert_eq!(st.yql(), "Struct<'a':Int32,'b':Int32>");
    }

    #[test]
    fn test_struct_equality_is_order_sensitive() {
        let ab = Value::structure([("a", Value::int32(1)), ("b", Value::int32(2))]);
        let ba = Value::structure([("b", Value::int32(2)), ("a", Value::int32(1))]);
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_dict_equality_ignores_order() {
        let one = Value::dict([
            (Value::int32(1), Value::utf8("a")),
            (Value::int32(2), Value::utf8("b")),
        ]);
        let two = Value::dict([
            (Value::int32(2), Value::utf8("b")),
            (Value::int32(1), Value::utf8("a")),
        ]);
        assert_eq!(one, two);

        let mut outer = IndexMap::new();
        outer.insert(one, 1);
        assert_eq!(outer.get(&two), Some(&1));
    }

    #[test]
    fn test_float_keys_compare_bitwise() {
        assert_eq!(Value::double(f64::NAN), Value::double(f64::NAN));
        assert_ne!(Value::double(0.0), Value::double(-0.0));
    }

    #[test]
    fn test_interval_display() {
        assert_eq!(Value::interval(TimeDelta::microseconds(1_500)).to_string(), "1500us");
        assert_eq!(Value::interval(TimeDelta::microseconds(-1_500)).to_string(), "-1500us");

        // beyond the i64 microsecond range
        let wide = TimeDelta::seconds(i64::MAX / 1_000);
        assert!(wide.num_microseconds().is_none());
        assert_eq!(
            Value::interval(wide).to_string(),
            format!("{}us", i128::from(i64::MAX / 1_000) * 1_000_000)
        );
    }

    #[test]
    fn test_display() {
        let st = Value::structure([
            ("id", Value::uint64(7)),
            ("tags", Value::list([Value::utf8("a"), Value::utf8("b")])),
            ("score", Value::null(Type::primitive(PrimitiveType::Double))),
        ]);
        assert_eq!(st.to_string(), r#"<|id:7,tags:["a","b"],score:NULL|>"#);

        let uuid = Value::uuid([
            0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab,
            0xcd, 0xef,
        ]);
        assert_eq!(uuid.to_string(), "12345678-9abc-def0-0123-456789abcdef");
    }
}
