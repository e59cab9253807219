//! Casting values into native destinations
//!
//! A destination is any type implementing [`FromValue`]. Only conversions
//! that keep every bit of information are performed:
//! - integers widen to a type that holds every value of the source type
//! - `Float` widens to `f64`
//! - text kinds convert to `String`/`Vec<u8>`
//! - temporal kinds convert to the matching `chrono` type
//! - `Optional` values unwrap into `Option<T>` or, when present, into `T`
//!
//! Everything else fails with `CastIncompatible`.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use indexmap::IndexMap;
use std::any::type_name;
use yql_diagnostics::{Result, ValueError};

use crate::{Decimal, PrimitiveType, Scalar, Type, Value};

/// Destination of a cast
pub trait FromValue: Sized {
    /// Build `Self` from `value` without loss, or fail
    fn from_value(value: &Value) -> Result<Self>;

    /// Whether values of type `ty` can convert into `Self`.
    ///
    /// Used to type-check nulls, which carry a type but no payload.
    fn accepts(ty: &Type) -> bool;
}

/// Cast `value` into `dst`.
///
/// `dst` is written only when the whole conversion succeeds. A `None` value
/// fails with `NilValue` whatever the destination.
#[track_caller]
pub fn cast_to<D: FromValue>(value: Option<&Value>, dst: &mut D) -> Result<()> {
    let Some(value) = value else {
        return Err(ValueError::nil_value());
    };
    *dst = convert(value)?;
    Ok(())
}

#[track_caller]
fn convert<D: FromValue>(value: &Value) -> Result<D> {
    match D::from_value(value) {
        Ok(converted) => Ok(converted),
        Err(err) => {
            log::debug!("rejected cast of '{}' into {}", value.yql(), type_name::<D>());
            Err(err.with_context(format!("cast to {}", type_name::<D>())))
        }
    }
}

impl Value {
    /// Cast this value into `dst`; see [`cast_to`]
    #[track_caller]
    pub fn cast_to<D: FromValue>(&self, dst: &mut D) -> Result<()> {
        cast_to(Some(self), dst)
    }

    /// Convert this value into `D`; see [`cast_to`]
    #[track_caller]
    pub fn cast<D: FromValue>(&self) -> Result<D> {
        convert(self)
    }
}

fn incompatible<T>(value: &Value) -> ValueError {
    ValueError::cast_incompatible(format!(
        "cannot cast '{}' to {}",
        value.yql(),
        type_name::<T>()
    ))
}

/// Look through present optionals; a null optional cannot fill a
/// non-optional destination.
fn present<T>(value: &Value) -> Result<&Value> {
    match value {
        Value::Optional(optional) => match optional.value() {
            Some(inner) => present::<T>(inner),
            None => Err(ValueError::cast_incompatible(format!(
                "cannot cast null '{}' to {}",
                value.yql(),
                type_name::<T>()
            ))),
        },
        other => Ok(other),
    }
}

/// Type under any optional wrappers, matching what [`present`] looks through
fn base(ty: &Type) -> &Type {
    match ty {
        Type::Optional(inner) => base(inner),
        other => other,
    }
}

fn is_primitive(ty: &Type, kinds: &[PrimitiveType]) -> bool {
    matches!(base(ty), Type::Primitive(p) if kinds.contains(p))
}

macro_rules! lossless_from_value {
    ($($target:ty: $($variant:ident),+;)+) => {
        $(
            impl FromValue for $target {
                fn from_value(value: &Value) -> Result<Self> {
                    match present::<Self>(value)? {
                        $(Value::Scalar(Scalar::$variant(v)) => Ok(Self::from(*v)),)+
                        other => Err(incompatible::<Self>(other)),
                    }
                }

                fn accepts(ty: &Type) -> bool {
                    is_primitive(ty, &[$(PrimitiveType::$variant),+])
                }
            }
        )+
    };
}

lossless_from_value! {
    bool: Bool;
    i8: Int8;
    i16: Int8, Uint8, Int16;
    i32: Int8, Uint8, Int16, Uint16, Int32;
    i64: Int8, Uint8, Int16, Uint16, Int32, Uint32, Int64;
    u8: Uint8;
    u16: Uint8, Uint16;
    u32: Uint8, Uint16, Uint32;
    u64: Uint8, Uint16, Uint32, Uint64;
    f32: Float;
    f64: Float, Double;
    NaiveDate: Date;
    TimeDelta: Interval;
}

impl FromValue for DateTime<Utc> {
    fn from_value(value: &Value) -> Result<Self> {
        match present::<Self>(value)? {
            Value::Scalar(Scalar::Date(date)) => Ok(date.and_time(NaiveTime::MIN).and_utc()),
            Value::Scalar(Scalar::Datetime(t) | Scalar::Timestamp(t)) => Ok(*t),
            other => Err(incompatible::<Self>(other)),
        }
    }

    fn accepts(ty: &Type) -> bool {
        is_primitive(
            ty,
            &[PrimitiveType::Date, PrimitiveType::Datetime, PrimitiveType::Timestamp],
        )
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match present::<Self>(value)? {
            Value::Scalar(
                Scalar::Utf8(s) | Scalar::Json(s) | Scalar::JsonDocument(s) | Scalar::DyNumber(s),
            ) => Ok(s.clone()),
            Value::Scalar(Scalar::String(bytes)) => match String::from_utf8(bytes.clone()) {
                Ok(text) => Ok(text),
                Err(_) => Err(ValueError::cast_incompatible(format!(
                    "'String' value is not valid UTF-8 and cannot be cast to {}",
                    type_name::<Self>()
                ))),
            },
            other => Err(incompatible::<Self>(other)),
        }
    }

    fn accepts(ty: &Type) -> bool {
        is_primitive(
            ty,
            &[
                PrimitiveType::String,
                PrimitiveType::Utf8,
                PrimitiveType::Json,
                PrimitiveType::JsonDocument,
                PrimitiveType::DyNumber,
            ],
        )
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: &Value) -> Result<Self> {
        match present::<Self>(value)? {
            Value::Scalar(Scalar::String(bytes) | Scalar::Yson(bytes)) => Ok(bytes.clone()),
            Value::Scalar(Scalar::Utf8(s) | Scalar::Json(s) | Scalar::JsonDocument(s)) => {
                Ok(s.as_bytes().to_vec())
            }
            other => Err(incompatible::<Self>(other)),
        }
    }

    fn accepts(ty: &Type) -> bool {
        is_primitive(
            ty,
            &[
                PrimitiveType::String,
                PrimitiveType::Yson,
                PrimitiveType::Utf8,
                PrimitiveType::Json,
                PrimitiveType::JsonDocument,
            ],
        )
    }
}

impl FromValue for Decimal {
    fn from_value(value: &Value) -> Result<Self> {
        match present::<Self>(value)? {
            Value::Decimal(decimal) => Ok(decimal.snapshot()),
            other => Err(incompatible::<Self>(other)),
        }
    }

    fn accepts(ty: &Type) -> bool {
        base(ty).is_decimal()
    }
}

impl FromValue for rust_decimal::Decimal {
    fn from_value(value: &Value) -> Result<Self> {
        match present::<Self>(value)? {
            Value::Decimal(decimal) => decimal.snapshot().to_rust_decimal(),
            other => Err(incompatible::<Self>(other)),
        }
    }

    fn accepts(ty: &Type) -> bool {
        base(ty).is_decimal()
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Optional(optional) => match optional.value() {
                Some(inner) => T::from_value(inner).map(Some),
                None if T::accepts(optional.inner_type()) => Ok(None),
                None => Err(incompatible::<Self>(value)),
            },
            other => T::from_value(other).map(Some),
        }
    }

    fn accepts(ty: &Type) -> bool {
        match ty {
            Type::Optional(inner) => T::accepts(inner),
            other => T::accepts(other),
        }
    }
}

impl FromValue for Vec<Value> {
    fn from_value(value: &Value) -> Result<Self> {
        match present::<Self>(value)? {
            Value::List(list) => Ok(list.items().to_vec()),
            other => Err(incompatible::<Self>(other)),
        }
    }

    fn accepts(ty: &Type) -> bool {
        matches!(base(ty), Type::List(_) | Type::EmptyList)
    }
}

impl FromValue for IndexMap<String, Value> {
    fn from_value(value: &Value) -> Result<Self> {
        match present::<Self>(value)? {
            Value::Struct(st) => Ok(st.fields().clone()),
            other => Err(incompatible::<Self>(other)),
        }
    }

    fn accepts(ty: &Type) -> bool {
        matches!(base(ty), Type::Struct(_))
    }
}

impl FromValue for IndexMap<Value, Value> {
    fn from_value(value: &Value) -> Result<Self> {
        match present::<Self>(value)? {
            Value::Dict(dict) => Ok(dict.entries().clone()),
            other => Err(incompatible::<Self>(other)),
        }
    }

    fn accepts(ty: &Type) -> bool {
        matches!(base(ty), Type::Dict { .. } | Type::EmptyDict)
    }
}

impl<A: FromValue, B: FromValue> FromValue for (A, B) {
    fn from_value(value: &Value) -> Result<Self> {
        let value = present::<Self>(value)?;
        match value.as_tuple().map(|tuple| tuple.items()) {
            Some([a, b]) => Ok((A::from_value(a)?, B::from_value(b)?)),
            _ => Err(incompatible::<Self>(value)),
        }
    }

    fn accepts(ty: &Type) -> bool {
        match base(ty) {
            Type::Tuple(items) => match items.as_slice() {
                [a, b] => A::accepts(a) && B::accepts(b),
                _ => false,
            },
            _ => false,
        }
    }
}

impl<A: FromValue, B: FromValue, C: FromValue> FromValue for (A, B, C) {
    fn from_value(value: &Value) -> Result<Self> {
        let value = present::<Self>(value)?;
        match value.as_tuple().map(|tuple| tuple.items()) {
            Some([a, b, c]) => Ok((A::from_value(a)?, B::from_value(b)?, C::from_value(c)?)),
            _ => Err(incompatible::<Self>(value)),
        }
    }

    fn accepts(ty: &Type) -> bool {
        match base(ty) {
            Type::Tuple(items) => match items.as_slice() {
                [a, b, c] => A::accepts(a) && B::accepts(b) && C::accepts(c),
                _ => false,
            },
            _ => false,
        }
    }
}
