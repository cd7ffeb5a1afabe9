// Copyright 2024 the seqset developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Dynamically typed values.
//!
//! `Value` is the element type of the untyped sequence and the value type of
//! [`KeyedMap`](crate::keyed_map::KeyedMap). The typed accessors check the
//! tag and fail with [`TypeError::Mismatch`] instead of converting: a stored
//! `Int` is never silently read back as a `Uint` or a `Float`.

use crate::error::TypeError;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Null,
  Bool(bool),
  Int(i64),
  Uint(u64),
  Float(f64),
  Str(String),
}

impl Value
{
  /// Name of the stored kind, as reported in mismatch errors.
  pub fn kind(&self) -> &'static str {
    match self {
      Value::Null => "null",
      Value::Bool(_) => "bool",
      Value::Int(_) => "int",
      Value::Uint(_) => "uint",
      Value::Float(_) => "float",
      Value::Str(_) => "string",
    }
  }

  pub fn is_null(&self) -> bool {
    matches!(self, Value::Null)
  }

  pub fn as_bool(&self) -> Result<bool, TypeError> {
    match self {
      Value::Bool(v) => Ok(*v),
      other => Err(other.mismatch("bool")),
    }
  }

  pub fn as_int(&self) -> Result<i64, TypeError> {
    match self {
      Value::Int(v) => Ok(*v),
      other => Err(other.mismatch("int")),
    }
  }

  pub fn as_uint(&self) -> Result<u64, TypeError> {
    match self {
      Value::Uint(v) => Ok(*v),
      other => Err(other.mismatch("uint")),
    }
  }

  pub fn as_float(&self) -> Result<f64, TypeError> {
    match self {
      Value::Float(v) => Ok(*v),
      other => Err(other.mismatch("float")),
    }
  }

  pub fn as_str(&self) -> Result<&str, TypeError> {
    match self {
      Value::Str(v) => Ok(v),
      other => Err(other.mismatch("string")),
    }
  }

  fn mismatch(&self, expected: &'static str) -> TypeError {
    TypeError::Mismatch { expected, found: self.kind() }
  }
}

impl From<bool> for Value {
  fn from(v: bool) -> Value { Value::Bool(v) }
}

impl From<i32> for Value {
  fn from(v: i32) -> Value { Value::Int(v as i64) }
}

impl From<i64> for Value {
  fn from(v: i64) -> Value { Value::Int(v) }
}

impl From<u32> for Value {
  fn from(v: u32) -> Value { Value::Uint(v as u64) }
}

impl From<u64> for Value {
  fn from(v: u64) -> Value { Value::Uint(v) }
}

impl From<f64> for Value {
  fn from(v: f64) -> Value { Value::Float(v) }
}

impl From<&str> for Value {
  fn from(v: &str) -> Value { Value::Str(v.to_string()) }
}

impl From<String> for Value {
  fn from(v: String) -> Value { Value::Str(v) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(v: Option<T>) -> Value {
    match v {
      Some(v) => v.into(),
      None => Value::Null,
    }
  }
}

impl Serialize for Value
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    match self {
      Value::Null => serializer.serialize_unit(),
      Value::Bool(v) => serializer.serialize_bool(*v),
      Value::Int(v) => serializer.serialize_i64(*v),
      Value::Uint(v) => serializer.serialize_u64(*v),
      Value::Float(v) => serializer.serialize_f64(*v),
      Value::Str(v) => serializer.serialize_str(v),
    }
  }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor
{
  type Value = Value;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a primitive value")
  }

  fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
    Ok(Value::Null)
  }

  fn visit_none<E: de::Error>(self) -> Result<Value, E> {
    Ok(Value::Null)
  }

  fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error> where
   D: Deserializer<'de>
  {
    Deserialize::deserialize(deserializer)
  }

  fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
    Ok(Value::Bool(v))
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
    Ok(Value::Int(v))
  }

  fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
    Ok(Value::Uint(v))
  }

  fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
    Ok(Value::Float(v))
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
    Ok(Value::Str(v.to_string()))
  }

  fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
    Ok(Value::Str(v))
  }
}

impl<'de> Deserialize<'de> for Value
{
  fn deserialize<D>(deserializer: D) -> Result<Value, D::Error> where
   D: Deserializer<'de>
  {
    deserializer.deserialize_any(ValueVisitor)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_tokens, Token};

  #[test]
  fn typed_accessors() {
    assert_eq!(Value::from(true).as_bool(), Ok(true));
    assert_eq!(Value::from(-3i64).as_int(), Ok(-3));
    assert_eq!(Value::from(7u64).as_uint(), Ok(7));
    assert_eq!(Value::from(1.5).as_float(), Ok(1.5));
    assert_eq!(Value::from("abc").as_str(), Ok("abc"));
  }

  #[test]
  fn accessors_never_coerce() {
    let v = Value::Int(3);
    assert_eq!(v.as_uint(), Err(TypeError::Mismatch { expected: "uint", found: "int" }));
    assert_eq!(v.as_float(), Err(TypeError::Mismatch { expected: "float", found: "int" }));
    assert_eq!(Value::Null.as_bool(), Err(TypeError::Mismatch { expected: "bool", found: "null" }));
  }

  #[test]
  fn option_conversion() {
    assert_eq!(Value::from(Some(1i64)), Value::Int(1));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert!(Value::from(None::<bool>).is_null());
  }

  #[test]
  fn equality_is_tag_sensitive() {
    assert_ne!(Value::Int(1), Value::Uint(1));
    assert_eq!(Value::Str("a".to_string()), Value::from("a"));
  }

  #[test]
  fn serde_primitives() {
    assert_tokens(&Value::Null, &[Token::Unit]);
    assert_tokens(&Value::Bool(true), &[Token::Bool(true)]);
    assert_tokens(&Value::Int(-2), &[Token::I64(-2)]);
    assert_tokens(&Value::Uint(9), &[Token::U64(9)]);
    assert_tokens(&Value::Float(0.5), &[Token::F64(0.5)]);
    assert_tokens(&Value::Str("hi".to_string()), &[Token::Str("hi")]);
  }
}
