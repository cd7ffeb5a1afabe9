// Copyright 2024 the seqset developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

/// Errors raised by the typed accessors of [`Value`](crate::value::Value)
/// and [`KeyedMap`](crate::keyed_map::KeyedMap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
  /// The requested key is not present in the map.
  KeyNotFound(String),
  /// The stored value does not have the requested kind.
  Mismatch { expected: &'static str, found: &'static str },
}

impl fmt::Display for TypeError
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      TypeError::KeyNotFound(key) => write!(f, "key `{}` not found", key),
      TypeError::Mismatch { expected, found } =>
        write!(f, "expected a value of kind `{}`, found `{}`", expected, found),
    }
  }
}

impl std::error::Error for TypeError {}
