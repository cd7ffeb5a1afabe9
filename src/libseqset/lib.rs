// Copyright 2024 the seqset developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ordered, duplicate-permitting sequences with set algebra, a string-keyed
//! map of dynamically typed values, and synchronized variants of both.
//!
//! The plain containers ([`Sequence`], [`KeyedMap`]) are value types: cheap
//! to reason about, safe to share for reading, not safe for concurrent
//! mutation. The synchronized wrappers ([`SyncSequence`], [`SyncKeyedMap`])
//! pair one container with one reader/writer lock and expose only locked
//! accessors. The [`ops`] module defines the set operations as one trait per
//! operation so that algorithms can be generic over the collection they run
//! on.
//!
//! # Examples
//!
//! ```rust
//! use seqset::Sequence;
//! use seqset::ops::*;
//!
//! let s = Sequence::wrap(vec![1, 2, 3, 4, 5]);
//! let odd = Sequence::wrap(vec![1, 3, 5]);
//! assert_eq!(s.symmetric_difference(&odd), Sequence::wrap(vec![2, 4]));
//! assert_eq!(s.intersection(&odd), odd);
//! assert_eq!(s.sum(), 15);
//! ```
//!
//! ```rust
//! use seqset::{KeyedMap, TypeError};
//!
//! let mut m = KeyedMap::new();
//! m.set("name", "ada");
//! m.add("name", "ignored");
//! assert_eq!(m.get_str("name"), Ok("ada"));
//! assert_eq!(m.get_int("name"),
//!   Err(TypeError::Mismatch { expected: "int", found: "string" }));
//! ```

pub mod error;
pub mod keyed_map;
pub mod ops;
pub mod sequence;
pub mod sync;
pub mod value;

pub use crate::error::TypeError;
pub use crate::keyed_map::KeyedMap;
pub use crate::sequence::Sequence;
pub use crate::sync::{SyncKeyedMap, SyncSequence};
pub use crate::value::Value;

// Aliases for the common instantiations.
pub type Bools = Sequence<bool>;
pub type Bytes = Sequence<u8>;
pub type Ints = Sequence<i32>;
pub type Int64s = Sequence<i64>;
pub type Uints = Sequence<u32>;
pub type Uint64s = Sequence<u64>;
pub type Floats = Sequence<f64>;
pub type Strings = Sequence<String>;
pub type Values = Sequence<Value>;
