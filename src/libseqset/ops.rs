// Copyright 2024 the seqset developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generic operations on collections of elements.
//!
//! Each operation lives in its own trait so that algorithms can be written
//! against exactly the capabilities they need. The right-hand side of the
//! binary operations defaults to `Self` but can be any compatible collection.

use num_traits::{One, Unsigned, Zero};

// Basic set operations

pub trait Intersection<RHS = Self> {
  type Output;
  fn intersection(&self, rhs: &RHS) -> Self::Output;
}

/// One-sided difference: the elements of `self` absent from `rhs`.
pub trait Difference<RHS = Self> {
  type Output;
  fn difference(&self, rhs: &RHS) -> Self::Output;
}

/// Elements present in exactly one of the two collections.
pub trait SymmetricDifference<RHS = Self> {
  type Output;
  fn symmetric_difference(&self, rhs: &RHS) -> Self::Output;
}

// Membership

pub trait Contains<Item> {
  fn contains(&self, value: &Item) -> bool;
}

// Cardinality

pub trait Cardinality {
  type Size: Unsigned;
  fn size(&self) -> Self::Size;

  fn is_singleton(&self) -> bool {
    self.size() == <Self::Size as One>::one()
  }

  fn is_empty(&self) -> bool {
    self.size().is_zero()
  }
}

// Construction

pub trait Empty {
  fn empty() -> Self;
}

pub trait Singleton<Item> {
  fn singleton(value: Item) -> Self;
}
