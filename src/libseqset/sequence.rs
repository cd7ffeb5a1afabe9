// Copyright 2024 the seqset developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ordered, duplicate-permitting sequence of elements of one type.
//!
//! `Sequence<T>` is a plain value type: it preserves insertion order, allows
//! duplicates and carries no synchronization. Derived sequences returned by
//! the set operations (`intersection`, `difference`, `symmetric_difference`,
//! `take`, `find_all`) never alias the storage of their input. For concurrent
//! mutation, wrap it in [`SyncSequence`](crate::sync::SyncSequence).

use crate::ops::*;
use num_traits::{ToPrimitive, Zero};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::iter::FromIterator;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence<T> {
  values: Vec<T>,
}

impl<T> Sequence<T>
{
  pub fn new() -> Sequence<T> {
    Sequence { values: vec![] }
  }

  pub fn with_capacity(n: usize) -> Sequence<T> {
    Sequence { values: Vec::with_capacity(n) }
  }

  /// Take ownership of an existing vector without copying it.
  pub fn wrap(values: Vec<T>) -> Sequence<T> {
    Sequence { values }
  }

  /// Clear the sequence in place.
  pub fn reset(&mut self) {
    self.values.clear();
  }

  /// Append one element.
  pub fn push(&mut self, value: T) {
    self.values.push(value);
  }

  /// Append elements in argument order.
  pub fn add<I>(&mut self, values: I) where
   I: IntoIterator<Item = T>
  {
    self.values.extend(values);
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// Element at position `i`, or `None` when `i >= len()`.
  pub fn get(&self, i: usize) -> Option<&T> {
    self.values.get(i)
  }

  pub fn first(&self) -> Option<&T> {
    self.values.first()
  }

  pub fn last(&self) -> Option<&T> {
    self.values.last()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.values.iter()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.values
  }

  pub fn into_vec(self) -> Vec<T> {
    self.values
  }

  /// First element satisfying `predicate`, scanning in order.
  pub fn find<P>(&self, mut predicate: P) -> Option<&T> where
   P: FnMut(&T) -> bool
  {
    self.values.iter().find(|v| predicate(v))
  }

  /// Number of elements satisfying `predicate`.
  pub fn len_if<P>(&self, mut predicate: P) -> usize where
   P: FnMut(&T) -> bool
  {
    self.values.iter().filter(|v| predicate(v)).count()
  }
}

impl<T: Clone> Sequence<T>
{
  /// All elements satisfying `predicate`, order preserved.
  pub fn find_all<P>(&self, mut predicate: P) -> Sequence<T> where
   P: FnMut(&T) -> bool
  {
    Sequence {
      values: self.values.iter().filter(|v| predicate(v)).cloned().collect()
    }
  }

  /// Alias of [`find_all`](Sequence::find_all).
  pub fn filter<P>(&self, predicate: P) -> Sequence<T> where
   P: FnMut(&T) -> bool
  {
    self.find_all(predicate)
  }

  /// Independent copy of the first `n` elements. When `n` exceeds `len()`,
  /// the whole sequence is copied.
  pub fn take(&self, n: usize) -> Sequence<T> {
    if n > self.values.len() {
      self.clone()
    }
    else {
      Sequence { values: self.values[..n].to_vec() }
    }
  }
}

impl<T: PartialEq> Sequence<T>
{
  /// True iff every value in `values` matches at least one element.
  /// Trivially true for an empty `values`.
  pub fn contains_all(&self, values: &[T]) -> bool {
    values.iter().all(|v| self.values.contains(v))
  }

  /// True iff any single value in `values` matches any element.
  pub fn contains_any(&self, values: &[T]) -> bool {
    values.iter().any(|v| self.values.contains(v))
  }
}

impl<T: Clone + PartialEq> Sequence<T>
{
  /// Elements of `self` absent from `other`. See [`Difference`].
  pub fn excludes(&self, other: &Sequence<T>) -> Sequence<T> {
    self.difference(other)
  }
}

// Numeric extensions. Aggregating an empty sequence is defined but
// degenerate: `mean` divides zero by zero and yields NaN.

impl<T: Zero + Copy> Sequence<T>
{
  pub fn sum(&self) -> T {
    self.values.iter().fold(T::zero(), |acc, &v| acc + v)
  }

  /// Sum of the elements satisfying `predicate`.
  pub fn sum_if<P>(&self, mut predicate: P) -> T where
   P: FnMut(&T) -> bool
  {
    self.values.iter().filter(|v| predicate(v)).fold(T::zero(), |acc, &v| acc + v)
  }
}

impl<T: Zero + ToPrimitive + Copy> Sequence<T>
{
  /// `sum() / len()` as f64. NaN on an empty sequence.
  pub fn mean(&self) -> f64 {
    self.sum().to_f64().unwrap_or(f64::NAN) / self.values.len() as f64
  }

  /// `sum_if(p) / len_if(p)` as f64. NaN when nothing matches.
  pub fn mean_if<P>(&self, mut predicate: P) -> f64 where
   P: FnMut(&T) -> bool
  {
    let n = self.values.iter().filter(|v| predicate(v)).count();
    self.sum_if(predicate).to_f64().unwrap_or(f64::NAN) / n as f64
  }
}

impl<T: PartialEq> Contains<T> for Sequence<T>
{
  fn contains(&self, value: &T) -> bool {
    self.values.contains(value)
  }
}

impl<T: Clone + PartialEq> Intersection for Sequence<T>
{
  type Output = Sequence<T>;

  /// Elements of `self` that also appear in `rhs`, in `self` order,
  /// duplicates of `self` included.
  fn intersection(&self, rhs: &Sequence<T>) -> Sequence<T> {
    Sequence {
      values: self.values.iter()
        .filter(|v| rhs.values.contains(v))
        .cloned().collect()
    }
  }
}

impl<T: Clone + PartialEq> Difference for Sequence<T>
{
  type Output = Sequence<T>;

  fn difference(&self, rhs: &Sequence<T>) -> Sequence<T> {
    Sequence {
      values: self.values.iter()
        .filter(|v| !rhs.values.contains(v))
        .cloned().collect()
    }
  }
}

impl<T: Clone + PartialEq> SymmetricDifference for Sequence<T>
{
  type Output = Sequence<T>;

  /// Elements of `self` absent from `rhs`, followed by elements of `rhs`
  /// absent from `self`.
  fn symmetric_difference(&self, rhs: &Sequence<T>) -> Sequence<T> {
    let mut out = self.difference(rhs);
    out.add(rhs.difference(self).values);
    out
  }
}

impl<T> Cardinality for Sequence<T>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.values.len()
  }
}

impl<T> Empty for Sequence<T>
{
  fn empty() -> Sequence<T> {
    Sequence::new()
  }
}

impl<T> Singleton<T> for Sequence<T>
{
  fn singleton(value: T) -> Sequence<T> {
    Sequence { values: vec![value] }
  }
}

impl<T> From<Vec<T>> for Sequence<T>
{
  fn from(values: Vec<T>) -> Sequence<T> {
    Sequence { values }
  }
}

impl<T> FromIterator<T> for Sequence<T>
{
  fn from_iter<I>(iter: I) -> Sequence<T> where
   I: IntoIterator<Item = T>
  {
    Sequence { values: Vec::from_iter(iter) }
  }
}

impl<T> Extend<T> for Sequence<T>
{
  fn extend<I>(&mut self, iter: I) where
   I: IntoIterator<Item = T>
  {
    self.values.extend(iter);
  }
}

impl<T> IntoIterator for Sequence<T>
{
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.values.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Sequence<T>
{
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.values.iter()
  }
}

impl<T: Serialize> Serialize for Sequence<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.collect_seq(self.values.iter())
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sequence<T>
{
  fn deserialize<D>(deserializer: D) -> Result<Sequence<T>, D::Error> where
   D: Deserializer<'de>
  {
    Vec::<T>::deserialize(deserializer).map(Sequence::wrap)
  }
}
