// Copyright 2024 the seqset developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Synchronized variants of [`Sequence`] and [`KeyedMap`].
//!
//! Each wrapper owns exactly one backing container and one reader/writer
//! lock; the raw container never escapes. Read-only operations take the
//! shared mode of the lock and may run concurrently, mutations take the
//! exclusive mode. Lock acquisition blocks until the lock is available;
//! there is no timeout. A single lock per instance means no lock-ordering
//! deadlock is possible within one wrapper.
//!
//! Lookups return owned clones rather than references: a reference into the
//! backing container would outlive the lock guard. `export` takes a full
//! snapshot under the shared mode, and `copy` builds a brand-new wrapper
//! around such a snapshot, with a brand-new lock sharing no state with the
//! original.
//!
//! A poisoned lock (a panic in another thread while writing) is recovered
//! with [`PoisonError::into_inner`]: the guarded containers hold plain
//! values and none of the delegated operations leaves them half-updated.
//! Share a wrapper between threads with `Arc`:
//!
//! ```rust
//! use seqset::SyncSequence;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let shared = Arc::new(SyncSequence::new());
//! let writer = Arc::clone(&shared);
//! let handle = thread::spawn(move || writer.add(vec![1, 2, 3]));
//! handle.join().unwrap();
//! assert_eq!(shared.len(), 3);
//! ```

use crate::keyed_map::KeyedMap;
use crate::ops::*;
use crate::sequence::Sequence;
use crate::value::Value;
use crate::error::TypeError;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
pub struct SyncSequence<T> {
  inner: RwLock<Sequence<T>>,
}

impl<T> SyncSequence<T>
{
  pub fn new() -> SyncSequence<T> {
    SyncSequence { inner: RwLock::new(Sequence::new()) }
  }

  fn read(&self) -> RwLockReadGuard<'_, Sequence<T>> {
    self.inner.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, Sequence<T>> {
    self.inner.write().unwrap_or_else(PoisonError::into_inner)
  }

  /// Clear the backing sequence.
  pub fn reset(&self) {
    self.write().reset();
  }

  /// Append one element.
  pub fn push(&self, value: T) {
    self.write().push(value);
  }

  /// Append elements in argument order, as one exclusive critical section.
  pub fn add<I>(&self, values: I) where
   I: IntoIterator<Item = T>
  {
    self.write().add(values);
  }

  pub fn len(&self) -> usize {
    self.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.read().is_empty()
  }

  pub fn len_if<P>(&self, predicate: P) -> usize where
   P: FnMut(&T) -> bool
  {
    self.read().len_if(predicate)
  }
}

impl<T: Clone> SyncSequence<T>
{
  /// Element at position `i`, or `None` when `i >= len()`.
  pub fn get(&self, i: usize) -> Option<T> {
    self.read().get(i).cloned()
  }

  pub fn first(&self) -> Option<T> {
    self.read().first().cloned()
  }

  pub fn last(&self) -> Option<T> {
    self.read().last().cloned()
  }

  /// First element satisfying `predicate`.
  pub fn find<P>(&self, predicate: P) -> Option<T> where
   P: FnMut(&T) -> bool
  {
    self.read().find(predicate).cloned()
  }

  /// All elements satisfying `predicate`, as an independent sequence.
  pub fn find_all<P>(&self, predicate: P) -> Sequence<T> where
   P: FnMut(&T) -> bool
  {
    self.read().find_all(predicate)
  }

  /// Independent copy of the first `n` elements (the whole sequence when
  /// `n` exceeds the length).
  pub fn take(&self, n: usize) -> Sequence<T> {
    self.read().take(n)
  }

  /// Snapshot of the backing sequence, sharing no storage with it.
  pub fn export(&self) -> Sequence<T> {
    self.read().clone()
  }

  /// New wrapper around a snapshot, with its own lock.
  pub fn copy(&self) -> SyncSequence<T> {
    SyncSequence { inner: RwLock::new(self.export()) }
  }
}

impl<T: PartialEq> SyncSequence<T>
{
  /// True iff every value in `values` matches at least one element.
  pub fn contains_all(&self, values: &[T]) -> bool {
    self.read().contains_all(values)
  }

  /// True iff any single value in `values` matches any element.
  pub fn contains_any(&self, values: &[T]) -> bool {
    self.read().contains_any(values)
  }

  /// Positional equality against a plain sequence.
  pub fn equals(&self, other: &Sequence<T>) -> bool {
    *self.read() == *other
  }
}

impl<T: Clone + PartialEq> SyncSequence<T>
{
  pub fn intersection(&self, other: &Sequence<T>) -> Sequence<T> {
    self.read().intersection(other)
  }

  pub fn difference(&self, other: &Sequence<T>) -> Sequence<T> {
    self.read().difference(other)
  }

  pub fn symmetric_difference(&self, other: &Sequence<T>) -> Sequence<T> {
    self.read().symmetric_difference(other)
  }
}

impl<T> From<Sequence<T>> for SyncSequence<T>
{
  fn from(values: Sequence<T>) -> SyncSequence<T> {
    SyncSequence { inner: RwLock::new(values) }
  }
}

#[derive(Debug, Default)]
pub struct SyncKeyedMap {
  inner: RwLock<KeyedMap>,
}

impl SyncKeyedMap
{
  pub fn new() -> SyncKeyedMap {
    SyncKeyedMap { inner: RwLock::new(KeyedMap::new()) }
  }

  fn read(&self) -> RwLockReadGuard<'_, KeyedMap> {
    self.inner.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, KeyedMap> {
    self.inner.write().unwrap_or_else(PoisonError::into_inner)
  }

  /// Clear the backing map.
  pub fn reset(&self) {
    self.write().reset();
  }

  /// Insert or overwrite the entry for `key`.
  pub fn set<K, V>(&self, key: K, value: V) where
   K: Into<String>,
   V: Into<Value>
  {
    self.write().set(key, value);
  }

  /// Insert the entry for `key` only when the key is absent.
  pub fn add<K, V>(&self, key: K, value: V) where
   K: Into<String>,
   V: Into<Value>
  {
    self.write().add(key, value);
  }

  /// Add every entry of `other`, keeping existing entries untouched.
  pub fn merge(&self, other: &KeyedMap) {
    self.write().merge(other);
  }

  pub fn len(&self) -> usize {
    self.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.read().is_empty()
  }

  pub fn get(&self, key: &str) -> Option<Value> {
    self.read().get(key).cloned()
  }

  /// True iff every key in `keys` is present.
  pub fn key_exists(&self, keys: &[&str]) -> bool {
    self.read().key_exists(keys)
  }

  pub fn keys(&self) -> Vec<String> {
    self.read().keys()
  }

  pub fn values(&self) -> Vec<Value> {
    self.read().values()
  }

  /// All entries satisfying `predicate`, as an independent map.
  pub fn find_all<P>(&self, predicate: P) -> KeyedMap where
   P: FnMut(&str, &Value) -> bool
  {
    self.read().find_all(predicate)
  }

  // Typed getters.

  pub fn get_bool(&self, key: &str) -> Result<bool, TypeError> {
    self.read().get_bool(key)
  }

  pub fn get_int(&self, key: &str) -> Result<i64, TypeError> {
    self.read().get_int(key)
  }

  pub fn get_uint(&self, key: &str) -> Result<u64, TypeError> {
    self.read().get_uint(key)
  }

  pub fn get_float(&self, key: &str) -> Result<f64, TypeError> {
    self.read().get_float(key)
  }

  pub fn get_str(&self, key: &str) -> Result<String, TypeError> {
    self.read().get_str(key).map(str::to_string)
  }

  /// Snapshot of the backing map, sharing no storage with it.
  pub fn export(&self) -> KeyedMap {
    self.read().clone()
  }

  /// New wrapper around a snapshot, with its own lock.
  pub fn copy(&self) -> SyncKeyedMap {
    SyncKeyedMap { inner: RwLock::new(self.export()) }
  }
}

impl From<KeyedMap> for SyncKeyedMap
{
  fn from(entries: KeyedMap) -> SyncKeyedMap {
    SyncKeyedMap { inner: RwLock::new(entries) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn delegates_under_the_lock() {
    let s = SyncSequence::new();
    s.add(vec![1, 2, 3]);
    s.push(4);

    assert_eq!(s.len(), 4);
    assert!(!s.is_empty());
    assert_eq!(s.get(0), Some(1));
    assert_eq!(s.get(4), None);
    assert_eq!(s.first(), Some(1));
    assert_eq!(s.last(), Some(4));
    assert!(s.contains_all(&[1, 4]));
    assert!(s.contains_any(&[0, 2]));
    assert_eq!(s.find(|&v| v > 2), Some(3));
    assert_eq!(s.len_if(|&v| v % 2 == 0), 2);
    assert!(s.equals(&Sequence::wrap(vec![1, 2, 3, 4])));

    s.reset();
    assert!(s.is_empty());
  }

  #[test]
  fn set_operations_against_plain_sequences() {
    let s = SyncSequence::from(Sequence::wrap(vec![1, 2, 3]));
    let other = Sequence::wrap(vec![2, 3, 4, 5]);

    assert_eq!(s.intersection(&other), Sequence::wrap(vec![2, 3]));
    assert_eq!(s.difference(&other), Sequence::wrap(vec![1]));
    assert_eq!(s.symmetric_difference(&other), Sequence::wrap(vec![1, 4, 5]));
    assert_eq!(s.take(2), Sequence::wrap(vec![1, 2]));
  }

  #[test]
  fn copy_shares_no_state() {
    let s = SyncSequence::new();
    s.add(vec![1, 2]);

    let s2 = s.copy();
    s2.push(3);
    s.reset();

    assert_eq!(s.len(), 0);
    assert_eq!(s2.export(), Sequence::wrap(vec![1, 2, 3]));
  }

  #[test]
  fn export_is_a_snapshot() {
    let s = SyncSequence::new();
    s.add(vec![1, 2]);

    let mut snapshot = s.export();
    snapshot.push(3);
    assert_eq!(s.len(), 2);
  }

  #[test]
  fn map_add_is_first_write_wins() {
    let m = SyncKeyedMap::new();
    m.add("k", 1i64);
    m.add("k", 2i64);
    assert_eq!(m.get_int("k"), Ok(1));

    m.set("k", 2i64);
    assert_eq!(m.get_int("k"), Ok(2));
  }

  #[test]
  fn map_copy_and_export() {
    let m = SyncKeyedMap::new();
    m.set("a", 1i64);

    let m2 = m.copy();
    m2.set("b", 2i64);
    m.reset();

    assert!(m.is_empty());
    assert!(m2.key_exists(&["a", "b"]));

    let mut snapshot = m2.export();
    snapshot.set("c", 3i64);
    assert_eq!(m2.len(), 2);
  }

  #[test]
  fn map_typed_getters() {
    let m = SyncKeyedMap::new();
    m.set("name", "ada");
    assert_eq!(m.get_str("name"), Ok("ada".to_string()));
    assert_eq!(m.get_bool("name"),
      Err(TypeError::Mismatch { expected: "bool", found: "string" }));
    assert_eq!(m.get_int("missing"),
      Err(TypeError::KeyNotFound("missing".to_string())));
  }
}
