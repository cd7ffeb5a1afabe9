// Copyright 2024 the seqset developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! String-keyed map of dynamically typed values.
//!
//! Keys are unique, insertion order is irrelevant. `set` always overwrites;
//! `add` and `merge` are first-write-wins. The typed getters delegate to the
//! accessors of [`Value`] and fail with [`TypeError`] on an absent key or a
//! mismatching kind. `KeyedMap` carries no synchronization; for concurrent
//! mutation use [`SyncKeyedMap`](crate::sync::SyncKeyedMap).

use crate::error::TypeError;
use crate::ops::{Cardinality, Empty};
use crate::value::Value;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyedMap {
  entries: HashMap<String, Value>,
}

impl KeyedMap
{
  pub fn new() -> KeyedMap {
    KeyedMap { entries: HashMap::new() }
  }

  pub fn with_capacity(n: usize) -> KeyedMap {
    KeyedMap { entries: HashMap::with_capacity(n) }
  }

  /// Clear the map in place.
  pub fn reset(&mut self) {
    self.entries.clear();
  }

  /// Insert or overwrite the entry for `key`.
  pub fn set<K, V>(&mut self, key: K, value: V) where
   K: Into<String>,
   V: Into<Value>
  {
    self.entries.insert(key.into(), value.into());
  }

  /// Insert the entry for `key` only when the key is absent.
  pub fn add<K, V>(&mut self, key: K, value: V) where
   K: Into<String>,
   V: Into<Value>
  {
    self.entries.entry(key.into()).or_insert_with(|| value.into());
  }

  /// Add every entry of `other`, keeping existing entries untouched.
  pub fn merge(&mut self, other: &KeyedMap) {
    for (k, v) in &other.entries {
      self.add(k.clone(), v.clone());
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.entries.get(key)
  }

  /// True iff every key in `keys` is present.
  pub fn key_exists(&self, keys: &[&str]) -> bool {
    keys.iter().all(|k| self.entries.contains_key(*k))
  }

  pub fn keys(&self) -> Vec<String> {
    self.entries.keys().cloned().collect()
  }

  pub fn values(&self) -> Vec<Value> {
    self.entries.values().cloned().collect()
  }

  pub fn iter(&self) -> std::collections::hash_map::Iter<'_, String, Value> {
    self.entries.iter()
  }

  /// First entry satisfying `predicate`. The map is unordered, so which
  /// matching entry is returned is unspecified.
  pub fn find<P>(&self, mut predicate: P) -> Option<(&str, &Value)> where
   P: FnMut(&str, &Value) -> bool
  {
    self.entries.iter()
      .find(|(k, v)| predicate(k, v))
      .map(|(k, v)| (k.as_str(), v))
  }

  /// All entries satisfying `predicate`, as a new map.
  pub fn find_all<P>(&self, mut predicate: P) -> KeyedMap where
   P: FnMut(&str, &Value) -> bool
  {
    KeyedMap {
      entries: self.entries.iter()
        .filter(|(k, v)| predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
    }
  }

  // Typed getters.

  pub fn get_bool(&self, key: &str) -> Result<bool, TypeError> {
    self.lookup(key)?.as_bool()
  }

  pub fn get_int(&self, key: &str) -> Result<i64, TypeError> {
    self.lookup(key)?.as_int()
  }

  pub fn get_uint(&self, key: &str) -> Result<u64, TypeError> {
    self.lookup(key)?.as_uint()
  }

  pub fn get_float(&self, key: &str) -> Result<f64, TypeError> {
    self.lookup(key)?.as_float()
  }

  pub fn get_str(&self, key: &str) -> Result<&str, TypeError> {
    self.lookup(key)?.as_str()
  }

  fn lookup(&self, key: &str) -> Result<&Value, TypeError> {
    self.entries.get(key).ok_or_else(|| TypeError::KeyNotFound(key.to_string()))
  }
}

impl Cardinality for KeyedMap
{
  type Size = usize;

  fn size(&self) -> usize {
    self.entries.len()
  }
}

impl Empty for KeyedMap
{
  fn empty() -> KeyedMap {
    KeyedMap::new()
  }
}

impl From<HashMap<String, Value>> for KeyedMap
{
  fn from(entries: HashMap<String, Value>) -> KeyedMap {
    KeyedMap { entries }
  }
}

impl FromIterator<(String, Value)> for KeyedMap
{
  fn from_iter<I>(iter: I) -> KeyedMap where
   I: IntoIterator<Item = (String, Value)>
  {
    KeyedMap { entries: HashMap::from_iter(iter) }
  }
}

impl IntoIterator for KeyedMap
{
  type Item = (String, Value);
  type IntoIter = std::collections::hash_map::IntoIter<String, Value>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.into_iter()
  }
}

impl Serialize for KeyedMap
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.collect_map(self.entries.iter())
  }
}

impl<'de> Deserialize<'de> for KeyedMap
{
  fn deserialize<D>(deserializer: D) -> Result<KeyedMap, D::Error> where
   D: Deserializer<'de>
  {
    HashMap::<String, Value>::deserialize(deserializer).map(KeyedMap::from)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_tokens, Token};

  fn sample() -> KeyedMap {
    let mut m = KeyedMap::new();
    m.set("id", 7u64);
    m.set("name", "ada");
    m.set("active", true);
    m
  }

  #[test]
  fn set_overwrites_add_does_not() {
    let mut m = KeyedMap::new();
    m.add("k", 1i64);
    m.add("k", 2i64);
    assert_eq!(m.get_int("k"), Ok(1));

    m.set("k", 2i64);
    assert_eq!(m.get_int("k"), Ok(2));
  }

  #[test]
  fn merge_is_first_write_wins() {
    let mut m = KeyedMap::new();
    m.set("a", 1i64);

    let mut other = KeyedMap::new();
    other.set("a", 9i64);
    other.set("b", 2i64);

    m.merge(&other);
    assert_eq!(m.get_int("a"), Ok(1));
    assert_eq!(m.get_int("b"), Ok(2));
  }

  #[test]
  fn reset_and_len() {
    let mut m = sample();
    assert_eq!(m.len(), 3);
    m.reset();
    assert!(m.is_empty());
  }

  #[test]
  fn copy_is_independent() {
    let m = sample();
    let mut m2 = m.clone();
    m2.set("extra", 1i64);
    assert_eq!(m.len(), 3);
    assert_eq!(m2.len(), 4);
  }

  #[test]
  fn key_exists_requires_all() {
    let m = sample();
    assert!(m.key_exists(&["id"]));
    assert!(m.key_exists(&["id", "name", "active"]));
    assert!(!m.key_exists(&["id", "missing"]));
    assert!(m.key_exists(&[]));
  }

  #[test]
  fn keys_and_values() {
    let m = sample();
    let mut keys = m.keys();
    keys.sort();
    assert_eq!(keys, vec!["active", "id", "name"]);
    assert_eq!(m.values().len(), 3);
  }

  #[test]
  fn find_by_key_and_value() {
    let m = sample();
    let found = m.find(|k, _| k == "name");
    assert_eq!(found, Some(("name", &Value::from("ada"))));
    assert_eq!(m.find(|_, v| v.is_null()), None);

    let numeric = m.find_all(|_, v| v.as_uint().is_ok());
    assert_eq!(numeric.len(), 1);
    assert!(numeric.key_exists(&["id"]));
  }

  #[test]
  fn typed_getters() {
    let m = sample();
    assert_eq!(m.get_uint("id"), Ok(7));
    assert_eq!(m.get_str("name"), Ok("ada"));
    assert_eq!(m.get_bool("active"), Ok(true));

    assert_eq!(m.get_int("id"),
      Err(TypeError::Mismatch { expected: "int", found: "uint" }));
    assert_eq!(m.get_str("missing"),
      Err(TypeError::KeyNotFound("missing".to_string())));
  }

  #[test]
  fn serde_as_plain_map() {
    let mut m = KeyedMap::new();
    m.set("n", 3i64);
    assert_tokens(&m, &[
      Token::Map { len: Some(1) },
      Token::Str("n"),
      Token::I64(3),
      Token::MapEnd,
    ]);
  }
}
