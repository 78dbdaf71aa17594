//! Fixed-key storage for per-category and per-skill data.
//!
//! `CatalogMap` always holds exactly one entry per catalog key, so lookups
//! never fail and "all keys present" holds by construction. It serializes
//! as an object keyed by the id's wire name, and deserializing requires
//! every key.

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// A closed set of catalog identifiers.
pub trait CatalogKey: Copy + Ord + std::fmt::Debug + 'static {
    /// Every key, in catalog order.
    const ALL: &'static [Self];

    /// Position of this key in `ALL`.
    fn index(self) -> usize;

    /// Stable wire name.
    fn as_str(self) -> &'static str;
}

/// One `V` per catalog key with O(1) access.
///
/// ## Example
///
/// ```
/// use flyer_dungeon::catalog::{CatalogMap, SkillId};
///
/// let mut used: CatalogMap<SkillId, bool> = CatalogMap::with_value(false);
/// used[SkillId::Mighty] = true;
///
/// assert!(used[SkillId::Mighty]);
/// assert!(!used[SkillId::Metamorph]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CatalogMap<K, V> {
    data: Vec<V>,
    _key: PhantomData<K>,
}

impl<K: CatalogKey, V> CatalogMap<K, V> {
    /// Create a map with values from a factory function.
    pub fn from_fn(factory: impl Fn(K) -> V) -> Self {
        Self {
            data: K::ALL.iter().map(|&k| factory(k)).collect(),
            _key: PhantomData,
        }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(value: V) -> Self
    where
        V: Clone,
    {
        Self::from_fn(|_| value.clone())
    }

    /// Get a reference to a key's value.
    #[must_use]
    pub fn get(&self, key: K) -> &V {
        &self.data[key.index()]
    }

    /// Get a mutable reference to a key's value.
    pub fn get_mut(&mut self, key: K) -> &mut V {
        &mut self.data[key.index()]
    }

    /// Iterate over (key, &value) pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> {
        K::ALL.iter().copied().zip(self.data.iter())
    }

    /// Iterate over (key, &mut value) pairs in catalog order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (K, &mut V)> {
        K::ALL.iter().copied().zip(self.data.iter_mut())
    }

    /// Iterate over values in catalog order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.data.iter()
    }
}

impl<K: CatalogKey, V: Default> Default for CatalogMap<K, V> {
    fn default() -> Self {
        Self::from_fn(|_| V::default())
    }
}

impl<K: CatalogKey, V> Index<K> for CatalogMap<K, V> {
    type Output = V;

    fn index(&self, key: K) -> &Self::Output {
        self.get(key)
    }
}

impl<K: CatalogKey, V> IndexMut<K> for CatalogMap<K, V> {
    fn index_mut(&mut self, key: K) -> &mut Self::Output {
        self.get_mut(key)
    }
}

impl<K, V> Serialize for CatalogMap<K, V>
where
    K: CatalogKey + Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.data.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(&key, value)?;
        }
        map.end()
    }
}

impl<'de, K, V> Deserialize<'de> for CatalogMap<K, V>
where
    K: CatalogKey + Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entries = BTreeMap::<K, V>::deserialize(deserializer)?;
        let mut data = Vec::with_capacity(K::ALL.len());
        for &key in K::ALL {
            let value = entries
                .remove(&key)
                .ok_or_else(|| D::Error::custom(format!("missing key `{}`", key.as_str())))?;
            data.push(value);
        }
        Ok(Self {
            data,
            _key: PhantomData,
        })
    }
}
