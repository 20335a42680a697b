//! Leaf producers: [`Empty`], [`Identity`] and [`FromList`].
use crate::producer::*;

/// Produces nothing for every seed.
///
/// The unit of [`crate::concat::Concat`], and absorbing for [`crate::chain::Chain`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Empty;

/// Construct the [`Empty`] producer.
pub fn empty() -> Empty {
    Empty
}

impl<V> Producer<V> for Empty {
    fn produce<'a>(&'a self, _seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        Box::new(core::iter::empty())
    }
}

/// Produces exactly the seed, unchanged.
///
/// The unit of [`crate::chain::Chain`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

/// Construct the [`Identity`] producer.
pub fn identity() -> Identity {
    Identity
}

impl<V> Producer<V> for Identity {
    fn produce<'a>(&'a self, seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        Box::new(core::iter::once(seed))
    }
}

/// Produces a fixed list of values, ignoring the seed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FromList<V> {
    items: Vec<V>,
}

/// Construct a [`FromList`] producer yielding `items` in order.
pub fn from_list<V, I: IntoIterator<Item = V>>(items: I) -> FromList<V> {
    FromList::new(items)
}

impl<V> FromList<V> {
    pub fn new<I: IntoIterator<Item = V>>(items: I) -> Self {
        FromList {
            items: items.into_iter().collect(),
        }
    }

    /// The values this producer yields
    pub fn items(&self) -> &[V] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<V> From<Vec<V>> for FromList<V> {
    fn from(items: Vec<V>) -> Self {
        FromList { items }
    }
}

impl<V> FromIterator<V> for FromList<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        FromList::new(iter)
    }
}

impl<V: Clone> Producer<V> for FromList<V> {
    fn produce<'a>(&'a self, _seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        Box::new(self.items.iter().cloned())
    }
}
