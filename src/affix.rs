//! Prefix and suffix producers for string-like values.
//!
//! "String-like" means [`Concatenate`]: any value which can be joined with another value of the
//! same type. Both producers yield one value per affix, in the order the affixes were given.
use crate::producer::*;
use std::borrow::Cow;

/// Values which can be concatenated with another value of the same type.
pub trait Concatenate: Clone {
    /// `self ⧺ other`
    fn concatenate(&self, other: &Self) -> Self;
}

impl Concatenate for String {
    fn concatenate(&self, other: &Self) -> Self {
        let mut result = String::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl Concatenate for Cow<'_, str> {
    fn concatenate(&self, other: &Self) -> Self {
        let mut result = self.clone().into_owned();
        result.push_str(other);
        Cow::Owned(result)
    }
}

impl<T: Clone> Concatenate for Vec<T> {
    fn concatenate(&self, other: &Self) -> Self {
        let mut result: Vec<T> = Vec::with_capacity(self.len() + other.len());
        result.extend_from_slice(self);
        result.extend_from_slice(other);
        result
    }
}

/// Yields `prefix ⧺ seed` for every prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WithPrefixes<V> {
    prefixes: Vec<V>,
}

impl<V> WithPrefixes<V> {
    pub fn new<I: IntoIterator<Item = V>>(prefixes: I) -> Self {
        WithPrefixes {
            prefixes: prefixes.into_iter().collect(),
        }
    }

    pub fn prefixes(&self) -> &[V] {
        &self.prefixes
    }
}

/// Construct a [`WithPrefixes`] producer. With no prefixes it produces nothing.
///
/// ```rust
/// use inflater::prelude::*;
///
/// let ordinals = with_prefixes(["1st ", "2nd "].map(String::from));
/// let out: Vec<String> = ordinals.produce("item".to_string()).collect();
/// assert_eq!(out, vec!["1st item", "2nd item"]);
/// ```
pub fn with_prefixes<V: Concatenate, I: IntoIterator<Item = V>>(prefixes: I) -> WithPrefixes<V> {
    WithPrefixes::new(prefixes)
}

impl<V: Concatenate> Producer<V> for WithPrefixes<V> {
    fn produce<'a>(&'a self, seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        Box::new(self.prefixes.iter().map(move |prefix| prefix.concatenate(&seed)))
    }
}

/// Yields `seed ⧺ suffix` for every suffix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WithSuffixes<V> {
    suffixes: Vec<V>,
}

impl<V> WithSuffixes<V> {
    pub fn new<I: IntoIterator<Item = V>>(suffixes: I) -> Self {
        WithSuffixes {
            suffixes: suffixes.into_iter().collect(),
        }
    }

    pub fn suffixes(&self) -> &[V] {
        &self.suffixes
    }
}

/// Construct a [`WithSuffixes`] producer. With no suffixes it produces nothing.
pub fn with_suffixes<V: Concatenate, I: IntoIterator<Item = V>>(suffixes: I) -> WithSuffixes<V> {
    WithSuffixes::new(suffixes)
}

impl<V: Concatenate> Producer<V> for WithSuffixes<V> {
    fn produce<'a>(&'a self, seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        Box::new(self.suffixes.iter().map(move |suffix| seed.concatenate(suffix)))
    }
}
