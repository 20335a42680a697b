//! Element-wise transformation and filtering of a producer's output.
//!
//! Both combinators take their function as an `Option`: an absent function means "pass values
//! through unchanged", never "reject everything".
use crate::producer::*;
use crate::source::Identity;

/// Applies a function to every value of an upstream producer.
#[derive(Clone)]
pub struct MapValues<P, F> {
    upstream: P,
    transform: Option<F>,
}

impl<P, F> MapValues<P, F> {
    pub fn new(upstream: P, transform: Option<F>) -> Self {
        MapValues {
            upstream,
            transform,
        }
    }
}

/// Map `transform` over every value `upstream` produces.
///
/// With `transform = None` this reproduces `upstream` exactly.
pub fn map_values<V, P, F>(upstream: P, transform: Option<F>) -> MapValues<P, F>
where
    P: Producer<V>,
    F: Fn(V) -> V,
{
    MapValues::new(upstream, transform)
}

/// Apply `transform` directly to the seed, yielding one value.
pub fn map<V, F: Fn(V) -> V>(transform: F) -> MapValues<Identity, F> {
    MapValues::new(Identity, Some(transform))
}

impl<V, P, F> Producer<V> for MapValues<P, F>
where
    P: Producer<V>,
    F: Fn(V) -> V,
{
    fn produce<'a>(&'a self, seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        let values = self.upstream.produce(seed);
        match &self.transform {
            Some(f) => Box::new(values.map(f)),
            None => values,
        }
    }
}

/// Drops the values of an upstream producer which fail a predicate.
#[derive(Clone)]
pub struct FilterValues<P, F> {
    upstream: P,
    predicate: Option<F>,
}

impl<P, F> FilterValues<P, F> {
    pub fn new(upstream: P, predicate: Option<F>) -> Self {
        FilterValues {
            upstream,
            predicate,
        }
    }
}

/// Keep only the values of `upstream` for which `predicate` holds.
///
/// With `predicate = None` every value is kept.
pub fn filter_values<V, P, F>(upstream: P, predicate: Option<F>) -> FilterValues<P, F>
where
    P: Producer<V>,
    F: Fn(&V) -> bool,
{
    FilterValues::new(upstream, predicate)
}

/// Yield the seed if `predicate` accepts it, otherwise nothing.
pub fn filter<V, F: Fn(&V) -> bool>(predicate: F) -> FilterValues<Identity, F> {
    FilterValues::new(Identity, Some(predicate))
}

impl<V, P, F> Producer<V> for FilterValues<P, F>
where
    P: Producer<V>,
    F: Fn(&V) -> bool,
{
    fn produce<'a>(&'a self, seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        let values = self.upstream.produce(seed);
        match &self.predicate {
            Some(f) => Box::new(values.filter(move |v| f(v))),
            None => values,
        }
    }
}
