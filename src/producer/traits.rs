use crate::affix::{Concatenate, WithPrefixes, WithSuffixes};
use crate::chain::Chain;
use crate::concat::Concat;
use crate::transform::{FilterValues, MapValues};

/// The lazy sequence returned by [`Producer::produce`].
///
/// Consumers stop early by simply not calling `next` again; dropping the iterator releases
/// whatever sub-sequences are still in flight.
pub type Produced<'a, V> = Box<dyn Iterator<Item = V> + 'a>;

/// A type-erased producer, as accepted by the variadic combinators
/// [`crate::concat::concat_many`] and [`crate::chain::chain_many`].
pub type BoxProducer<'a, V> = Box<dyn Producer<V> + 'a>;

/// Inflate a seed value into an ordered sequence of values of the same type.
///
/// Implementations must be pure: `produce` takes `&self`, and calling it twice with the same
/// seed must enumerate the same values in the same order.
pub trait Producer<V> {
    /// Inflate `seed` into a lazy sequence of values.
    fn produce<'a>(&'a self, seed: V) -> Produced<'a, V>
    where
        V: 'a;

    /// Fan-out: `self` then `other`, both fed the same seed.
    fn concat<P>(self, other: P) -> Concat<Self, P>
    where
        Self: Sized,
        P: Producer<V>,
    {
        Concat::new(self, other)
    }

    /// Pipeline: every value of `self` becomes a seed of `next`.
    fn chain<P>(self, next: P) -> Chain<Self, P>
    where
        Self: Sized,
        P: Producer<V>,
    {
        Chain::new(self, next)
    }

    /// Apply `transform` to every produced value.
    fn map_values<F>(self, transform: F) -> MapValues<Self, F>
    where
        Self: Sized,
        F: Fn(V) -> V,
    {
        MapValues::new(self, Some(transform))
    }

    /// Keep only the produced values accepted by `predicate`.
    fn filter_values<F>(self, predicate: F) -> FilterValues<Self, F>
    where
        Self: Sized,
        F: Fn(&V) -> bool,
    {
        FilterValues::new(self, Some(predicate))
    }

    /// Prepend every prefix to every produced value.
    fn with_prefixes<I>(self, prefixes: I) -> Chain<Self, WithPrefixes<V>>
    where
        Self: Sized,
        V: Concatenate,
        I: IntoIterator<Item = V>,
    {
        Chain::new(self, WithPrefixes::new(prefixes))
    }

    /// Append every suffix to every produced value.
    fn with_suffixes<I>(self, suffixes: I) -> Chain<Self, WithSuffixes<V>>
    where
        Self: Sized,
        V: Concatenate,
        I: IntoIterator<Item = V>,
    {
        Chain::new(self, WithSuffixes::new(suffixes))
    }

    /// Erase the concrete type of this producer.
    fn boxed<'a>(self) -> BoxProducer<'a, V>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<V, P: Producer<V> + ?Sized> Producer<V> for &P {
    fn produce<'a>(&'a self, seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        (**self).produce(seed)
    }
}

impl<V, P: Producer<V> + ?Sized> Producer<V> for Box<P> {
    fn produce<'a>(&'a self, seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        (**self).produce(seed)
    }
}

impl<V, P: Producer<V> + ?Sized> Producer<V> for std::rc::Rc<P> {
    fn produce<'a>(&'a self, seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        (**self).produce(seed)
    }
}

impl<V, P: Producer<V> + ?Sized> Producer<V> for std::sync::Arc<P> {
    fn produce<'a>(&'a self, seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        (**self).produce(seed)
    }
}
