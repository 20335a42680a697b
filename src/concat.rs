//! Fan-out: several producers fed the same seed, outputs concatenated in order.
use crate::producer::*;
use crate::source::Empty;

/// `first` then `second`, both inflating the same seed.
///
/// `second` is not asked to produce anything until `first` has been exhausted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Concat<P1, P2> {
    pub first: P1,
    pub second: P2,
}

impl<P1, P2> Concat<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Concat { first, second }
    }
}

/// Construct the fan-out of two producers.
pub fn concat<V, P1, P2>(first: P1, second: P2) -> Concat<P1, P2>
where
    V: Clone,
    P1: Producer<V>,
    P2: Producer<V>,
{
    Concat::new(first, second)
}

impl<V, P1, P2> Producer<V> for Concat<P1, P2>
where
    V: Clone,
    P1: Producer<V>,
    P2: Producer<V>,
{
    fn produce<'a>(&'a self, seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        let second = &self.second;
        let head = self.first.produce(seed.clone());
        let tail = core::iter::once_with(move || second.produce(seed)).flatten();
        Box::new(Iterator::chain(head, tail))
    }
}

/// Fan-out over any number of producers, preserving their left-to-right order.
///
/// No producers gives [`Empty`]; a single producer is returned unchanged; otherwise the
/// producers are right-folded into nested [`Concat`]s.
pub fn concat_many<'a, V, I>(producers: I) -> BoxProducer<'a, V>
where
    V: Clone + 'a,
    I: IntoIterator<Item = BoxProducer<'a, V>>,
{
    let mut producers: Vec<_> = producers.into_iter().collect();
    let Some(last) = producers.pop() else {
        return Box::new(Empty);
    };
    producers
        .into_iter()
        .rev()
        .fold(last, |rest, p| -> BoxProducer<'a, V> {
            Box::new(Concat::new(p, rest))
        })
}
