//! Pipelines: the outputs of one producer become the seeds of the next.
use crate::producer::*;
use crate::source::Empty;

/// Inflate the seed with `first`, then inflate every resulting value with `second`.
///
/// Output order is nested: all of `second`'s values for the first intermediate value, then all
/// of them for the second intermediate value, and so on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chain<P1, P2> {
    pub first: P1,
    pub second: P2,
}

impl<P1, P2> Chain<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Chain { first, second }
    }
}

/// Construct the pipeline `first ; second`.
pub fn chain<V, P1, P2>(first: P1, second: P2) -> Chain<P1, P2>
where
    P1: Producer<V>,
    P2: Producer<V>,
{
    Chain::new(first, second)
}

impl<V, P1, P2> Producer<V> for Chain<P1, P2>
where
    P1: Producer<V>,
    P2: Producer<V>,
{
    fn produce<'a>(&'a self, seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        let second = &self.second;
        Box::new(
            self.first
                .produce(seed)
                .flat_map(move |intermediate| second.produce(intermediate)),
        )
    }
}

/// Pipeline over any number of producers, applied left to right.
///
/// No producers gives [`Empty`]; a single producer is returned unchanged; otherwise the
/// producers are right-folded into nested [`Chain`]s.
pub fn chain_many<'a, V, I>(producers: I) -> BoxProducer<'a, V>
where
    V: 'a,
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
            Box::new(Chain::new(p, rest))
        })
}
