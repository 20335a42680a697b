use super::traits::{Produced, Producer};
use core::marker::PhantomData;

/// A [`Producer`] backed by a plain function or closure.
///
/// Created by [`from_fn`].
pub struct FromFn<F, I> {
    f: F,
    _phantom: PhantomData<fn() -> I>,
}

/// Use any function `seed -> iterator` as a [`Producer`].
///
/// ```rust
/// use inflater::prelude::*;
///
/// let twice = from_fn(|s: String| vec![s.clone(), s].into_iter());
/// let out: Vec<String> = twice.produce("ab".to_string()).collect();
/// assert_eq!(out, vec!["ab", "ab"]);
/// ```
pub fn from_fn<V, F, I>(f: F) -> FromFn<F, I>
where
    F: Fn(V) -> I,
    I: Iterator<Item = V>,
{
    FromFn {
        f,
        _phantom: PhantomData,
    }
}

impl<F: Clone, I> Clone for FromFn<F, I> {
    fn clone(&self) -> Self {
        FromFn {
            f: self.f.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<V, F, I> Producer<V> for FromFn<F, I>
where
    F: Fn(V) -> I,
    I: Iterator<Item = V>,
{
    fn produce<'a>(&'a self, seed: V) -> Produced<'a, V>
    where
        V: 'a,
    {
        Box::new((self.f)(seed))
    }
}
