//! # Inflater
//!
//! A [`Producer`](crate::producer::Producer) *inflates* a single seed value into a lazy,
//! ordered sequence of derived values of the same type.
//! Producers compose algebraically, which makes them a convenient way to describe
//! query-expansion pipelines: one input query in, many rewritten queries out, with no
//! intermediate collections.
//!
//! ```text
//!                 ┌──────────┐
//!            ┌───▶│ prefixes │───┐
//!   seed ────┤    └──────────┘   ├───▶ concat: outputs of both, in order
//!            └───▶│ suffixes │───┘
//!                 └──────────┘
//!
//!   seed ───▶ prefixes ───▶ suffixes ───▶ chain: every prefixed value gets every suffix
//! ```
//!
//! # Combinators
//!
//! - [`Empty`](crate::source::Empty) produces nothing, [`Identity`](crate::source::Identity)
//!   produces the seed, and [`FromList`](crate::source::FromList) produces a fixed list.
//! - [`MapValues`](crate::transform::MapValues) and [`FilterValues`](crate::transform::FilterValues)
//!   transform or drop individual values.
//! - [`Concat`](crate::concat::Concat) feeds one seed to two producers (fan-out), and
//!   [`Chain`](crate::chain::Chain) feeds every output of one producer into the next (pipeline).
//!   [`concat_many`](crate::concat::concat_many) and [`chain_many`](crate::chain::chain_many)
//!   generalise both to any number of producers.
//! - [`WithPrefixes`](crate::affix::WithPrefixes) and [`WithSuffixes`](crate::affix::WithSuffixes)
//!   join affixes onto string-like values.
//!
//! `Empty` is the unit of `Concat` and absorbs `Chain`; `Identity` is the unit of `Chain`.
//!
//! # Example
//!
//! ```rust
//! use inflater::prelude::*;
//!
//! fn strings(xs: &[&str]) -> Vec<String> {
//!     xs.iter().map(|x| x.to_string()).collect()
//! }
//!
//! let honorifics = chain_many(vec![
//!     with_prefixes(strings(&["1st ", "2nd ", "3rd "])).boxed(),
//!     with_suffixes(strings(&["-san", "-sama", "-dono"])).boxed(),
//! ]);
//!
//! let out: Vec<String> = honorifics.produce("foo".to_string()).take(4).collect();
//! assert_eq!(out, strings(&["1st foo-san", "1st foo-sama", "1st foo-dono", "2nd foo-san"]));
//! ```
//!
//! Evaluation is single-threaded and pull-based: a value is only computed when the consumer asks
//! for it, and dropping the sequence stops all work.
//!
//! # Features
//!
//! - `serde`: (de)serialize [`FromList`](crate::source::FromList),
//!   [`WithPrefixes`](crate::affix::WithPrefixes) and [`WithSuffixes`](crate::affix::WithSuffixes)
//!   as plain lists.

pub mod affix;
pub mod chain;
pub mod concat;
pub mod producer;
pub mod source;
pub mod transform;

pub mod prelude {
    //! The producer trait and every combinator constructor.
    pub use crate::affix::*;
    pub use crate::chain::*;
    pub use crate::concat::*;
    pub use crate::producer::*;
    pub use crate::source::*;
    pub use crate::transform::*;
}
