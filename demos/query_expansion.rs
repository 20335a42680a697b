//! Expand one search query into several rewritten queries.
//!
//! The graph below normalises the query, then fans out into: the normalised query itself, its
//! synonyms, and site-restricted variants of both.
//!
//! ```text
//!   query ─▶ normalise ─┬─▶ keep
//!                       ├─▶ synonyms
//!                       └─▶ (keep | synonyms) ─▶ site filters
//! ```
use inflater::prelude::*;
use std::collections::HashMap;

fn synonyms() -> impl Producer<String> {
    let table: HashMap<&'static str, Vec<&'static str>> = HashMap::from([
        ("car", vec!["automobile", "vehicle"]),
        ("cheap", vec!["inexpensive", "budget"]),
    ]);

    // replace one word at a time, so each output differs from the seed in a single position
    from_fn(move |query: String| {
        let words: Vec<String> = query.split(' ').map(String::from).collect();
        let mut rewrites = Vec::new();
        for (i, word) in words.iter().enumerate() {
            for alternative in table.get(word.as_str()).into_iter().flatten() {
                let mut rewritten = words.clone();
                rewritten[i] = alternative.to_string();
                rewrites.push(rewritten.join(" "));
            }
        }
        rewrites.into_iter()
    })
}

fn main() {
    let normalise = map(|q: String| {
        q.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    })
    .filter_values(|q: &String| !q.is_empty());

    let sites = ["", " site:example.org", " site:example.com"].map(String::from);

    let expand = chain_many(vec![
        normalise.boxed(),
        concat_many(vec![
            identity().boxed(),
            synonyms().boxed(),
            concat(identity(), synonyms())
                .with_suffixes(sites)
                .filter_values(|q: &String| q.contains("site:"))
                .boxed(),
        ]),
    ]);

    for query in ["Cheap   CAR rental", "   "] {
        println!("{query:?}");
        for rewritten in expand.produce(query.to_string()) {
            println!("  {rewritten}");
        }
    }
}
