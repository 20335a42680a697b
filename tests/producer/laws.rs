use inflater::prelude::*;

use super::strategy::{collect, shape_strategy, value_strategy, values_strategy};

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn matches_eager_model(shape in shape_strategy(), seed in value_strategy()) {
        let p = shape.build();
        prop_assert_eq!(collect(&p, &seed), shape.expected(&seed));
    }

    #[test]
    fn deterministic(shape in shape_strategy(), seed in value_strategy()) {
        let p = shape.build();
        prop_assert_eq!(collect(&p, &seed), collect(&p, &seed));
    }

    #[test]
    fn chain_identity_left(shape in shape_strategy(), seed in value_strategy()) {
        let p = shape.build();
        let id_p = chain(identity(), shape.build());
        prop_assert_eq!(collect(&id_p, &seed), collect(&p, &seed));
    }

    #[test]
    fn chain_identity_right(shape in shape_strategy(), seed in value_strategy()) {
        let p = shape.build();
        let p_id = chain(shape.build(), identity());
        prop_assert_eq!(collect(&p_id, &seed), collect(&p, &seed));
    }

    #[test]
    fn chain_empty_absorbs(shape in shape_strategy(), seed in value_strategy()) {
        let left = chain(empty(), shape.build());
        let right = chain(shape.build(), empty());
        prop_assert!(collect(&left, &seed).is_empty());
        prop_assert!(collect(&right, &seed).is_empty());
    }

    #[test]
    fn concat_empty_unit(shape in shape_strategy(), seed in value_strategy()) {
        let p = shape.build();
        let left = concat(empty(), shape.build());
        let right = concat(shape.build(), empty());
        prop_assert_eq!(collect(&left, &seed), collect(&p, &seed));
        prop_assert_eq!(collect(&right, &seed), collect(&p, &seed));
    }

    #[test]
    fn concat_many_in_order(
        a in shape_strategy(),
        b in shape_strategy(),
        c in shape_strategy(),
        seed in value_strategy(),
    ) {
        let many = concat_many(vec![a.build(), b.build(), c.build()]);
        let mut expected = collect(&a.build(), &seed);
        expected.extend(collect(&b.build(), &seed));
        expected.extend(collect(&c.build(), &seed));
        prop_assert_eq!(collect(&many, &seed), expected);
    }

    #[test]
    fn concat_associative(
        a in shape_strategy(),
        b in shape_strategy(),
        c in shape_strategy(),
        seed in value_strategy(),
    ) {
        let ab_c = concat(concat(a.build(), b.build()), c.build());
        let a_bc = concat(a.build(), concat(b.build(), c.build()));
        prop_assert_eq!(collect(&ab_c, &seed), collect(&a_bc, &seed));
    }

    #[test]
    fn chain_associative(
        a in shape_strategy(),
        b in shape_strategy(),
        c in shape_strategy(),
        seed in value_strategy(),
    ) {
        let ab_c = chain(chain(a.build(), b.build()), c.build());
        let a_bc = chain(a.build(), chain(b.build(), c.build()));
        prop_assert_eq!(collect(&ab_c, &seed), collect(&a_bc, &seed));
    }

    #[test]
    fn chain_many_matches_nested_chain(
        a in shape_strategy(),
        b in shape_strategy(),
        c in shape_strategy(),
        seed in value_strategy(),
    ) {
        let many = chain_many(vec![a.build(), b.build(), c.build()]);
        let nested = chain(a.build(), chain(b.build(), c.build()));
        prop_assert_eq!(collect(&many, &seed), collect(&nested, &seed));
    }

    #[test]
    fn chain_cardinality(a in shape_strategy(), b in shape_strategy(), seed in value_strategy()) {
        let (first, second) = (a.build(), b.build());
        let expected: usize = first
            .produce(seed.clone())
            .map(|v| second.produce(v).count())
            .sum();
        let ab = chain(a.build(), b.build());
        prop_assert_eq!(ab.produce(seed).count(), expected);
    }

    #[test]
    fn pass_through_defaults(shape in shape_strategy(), seed in value_strategy()) {
        let p = shape.build();
        let mapped = map_values(shape.build(), None::<fn(String) -> String>);
        let filtered = filter_values(shape.build(), None::<fn(&String) -> bool>);
        prop_assert_eq!(collect(&mapped, &seed), collect(&p, &seed));
        prop_assert_eq!(collect(&filtered, &seed), collect(&p, &seed));
    }

    #[test]
    fn from_list_ignores_seed(items in values_strategy(), s1 in value_strategy(), s2 in value_strategy()) {
        let list = from_list(items.clone());
        prop_assert_eq!(collect(&list, &s1), items.clone());
        prop_assert_eq!(collect(&list, &s2), items);
    }

    #[test]
    fn affix_cardinality(affixes in values_strategy(), seed in value_strategy()) {
        let n = affixes.len();
        prop_assert_eq!(collect(&with_prefixes(affixes.clone()), &seed).len(), n);
        prop_assert_eq!(collect(&with_suffixes(affixes), &seed).len(), n);
    }
}
