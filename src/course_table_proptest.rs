#![cfg(test)]

// Property tests for CourseTable kept inside the crate so they can use the
// `SlotHasher` test doubles and internal growth helpers directly.

use crate::course::Course;
use crate::course_table::CourseTable;
use crate::growth::is_prime;
use crate::hasher::{SlotHasher, SquaringHasher};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(usize, u8),
    Search(usize),
    Miss(String),
    Ordered,
}

// Ids are drawn from a small pool so duplicates and collisions are common.
fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<Op>)> {
    (
        1usize..=13,
        proptest::collection::vec("[A-Z]{2,4}[0-9]{1,3}", 1..=12),
    )
        .prop_flat_map(|(capacity, pool)| {
            let idx = 0..pool.len();
            let op = prop_oneof![
                3 => (idx.clone(), any::<u8>()).prop_map(|(i, t)| Op::Insert(i, t)),
                2 => idx.prop_map(Op::Search),
                1 => "[a-z]{1,4}".prop_map(Op::Miss),
                1 => Just(Op::Ordered),
            ];
            proptest::collection::vec(op, 1..80)
                .prop_map(move |ops| (capacity, pool.clone(), ops))
        })
}

fn check_against_model<S: SlotHasher>(
    mut sut: CourseTable<S>,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    // Model: every record in insertion order.
    let mut model: Vec<Course> = Vec::new();
    let mut last_capacity = sut.capacity();

    for op in ops {
        match op {
            Op::Insert(i, t) => {
                let c = Course::new(pool[i].clone(), format!("title-{}", t), [pool[0].clone()]);
                sut.insert(c.clone());
                model.push(c);
            }
            Op::Search(i) => {
                let expected = model.iter().find(|c| c.id() == pool[i]);
                prop_assert_eq!(sut.search(&pool[i]), expected);
                prop_assert_eq!(sut.contains(&pool[i]), expected.is_some());
            }
            Op::Miss(s) => {
                // Lowercase ids never appear in the pool.
                prop_assert!(sut.search(&s).is_none());
                prop_assert!(sut.find(&s).is_none());
            }
            Op::Ordered => {
                let mut expected: Vec<&Course> = model.iter().collect();
                expected.sort_by(|a, b| a.id().cmp(b.id()));
                prop_assert_eq!(sut.entries_ordered(), expected);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert!(sut.load_factor() < 1.0);
        if sut.capacity() != last_capacity {
            prop_assert!(is_prime(sut.capacity()));
            prop_assert!(sut.capacity() >= 2 * last_capacity);
            last_capacity = sut.capacity();
        }
    }
    Ok(())
}

// Property: state-machine equivalence against an insertion-ordered Vec.
// - search returns the first record inserted under an id, or None.
// - entries_ordered equals the stable sort of the model by id.
// - len tracks inserts across resizes; load factor stays below 1.0.
// - each new capacity is prime and at least double the previous one.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((capacity, pool, ops) in arb_scenario()) {
        let sut = CourseTable::with_capacity(capacity).unwrap();
        check_against_model(sut, &pool, ops)?;
    }
}

#[derive(Clone, Default)]
struct ConstHasher;
impl SlotHasher for ConstHasher {
    fn hash_id(&self, _id: &str) -> u64 {
        0
    }
}

// Property: same invariants when every id lands in bucket 0.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((capacity, pool, ops) in arb_scenario()) {
        let sut = CourseTable::with_capacity_and_hasher(capacity, ConstHasher).unwrap();
        check_against_model(sut, &pool, ops)?;
    }
}

// Property: insertion order does not change the ordered dump's content, and
// every stored slot matches the live capacity.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_permutation_invariant(
        ids in proptest::collection::btree_set("[A-Z]{2,4}[0-9]{3}", 1..200),
        seed in any::<u64>(),
    ) {
        let forward: Vec<String> = ids.iter().cloned().collect();
        let mut shuffled = forward.clone();
        // Deterministic Fisher-Yates driven by an LCG.
        let mut s = seed;
        for i in (1..shuffled.len()).rev() {
            s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
            let j = (s >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }

        let mut a = CourseTable::with_capacity(5).unwrap();
        let mut b = CourseTable::new();
        for id in &forward {
            a.insert(Course::new(id.clone(), "t", Vec::<String>::new()));
        }
        for id in &shuffled {
            b.insert(Course::new(id.clone(), "t", Vec::<String>::new()));
        }
        prop_assert_eq!(a.entries_ordered(), b.entries_ordered());
        let ordered: Vec<&str> = a.entries_ordered().into_iter().map(Course::id).collect();
        prop_assert_eq!(ordered, forward.iter().map(String::as_str).collect::<Vec<_>>());

        let cap = a.capacity() as u64;
        for (h, c) in a.iter() {
            prop_assert_eq!(h.slot(&a), Some((SquaringHasher.hash_id(c.id()) % cap) as usize));
        }
    }
}
