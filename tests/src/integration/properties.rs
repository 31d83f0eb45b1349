//! # Filter and Policy Properties
//!
//! Randomized checks of the guarantees every configuration must keep:
//! no false negatives, deterministic positions, monotonic bit state,
//! idempotent insert, and "unique once, duplicate afterwards".

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use uniqueness_filter::{
        BloomFilter, Candidate, Classification, UniquenessApi, UniquenessService,
    };

    fn passwords() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("\\PC{1,16}", 1..40)
    }

    proptest! {
        #[test]
        fn inserted_values_are_always_found(
            values in passwords(),
            capacity in 1usize..2048,
            k in 1usize..8,
        ) {
            let mut filter = BloomFilter::new(capacity, k).unwrap();
            for value in &values {
                filter.insert(value);
                prop_assert!(filter.contains(value));
            }
            for value in &values {
                prop_assert!(filter.contains(value), "false negative for {:?}", value);
            }
        }

        #[test]
        fn positions_are_deterministic(
            value in ".*",
            capacity in 1usize..4096,
            k in 1usize..16,
        ) {
            let a = BloomFilter::new(capacity, k).unwrap();
            let b = BloomFilter::new(capacity, k).unwrap();

            let positions = a.positions(&value);
            prop_assert_eq!(positions.len(), k);
            prop_assert!(positions.iter().all(|&p| p < capacity));
            prop_assert_eq!(&positions, &a.positions(&value));
            prop_assert_eq!(&positions, &b.positions(&value));
        }

        #[test]
        fn set_bits_never_shrink(values in passwords(), capacity in 1usize..512) {
            let mut filter = BloomFilter::new(capacity, 3).unwrap();
            let mut previous: Vec<usize> = Vec::new();

            for value in &values {
                filter.insert(value);
                let current: Vec<usize> = filter.bits().iter_ones().collect();
                prop_assert!(previous.iter().all(|p| current.contains(p)));
                previous = current;
            }
        }

        #[test]
        fn insert_is_idempotent(values in passwords(), extra in "\\PC{0,16}") {
            let mut once = BloomFilter::new(1024, 4).unwrap();
            for value in &values {
                once.insert(value);
            }
            once.insert(&extra);

            let mut twice = once.clone();
            twice.insert(&extra);

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn unique_then_duplicate(values in prop::collection::vec("[a-z0-9]{1,12}", 1..30)) {
            let mut filter = BloomFilter::new(4096, 5).unwrap();
            let mut service = UniquenessService::new(&mut filter);

            for value in &values {
                service.classify_one(&Candidate::from(value.as_str()));
            }
            for value in &values {
                let label = service.classify_one(&Candidate::from(value.as_str()));
                prop_assert_eq!(label, Classification::Duplicate);
            }
        }

        #[test]
        fn blank_candidates_are_invalid_and_inert(blank in "[ \\t\\r\\n]{0,8}") {
            let mut filter = BloomFilter::new(256, 3).unwrap();
            let before = filter.clone();

            let label = UniquenessService::new(&mut filter).classify_one(&Candidate::from(blank));

            prop_assert_eq!(label, Classification::Invalid);
            prop_assert_eq!(filter, before);
        }
    }
}
