//! # Classification Scenarios
//!
//! End-to-end runs through `UniquenessService` with concrete inputs:
//!
//! 1. **Known passwords**: preload, then classify a mixed batch
//! 2. **Tight capacity**: false positives are reachable
//! 3. **Single bit**: total collision
//! 4. **Key collapse**: repeated candidates keep one entry

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use rand::distributions::Alphanumeric;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use serde_json::{json, Value};

    use uniqueness_filter::{
        classify, BloomConfigBuilder, BloomFilter, Candidate, Classification,
        ClassificationReport, Metrics, UniquenessApi, UniquenessService,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const EXISTING: [&str; 3] = ["password123", "admin123", "qwerty123"];

    fn distinct_values(seed: u64, count: usize) -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut seen = HashSet::new();
        let mut values = Vec::with_capacity(count);
        while values.len() < count {
            let value: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(12)
                .map(char::from)
                .collect();
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }
        values
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[test]
    fn test_known_passwords_scenario() {
        let mut filter = BloomFilter::new(1000, 5).unwrap();
        let mut service = UniquenessService::new(&mut filter);
        service.preload(EXISTING);

        let candidates: Vec<Value> =
            serde_json::from_str(r#"["password123", "newpassword", "admin123", "guest", "", null]"#)
                .unwrap();
        let results = service.classify(candidates);

        assert_eq!(results.len(), 6);
        assert_eq!(results[&Candidate::from("password123")], Classification::Duplicate);
        assert_eq!(results[&Candidate::from("newpassword")], Classification::Unique);
        assert_eq!(results[&Candidate::from("admin123")], Classification::Duplicate);
        assert_eq!(results[&Candidate::from("guest")], Classification::Unique);
        assert_eq!(results[&Candidate::from("")], Classification::Invalid);
        assert_eq!(results[&Candidate::Null], Classification::Invalid);

        // New passwords are now registered
        assert!(filter.contains("newpassword"));
        assert!(filter.contains("guest"));
    }

    #[test]
    fn test_false_positive_reachable_under_tight_capacity() {
        let mut filter = BloomFilter::new(10, 1).unwrap();
        let values = distinct_values(0x5EED, 11);

        // 11 distinct values over 10 positions: at least one lands on a set bit
        let mut false_positives = Vec::new();
        for value in &values {
            if filter.contains(value) {
                false_positives.push(value.clone());
            }
            filter.insert(value);
        }

        assert!(
            !false_positives.is_empty(),
            "Expected at least one never-inserted value to be reported present"
        );
    }

    #[test]
    fn test_tight_capacity_misclassifies_new_password_as_duplicate() {
        let mut filter = BloomFilter::new(10, 1).unwrap();
        let values = distinct_values(42, 11);

        let results = classify(&mut filter, values.iter().map(String::as_str));
        let report = ClassificationReport::from_results(&results);

        assert_eq!(report.total, 11);
        assert!(report.duplicate >= 1, "Pigeonhole forces a duplicate verdict");
        assert_eq!(report.invalid, 0);
    }

    #[test]
    fn test_single_bit_capacity_collides_everything() {
        let mut filter = BloomFilter::new(1, 4).unwrap();

        let results = classify(&mut filter, ["first", "second", "third"]);

        assert_eq!(results[&Candidate::from("first")], Classification::Unique);
        assert_eq!(results[&Candidate::from("second")], Classification::Duplicate);
        assert_eq!(results[&Candidate::from("third")], Classification::Duplicate);
        for value in distinct_values(9, 20) {
            assert!(filter.contains(&value));
        }
    }

    #[test]
    fn test_repeated_malformed_keys_collapse() {
        let mut filter = BloomFilter::new(1000, 5).unwrap();

        let candidates: Vec<Value> = vec![json!(""), json!("guest"), json!(""), Value::Null, Value::Null];
        let results = classify(&mut filter, candidates);

        assert_eq!(results.len(), 3, "Repeated keys share one entry");
        let keys: Vec<&Candidate> = results.keys().collect();
        assert_eq!(
            keys,
            vec![&Candidate::from(""), &Candidate::from("guest"), &Candidate::Null]
        );
    }

    #[test]
    fn test_non_string_values_are_invalid() {
        let mut filter = BloomFilter::new(1000, 5).unwrap();
        let before = filter.clone();

        let candidates = vec![json!(123), json!(true), json!(["a"]), json!({"pw": "x"}), json!(" \t ")];
        let results = classify(&mut filter, candidates);

        assert_eq!(results.len(), 5);
        assert!(results.values().all(|l| *l == Classification::Invalid));
        assert_eq!(filter, before, "Invalid candidates must not touch the filter");
    }

    #[test]
    fn test_string_number_differs_from_number() {
        let mut filter = BloomFilter::new(1000, 5).unwrap();

        let results = classify(&mut filter, vec![json!("123"), json!(123)]);

        assert_eq!(results[&Candidate::from("123")], Classification::Unique);
        assert_eq!(results[&Candidate::from(json!(123))], Classification::Invalid);
    }

    #[test]
    fn test_merged_filters_share_history() {
        let mut left = BloomFilter::new(2048, 5).unwrap();
        let mut right = BloomFilter::new(2048, 5).unwrap();
        classify(&mut left, ["alpha-secret"]);
        classify(&mut right, ["beta-secret"]);

        left.merge(&right).unwrap();
        let results = classify(&mut left, ["alpha-secret", "beta-secret"]);

        assert!(results.values().all(|l| *l == Classification::Duplicate));
    }

    #[test]
    fn test_configured_filter_stays_near_target_fpr() {
        let config = BloomConfigBuilder::new()
            .expected_items(500)
            .target_fpr(0.01)
            .build()
            .unwrap();
        let mut filter = BloomFilter::from_config(&config).unwrap();
        let metrics = Arc::new(Metrics::new());

        let inserted = distinct_values(1, 500);
        let mut service = UniquenessService::new(&mut filter).with_metrics(metrics.clone());
        service.classify(inserted.iter().map(String::as_str));

        let queries = distinct_values(2, 20_000);
        let queries: Vec<&str> = queries
            .iter()
            .filter(|p| !inserted.contains(*p))
            .map(String::as_str)
            .collect();
        let false_positives = queries.iter().filter(|p| filter.contains(**p)).count();
        let observed = false_positives as f64 / queries.len() as f64;

        assert!(observed < 0.02, "Observed FPR {} too far above target", observed);
        assert!(filter.estimated_false_positive_rate() < 0.02);
        assert!(metrics.snapshot().elements_inserted >= 490);
    }
}
