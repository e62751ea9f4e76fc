use meowpass_password::complexity::{
    analyze, character_diversity, compression_ratio, pattern_complexity,
    shannon_entropy, MAX_SCORE,
};

const SAMPLES: &[&str] = &[
    "a",
    "zz",
    "abab",
    "abcabc",
    "aaaaaaaaaaaa",
    "Wh1skers!",
    "m1ttEns$lun@ol1ver",
    "  spaced  out  ",
    "\u{1f431}cat\u{1f431}",
    "!@#$%^&*()-_=+[]{;:.<>?",
];

#[test]
fn entropy_properties() {
    assert_eq!(0.0, shannon_entropy(""));
    assert_eq!(0.0, shannon_entropy("zzzzzz"));
    assert!((shannon_entropy("abab") - 1.0).abs() < 0.1);
    assert!(shannon_entropy("abcabc") > 1.5);
    for sample in SAMPLES {
        assert!(shannon_entropy(sample) >= 0.0);
    }
}

#[test]
fn ratios_in_unit_range() {
    for sample in SAMPLES {
        for value in [
            compression_ratio(sample),
            pattern_complexity(sample),
            character_diversity(sample),
        ] {
            assert!((0.0..=1.0).contains(&value), "{sample}: {value}");
        }
    }
}

#[test]
fn empty_metrics() {
    assert_eq!(0.0, compression_ratio(""));
    assert_eq!(0.0, pattern_complexity(""));
    assert_eq!(0.0, character_diversity(""));
    assert_eq!(0.0, shannon_entropy(""));
}

#[test]
fn diversity_classes() {
    assert_eq!(0.25, character_diversity("abc"));
    assert_eq!(1.0, character_diversity("aA1!"));
}

#[test]
fn score_in_range() {
    for sample in SAMPLES {
        let result = analyze(sample);
        assert!(result.score >= 0.0);
        assert!(result.score <= MAX_SCORE);
        assert_eq!(sample.len(), result.length);
    }
}
