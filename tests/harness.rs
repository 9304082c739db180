use std::io::Write;

use haybench::prelude::*;

fn run_collected(registry: &[StrategyDescriptor], buffer: &ByteBuffer) -> Vec<BenchmarkResult> {
    let mut results = Vec::new();
    run_all(registry, buffer, |result| results.push(result));
    results
}

#[test]
fn full_run_over_a_real_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"the quick brown fox").unwrap();

    let pattern = Pattern::new(&b"o"[..]).unwrap();
    let buffer = load(file.path()).unwrap();
    let registry = default_registry(&pattern);
    let results = run_collected(&registry, &buffer);

    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["first-byte", "regex", "nested", "nested-lanes", "noop"]);
    for result in &results {
        assert!(result.status.is_done(), "{} should complete", result.name);
    }

    // Pattern length 1: the proxy count equals the true count.
    let hits: Vec<u64> = results.iter().map(|r| r.hits).collect();
    assert_eq!(hits, [2, 2, 2, 2, 0]);
}

#[test]
fn overlapping_matches_are_counted_by_every_full_strategy() {
    let pattern = Pattern::new(&b"aba"[..]).unwrap();
    let buffer = ByteBuffer::from(b"abababab".to_vec());
    let results = run_collected(&default_registry(&pattern), &buffer);

    assert_eq!(results[1].hits, 3, "regex");
    assert_eq!(results[2].hits, 3, "nested");
    assert_eq!(results[3].hits, 3, "nested-lanes");
}

#[test]
fn engine_compile_failure_does_not_stop_the_batch() {
    // Invalid UTF-8 cannot reach the regex engine; the other four strategies
    // must still run and report.
    let pattern = Pattern::new(vec![0xff, 0x6f]).unwrap();
    let buffer = ByteBuffer::from(b"the quick brown fox".to_vec());
    let results = run_collected(&default_registry(&pattern), &buffer);

    assert_eq!(results.len(), 5);
    assert!(matches!(results[1].status, RunStatus::Failed(_)));
    for result in results.iter().filter(|r| r.name != "regex") {
        assert!(result.status.is_done(), "{} should complete", result.name);
    }
    // 0xff never occurs, so the nested scans find nothing; the first-byte
    // proxy scans for 0xff as well.
    assert_eq!(results[0].hits, 0);
    assert_eq!(results[2].hits, 0);
    assert_eq!(results[3].hits, 0);
}

#[test]
fn repeated_runs_report_identical_hit_counts() {
    let pattern = Pattern::new(&b"ss"[..]).unwrap();
    let buffer = ByteBuffer::from(b"mississippi mississippi".to_vec());
    let registry = default_registry(&pattern);

    let first: Vec<u64> = run_collected(&registry, &buffer).iter().map(|r| r.hits).collect();
    let second: Vec<u64> = run_collected(&registry, &buffer).iter().map(|r| r.hits).collect();
    assert_eq!(first, second);
}

#[test]
fn cross_check_accepts_the_default_registry() {
    let pattern = Pattern::new(&b"is"[..]).unwrap();
    let buffer = ByteBuffer::from(b"mississippi".to_vec());
    let registry = default_registry(&pattern);

    let mismatches = verify_counts(&registry, &buffer, &pattern).unwrap();
    assert!(mismatches.is_empty());
}
