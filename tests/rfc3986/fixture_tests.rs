#![allow(clippy::unwrap_used, clippy::panic, clippy::print_stdout)]

use super::fixture_loader::load_fixture;
use super::fixture_runner::run_fixture;

#[test]
fn test_fixture_loads() {
    let tests = load_fixture();
    assert!(tests.len() > 40, "fixture failed to load");
}

#[test]
fn test_full_fixture_suite() {
    let result = run_fixture(load_fixture());
    println!("{}", result.summary());

    if result.failed > 0 {
        for failure in result.failures.iter().take(20) {
            println!(
                "#{} {:?} [{}]: expected {}, got {}",
                failure.test_num, failure.input, failure.field, failure.expected, failure.actual
            );
        }
        panic!("{} fixture case(s) failed", result.failed);
    }
    assert!(result.passed > 40);
}
