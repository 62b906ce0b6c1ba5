/// RFC 3986 fixture suite
///
/// Cases live in `rfc3986/uritestdata.json`: component expectations for
/// valid URIs (most taken from RFC 3986 sections 1.1.2 and 5.4) and inputs
/// that must be rejected.
#[path = "rfc3986/fixture_loader.rs"]
mod fixture_loader;

#[path = "rfc3986/fixture_runner.rs"]
mod fixture_runner;

#[path = "rfc3986/fixture_tests.rs"]
mod fixture_tests;
