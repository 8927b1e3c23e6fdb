/*! Integration tests for libconf.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - config: Tests for the Config struct, parsing and root-relative operations
 * - setting: Tests for Setting handles, typed access and tree growth
 * - parser: Tests for the configuration text format
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("libconf=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod config;
mod helpers;
mod parser;
mod setting;
