//! Compile-time build metadata exposed on the CLI version surface.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("TALLY_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("TALLY_BUILD_TIMESTAMP");

/// Version payload shown by `tally --version`.
///
/// clap prepends the binary name when rendering, so the payload starts with
/// the bare semver.
pub fn cli_version_text() -> String {
    format!("{VERSION}\ncommit: {GIT_COMMIT}\nbuilt: {BUILD_TIMESTAMP}")
}
