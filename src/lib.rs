//! Workspace root package.
//!
//! Carries the cargo-husky dev-dependency that installs the repository
//! git hooks. Exports nothing.
