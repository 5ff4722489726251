//! Test helpers for Sat Splits Mollusk tests
//!
//! NOTE: This module is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! All imports from solana_sdk::* (not modular crates like solana_pubkey)

pub mod instructions;

pub use errors::*;
pub use instructions::*;

use mollusk_svm::Mollusk;

/// Program binary name under target/deploy
pub const PROGRAM_NAME: &str = "sat_splits";

/// Shown when the program binary has not been built
pub const NEEDS_SBF_BUILD: &str = "requires target/deploy/sat_splits.so (run `anchor build` first)";

/// Setup Mollusk for testing
///
/// Uses SBF_OUT_DIR to tell Mollusk where to find the program binary.
/// Panics when the binary is missing; tests that need it are `#[ignore]`d
/// and run with `cargo test -- --include-ignored` after `anchor build`.
/// For Anchor workspace: tests are in programs/sat-splits/tests,
/// binary is at workspace_root/target/deploy/
pub fn setup_mollusk() -> Mollusk {
    // From programs/sat-splits/, go up 2 levels to workspace root
    let deploy_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent() // programs/
        .unwrap()
        .parent() // workspace root
        .unwrap()
        .join("target/deploy");

    let binary = deploy_dir.join(format!("{PROGRAM_NAME}.so"));
    assert!(binary.exists(), "{} not found: {NEEDS_SBF_BUILD}", binary.display());

    std::env::set_var("SBF_OUT_DIR", deploy_dir);

    // Just pass the program name, Mollusk will find it via SBF_OUT_DIR
    Mollusk::new(&instructions::PROGRAM_ID, PROGRAM_NAME)
}
