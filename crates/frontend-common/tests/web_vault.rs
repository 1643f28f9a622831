//! Browser storage compliance for `WebVault`
//!
//! Runs the same suite `MemoryVault` passes natively, against the real
//! localStorage/sessionStorage pair.

#![cfg(target_arch = "wasm32")]

use techpoa_core::tests::support::SessionVaultTestSuite;
use techpoa_frontend_common::WebVault;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn web_vault_meets_the_vault_contract() {
    SessionVaultTestSuite::new(WebVault::new()).run_all();
}
