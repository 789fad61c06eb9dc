//! Build script for boundfill.
//!
//! Emits feature-configuration notes so integrators can see which policies
//! and backends a given build carries.

use std::env;

fn main() {
    // Re-run if features change
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_DIAGNOSTICS");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_LOG");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_PARKING_LOT");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_STRICT_CAPACITY");

    let diagnostics_enabled = env::var("CARGO_FEATURE_DIAGNOSTICS").is_ok();
    let log_enabled = env::var("CARGO_FEATURE_LOG").is_ok();
    let strict_enabled = env::var("CARGO_FEATURE_STRICT_CAPACITY").is_ok();

    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    let is_release = profile == "release";

    if strict_enabled {
        emit_info("strict-capacity enabled: declared capacities must exactly match known destination sizes");
        emit_note("a mismatched dmax on the slice entry points is now a hard error (BF004)");
    }

    if is_release && !diagnostics_enabled && !log_enabled {
        emit_note("release build without 'diagnostics' or 'log': violation reports only reach custom handlers");
        emit_note("enable one of them if you want stderr or log output in production");
    }

    if log_enabled {
        emit_info("log integration enabled: violations are reported via log::error!");
    }
}

fn emit_info(msg: &str) {
    println!("cargo:warning=[boundfill] ℹ️  {}", msg);
}

fn emit_note(msg: &str) {
    println!("cargo:warning=[boundfill]    {}", msg);
}
