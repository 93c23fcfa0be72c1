//! WASM entry point for the gating showcase.
//!
//! This binary is compiled to WebAssembly via Trunk and mounted to the
//! DOM body.

use leptos::prelude::*;
use vantage_gates::components::ShowcaseApp;

fn main() {
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    mount_to_body(|| view! { <ShowcaseApp /> });
}
