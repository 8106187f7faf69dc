//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `omni_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use omni_core::CommandInterpreter;

fn main() {
    println!("omni_core ping={}", omni_core::ping());
    println!("omni_core version={}", omni_core::core_version());

    let interpreter = CommandInterpreter::with_all_panels();
    println!(
        "omni_core interpret(\"open jargon linker\")={:?}",
        interpreter.interpret("open jargon linker")
    );
}
