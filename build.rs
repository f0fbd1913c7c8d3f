// build.rs — Platform detection for lzfsekit.
//
// Emits `cargo:rustc-cfg=has_system_lzfse` on Apple targets, where the OS
// ships libcompression with a native LZFSE encoder/decoder. Everywhere else
// the reference LZFSE library (the `lzfse` crate) is the only buffer backend.
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let apple_targets = ["macos", "ios", "watchos", "tvos", "visionos"];
    if apple_targets.contains(&target_os.as_str()) {
        println!("cargo:rustc-cfg=has_system_lzfse");
    }
}
