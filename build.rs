// Build script: runs wasm-pack for wasm32 targets and mirrors `static/` into `dist/`.
use std::process::Command;
use std::{env, fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    // Only run the heavy wasm-pack build when targeting wasm32, and never from
    // inside the cargo invocation wasm-pack itself starts.
    let target = env::var("TARGET").unwrap_or_default();
    let nested = env::var_os("GLYPHWARP_NESTED_BUILD").is_some();
    if target == "wasm32-unknown-unknown" && !nested {
        let status = Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .env("GLYPHWARP_NESTED_BUILD", "1")
            .status();

        match status {
            Ok(st) if !st.success() => println!("cargo:warning=wasm-pack build failed"),
            Ok(_) => {}
            Err(_) => println!("cargo:warning=wasm-pack not installed – skipping"),
        }
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let options = CopyOptions::new().overwrite(true).content_only(true);
        if let Err(err) = copy(static_dir, out_dir, &options) {
            println!("cargo:warning=failed to copy static/ into dist/: {err}");
        }
    }
}
