//! Host-side helper: `cargo run` builds the WASM package into `static/pkg`
//! and serves the demo page from `static/`.
//!
//! The port comes from `GLYPHWARP_PORT` (default 8000).

use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

const DEFAULT_PORT: u16 = 8000;

fn port() -> u16 {
    match env::var("GLYPHWARP_PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("GLYPHWARP_PORT={raw:?} is not a port, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

fn main() {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        // build.rs would otherwise start a second wasm-pack run
        .env("GLYPHWARP_NESTED_BUILD", "1")
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure the wasm32-unknown-unknown target is installed.");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Serving whatever is already in static/pkg.");
        }
    }

    let port = port();
    println!("Serving demo at http://127.0.0.1:{port} …");
    let mut server = match Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            eprintln!("failed to start http server: {err}");
            std::process::exit(1);
        }
    };

    loop {
        if let Ok(Some(status)) = server.try_wait() {
            eprintln!("http server exited with {status}");
            std::process::exit(status.code().unwrap_or(1));
        }
        thread::sleep(Duration::from_secs(1));
    }
}
