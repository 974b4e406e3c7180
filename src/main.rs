//! Host-side helper: `cargo run` packs the wasm module into `static/pkg` and
//! serves `static/` locally so the page can be opened in a browser.

use std::env;
use std::process::{self, Command, ExitStatus, Stdio};

const DEFAULT_PORT: u16 = 8000;

fn port() -> u16 {
    env::var("FX_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn pack() -> std::io::Result<ExitStatus> {
    Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
}

fn main() {
    println!("Packing wasm module …");
    match pack() {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors.");
            process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH; serving whatever is already in static/pkg.");
        }
    }

    let port = port();
    println!("Serving static/ at http://127.0.0.1:{port} (Ctrl-C to stop)");
    let status = Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .stdout(Stdio::null())
        .status();

    match status {
        Ok(st) if st.success() => {}
        Ok(st) => {
            eprintln!("http server exited with {st}");
            process::exit(st.code().unwrap_or(1));
        }
        Err(e) => {
            eprintln!("could not start python3 http.server: {e}");
            process::exit(1);
        }
    }
}
