//! Bakes `LLM_API_KEY`, `MODEL_NAME` and `CHAT_SERVICE_URL` into the WASM
//! binary. The browser has no process environment, so values come from the
//! build environment or a `.env` file (crate dir first, then workspace root).
//! The process environment wins over `.env`.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

const KEYS: [&str; 3] = ["LLM_API_KEY", "MODEL_NAME", "CHAT_SERVICE_URL"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let candidates = [manifest_dir.join(".env"), manifest_dir.join("../../.env")];

    for path in &candidates {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    let mut from_file = HashMap::new();
    if let Some(path) = candidates.iter().find(|p| p.exists()) {
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            from_file.insert(key, value);
        }
    }

    for key in KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
        let value = env::var(key).ok().or_else(|| from_file.get(key).cloned());
        match value {
            Some(v) if !v.contains('\n') => println!("cargo:rustc-env={}={}", key, v),
            Some(_) => println!("cargo:warning={} contains a newline and was skipped", key),
            None => {}
        }
    }

    Ok(())
}
