use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    // Capture the compiler version so snapshots can report the
    // toolchain the binary was built with.
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(rustc).arg("--version").output();

    let version = match output {
        Ok(o) if o.status.success() => {
            let raw = String::from_utf8(o.stdout)
                .unwrap_or_default()
                .trim()
                .to_string();

            // Strip the "rustc " prefix (e.g. "rustc 1.85.0 (...)" -> "1.85.0 (...)")
            raw.strip_prefix("rustc ").unwrap_or(&raw).to_string()
        }
        _ => "unknown".to_string(),
    };

    println!("cargo:rustc-env=SHARK_RUSTC_VERSION={}", version);
}
