//! Put the linker script on the search path and link the firmware
//! with it, along with defmt's.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let out = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Put `link.x` in our output directory and ensure it's
    // on the linker search path.
    fs::write(out.join("link.x"), include_bytes!("link.x")).unwrap();
    println!("cargo:rustc-link-search={}", out.display());

    // Only re-run when the linker script changes.
    println!("cargo:rerun-if-changed=link.x");

    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
