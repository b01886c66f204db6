//! Build script for cadence-storage.
//!
//! Embedded migrations are read at compile time, so changes must trigger a rebuild.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
