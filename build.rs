//! Build script that writes the equality precisions as float literals.
//!
//! Each precision may be overridden by an environment variable of the same
//! name. The value ends up in `$OUT_DIR/<name>.rs` and is `include!`d where
//! the constant is declared, so rustc rounds it to the constant's type.

use std::{env, fs, path::Path};

#[allow(dead_code)]
#[path = "src/literal.rs"]
mod literal;

const PRECISIONS: &[(&str, &str)] = &[
    ("FLOAT_EQUALITY_PRECISION", "1.0e-6"),
    ("DOUBLE_EQUALITY_PRECISION", "1.0e-12"),
    ("LONG_DOUBLE_EQUALITY_PRECISION", "1.0e-18"),
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/literal.rs");

    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo");

    for (name, default) in PRECISIONS {
        println!("cargo:rerun-if-env-changed={name}");

        let value = env::var(name).unwrap_or_else(|_| default.to_string());

        let decimal = match literal::parse_decimal(&value) {
            Ok(d) => d,
            Err(e) => panic!("{name}={value:?}: {e}"),
        };

        let path = Path::new(&out_dir).join(format!("{}.rs", name.to_lowercase()));
        fs::write(&path, decimal.to_string())
            .unwrap_or_else(|e| panic!("writing {}: {e}", path.display()));
    }
}
