#![allow(dead_code, unused, unused_variables, unused_imports, unused_comparisons)]
pub mod instruction;
pub mod report;


use std::env;
use std::fs;
use std::process;

use crate::instruction::decode;

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "6502.json".to_string());

    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            process::exit(1);
        }
    };

    let instructions = match decode(&bytes) {
        Ok(instructions) => instructions,
        Err(e) => {
            eprintln!("Failed to decode {}: {}", path, e);
            process::exit(1);
        }
    };

    print!("{}", report::listing(&instructions));
}
