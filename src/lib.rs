#![allow(dead_code, unused, unused_variables, unused_imports, unused_comparisons)]
pub mod instruction;
pub mod report;

use wasm_bindgen::prelude::*;
use crate::instruction::{decode, Instruction};

#[wasm_bindgen]
pub struct OpcodeTable {
    instructions: Vec<Instruction>,
}

#[wasm_bindgen]
impl OpcodeTable {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    pub fn load(&mut self, bytes: &[u8]) -> Result<(), JsError> {
        self.instructions = decode(bytes)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn name(&self, index: usize) -> String {
        self.instructions
            .get(index)
            .map(|i| i.name.clone())
            .unwrap_or_default()
    }

    pub fn description(&self, index: usize) -> String {
        self.instructions
            .get(index)
            .map(|i| i.description.clone())
            .unwrap_or_default()
    }

    pub fn listing(&self) -> String {
        report::listing(&self.instructions)
    }
}
