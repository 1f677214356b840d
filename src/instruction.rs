use std::fmt;

use serde::{Deserialize, Serialize};

/// One named opcode mnemonic (e.g. "ADC", "LDX") as described by the source
/// document. The document omits fields holding their zero value, so every
/// field except `name` defaults on decode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Instruction {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default, rename = "addressingModes")]
    pub address_modes: Vec<AddressingMode>,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub expression: String,
    #[serde(default)]
    pub assignee: String,
}

/// Effect of an instruction on each status flag. Zero means no recorded
/// effect; nonzero values are opaque effect codes interpreted by the
/// consumer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default, skip_serializing_if = "flag_unset")]
    pub overflow: i32,
    #[serde(default, skip_serializing_if = "flag_unset")]
    pub carry: i32,
    #[serde(default, skip_serializing_if = "flag_unset")]
    pub zero: i32,
    #[serde(default, skip_serializing_if = "flag_unset")]
    pub negative: i32,
    #[serde(default, skip_serializing_if = "flag_unset")]
    pub decimal: i32,
    #[serde(default, skip_serializing_if = "flag_unset")]
    pub interrupt: i32,
}

fn flag_unset(effect: &i32) -> bool {
    *effect == 0
}

/// One addressing mode supported by the owning instruction. `mode` selects
/// which of the 6502 addressing modes this entry is; the valid range is
/// owned by the consumer and not checked here. `cycle_modifier` is the
/// extra cycle cost under runtime conditions such as a page-boundary cross,
/// carried through opaquely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddressingMode {
    #[serde(default)]
    pub opcode: String,
    #[serde(default)]
    pub cycles: i32,
    #[serde(default)]
    pub mode: i32,
    #[serde(default, rename = "cycleModifier")]
    pub cycle_modifier: i32,
}

/// The input bytes could not be decoded as an instruction set document.
#[derive(Debug)]
pub enum MalformedDocumentError {
    /// Not valid JSON, wrong top-level shape, or a field holding an
    /// incompatible primitive type.
    Json(serde_json::Error),
    /// The record at `index` has no mnemonic.
    EmptyName { index: usize },
}

impl fmt::Display for MalformedDocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "malformed instruction set document: {}", e),
            Self::EmptyName { index } => write!(
                f,
                "malformed instruction set document: record {} has an empty name",
                index
            ),
        }
    }
}

impl std::error::Error for MalformedDocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::EmptyName { .. } => None,
        }
    }
}

impl From<serde_json::Error> for MalformedDocumentError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Decode a complete JSON document into its instruction records, preserving
/// document order. Unknown fields are ignored; absent optional fields take
/// their zero defaults. Fails with no partial output if the document is not
/// a sequence of records or any record lacks a name.
pub fn decode(bytes: &[u8]) -> Result<Vec<Instruction>, MalformedDocumentError> {
    let instructions: Vec<Instruction> = serde_json::from_slice(bytes)?;

    for (index, instruction) in instructions.iter().enumerate() {
        if instruction.name.is_empty() {
            return Err(MalformedDocumentError::EmptyName { index });
        }
    }

    Ok(instructions)
}

/// Encode records back to the document format. Flags with no recorded
/// effect are omitted, matching the source data's convention.
pub fn encode(instructions: &[Instruction]) -> Result<Vec<u8>, MalformedDocumentError> {
    Ok(serde_json::to_vec(instructions)?)
}
