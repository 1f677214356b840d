use crate::instruction::Instruction;

// Display formatting for decoded records. Pure string building; the caller
// decides where the text goes.

pub fn line(instruction: &Instruction) -> String {
    format!("{} - {}", instruction.name, instruction.description)
}

pub fn listing(instructions: &[Instruction]) -> String {
    let mut out = String::new();
    for instruction in instructions {
        out.push_str(&line(instruction));
        out.push('\n');
    }
    out
}
