use crate::{
    error::{Error, Result},
    schema::{Field, Schema},
};
use std::str::FromStr;

/// CPU state captured by one nestest log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    pub program_counter: u16,
    pub opcode: u8,
    pub mnemonic: String,
    pub accumulator: u8,
    pub x_index: u8,
    pub y_index: u8,
    pub stack_pointer: u8,
    pub status_flags: u8,
    pub cycle: u64,
}

pub fn parse(line: &str) -> Result<TraceRecord> {
    line.parse()
}

impl FromStr for TraceRecord {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let fields = Schema::NESTEST.extract(line)?;

        Ok(Self {
            program_counter: fields.hex(Field::ProgramCounter)?,
            opcode: fields.hex(Field::Opcode)?,
            mnemonic: fields.text(Field::Mnemonic)?.to_owned(),
            accumulator: fields.hex(Field::Accumulator)?,
            x_index: fields.hex(Field::XIndex)?,
            y_index: fields.hex(Field::YIndex)?,
            stack_pointer: fields.hex(Field::StackPointer)?,
            status_flags: fields.hex(Field::StatusFlags)?,
            cycle: fields.decimal(Field::Cycle)?,
        })
    }
}
