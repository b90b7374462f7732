use crate::{
    error::{Malformed, Result},
    schema::{Field, Schema},
};

/// Columns kept from the raw line: everything up to and including `SP:xx`.
pub const ECHO_WIDTH: usize = 73;

/// Echoes the raw line cut after the registers, with its cycle digits
/// re-appended as written. Nothing but `CYC:` is looked at.
pub fn truncate_with_cycle(raw: &str) -> Result<String> {
    let fields = Schema::CYCLE_ONLY.extract(raw)?;
    let cycle = fields.text(Field::Cycle)?;

    if raw.len() < ECHO_WIDTH {
        return Err(Malformed::TooShort { len: raw.len(), needed: ECHO_WIDTH }.into());
    }

    let head = raw
        .get(..ECHO_WIDTH)
        .ok_or(Malformed::NotText { start: 0, end: ECHO_WIDTH })?;

    Ok(format!("{head} CYC:{cycle}"))
}
