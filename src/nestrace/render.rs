use crate::{
    echo,
    error::{Error, Result},
    record::{self, TraceRecord},
};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// First 73 columns of the raw line followed by ` CYC:<cycle>`.
    TruncatedWithCycle,
    /// `C<cycle> - T1; A=0x.., X=0x.., ...`
    #[default]
    VerboseSummary,
}

impl FromStr for RenderMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "truncated" | "TRUNCATED_WITH_CYCLE" => Ok(Self::TruncatedWithCycle),
            "verbose" | "VERBOSE_SUMMARY" => Ok(Self::VerboseSummary),
            other => Err(Error::UnsupportedMode(other.to_owned())),
        }
    }
}

impl Display for RenderMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::TruncatedWithCycle => f.write_str("truncated"),
            Self::VerboseSummary => f.write_str("verbose"),
        }
    }
}

pub struct Summary<'a>(pub &'a TraceRecord);

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let record = self.0;

        write!(
            f,
            "C{cyc} - T1; A=0x{a:02X}, X=0x{x:02X}, Y=0x{y:02X}, PC=0x{pc:04X}, \
             SP=0x{sp:02X}, IR=0x{op:02X}({label}), S=0x{p:02X}",
            cyc = record.cycle,
            a = record.accumulator,
            x = record.x_index,
            y = record.y_index,
            pc = record.program_counter,
            sp = record.stack_pointer,
            op = record.opcode,
            label = record.mnemonic,
            p = record.status_flags,
        )
    }
}

/// Renders an already parsed record. A record no longer carries its raw
/// text, so [`RenderMode::TruncatedWithCycle`] goes through [`render_line`].
pub fn render(record: &TraceRecord, mode: RenderMode) -> Result<String> {
    match mode {
        RenderMode::VerboseSummary => Ok(Summary(record).to_string()),
        RenderMode::TruncatedWithCycle => Err(Error::TruncationUnavailable),
    }
}

pub fn render_line(raw: &str, mode: RenderMode) -> Result<String> {
    match mode {
        RenderMode::VerboseSummary => render(&record::parse(raw)?, mode),
        RenderMode::TruncatedWithCycle => echo::truncate_with_cycle(raw),
    }
}
