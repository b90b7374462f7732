use crate::error::Malformed;
use nom::{
    IResult,
    bytes::complete::take_while_m_n,
    character::complete::{digit1, hex_digit1, satisfy},
    combinator::{all_consuming, not},
    sequence::terminated,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ProgramCounter,
    Opcode,
    Mnemonic,
    Accumulator,
    XIndex,
    YIndex,
    StatusFlags,
    StackPointer,
    Cycle,
}

impl Field {
    const COUNT: usize = 9;
}

/// Shape of the digits following a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Exactly this many hexadecimal digits.
    Hex(usize),
    /// One or more decimal digits.
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Byte range `start..end` of the line.
    Offset { start: usize, end: usize },
    /// Digits right after `label`, which must start a token.
    Label { label: &'static str, value: Value },
}

/// A line format described as data: which field comes from where.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    rules: &'static [(Field, Rule)],
}

impl Schema {
    // C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 21 CYC:7
    // 0     6         16                              48   53   58   63   68        78       87
    pub const NESTEST: Self = Self {
        rules: &[
            (Field::ProgramCounter, Rule::Offset { start: 0, end: 4 }),
            (Field::Opcode, Rule::Offset { start: 6, end: 8 }),
            (Field::Mnemonic, Rule::Offset { start: 16, end: 19 }),
            (Field::Accumulator, Rule::Label { label: "A:", value: Value::Hex(2) }),
            (Field::XIndex, Rule::Label { label: "X:", value: Value::Hex(2) }),
            (Field::YIndex, Rule::Label { label: "Y:", value: Value::Hex(2) }),
            (Field::StatusFlags, Rule::Label { label: "P:", value: Value::Hex(2) }),
            (Field::StackPointer, Rule::Label { label: "SP:", value: Value::Hex(2) }),
            (Field::Cycle, Rule::Label { label: "CYC:", value: Value::Decimal }),
        ],
    };

    pub const CYCLE_ONLY: Self = Self {
        rules: &[(Field::Cycle, Rule::Label { label: "CYC:", value: Value::Decimal })],
    };

    pub fn extract<'a>(&self, line: &'a str) -> Result<Fields<'a>, Malformed> {
        let mut fields = Fields::default();

        for &(field, rule) in self.rules {
            let text = match rule {
                Rule::Offset { start, end } => slice(line, start, end)?,
                Rule::Label { label, value } => labeled(line, field, label, value)?,
            };

            fields.values[field as usize] = Some(text);
        }

        Ok(fields)
    }
}

/// Raw text captured by [`Schema::extract`], borrowed from the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fields<'a> {
    values: [Option<&'a str>; Field::COUNT],
}

impl<'a> Fields<'a> {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'a str> {
        self.values[field as usize]
    }

    pub fn text(&self, field: Field) -> Result<&'a str, Malformed> {
        self.get(field).ok_or(Malformed::MissingField { field })
    }

    pub fn hex<T: TryFrom<u64>>(&self, field: Field) -> Result<T, Malformed> {
        self.number(field, 16, hex_digits)
    }

    pub fn decimal<T: TryFrom<u64>>(&self, field: Field) -> Result<T, Malformed> {
        self.number(field, 10, decimal_digits)
    }

    fn number<T: TryFrom<u64>>(
        &self,
        field: Field,
        radix: u32,
        digits: fn(&str) -> IResult<&str, &str>,
    ) -> Result<T, Malformed> {
        let text = self.text(field)?;

        if digits(text).is_err() {
            return Err(Malformed::InvalidValue { field, value: text.to_owned() });
        }

        let out_of_range = || Malformed::OutOfRange { field, value: text.to_owned() };

        u64::from_str_radix(text, radix)
            .map_err(|_| out_of_range())
            .and_then(|n| T::try_from(n).map_err(|_| out_of_range()))
    }
}

fn hex_digits(i: &str) -> IResult<&str, &str> {
    all_consuming(hex_digit1)(i)
}

fn decimal_digits(i: &str) -> IResult<&str, &str> {
    all_consuming(digit1)(i)
}

fn slice(line: &str, start: usize, end: usize) -> Result<&str, Malformed> {
    if line.len() < end {
        return Err(Malformed::TooShort { len: line.len(), needed: end });
    }

    line.get(start..end).ok_or(Malformed::NotText { start, end })
}

fn labeled<'a>(
    line: &'a str,
    field: Field,
    label: &'static str,
    value: Value,
) -> Result<&'a str, Malformed> {
    let mut found = None;

    for (idx, _) in line.match_indices(label) {
        if !starts_token(line, idx) {
            continue;
        }

        if found.is_some() {
            return Err(Malformed::DuplicateLabel { label });
        }

        found = Some(idx);
    }

    let idx = found.ok_or(Malformed::MissingLabel { label })?;
    let rest = &line[idx + label.len()..];

    match digits(value, rest) {
        Ok((_, digits)) => Ok(digits),
        Err(_) => Err(Malformed::InvalidValue {
            field,
            value: rest.split_whitespace().next().unwrap_or_default().to_owned(),
        }),
    }
}

// `P:` must not match the tail of `SP:`.
fn starts_token(line: &str, idx: usize) -> bool {
    idx == 0 || !line.as_bytes()[idx - 1].is_ascii_alphabetic()
}

fn digits(value: Value, i: &str) -> IResult<&str, &str> {
    let is_hex = |c: char| c.is_ascii_hexdigit();

    match value {
        Value::Hex(width) => {
            terminated(take_while_m_n(width, width, is_hex), not(satisfy(is_hex)))(i)
        }
        Value::Decimal => digit1(i),
    }
}
