// src/osm/scalar.rs
// Parser for textual magnitudes with optional unit suffixes ("25", "25m", "25 ft")
// Exists to normalize heterogeneous height/elevation tags to meters
// RELEVANT FILES:src/osm/mod.rs,src/import/rules.rs

/// Length units recognized in tag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Meters,
    Feet,
    /// No suffix, or a suffix that is not a recognized unit. Meters assumed.
    Unspecified,
}

impl Unit {
    fn from_token(token: &str) -> Unit {
        match token.to_ascii_lowercase().as_str() {
            "m" => Unit::Meters,
            "ft" | "feet" => Unit::Feet,
            _ => Unit::Unspecified,
        }
    }

    /// Conversion factor to meters.
    fn factor(self) -> f32 {
        match self {
            Unit::Meters | Unit::Unspecified => 1.0,
            Unit::Feet => 0.3048,
        }
    }
}

/// A parsed magnitude, normalized to meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar {
    pub meters: f32,
    pub unit: Unit,
}

/// Error type for scalar parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScalarError {
    #[error("no leading numeric literal in {0:?}")]
    NoLeadingNumber(String),
}

/// Parse a textual magnitude with an optional trailing unit.
///
/// The unit may follow the number directly or after whitespace. An
/// unrecognized suffix is ignored and only the leading number is used; a
/// string with no parseable leading number is a hard error reported to the
/// caller, never a silent zero.
pub fn parse_scalar(text: &str) -> Result<Scalar, ScalarError> {
    let trimmed = text.trim();
    let split = numeric_prefix_len(trimmed);
    if split == 0 {
        return Err(ScalarError::NoLeadingNumber(text.to_string()));
    }

    let value: f32 = trimmed[..split]
        .parse()
        .map_err(|_| ScalarError::NoLeadingNumber(text.to_string()))?;
    let unit = Unit::from_token(trimmed[split..].trim_start());

    Ok(Scalar {
        meters: value * unit.factor(),
        unit,
    })
}

/// Length of the leading float literal: optional sign, digits, optional
/// fractional part. Returns 0 when no digit is present.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;
    if !bytes.is_empty() && (bytes[0] == b'+' || bytes[0] == b'-') {
        end += 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut fraction_end = end + 1;
        let mut fraction_digits = 0;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
            fraction_digits += 1;
        }
        if digits > 0 || fraction_digits > 0 {
            end = fraction_end;
            digits += fraction_digits;
        }
    }
    if digits == 0 {
        0
    } else {
        end
    }
}
