//! SQL data type names used as CAST targets.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// SQL data types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataType {
    // Integer types
    Smallint,
    Integer,
    Bigint,

    // Floating point
    Real,
    Double,
    /// Decimal with optional precision and scale.
    Decimal {
        precision: Option<u16>,
        scale: Option<u16>,
    },
    /// Numeric (alias for Decimal).
    Numeric {
        precision: Option<u16>,
        scale: Option<u16>,
    },

    // String types
    Char(Option<u32>),
    Varchar(Option<u32>),
    Text,

    // Binary types
    Blob,
    Varbinary(Option<u32>),

    // Date/time types
    Date,
    Time,
    Timestamp,
    Interval,

    // Other
    Boolean,
    Json,
    Uuid,
    /// `type[]`
    Array(Box<DataType>),

    /// Anything else, written verbatim (`varchar2(10 char)`, `signed integer`).
    Custom(String),
}

fn write_with_precision(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    precision: Option<u16>,
    scale: Option<u16>,
) -> fmt::Result {
    match (precision, scale) {
        (Some(p), Some(s)) => write!(f, "{name}({p}, {s})"),
        (Some(p), None) => write!(f, "{name}({p})"),
        _ => f.write_str(name),
    }
}

fn write_with_length(f: &mut fmt::Formatter<'_>, name: &str, len: Option<u32>) -> fmt::Result {
    match len {
        Some(n) => write!(f, "{name}({n})"),
        None => f.write_str(name),
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smallint => f.write_str("SMALLINT"),
            Self::Integer => f.write_str("INTEGER"),
            Self::Bigint => f.write_str("BIGINT"),
            Self::Real => f.write_str("REAL"),
            Self::Double => f.write_str("DOUBLE PRECISION"),
            Self::Decimal { precision, scale } => {
                write_with_precision(f, "DECIMAL", *precision, *scale)
            }
            Self::Numeric { precision, scale } => {
                write_with_precision(f, "NUMERIC", *precision, *scale)
            }
            Self::Char(len) => write_with_length(f, "CHAR", *len),
            Self::Varchar(len) => write_with_length(f, "VARCHAR", *len),
            Self::Text => f.write_str("TEXT"),
            Self::Blob => f.write_str("BLOB"),
            Self::Varbinary(len) => write_with_length(f, "VARBINARY", *len),
            Self::Date => f.write_str("DATE"),
            Self::Time => f.write_str("TIME"),
            Self::Timestamp => f.write_str("TIMESTAMP"),
            Self::Interval => f.write_str("INTERVAL"),
            Self::Boolean => f.write_str("BOOLEAN"),
            Self::Json => f.write_str("JSON"),
            Self::Uuid => f.write_str("UUID"),
            Self::Array(inner) => write!(f, "{inner}[]"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}
