//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! Rules:
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace.
//! 3. Numbers must be integers. Floats are rejected so that digests never
//!    depend on float formatting.
//!
//! Key order is imposed here while writing, so the bytes do not depend on
//! how `serde_json::Map` happens to store its entries.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { path: String, raw: String },
    /// The serializer itself failed.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { path, raw } => {
                write!(f, "non-integer number in canonical JSON at {path}: {raw}")
            }
            Self::Serialize { detail } => {
                write!(f, "canonical JSON serialization failed: {detail}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64`/`u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut out = Vec::new();
    write_canonical(&mut out, value, &mut String::from("$"))?;
    Ok(out)
}

fn write_canonical(
    out: &mut Vec<u8>,
    value: &serde_json::Value,
    path: &mut String,
) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            Err(CanonError::NonIntegerNumber {
                path: path.clone(),
                raw: n.to_string(),
            })
        }
        serde_json::Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                let len = path.len();
                path.push_str(&format!("[{i}]"));
                write_canonical(out, item, path)?;
                path.truncate(len);
            }
            out.push(b']');
            Ok(())
        }
        serde_json::Value::Object(map) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            out.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                serde_json::to_writer(&mut *out, key).map_err(serialize_error)?;
                out.push(b':');
                let len = path.len();
                path.push('.');
                path.push_str(key);
                write_canonical(out, item, path)?;
                path.truncate(len);
            }
            out.push(b'}');
            Ok(())
        }
        serde_json::Value::Null
        | serde_json::Value::Bool(_)
        | serde_json::Value::Number(_)
        | serde_json::Value::String(_) => write_scalar(out, value),
    }
}

/// Strings, integers, booleans and null use serde_json's compact escaping.
fn write_scalar(out: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    serde_json::to_writer(&mut *out, value).map_err(serialize_error)
}

#[allow(clippy::needless_pass_by_value)]
fn serialize_error(e: serde_json::Error) -> CanonError {
    CanonError::Serialize {
        detail: e.to_string(),
    }
}
