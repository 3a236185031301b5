//! Encoding logical values into typed attributes and back.
//!
//! Both directions are a closed match over the supported kinds. Anything the
//! backing store would reject (empty or duplicated sets, over-deep nesting,
//! unparseable numbers) fails here instead of on the wire.

use std::collections::HashSet;
use std::hash::Hash;

use serde_json::Number;

use crate::value::{Document, Value};

use super::{CodecError, Item, Result, TypedAttribute};

/// Deepest nesting of maps and lists the backing store accepts.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Encodes a plain object into a stored item.
pub fn encode(document: &Document) -> Result<Item> {
    encode_document(document, 0)
}

/// Encodes a single logical value.
pub fn encode_value(value: &Value) -> Result<TypedAttribute> {
    encode_at_depth(value, 0)
}

fn encode_document(document: &Document, depth: usize) -> Result<Item> {
    document
        .iter()
        .map(|(name, value)| Ok((name.clone(), encode_at_depth(value, depth)?)))
        .collect()
}

fn encode_at_depth(value: &Value, depth: usize) -> Result<TypedAttribute> {
    if depth > MAX_NESTING_DEPTH {
        return Err(CodecError::Encoding(format!(
            "value is nested deeper than {MAX_NESTING_DEPTH} levels"
        )));
    }

    match value {
        Value::Null => Ok(TypedAttribute::Null(true)),
        Value::Bool(b) => Ok(TypedAttribute::Boolean(*b)),
        Value::Number(n) => encode_number(n).map(TypedAttribute::Number),
        Value::String(s) => Ok(TypedAttribute::String(s.clone())),
        Value::Binary(bytes) => Ok(TypedAttribute::Binary(bytes.clone())),
        Value::List(items) => items
            .iter()
            .map(|item| encode_at_depth(item, depth + 1))
            .collect::<Result<Vec<_>>>()
            .map(TypedAttribute::List),
        Value::Map(map) => encode_document(map, depth + 1).map(TypedAttribute::Map),
        Value::StringSet(members) => {
            check_set("string", members)?;
            Ok(TypedAttribute::StringSet(members.clone()))
        }
        Value::NumberSet(members) => {
            let encoded = members
                .iter()
                .map(encode_number)
                .collect::<Result<Vec<_>>>()?;
            check_set("number", &encoded)?;
            Ok(TypedAttribute::NumberSet(encoded))
        }
        Value::BinarySet(members) => {
            check_set("binary", members)?;
            Ok(TypedAttribute::BinarySet(members.clone()))
        }
    }
}

fn encode_number(n: &Number) -> Result<String> {
    let text = n.to_string();
    canonical_number(&text).ok_or_else(|| {
        CodecError::Encoding(format!(
            "number `{text}` is outside the range the backing store accepts"
        ))
    })
}

/// Canonical text of a number, as the backing store keeps it.
///
/// Numbers compare by value there: `2.0`, `2` and `2E+0` are the same number
/// and are stored as `2`. Plain decimal notation, no sign on zero, no
/// leading or trailing zeros. Returns `None` if `n` is not a decimal number
/// with at most 38 significant digits and a magnitude between `1E-130` and
/// `1E+126`.
pub fn canonical_number(n: &str) -> Option<String> {
    let (negative, unsigned) = match n.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, n.strip_prefix('+').unwrap_or(n)),
    };

    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().ok()?),
        None => (unsigned, 0),
    };

    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction)
    {
        return None;
    }

    let digits = format!("{integer}{fraction}");
    let significant = digits.trim_start_matches('0');
    // Position of the decimal point relative to the first significant digit.
    let point = integer.len() as i64 + exponent - (digits.len() - significant.len()) as i64;
    let significant = significant.trim_end_matches('0');

    if significant.is_empty() {
        return Some("0".to_string());
    }
    if significant.len() > 38 || !(-129..=126).contains(&point) {
        return None;
    }

    let len = significant.len() as i64;
    let body = if point <= 0 {
        format!("0.{}{significant}", "0".repeat(point.unsigned_abs() as usize))
    } else if point >= len {
        format!("{significant}{}", "0".repeat((point - len) as usize))
    } else {
        let (whole, decimals) = significant.split_at(point as usize);
        format!("{whole}.{decimals}")
    };

    Some(if negative { format!("-{body}") } else { body })
}

fn check_set<T: Eq + Hash>(kind: &str, members: &[T]) -> Result<()> {
    if members.is_empty() {
        return Err(CodecError::Encoding(format!(
            "{kind} set must not be empty"
        )));
    }

    let mut seen = HashSet::with_capacity(members.len());
    if !members.iter().all(|member| seen.insert(member)) {
        return Err(CodecError::Encoding(format!(
            "{kind} set contains duplicate members"
        )));
    }

    Ok(())
}

/// Decodes a stored item back into a plain object.
pub fn decode(item: Item) -> Result<Document> {
    item.into_iter()
        .map(|(name, attribute)| Ok((name, decode_attribute(attribute)?)))
        .collect()
}

/// Decodes a single typed attribute.
pub fn decode_attribute(attribute: TypedAttribute) -> Result<Value> {
    match attribute {
        TypedAttribute::String(s) => Ok(Value::String(s)),
        TypedAttribute::Number(n) => parse_number(&n).map(Value::Number),
        TypedAttribute::Binary(bytes) => Ok(Value::Binary(bytes)),
        TypedAttribute::Boolean(b) => Ok(Value::Bool(b)),
        TypedAttribute::Null(_) => Ok(Value::Null),
        TypedAttribute::Map(map) => decode(map).map(Value::Map),
        TypedAttribute::List(items) => items
            .into_iter()
            .map(decode_attribute)
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        TypedAttribute::StringSet(members) => Ok(Value::StringSet(members)),
        TypedAttribute::NumberSet(members) => members
            .iter()
            .map(|n| parse_number(n))
            .collect::<Result<Vec<_>>>()
            .map(Value::NumberSet),
        TypedAttribute::BinarySet(members) => Ok(Value::BinarySet(members)),
    }
}

/// Parses a decimal string from the wire.
///
/// Integers that fit in 64 bits stay exact; anything else goes through `f64`.
pub fn parse_number(n: &str) -> Result<Number> {
    serde_json::from_str::<Number>(n)
        .map_err(|_| CodecError::Decoding(format!("invalid number `{n}`")))
}
