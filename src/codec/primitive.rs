//! Scalar codecs: strings, numbers and booleans.

use serde_json::Value;

use super::Codec;
use super::error::CodecError;
use super::json::json_kind;

/// Identity codec for strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

impl Codec for StringCodec {
    type Value = String;

    fn encode(&self, value: &String) -> Result<String, CodecError> {
        Ok(value.clone())
    }

    fn decode(&self, raw: &str) -> Result<String, CodecError> {
        Ok(raw.to_owned())
    }
}

/// Codec for `f64` values.
///
/// Finite numbers use Rust's shortest round-trip decimal text. The
/// non-finite values and negative zero have fixed spellings (`NaN`,
/// `Infinity`, `-Infinity`, `-0`) so that every `f64`, including the sign
/// of zero, survives a round trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberCodec;

impl Codec for NumberCodec {
    type Value = f64;

    fn encode(&self, value: &f64) -> Result<String, CodecError> {
        Ok(format_number(*value))
    }

    fn decode(&self, raw: &str) -> Result<f64, CodecError> {
        match raw {
            "NaN" => return Ok(f64::NAN),
            "Infinity" => return Ok(f64::INFINITY),
            "-Infinity" => return Ok(f64::NEG_INFINITY),
            _ => {}
        }

        let text = raw.trim();
        if !is_decimal_literal(text) {
            return Err(not_a_number(raw));
        }
        text.parse::<f64>().map_err(|_| not_a_number(raw))
    }
}

/// Digits, signs, a decimal point and an exponent marker only.
///
/// Keeps `f64::from_str`'s `inf` / `nan` spellings from being accepted.
fn is_decimal_literal(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

fn not_a_number(raw: &str) -> CodecError {
    CodecError::decode("number", format!("{raw:?} is not a number"))
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 && value.is_sign_negative() {
        // Display drops the sign of negative zero.
        "-0".to_string()
    } else {
        value.to_string()
    }
}

/// Codec for booleans, stored as the JSON literals `true` and `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanCodec;

impl Codec for BooleanCodec {
    type Value = bool;

    fn encode(&self, value: &bool) -> Result<String, CodecError> {
        Ok(value.to_string())
    }

    fn decode(&self, raw: &str) -> Result<bool, CodecError> {
        let parsed: Value = serde_json::from_str(raw)
            .map_err(|e| CodecError::decode("boolean", e.to_string()))?;

        match parsed {
            Value::Bool(value) => Ok(value),
            other => Err(CodecError::decode(
                "boolean",
                format!("expected a JSON boolean, found {}", json_kind(&other)),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_is_identity() -> Result<(), CodecError> {
        let codec = StringCodec;
        let quoted = "hello \"world\"".to_string();
        assert_eq!(codec.encode(&quoted)?, quoted);
        assert_eq!(codec.decode("")?, "");
        Ok(())
    }

    #[test]
    fn number_special_spellings() -> Result<(), CodecError> {
        let codec = NumberCodec;
        assert_eq!(codec.encode(&-0.0)?, "-0");
        assert_eq!(codec.encode(&0.0)?, "0");
        assert_eq!(codec.encode(&f64::INFINITY)?, "Infinity");
        assert_eq!(codec.encode(&f64::NEG_INFINITY)?, "-Infinity");
        assert_eq!(codec.encode(&f64::NAN)?, "NaN");
        assert_eq!(codec.encode(&100.0)?, "100");
        assert_eq!(codec.encode(&1.5)?, "1.5");
        Ok(())
    }

    #[test]
    fn number_decode() -> Result<(), CodecError> {
        let codec = NumberCodec;
        assert!(codec.decode("NaN")?.is_nan());
        assert_eq!(codec.decode("100")?, 100.0);
        assert_eq!(codec.decode(" 2.5 ")?, 2.5);
        assert_eq!(codec.decode("1e3")?, 1000.0);
        assert_eq!(codec.decode("-Infinity")?, f64::NEG_INFINITY);

        assert_eq!(codec.decode("+.5")?, 0.5);
        assert_eq!(codec.decode("1e400")?, f64::INFINITY);

        let negative_zero = codec.decode("-0")?;
        assert_eq!(negative_zero, 0.0);
        assert!(negative_zero.is_sign_negative());
        Ok(())
    }

    #[test]
    fn number_rejects_non_numeric_text() {
        let codec = NumberCodec;
        let spellings = [
            "abc",
            "",
            "nan",
            "12abc",
            "1,5",
            "inf",
            "-inf",
            "+inf",
            "infinity",
            "INFINITY",
            "+Infinity",
            " NaN ",
            " Infinity",
            "-Infinity\n",
            "NAN",
            "0x10",
            ".",
            "-",
        ];
        for raw in spellings {
            let err = codec.decode(raw);
            assert!(
                matches!(err, Err(CodecError::Decode { expected: "number", .. })),
                "{raw:?} should not decode"
            );
        }
    }

    #[test]
    fn number_safe_integer_bounds() -> Result<(), CodecError> {
        let codec = NumberCodec;
        let max_safe = 9_007_199_254_740_991.0;
        assert_eq!(codec.encode(&max_safe)?, "9007199254740991");
        assert_eq!(codec.decode(&codec.encode(&max_safe)?)?, max_safe);
        assert_eq!(codec.decode(&codec.encode(&-max_safe)?)?, -max_safe);
        Ok(())
    }

    #[test]
    fn boolean_roundtrip() -> Result<(), CodecError> {
        let codec = BooleanCodec;
        assert_eq!(codec.encode(&true)?, "true");
        assert_eq!(codec.encode(&false)?, "false");
        assert!(codec.decode("true")?);
        assert!(!codec.decode(" false ")?);
        Ok(())
    }

    #[test]
    fn boolean_rejects_other_json() {
        let codec = BooleanCodec;
        for raw in ["1", "0", "\"true\"", "[true]", "null", "True", "yes", ""] {
            assert!(codec.decode(raw).is_err(), "{raw:?} should not decode");
        }
    }
}
