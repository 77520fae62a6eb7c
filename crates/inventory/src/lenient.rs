//! Tolerant decoding for numeric fields written by the document store.
//!
//! Records arrive from an external store that does not enforce a schema, so a
//! quantity may show up as a string, a float, `null`, or even a nested value.
//! Anything that cannot be read as a number decodes to zero instead of failing
//! the whole snapshot.

use core::fmt;

use serde::Deserializer;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use tracing::warn;

/// Decode an integer count (stock on hand, units sold).
pub(crate) fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntegerVisitor)
}

/// Decode a non-integral amount (unit price).
pub(crate) fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AmountVisitor)
}

struct IntegerVisitor;

impl<'de> Visitor<'de> for IntegerVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, a numeric string, or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        Ok(i64::try_from(v).unwrap_or(i64::MAX))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        if v.is_finite() {
            Ok(v.trunc() as i64)
        } else {
            warn!(value = v, "non-finite count normalized to 0");
            Ok(0)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        let v = v.trim();
        if let Ok(n) = v.parse::<i64>() {
            return Ok(n);
        }
        match v.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n.trunc() as i64),
            _ => {
                warn!(value = v, "non-numeric count normalized to 0");
                Ok(0)
            }
        }
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<i64, A::Error> {
        skip_seq(seq)?;
        warn!("list-valued count normalized to 0");
        Ok(0)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<i64, A::Error> {
        skip_map(map)?;
        warn!("object-valued count normalized to 0");
        Ok(0)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<i64, E> {
        warn!(value = v, "boolean count normalized to 0");
        Ok(0)
    }

    fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<i64, E> {
        Ok(0)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a numeric string, or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        if v.is_finite() {
            Ok(v)
        } else {
            warn!(value = v, "non-finite amount normalized to 0");
            Ok(0.0)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        match v.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => {
                warn!(value = v, "non-numeric amount normalized to 0");
                Ok(0.0)
            }
        }
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<f64, A::Error> {
        skip_seq(seq)?;
        warn!("list-valued amount normalized to 0");
        Ok(0.0)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<f64, A::Error> {
        skip_map(map)?;
        warn!("object-valued amount normalized to 0");
        Ok(0.0)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<f64, E> {
        warn!(value = v, "boolean amount normalized to 0");
        Ok(0.0)
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }
}

fn skip_seq<'de, A: SeqAccess<'de>>(mut seq: A) -> Result<(), A::Error> {
    while seq.next_element::<IgnoredAny>()?.is_some() {}
    Ok(())
}

fn skip_map<'de, A: MapAccess<'de>>(mut map: A) -> Result<(), A::Error> {
    while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "super::integer")]
        count: i64,
        #[serde(default, deserialize_with = "super::amount")]
        price: f64,
    }

    fn record(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn fractional_numeric_strings_truncate() {
        assert_eq!(record(r#"{"count":"12.0"}"#).count, 12);
        assert_eq!(record(r#"{"count":" 7.9 "}"#).count, 7);
        assert_eq!(record(r#"{"count":"1e2"}"#).count, 100);
        assert_eq!(record(r#"{"count":"NaN"}"#).count, 0);
    }

    #[test]
    fn nested_values_decode_to_zero() {
        let r = record(r#"{"count":{"v":3,"w":[1,2]},"price":[1.5,{"x":null}]}"#);
        assert_eq!(r.count, 0);
        assert_eq!(r.price, 0.0);

        let r = record(r#"{"count":[],"price":{}}"#);
        assert_eq!(r.count, 0);
        assert_eq!(r.price, 0.0);
    }
}
