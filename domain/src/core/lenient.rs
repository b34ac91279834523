//! Lenient number decoding for client payloads.
//!
//! Browser forms post every value as a string, so integer fields accept
//! either a JSON number or a string holding one. Use with
//! `#[serde(deserialize_with = "...")]`.

use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;
use std::marker::PhantomData;

struct IntVisitor<T>(PhantomData<T>);

impl<T> IntVisitor<T> {
    fn new() -> Self {
        Self(PhantomData)
    }
}

impl<'de, T> Visitor<'de> for IntVisitor<T>
where
    T: TryFrom<i64>,
    T::Error: fmt::Display,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        T::try_from(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        let v = i64::try_from(v).map_err(E::custom)?;
        self.visit_i64(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        let v: i64 = v.trim().parse().map_err(E::custom)?;
        self.visit_i64(v)
    }
}

struct OptionalIntVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for OptionalIntVisitor<T>
where
    T: TryFrom<i64>,
    T::Error: fmt::Display,
{
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("null, number or numeric string")
    }

    fn visit_none<E: de::Error>(self) -> Result<Option<T>, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Option<T>, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Option<T>, D::Error> {
        d.deserialize_any(IntVisitor::new()).map(Some)
    }
}

/// Decode a required integer from a number or a numeric string.
pub fn int_or_string<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
    T::Error: fmt::Display,
{
    d.deserialize_any(IntVisitor::new())
}

/// Like [`int_or_string`], but `null` decodes to `None`.
///
/// Pair with `#[serde(default)]` so an absent field is `None` too.
pub fn optional_int_or_string<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
    T::Error: fmt::Display,
{
    d.deserialize_option(OptionalIntVisitor(PhantomData))
}
