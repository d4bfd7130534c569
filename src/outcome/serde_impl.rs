//! Serde support for outcomes.
//!
//! Both shapes serialize as a record
//! `{ "succeeded": bool, "value": T?, "kind": ErrorKind, "errors": [Error] }`
//! (`value` only for [`ValueOutcome`], and only on success). Deserialization
//! re-checks every outcome invariant, so a record cannot smuggle in an
//! inconsistent state. A present `value` field counts as a value even when it
//! is `null`, so `ValueOutcome<()>` and `ValueOutcome<Option<U>>` round-trip.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Failure, UnitOutcome, ValueOutcome};
use crate::error::{Error, ErrorKind};

#[derive(Serialize)]
struct RecordRef<'a, T> {
    succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a T>,
    kind: ErrorKind,
    errors: &'a [Error],
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Record<T> {
    succeeded: bool,
    // `Some` whenever the field is present, even as `null`.
    #[serde(default, deserialize_with = "deserialize_present")]
    value: Option<T>,
    kind: ErrorKind,
    #[serde(default)]
    errors: Vec<Error>,
}

#[derive(Serialize)]
struct UnitRecordRef<'a> {
    succeeded: bool,
    kind: ErrorKind,
    errors: &'a [Error],
}

#[derive(Deserialize)]
struct UnitRecord {
    succeeded: bool,
    kind: ErrorKind,
    #[serde(default)]
    errors: Vec<Error>,
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn restore_failure<E: serde::de::Error>(kind: ErrorKind, errors: Vec<Error>) -> Result<Failure, E> {
    Failure::new(kind, errors).map_err(E::custom)
}

fn check_success<E: serde::de::Error>(kind: ErrorKind, errors: &[Error]) -> Result<(), E> {
    if kind.is_failure() || !errors.is_empty() {
        return Err(E::custom(
            "a successful outcome must have kind None and no errors",
        ));
    }
    Ok(())
}

impl Serialize for UnitOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        UnitRecordRef {
            succeeded: self.is_success(),
            kind: self.kind(),
            errors: self.errors(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UnitOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = UnitRecord::deserialize(deserializer)?;
        if record.succeeded {
            check_success(record.kind, &record.errors)?;
            Ok(Self::success())
        } else {
            restore_failure(record.kind, record.errors).map(Self::from_failure)
        }
    }
}

impl<T: Serialize> Serialize for ValueOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RecordRef {
            succeeded: self.is_success(),
            value: self.value(),
            kind: self.kind(),
            errors: self.errors(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ValueOutcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = Record::<T>::deserialize(deserializer)?;
        if record.succeeded {
            check_success(record.kind, &record.errors)?;
            record
                .value
                .map(Self::success)
                .ok_or_else(|| D::Error::custom("a successful outcome requires a value"))
        } else if record.value.is_some() {
            Err(D::Error::custom("a failing outcome cannot carry a value"))
        } else {
            restore_failure(record.kind, record.errors).map(Self::from_failure)
        }
    }
}
