//! Recovery of profiles saved by earlier sessions or older app versions.
//!
//! Stored profiles are untrusted: fields may be missing, renamed, or hold a
//! value of the wrong type. [`sanitize_stored_profile`] keeps every field
//! that still fits the current shape and falls back to the default for the
//! rest, so a stale save never blocks a new screening.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::models::profile::{PatientProfile, Relationship, STICKS_PER_PACK};

/// Legacy field written before smoking was captured in sticks.
const LEGACY_PACKS_PER_DAY: &str = "smokingPacksPerDay";
const STICKS_PER_DAY: &str = "smokingSticksPerDay";
const AGE: &str = "age";
const FAMILY_HISTORY: &str = "familyHistory";

/// Rebuild a [`PatientProfile`] from a stored JSON value.
///
/// Only keys that exist on the current profile shape are considered; each
/// one is kept if it deserializes on its own, otherwise the default value
/// stands. Unknown keys are dropped.
pub fn sanitize_stored_profile(stored: Value) -> Result<PatientProfile, CoreError> {
    let Value::Object(mut stored) = stored else {
        return Err(CoreError::NotAnObject);
    };
    repair_nested_fields(&mut stored);

    let Value::Object(defaults) = serde_json::to_value(PatientProfile::default())? else {
        return Err(CoreError::NotAnObject);
    };

    let mut merged = defaults.clone();
    for key in defaults.keys() {
        let Some(value) = stored.get(key) else {
            continue;
        };
        if field_fits(&merged, key, value) {
            merged.insert(key.clone(), value.clone());
        } else {
            tracing::debug!(field = %key, "discarding stored field with unexpected type");
        }
    }

    migrate_packs_to_sticks(&stored, &mut merged);

    Ok(serde_json::from_value(Value::Object(merged))?)
}

/// Repairs that keep a field usable instead of discarding it whole: a
/// fractional age is truncated, and family history is cleaned entry by
/// entry.
fn repair_nested_fields(stored: &mut Map<String, Value>) {
    if let Some(age) = stored.get(AGE).and_then(whole_years) {
        stored.insert(AGE.to_string(), Value::from(age));
    }

    if let Some(Value::Array(entries)) = stored.get_mut(FAMILY_HISTORY) {
        let before = entries.len();
        *entries = entries.iter().filter_map(family_history_entry).collect();
        if entries.len() < before {
            tracing::debug!(
                dropped = before - entries.len(),
                "discarding family history entries without a condition"
            );
        }
    }
}

/// A non-negative number truncated to whole years.
fn whole_years(value: &Value) -> Option<u64> {
    value
        .as_f64()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.trunc() as u64)
}

/// Keep an entry whose condition is a string. A diagnosis age that is not a
/// positive whole number, or an unrecognized relationship, becomes null.
fn family_history_entry(entry: &Value) -> Option<Value> {
    let condition = entry.get("condition")?.as_str()?;
    let age = entry
        .get("relativeAgeAtDiagnosis")
        .and_then(whole_years)
        .and_then(|age| u32::try_from(age).ok())
        .filter(|age| *age > 0);
    let relationship = entry
        .get("relationship")
        .filter(|v| serde_json::from_value::<Relationship>((*v).clone()).is_ok())
        .cloned();

    Some(serde_json::json!({
        "condition": condition,
        "relativeAgeAtDiagnosis": age,
        "relationship": relationship,
    }))
}

/// Whether `value` can stand in for `key` without breaking deserialization.
fn field_fits(base: &Map<String, Value>, key: &str, value: &Value) -> bool {
    let mut candidate = base.clone();
    candidate.insert(key.to_string(), value.clone());
    serde_json::from_value::<PatientProfile>(Value::Object(candidate)).is_ok()
}

/// Older saves recorded packs per day. Convert when no stick count was saved.
fn migrate_packs_to_sticks(stored: &Map<String, Value>, merged: &mut Map<String, Value>) {
    let Some(packs) = stored.get(LEGACY_PACKS_PER_DAY).and_then(Value::as_f64) else {
        return;
    };

    let has_sticks = stored
        .get(STICKS_PER_DAY)
        .and_then(Value::as_f64)
        .is_some_and(|sticks| sticks != 0.0);
    if has_sticks {
        return;
    }

    let sticks = packs * STICKS_PER_PACK;
    if let Some(number) = serde_json::Number::from_f64(sticks) {
        merged.insert(STICKS_PER_DAY.to_string(), Value::Number(number));
        tracing::info!(packs, sticks, "migrated legacy packs-per-day to sticks-per-day");
    }
}
