//! Restricted bulk assignment of named parameters.
//!
//! A `ParameterSet` declares its attribute names up front. Building one from
//! a sequence of key/value pairs copies the recognised entries in order and
//! drops everything else.

use serde::Serialize;

/// A loosely typed parameter value as it arrives from config or callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

pub trait ParameterSet: Default {
    /// Attribute names this set accepts, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Assign `value` to the declared attribute `key`.
    /// Returns false when the value has the wrong type for that attribute.
    fn set_param(&mut self, key: &str, value: ParamValue) -> bool;

    /// Current value of a declared attribute; `None` when unknown or unset.
    fn param(&self, key: &str) -> Option<ParamValue>;

    /// Build from an ordered sequence of key/value pairs. Unknown keys are
    /// ignored; a later pair for the same key overwrites an earlier one.
    fn from_params<I, K>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, ParamValue)>,
        K: AsRef<str>,
    {
        let mut set = Self::default();
        for (key, value) in params {
            let key = key.as_ref();
            if !Self::FIELDS.contains(&key) {
                tracing::trace!(key, "ignoring unknown parameter");
                continue;
            }
            if !set.set_param(key, value) {
                tracing::warn!(key, "ignoring parameter with unexpected type");
            }
        }
        set
    }
}

/// Optional equipment of a lift car.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LiftOptions {
    mirror: Option<bool>,
    handrail: Option<bool>,
    #[serde(rename = "forInvalids")]
    for_invalids: Option<bool>,
}

impl LiftOptions {
    pub fn mirror(&self) -> Option<bool> {
        self.mirror
    }

    pub fn handrail(&self) -> Option<bool> {
        self.handrail
    }

    /// Wheelchair accessible.
    pub fn for_invalids(&self) -> Option<bool> {
        self.for_invalids
    }
}

impl ParameterSet for LiftOptions {
    const FIELDS: &'static [&'static str] = &["mirror", "handrail", "forInvalids"];

    fn set_param(&mut self, key: &str, value: ParamValue) -> bool {
        let Some(flag) = value.as_bool() else {
            return false;
        };
        match key {
            "mirror" => self.mirror = Some(flag),
            "handrail" => self.handrail = Some(flag),
            "forInvalids" => self.for_invalids = Some(flag),
            _ => return false,
        }
        true
    }

    fn param(&self, key: &str) -> Option<ParamValue> {
        match key {
            "mirror" => self.mirror,
            "handrail" => self.handrail,
            "forInvalids" => self.for_invalids,
            _ => None,
        }
        .map(ParamValue::Bool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_ignored() {
        let opts = LiftOptions::from_params([
            ("mirror", ParamValue::from(true)),
            ("music", ParamValue::from("jazz")),
        ]);
        assert_eq!(opts.mirror(), Some(true));
        assert_eq!(opts.param("music"), None);
    }

    #[test]
    fn unset_declared_key_reads_as_none() {
        let opts = LiftOptions::from_params([("handrail", ParamValue::from(false))]);
        assert_eq!(opts.param("handrail"), Some(ParamValue::Bool(false)));
        assert_eq!(opts.param("mirror"), None);
    }

    #[test]
    fn wrong_type_does_not_assign() {
        let opts = LiftOptions::from_params([("mirror", ParamValue::from(1_i64))]);
        assert_eq!(opts.mirror(), None);
    }

    #[test]
    fn later_pairs_win() {
        let opts = LiftOptions::from_params([
            ("forInvalids", ParamValue::from(true)),
            ("forInvalids", ParamValue::from(false)),
        ]);
        assert_eq!(opts.for_invalids(), Some(false));
    }
}
