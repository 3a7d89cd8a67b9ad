use crate::{Error, Result, numeric};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKey {
    Fibonacci,
    Prime,
    Lcm,
    Hcf,
    Ai,
}

impl OperationKey {
    pub const ALL: [OperationKey; 5] = [
        OperationKey::Fibonacci,
        OperationKey::Prime,
        OperationKey::Lcm,
        OperationKey::Hcf,
        OperationKey::Ai,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fibonacci => "fibonacci",
            Self::Prime => "prime",
            Self::Lcm => "lcm",
            Self::Hcf => "hcf",
            Self::Ai => "AI",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request body that passed shape and type validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Fibonacci(i64),
    Prime(Vec<Value>),
    Lcm(Vec<i64>),
    Hcf(Vec<i64>),
    Ai(String),
}

impl Operation {
    /// Validates a decoded request body. The body must be an object holding
    /// exactly one field, and that field must be a recognized key.
    pub fn parse(body: &Value) -> Result<Self> {
        let fields = body.as_object().ok_or(Error::InvalidRequestShape)?;

        if fields.len() != 1 {
            return Err(Error::InvalidRequestShape);
        }

        let (key, value) = fields
            .iter()
            .next()
            .ok_or(Error::InvalidRequestShape)?;
        let key = OperationKey::from_key(key).ok_or(Error::InvalidRequestShape)?;

        match key {
            OperationKey::Fibonacci => match numeric::as_integer(value) {
                Some(n) => Ok(Self::Fibonacci(n)),
                None if is_wide_integer(value) => {
                    if value.as_f64().is_some_and(|f| f < 0.0) {
                        Err(Error::invalid_input(numeric::NEGATIVE_COUNT_MESSAGE))
                    } else {
                        Err(Error::overflow(format!("fibonacci input {value} is too large")))
                    }
                }
                None => Err(Error::invalid_type("fibonacci input must be an integer")),
            },
            OperationKey::Prime => value
                .as_array()
                .map(|values| Self::Prime(values.clone()))
                .ok_or_else(|| Error::invalid_type("prime input must be an array")),
            OperationKey::Lcm => integer_list(key, value).map(Self::Lcm),
            OperationKey::Hcf => integer_list(key, value).map(Self::Hcf),
            OperationKey::Ai => value
                .as_str()
                .map(|prompt| Self::Ai(prompt.to_string()))
                .ok_or_else(|| Error::invalid_type("AI input must be a string")),
        }
    }

    pub fn key(&self) -> OperationKey {
        match self {
            Self::Fibonacci(_) => OperationKey::Fibonacci,
            Self::Prime(_) => OperationKey::Prime,
            Self::Lcm(_) => OperationKey::Lcm,
            Self::Hcf(_) => OperationKey::Hcf,
            Self::Ai(_) => OperationKey::Ai,
        }
    }
}

fn integer_list(key: OperationKey, value: &Value) -> Result<Vec<i64>> {
    let values = value
        .as_array()
        .filter(|values| !values.is_empty())
        .ok_or_else(|| Error::invalid_type(format!("{key} input must be a non-empty array")))?;

    values
        .iter()
        .map(|value| match numeric::as_integer(value) {
            Some(n) => Ok(n),
            None if is_wide_integer(value) => Err(Error::overflow(format!(
                "{key} input {value} does not fit in 64 bits"
            ))),
            None => Err(Error::invalid_type(format!(
                "{key} input must contain only integers"
            ))),
        })
        .collect()
}

/// An integral JSON number that does not fit in `i64`.
fn is_wide_integer(value: &Value) -> bool {
    numeric::as_integer(value).is_none() && value.as_f64().is_some_and(|f| f.fract() == 0.0)
}

/// Result payload placed under `data` in a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OperationOutput {
    Series(Vec<u64>),
    Primes(Vec<i64>),
    Value(u64),
    Word(String),
}
