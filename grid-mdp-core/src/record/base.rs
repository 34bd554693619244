//! Base implementation of records for logging.
//!
//! A [`Record`] is a set of named values produced at a step of an
//! environment or a rollout, e.g. the reward and the coordinate of the agent.

use crate::error::GridMdpError;
use std::{collections::HashMap, convert::Into};

/// Represents possible types of values that can be stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value, typically used for rewards or counters.
    Scalar(f32),

    /// A 1-dimensional array of floating-point values.
    Array1(Vec<f32>),

    /// A text value, e.g. the name of an action.
    String(String),
}

/// A container for storing key-value pairs of various data types.
///
/// # Examples
///
/// ```rust
/// use grid_mdp_core::record::{Record, RecordValue};
///
/// let mut record = Record::empty();
/// record.insert("reward", RecordValue::Scalar(-1.0));
/// record.insert("action_name", RecordValue::String("Down".to_string()));
///
/// assert_eq!(record.get_scalar("reward").unwrap(), -1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Merges another record into this one in place.
    ///
    /// Values of `record` overwrite values of `self` under the same key.
    pub fn merge_inplace(&mut self, record: Record) {
        self.0.extend(record.0);
    }

    /// Gets a scalar value from the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not exist or the value is not a scalar.
    pub fn get_scalar(&self, k: &str) -> Result<f32, GridMdpError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(GridMdpError::RecordValueTypeError("Scalar".to_string())),
            None => Err(GridMdpError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a 1-dimensional array from the record.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, GridMdpError> {
        match self.0.get(k) {
            Some(RecordValue::Array1(v)) => Ok(v.clone()),
            Some(_) => Err(GridMdpError::RecordValueTypeError("Array1".to_string())),
            None => Err(GridMdpError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a string value from the record.
    pub fn get_string(&self, k: &str) -> Result<String, GridMdpError> {
        match self.0.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(GridMdpError::RecordValueTypeError("String".to_string())),
            None => Err(GridMdpError::RecordKeyError(k.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_inplace_overwrites() {
        let mut r1 = Record::empty();
        r1.insert("reward", RecordValue::Scalar(-1.0));
        r1.insert("step", RecordValue::Scalar(0.0));
        let mut r2 = Record::empty();
        r2.insert("reward", RecordValue::Scalar(10.0));

        r1.merge_inplace(r2);
        assert_eq!(r1.get_scalar("reward").unwrap(), 10.0);
        assert_eq!(r1.get_scalar("step").unwrap(), 0.0);
    }

    #[test]
    fn test_get_errors() {
        let mut record = Record::empty();
        record.insert("action_name", RecordValue::String("Up".to_string()));
        assert_eq!(
            record.get_scalar("action_name"),
            Err(GridMdpError::RecordValueTypeError("Scalar".to_string()))
        );
        assert_eq!(
            record.get_array1("obs"),
            Err(GridMdpError::RecordKeyError("obs".to_string()))
        );
        assert_eq!(record.get_string("action_name").unwrap(), "Up");
    }
}
