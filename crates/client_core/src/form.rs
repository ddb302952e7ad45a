//! Eight-field input form: text state, per-field validation and demo fill.

use std::{collections::BTreeMap, fmt};

use shared::domain::{FeatureField, FeatureInput, FeatureRange};

use crate::demo::{DemoPreset, DemoSampleSets};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldError {
    Required,
    NotANumber,
    OutOfRange(FeatureRange),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => f.write_str("This field is required"),
            FieldError::NotANumber => f.write_str("Must be a valid number"),
            FieldError::OutOfRange(range) => {
                write!(f, "Must be between {} and {}", range.min, range.max)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<FeatureField, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FeatureField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: FeatureField) -> Option<String> {
        self.get(field).map(|err| err.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureField, FieldError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }

    fn insert(&mut self, field: FeatureField, err: FieldError) {
        self.0.insert(field, err);
    }

    fn remove(&mut self, field: FeatureField) -> bool {
        self.0.remove(&field).is_some()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Parses one field's text. `"0"` is a value, not an empty field.
pub fn parse_field(field: FeatureField, text: &str) -> Result<f64, FieldError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }

    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(FieldError::NotANumber)?;

    let range = field.range();
    if !range.contains(value) {
        return Err(FieldError::OutOfRange(range));
    }

    Ok(value)
}

#[derive(Debug, Clone, Default)]
pub struct PredictionForm {
    values: [String; 8],
    errors: ValidationErrors,
    demo: DemoSampleSets,
}

impl PredictionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FeatureField) -> &str {
        &self.values[field.index()]
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Updates one field and drops that field's error; other errors stay.
    pub fn set_value(&mut self, field: FeatureField, text: impl Into<String>) {
        self.values[field.index()] = text.into();
        self.errors.remove(field);
    }

    fn parse_all(&self) -> (FeatureInput, ValidationErrors) {
        let mut features = FeatureInput::default();
        let mut errors = ValidationErrors::default();
        for field in FeatureField::ALL {
            match parse_field(field, self.value(field)) {
                Ok(value) => features.set(field, value),
                Err(err) => errors.insert(field, err),
            }
        }
        (features, errors)
    }

    pub fn validate(&mut self) -> &ValidationErrors {
        self.errors = self.parse_all().1;
        &self.errors
    }

    /// Yields the numeric feature vector only when every field is valid.
    pub fn submit(&mut self) -> Result<FeatureInput, ValidationErrors> {
        let (features, errors) = self.parse_all();
        self.errors = errors;
        if self.errors.is_empty() {
            Ok(features)
        } else {
            Err(self.errors.clone())
        }
    }

    /// Overwrites every field with the preset's next sample and clears all errors.
    pub fn load_demo(&mut self, preset: DemoPreset) {
        let sample = self.demo.next_sample(preset);
        for field in FeatureField::ALL {
            self.values[field.index()] = sample.value(field).to_string();
        }
        self.errors.clear();
    }

    pub fn seek_demo(&mut self, preset: DemoPreset, index: usize) -> bool {
        self.demo.seek(preset, index)
    }

    pub fn demo_position(&self, preset: DemoPreset) -> (usize, usize) {
        self.demo.position(preset)
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
