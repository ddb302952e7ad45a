use std::fmt;

use serde::{Deserialize, Serialize};

/// Inclusive validity range for a single feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureField {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    DiabetesPedigreeFunction,
    Age,
}

impl FeatureField {
    /// Display order used by every form surface.
    pub const ALL: [FeatureField; 8] = [
        FeatureField::Pregnancies,
        FeatureField::Glucose,
        FeatureField::BloodPressure,
        FeatureField::SkinThickness,
        FeatureField::Insulin,
        FeatureField::Bmi,
        FeatureField::DiabetesPedigreeFunction,
        FeatureField::Age,
    ];

    /// Position within [`FeatureField::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire name, matching the keys of the `features` object.
    pub fn name(self) -> &'static str {
        match self {
            FeatureField::Pregnancies => "pregnancies",
            FeatureField::Glucose => "glucose",
            FeatureField::BloodPressure => "blood_pressure",
            FeatureField::SkinThickness => "skin_thickness",
            FeatureField::Insulin => "insulin",
            FeatureField::Bmi => "bmi",
            FeatureField::DiabetesPedigreeFunction => "diabetes_pedigree_function",
            FeatureField::Age => "age",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeatureField::Pregnancies => "Pregnancies",
            FeatureField::Glucose => "Glucose (mg/dL)",
            FeatureField::BloodPressure => "Blood Pressure (mm Hg)",
            FeatureField::SkinThickness => "Skin Thickness (mm)",
            FeatureField::Insulin => "Insulin (mu U/ml)",
            FeatureField::Bmi => "BMI (kg/m²)",
            FeatureField::DiabetesPedigreeFunction => "Diabetes Pedigree Function",
            FeatureField::Age => "Age (years)",
        }
    }

    pub fn range(self) -> FeatureRange {
        match self {
            FeatureField::Pregnancies => FeatureRange::new(0.0, 20.0),
            FeatureField::Glucose => FeatureRange::new(0.0, 500.0),
            FeatureField::BloodPressure => FeatureRange::new(0.0, 200.0),
            FeatureField::SkinThickness => FeatureRange::new(0.0, 100.0),
            FeatureField::Insulin => FeatureRange::new(0.0, 1000.0),
            FeatureField::Bmi => FeatureRange::new(0.0, 100.0),
            FeatureField::DiabetesPedigreeFunction => FeatureRange::new(0.0, 5.0),
            FeatureField::Age => FeatureRange::new(0.0, 150.0),
        }
    }

    /// Input granularity hint; fractional for BMI and pedigree function.
    pub fn step(self) -> f64 {
        match self {
            FeatureField::Bmi | FeatureField::DiabetesPedigreeFunction => 0.01,
            _ => 1.0,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric feature vector sent to the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureInput {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree_function: f64,
    pub age: f64,
}

impl FeatureInput {
    pub fn get(&self, field: FeatureField) -> f64 {
        match field {
            FeatureField::Pregnancies => self.pregnancies,
            FeatureField::Glucose => self.glucose,
            FeatureField::BloodPressure => self.blood_pressure,
            FeatureField::SkinThickness => self.skin_thickness,
            FeatureField::Insulin => self.insulin,
            FeatureField::Bmi => self.bmi,
            FeatureField::DiabetesPedigreeFunction => self.diabetes_pedigree_function,
            FeatureField::Age => self.age,
        }
    }

    pub fn set(&mut self, field: FeatureField, value: f64) {
        let slot = match field {
            FeatureField::Pregnancies => &mut self.pregnancies,
            FeatureField::Glucose => &mut self.glucose,
            FeatureField::BloodPressure => &mut self.blood_pressure,
            FeatureField::SkinThickness => &mut self.skin_thickness,
            FeatureField::Insulin => &mut self.insulin,
            FeatureField::Bmi => &mut self.bmi,
            FeatureField::DiabetesPedigreeFunction => &mut self.diabetes_pedigree_function,
            FeatureField::Age => &mut self.age,
        };
        *slot = value;
    }
}
