//! Rotating demo presets used to fill the form without manual entry.

use std::fmt;

use shared::domain::FeatureField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoPreset {
    Normal,
    AboveNormal,
}

impl DemoPreset {
    pub fn label(self) -> &'static str {
        match self {
            DemoPreset::Normal => "Normal",
            DemoPreset::AboveNormal => "Above Normal",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DemoPreset::Normal => "normal health values",
            DemoPreset::AboveNormal => "above normal health values",
        }
    }

    pub fn samples(self) -> &'static [DemoSample] {
        match self {
            DemoPreset::Normal => NORMAL_SAMPLES,
            DemoPreset::AboveNormal => ABOVE_NORMAL_SAMPLES,
        }
    }
}

impl fmt::Display for DemoPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text values for every field, in [`FeatureField::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSample([&'static str; 8]);

impl DemoSample {
    pub fn value(&self, field: FeatureField) -> &'static str {
        self.0[field.index()]
    }
}

const NORMAL_SAMPLES: &[DemoSample] = &[
    DemoSample(["1", "85", "72", "20", "80", "24.5", "0.35", "30"]),
    DemoSample(["0", "92", "75", "22", "95", "22.8", "0.28", "25"]),
    DemoSample(["2", "88", "70", "18", "70", "23.2", "0.32", "28"]),
    DemoSample(["0", "95", "78", "25", "100", "25.1", "0.40", "35"]),
    DemoSample(["1", "90", "74", "21", "85", "24.0", "0.30", "32"]),
];

const ABOVE_NORMAL_SAMPLES: &[DemoSample] = &[
    DemoSample(["3", "155", "88", "35", "200", "32.5", "0.85", "45"]),
    DemoSample(["5", "168", "92", "40", "250", "35.2", "1.05", "50"]),
    DemoSample(["2", "142", "85", "32", "180", "30.8", "0.72", "42"]),
    DemoSample(["4", "175", "95", "38", "280", "38.5", "1.15", "48"]),
    DemoSample(["1", "148", "82", "30", "165", "29.5", "0.68", "38"]),
    DemoSample(["6", "185", "98", "42", "320", "40.2", "1.25", "55"]),
];

/// Independent wrapping cursors, one per preset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoSampleSets {
    normal_cursor: usize,
    above_normal_cursor: usize,
}

impl DemoSampleSets {
    fn cursor_mut(&mut self, preset: DemoPreset) -> &mut usize {
        match preset {
            DemoPreset::Normal => &mut self.normal_cursor,
            DemoPreset::AboveNormal => &mut self.above_normal_cursor,
        }
    }

    fn cursor(&self, preset: DemoPreset) -> usize {
        match preset {
            DemoPreset::Normal => self.normal_cursor,
            DemoPreset::AboveNormal => self.above_normal_cursor,
        }
    }

    /// Returns the sample under the cursor and advances it.
    pub fn next_sample(&mut self, preset: DemoPreset) -> &'static DemoSample {
        let samples = preset.samples();
        let cursor = self.cursor_mut(preset);
        let sample = &samples[*cursor % samples.len()];
        *cursor = (*cursor + 1) % samples.len();
        sample
    }

    /// Points the cursor at `index` (zero-based). Returns false when out of range.
    pub fn seek(&mut self, preset: DemoPreset, index: usize) -> bool {
        if index >= preset.samples().len() {
            return false;
        }
        *self.cursor_mut(preset) = index;
        true
    }

    /// One-based position of the next sample and the preset length.
    pub fn position(&self, preset: DemoPreset) -> (usize, usize) {
        (self.cursor(preset) + 1, preset.samples().len())
    }
}
