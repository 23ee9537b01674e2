//! Labeled `(x, y)` samples partitioned into groups.
//!
//! A [`Dataset`] is built once from tabular rows and is read-only afterwards.
//! Groups keep the order in which their label first appears in the input.

mod anscombe;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// A single observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// The samples sharing one label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    label: String,
    samples: Vec<Sample>,
}

impl Group {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    dataset: String,
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    groups: Vec<Group>,
}

impl Dataset {
    /// Partition `(label, x, y)` rows into groups.
    pub fn from_records<I, S>(records: I) -> AnalysisResult<Self>
    where
        I: IntoIterator<Item = (S, f64, f64)>,
        S: AsRef<str>,
    {
        let mut groups: Vec<Group> = Vec::new();
        for (label, x, y) in records {
            let label = label.as_ref();
            let sample = Sample { x, y };
            match groups.iter_mut().find(|g| g.label == label) {
                Some(group) => group.samples.push(sample),
                None => groups.push(Group {
                    label: label.to_string(),
                    samples: vec![sample],
                }),
            }
        }
        if groups.is_empty() {
            return Err(AnalysisError::invalid("dataset contains no samples"));
        }
        Ok(Self { groups })
    }

    /// The bundled Anscombe quartet: groups `I` to `IV` with 11 samples each.
    pub fn anscombe() -> Self {
        let mut groups: Vec<Group> = Vec::with_capacity(4);
        for (label, x, y) in anscombe::ANSCOMBE_ROWS {
            let sample = Sample { x, y };
            match groups.last_mut() {
                Some(group) if group.label == label => group.samples.push(sample),
                _ => groups.push(Group {
                    label: label.to_string(),
                    samples: vec![sample],
                }),
            }
        }
        Self { groups }
    }

    /// Read a CSV table with a `dataset,x,y` header.
    pub fn from_csv_reader<R: Read>(reader: R) -> AnalysisResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let rows = reader
            .deserialize::<CsvRow>()
            .map(|row| row.map(|r| (r.dataset, r.x, r.y)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(rows)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> AnalysisResult<Self> {
        let path = path.as_ref();
        log::debug!("reading dataset from {}", path.display());
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, label: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.label.as_str())
    }

    pub fn sample_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}
