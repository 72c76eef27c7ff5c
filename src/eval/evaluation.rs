use serde::{Deserialize, Serialize};

/// Result of one evaluation pass: metric values by name, in the order the
/// evaluator produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    values: Vec<(String, f64)>,
}

impl Evaluation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs declared metric names with a positional result list. Extra
    /// entries on either side are ignored.
    pub fn from_positional<S: AsRef<str>>(names: &[S], values: &[f64]) -> Self {
        names.iter()
            .zip(values.iter())
            .map(|(n, &v)| (n.as_ref().to_string(), v))
            .collect()
    }

    /// Sets `name`, replacing an earlier value for the same name.
    pub fn insert(&mut self, name: &str, value: f64) {
        match self.values.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.iter().find(|(n, _)| n == name).map(|&(_, v)| v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Evaluation {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut evaluation = Evaluation::new();
        for (name, value) in iter {
            evaluation.insert(&name.into(), value);
        }
        evaluation
    }
}
