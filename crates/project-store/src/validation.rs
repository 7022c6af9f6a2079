//! Field Validation
//!
//! Independent constraints, AND-combined. A constraint that is not set
//! always holds. Length constraints apply only to text, numeric bounds
//! only to numbers.

/// A value read from a form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl FieldValue<'_> {
    /// Text form used by the `required` check
    fn to_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.to_string(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

/// A value together with the constraints it must satisfy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Validatable<'a> {
    pub value: FieldValue<'a>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Exclusive lower bound
    pub min: Option<f64>,
    /// Exclusive upper bound
    pub max: Option<f64>,
}

impl<'a> Validatable<'a> {
    pub fn text(value: &'a str) -> Self {
        Self::new(FieldValue::Text(value))
    }

    pub fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    fn new(value: FieldValue<'a>) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Check every applicable constraint
pub fn validate(v: &Validatable<'_>) -> bool {
    if v.required && v.value.to_text().trim().is_empty() {
        return false;
    }

    match v.value {
        FieldValue::Text(s) => {
            let len = s.chars().count();
            v.min_length.map_or(true, |min| len >= min) && v.max_length.map_or(true, |max| len <= max)
        }
        // NaN compares false against everything, so it fails any bound
        FieldValue::Number(n) => v.min.map_or(true, |min| n > min) && v.max.map_or(true, |max| n < max),
    }
}
