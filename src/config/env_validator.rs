//! Environment variable validation with typo suggestions
//!
//! An invalid value never aborts loading: the caller keeps its current value
//! and reports the returned `EnvVarWarning`.

use std::fmt;

/// Largest edit distance still offered as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Validator for one environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

/// An environment variable held a value outside its accepted set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarWarning {
    pub var_name: String,
    pub value: String,
    pub suggestion: Option<String>,
    pub valid_values: Vec<String>,
}

impl fmt::Display for EnvVarWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} value '{}'", self.var_name, self.value)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Did you mean '{suggestion}'?")?;
        }
        write!(f, " Valid values: {}", self.valid_values.join(", "))
    }
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parses `value`, or describes why it was rejected.
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, EnvVarWarning>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value).ok_or_else(|| EnvVarWarning {
            var_name: self.var_name.to_string(),
            value: value.to_string(),
            suggestion: closest(&value.trim().to_lowercase(), self.valid_values)
                .map(String::from),
            valid_values: self.valid_values.iter().map(|v| v.to_string()).collect(),
        })
    }
}

/// Closest candidate within a couple of edits of `input`.
pub(crate) fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    candidates
        .iter()
        .map(|candidate| (*candidate, levenshtein(input, candidate)))
        .min_by_key(|(_, distance)| *distance)
        .filter(|(_, distance)| *distance <= MAX_SUGGESTION_DISTANCE)
        .map(|(candidate, _)| candidate)
}

/// Edit distance over Unicode scalar values
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b.len() + 1];

    for (i, a_char) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}
