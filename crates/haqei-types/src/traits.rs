use serde::{Deserialize, Serialize};

use crate::error::TypesError;

/// Personality framework a trait code belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Framework {
    Mbti,
    Enneagram,
    StrengthsFinder,
}

impl Framework {
    pub const ALL: [Framework; 3] = [
        Framework::Mbti,
        Framework::Enneagram,
        Framework::StrengthsFinder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Mbti => "MBTI",
            Framework::Enneagram => "ENNEAGRAM",
            Framework::StrengthsFinder => "STRENGTHSFINDER",
        }
    }

    /// Canonical lookup key for a code of this framework.
    ///
    /// MBTI types are upper-cased ("intj" → "INTJ"), Enneagram types are
    /// trimmed, and StrengthsFinder talent names compare case-insensitively.
    pub fn normalize_code(&self, code: &str) -> String {
        let code = code.trim();
        match self {
            Framework::Mbti => code.to_ascii_uppercase(),
            Framework::Enneagram => code.to_string(),
            Framework::StrengthsFinder => code.to_lowercase(),
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Framework {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mbti" => Ok(Framework::Mbti),
            "enneagram" | "ennea" => Ok(Framework::Enneagram),
            "strengthsfinder" | "strengths" | "cliftonstrengths" => Ok(Framework::StrengthsFinder),
            _ => Err(TypesError::UnknownFramework(s.to_string())),
        }
    }
}

/// A single weighted framework result, e.g. `(MBTI, "INTJ", 1.0)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraitInput {
    pub framework: Framework,
    pub code: String,
    /// Caller confidence in this result, expected in [0, 1]
    pub weight: f64,
}

impl TraitInput {
    pub fn new(framework: Framework, code: impl Into<String>, weight: f64) -> Self {
        Self {
            framework,
            code: code.into(),
            weight,
        }
    }

    pub fn mbti(code: impl Into<String>, weight: f64) -> Self {
        Self::new(Framework::Mbti, code, weight)
    }

    pub fn enneagram(code: impl Into<String>, weight: f64) -> Self {
        Self::new(Framework::Enneagram, code, weight)
    }

    pub fn strength(code: impl Into<String>, weight: f64) -> Self {
        Self::new(Framework::StrengthsFinder, code, weight)
    }

    /// Normalized lookup key for this input's code.
    pub fn normalized_code(&self) -> String {
        self.framework.normalize_code(&self.code)
    }
}

/// An ordered collection of trait inputs from one or more frameworks.
///
/// Order does not affect which trigram wins; it only fixes the summation
/// order so repeated scoring is bit-identical.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitProfile {
    inputs: Vec<TraitInput>,
}

impl TraitProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, input: TraitInput) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn push(&mut self, input: TraitInput) {
        self.inputs.push(input);
    }

    pub fn inputs(&self) -> &[TraitInput] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraitInput> {
        self.inputs.iter()
    }
}

impl From<Vec<TraitInput>> for TraitProfile {
    fn from(inputs: Vec<TraitInput>) -> Self {
        Self { inputs }
    }
}

impl FromIterator<TraitInput> for TraitProfile {
    fn from_iter<I: IntoIterator<Item = TraitInput>>(iter: I) -> Self {
        Self {
            inputs: iter.into_iter().collect(),
        }
    }
}
