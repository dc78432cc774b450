use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use virtuwellness_core::error::ValidationError;

pub const MIN_AGE: u16 = 18;
pub const MAX_AGE: u16 = 100;
const MAX_EXERCISE_MINUTES: u32 = 24 * 60;

/// Occupation or life status reported at registration.
///
/// Deserialization goes through [`FromStr`], so `"Working Professional"` and
/// `"working-professional"` are accepted. Unrecognised values become
/// [`Role::Unspecified`] rather than failing, and simply receive no
/// role-specific guidance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Role {
    Student,
    WorkingProfessional,
    Homemaker,
    #[default]
    Unspecified,
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Ok(match normalized.as_str() {
            "student" => Role::Student,
            "working_professional" | "professional" => Role::WorkingProfessional,
            "homemaker" => Role::Homemaker,
            _ => Role::Unspecified,
        })
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(role) => role,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Student => "student",
            Role::WorkingProfessional => "working_professional",
            Role::Homemaker => "homemaker",
            Role::Unspecified => "unspecified",
        };
        f.write_str(s)
    }
}

/// Everything a caller submits for one assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// One answer per questionnaire item, in item order.
    pub responses: Vec<u8>,
    /// Optional GAD-7 answers for the secondary anxiety screen.
    #[serde(default)]
    pub anxiety_responses: Option<Vec<u8>>,
    #[serde(default)]
    pub free_text: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub age: Option<u16>,
    /// Average nightly sleep.
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    /// Average daily exercise.
    #[serde(default)]
    pub exercise_minutes: Option<u32>,
}

impl AssessmentRequest {
    pub fn new(responses: impl Into<Vec<u8>>) -> Self {
        Self {
            responses: responses.into(),
            ..Self::default()
        }
    }

    pub fn with_free_text(mut self, text: impl Into<String>) -> Self {
        self.free_text = text.into();
        self
    }

    pub fn with_anxiety_responses(mut self, responses: impl Into<Vec<u8>>) -> Self {
        self.anxiety_responses = Some(responses.into());
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_age(mut self, age: u16) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_lifestyle(mut self, sleep_hours: f64, exercise_minutes: u32) -> Self {
        self.sleep_hours = Some(sleep_hours);
        self.exercise_minutes = Some(exercise_minutes);
        self
    }

    /// Check the caller-supplied attributes. Answers are checked by the
    /// instrument during aggregation.
    pub fn validate_attributes(&self) -> Result<(), ValidationError> {
        if let Some(age) = self.age
            && !(MIN_AGE..=MAX_AGE).contains(&age)
        {
            return Err(ValidationError::AgeOutOfRange {
                age,
                min: MIN_AGE,
                max: MAX_AGE,
            });
        }
        if let Some(hours) = self.sleep_hours
            && !(hours.is_finite() && (0.0..=24.0).contains(&hours))
        {
            return Err(ValidationError::SleepHoursOutOfRange(hours));
        }
        if let Some(minutes) = self.exercise_minutes
            && minutes > MAX_EXERCISE_MINUTES
        {
            return Err(ValidationError::ExerciseMinutesOutOfRange(minutes));
        }
        Ok(())
    }
}
