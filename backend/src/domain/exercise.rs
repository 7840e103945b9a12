//! Exercise entries and the log filter applied when reading them back.

use std::fmt;
use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use super::calendar::parse_calendar_date;
use super::user::{User, UserId};

/// Validation errors raised while building an [`ExerciseDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseValidationError {
    EmptyDescription,
    MissingDuration,
    InvalidDuration,
    InvalidDate,
}

impl fmt::Display for ExerciseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description is required"),
            Self::MissingDuration => write!(f, "duration is required"),
            Self::InvalidDuration => write!(f, "duration must be a finite number"),
            Self::InvalidDate => write!(f, "date must be a valid calendar date"),
        }
    }
}

impl std::error::Error for ExerciseValidationError {}

/// Identifier of a stored exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text description of an exercise. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    pub fn new(value: impl Into<String>) -> Result<Self, ExerciseValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl TryFrom<String> for Description {
    type Error = ExerciseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Exercise duration in minutes.
///
/// ## Invariants
/// - The value is finite.
///
/// Serialises as a JSON integer when the value is integral and as a float
/// otherwise, so `30` round-trips as `30` rather than `30.0`.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::Minutes;
///
/// let whole = Minutes::parse("30").expect("numeric");
/// assert_eq!(serde_json::to_string(&whole).expect("serialise"), "30");
///
/// let partial = Minutes::new(12.5).expect("finite");
/// assert_eq!(serde_json::to_string(&partial).expect("serialise"), "12.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "f64")]
pub struct Minutes(f64);

impl Minutes {
    pub fn new(value: f64) -> Result<Self, ExerciseValidationError> {
        if !value.is_finite() {
            return Err(ExerciseValidationError::InvalidDuration);
        }
        Ok(Self(value))
    }

    /// Parse a numeric string such as `"30"` or `" 12.5 "`.
    pub fn parse(raw: &str) -> Result<Self, ExerciseValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ExerciseValidationError::MissingDuration);
        }
        raw.parse::<f64>()
            .map_err(|_| ExerciseValidationError::InvalidDuration)
            .and_then(Self::new)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Integral view of the value when it has no fractional part.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "range and fractional part are checked before the cast"
    )]
    pub fn as_whole(self) -> Option<i64> {
        const LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
        if self.0.fract() == 0.0 && self.0.abs() <= LIMIT {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

impl TryFrom<f64> for Minutes {
    type Error = ExerciseValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Minutes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_whole() {
            Some(whole) => serializer.serialize_i64(whole),
            None => serializer.serialize_f64(self.0),
        }
    }
}

/// Duration as submitted by a client: a number, or text that should hold one.
#[derive(Debug, Clone, PartialEq)]
pub enum DurationInput {
    Number(f64),
    Text(String),
    /// Any other shape (booleans, arrays, objects).
    Unsupported,
}

impl DurationInput {
    fn into_minutes(self) -> Result<Minutes, ExerciseValidationError> {
        match self {
            Self::Number(value) => Minutes::new(value),
            Self::Text(text) => Minutes::parse(&text),
            Self::Unsupported => Err(ExerciseValidationError::InvalidDuration),
        }
    }
}

/// Validated exercise fields awaiting a date default and an owner.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    description: Description,
    duration: Minutes,
    date: Option<DateTime<Utc>>,
}

impl ExerciseDraft {
    /// Validate raw submission fields.
    ///
    /// Checks run in order: description, duration, date. A blank `date` is
    /// treated as absent.
    pub fn parse(
        description: Option<String>,
        duration: Option<DurationInput>,
        date: Option<&str>,
    ) -> Result<Self, ExerciseValidationError> {
        let description = Description::new(description.unwrap_or_default())?;
        let duration = duration
            .ok_or(ExerciseValidationError::MissingDuration)?
            .into_minutes()?;
        let date = match date.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Some(parse_calendar_date(raw).ok_or(ExerciseValidationError::InvalidDate)?),
            None => None,
        };
        Ok(Self {
            description,
            duration,
            date,
        })
    }

    /// Explicit date supplied by the client, if any.
    #[must_use]
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Finalise the draft for `user_id`, using `now` when no date was given.
    #[must_use]
    pub fn into_exercise(self, user_id: UserId, now: DateTime<Utc>) -> Exercise {
        Exercise::new(
            ExerciseId::random(),
            user_id,
            self.description,
            self.duration,
            self.date.unwrap_or(now),
        )
    }
}

/// Logged exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    id: ExerciseId,
    user_id: UserId,
    description: Description,
    duration: Minutes,
    date: DateTime<Utc>,
}

impl Exercise {
    #[must_use]
    pub fn new(
        id: ExerciseId,
        user_id: UserId,
        description: Description,
        duration: Minutes,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            description,
            duration,
            date,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub fn description(&self) -> &Description {
        &self.description
    }

    #[must_use]
    pub fn duration(&self) -> Minutes {
        self.duration
    }

    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Bounds applied when reading a user's log.
///
/// Unparseable inputs are dropped rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    limit: Option<NonZeroU32>,
}

impl LogFilter {
    #[must_use]
    pub fn new(
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        limit: Option<NonZeroU32>,
    ) -> Self {
        Self { from, to, limit }
    }

    /// Build a filter from raw query values, ignoring any that do not parse.
    ///
    /// `limit` must be a whole positive integer after trimming. Fractional or
    /// partly numeric values such as `1.5` or `2abc` are ignored rather than
    /// truncated, so they leave the log unlimited.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::LogFilter;
    ///
    /// let filter = LogFilter::from_query(Some("2023-01-15"), Some("soon"), Some("-3"));
    /// assert!(filter.from_date().is_some());
    /// assert!(filter.to_date().is_none());
    /// assert!(filter.limit().is_none());
    /// ```
    #[must_use]
    pub fn from_query(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            from: from.and_then(parse_calendar_date),
            to: to.and_then(parse_calendar_date),
            limit: limit.and_then(parse_limit),
        }
    }

    #[must_use]
    pub fn from_date(&self) -> Option<DateTime<Utc>> {
        self.from
    }

    #[must_use]
    pub fn to_date(&self) -> Option<DateTime<Utc>> {
        self.to
    }

    #[must_use]
    pub fn limit(&self) -> Option<NonZeroU32> {
        self.limit
    }

    /// Whether `date` falls inside the inclusive bounds.
    #[must_use]
    pub fn admits(&self, date: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

fn parse_limit(raw: &str) -> Option<NonZeroU32> {
    let value = raw.trim().parse::<i64>().ok()?;
    if value <= 0 {
        return None;
    }
    let capped = u32::try_from(value).unwrap_or(u32::MAX);
    NonZeroU32::new(capped)
}

/// A user's exercises, oldest first, after filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    user: User,
    entries: Vec<Exercise>,
}

impl ExerciseLog {
    #[must_use]
    pub fn new(user: User, entries: Vec<Exercise>) -> Self {
        Self { user, entries }
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn entries(&self) -> &[Exercise] {
        &self.entries
    }

    /// Number of returned entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
