//! Tri-state lookup result produced by the character PLOD store.
//!
//! Lookups either find a payload, find nothing, or reject their input. The
//! two failure branches carry a human-readable reason that inbound adapters
//! may echo back to clients. Infrastructure faults are not outcomes; they
//! travel as [`crate::domain::Error`].

/// Result of a single store lookup.
///
/// # Examples
/// ```
/// use plod_backend::domain::StoreOutcome;
///
/// let outcome = StoreOutcome::found(5_u32).map(|plod| plod * 2);
/// assert_eq!(outcome, StoreOutcome::Found(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome<T> {
    /// The lookup matched and produced a payload.
    Found(T),
    /// The lookup was well formed but matched nothing.
    NotFound(String),
    /// The lookup input was rejected; the reason names the offending part.
    Invalid(String),
}

impl<T> StoreOutcome<T> {
    /// Wrap a payload in [`StoreOutcome::Found`].
    pub fn found(payload: T) -> Self {
        Self::Found(payload)
    }

    /// Build a [`StoreOutcome::NotFound`] with the given reason.
    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound(reason.into())
    }

    /// Build a [`StoreOutcome::Invalid`] with the given reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }

    /// Transform the found payload, leaving failure branches untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StoreOutcome<U> {
        match self {
            Self::Found(payload) => StoreOutcome::Found(f(payload)),
            Self::NotFound(reason) => StoreOutcome::NotFound(reason),
            Self::Invalid(reason) => StoreOutcome::Invalid(reason),
        }
    }

    /// Returns `true` for [`StoreOutcome::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl<T> StoreOutcome<Vec<T>> {
    /// Promote a collection to an outcome, treating an empty result as a miss.
    pub fn from_matches(matches: Vec<T>, miss_reason: impl Into<String>) -> Self {
        if matches.is_empty() {
            Self::not_found(miss_reason)
        } else {
            Self::Found(matches)
        }
    }
}

impl<T> StoreOutcome<T> {
    /// Promote an optional record to an outcome.
    pub fn from_option(record: Option<T>, miss_reason: impl Into<String>) -> Self {
        match record {
            Some(record) => Self::Found(record),
            None => Self::not_found(miss_reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn map_preserves_failure_reasons() {
        let missing: StoreOutcome<u32> = StoreOutcome::not_found("gone");
        let invalid: StoreOutcome<u32> = StoreOutcome::invalid("colour");

        assert_eq!(missing.map(|v| v + 1), StoreOutcome::NotFound("gone".to_owned()));
        assert_eq!(invalid.map(|v| v + 1), StoreOutcome::Invalid("colour".to_owned()));
    }

    #[rstest]
    fn empty_matches_become_not_found() {
        let outcome = StoreOutcome::<Vec<u8>>::from_matches(Vec::new(), "nothing matched");
        assert_eq!(outcome, StoreOutcome::NotFound("nothing matched".to_owned()));
    }

    #[rstest]
    fn non_empty_matches_are_found() {
        let outcome = StoreOutcome::from_matches(vec![1, 2], "nothing matched");
        assert!(outcome.is_found());
    }

    #[rstest]
    #[case(Some(3), true)]
    #[case(None, false)]
    fn option_promotion(#[case] record: Option<u8>, #[case] found: bool) {
        assert_eq!(StoreOutcome::from_option(record, "missing").is_found(), found);
    }
}
