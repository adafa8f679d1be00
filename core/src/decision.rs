/// The outcome of admitting a single event into the reconciliation pipeline.
///
/// `reason` is diagnostic text for operators; it never influences whether the
/// event is processed. Reference-index decisions carry a reason regardless of
/// the admit flag, while the default admit path and the built-in exclusion
/// carry none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub admit: bool,
    pub reason: Option<String>,
}

// === impl Decision ===

impl Decision {
    /// Admit with no diagnostic.
    pub const ADMIT: Self = Self {
        admit: true,
        reason: None,
    };

    /// Drop silently.
    pub const IGNORE: Self = Self {
        admit: false,
        reason: None,
    };

    /// Drop with a diagnostic reason.
    pub fn skip(reason: impl Into<String>) -> Self {
        Self {
            admit: false,
            reason: Some(reason.into()),
        }
    }

    /// A decision whose admit flag is computed but whose diagnostic is
    /// populated either way.
    pub fn with_reason(admit: bool, reason: impl Into<String>) -> Self {
        Self {
            admit,
            reason: Some(reason.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert!(Decision::ADMIT.admit);
        assert_eq!(Decision::ADMIT.reason, None);

        assert!(!Decision::IGNORE.admit);
        assert_eq!(Decision::IGNORE.reason, None);

        let skip = Decision::skip("stale");
        assert!(!skip.admit);
        assert_eq!(skip.reason.as_deref(), Some("stale"));

        let admitted = Decision::with_reason(true, "referenced");
        assert!(admitted.admit);
        assert_eq!(admitted.reason.as_deref(), Some("referenced"));
    }
}
