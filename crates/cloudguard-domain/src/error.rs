use std::any::Any;

/// Error raised while evaluating a partition or a single resource.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("expected a {expected} record, found {found}")]
    UnexpectedRecord {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid rule settings: {0}")]
    Settings(String),

    #[error("{0}")]
    Evaluation(String),

    #[error("panicked: {0}")]
    Panicked(String),
}

impl RuleError {
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        RuleError::Panicked(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_payloads_are_stringified() {
        let payload = std::panic::catch_unwind(|| panic!("static message")).expect_err("panics");
        assert_eq!(
            RuleError::from_panic(payload.as_ref()),
            RuleError::Panicked("static message".to_string())
        );

        let n = 3;
        let payload = std::panic::catch_unwind(|| panic!("formatted {n}")).expect_err("panics");
        assert_eq!(
            RuleError::from_panic(payload.as_ref()).to_string(),
            "panicked: formatted 3"
        );
    }
}
