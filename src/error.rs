use std::error;
use std::fmt;




/**
 * Error to represent a misuse of the tree's export functions, or an
 * unrecognized name for one of its configuration enums.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    BufferTooSmall { required: usize, provided: usize },
    UnknownTraversal(String),
    UnknownRotationRule(String),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;

        match self {
            BufferTooSmall { required, provided } => write!(
                fmt,
                "output buffer too small: {} entries required, {} provided",
                required, provided
            ),
            UnknownTraversal(name) => write!(fmt, "unknown traversal: {}", name),
            UnknownRotationRule(name) => write!(fmt, "unknown rotation rule: {}", name),
        }
    }
}

impl error::Error for Error {}




// ============================================================================
#[cfg(test)]
mod test {

    use super::Error;

    #[test]
    fn error_messages_name_the_problem() {
        let e = Error::BufferTooSmall { required: 10, provided: 3 };
        assert_eq!(
            e.to_string(),
            "output buffer too small: 10 entries required, 3 provided"
        );
        assert_eq!(
            Error::UnknownTraversal("sideways".into()).to_string(),
            "unknown traversal: sideways"
        );
    }
}
