use std::fmt;

/// Rejected command line input. Carries the literal token the user passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// Step count was not a positive integer.
    InvalidStepCount(String),
    /// Worker count was not a positive integer.
    InvalidWorkerCount(String),
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::InvalidStepCount(token) => write!(f, "Invalid step count (n): {}", token),
            ArgError::InvalidWorkerCount(token) => write!(f, "Invalid worker count: {}", token),
        }
    }
}

impl std::error::Error for ArgError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_token() {
        let err = ArgError::InvalidStepCount("abc".to_string());
        assert_eq!(err.to_string(), "Invalid step count (n): abc");

        let err = ArgError::InvalidWorkerCount("0".to_string());
        assert_eq!(err.to_string(), "Invalid worker count: 0");
    }
}
