use std::fmt;

/// How many passes a bubble sort run performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PassPolicy {
    /// Always run `n - 1` passes. The dirty flag is tracked but ignored.
    #[default]
    Full,
    /// Stop after the first pass that made no swaps.
    EarlyExit,
}

impl PassPolicy {
    pub fn from_early_exit(early_exit: bool) -> Self {
        if early_exit {
            Self::EarlyExit
        } else {
            Self::Full
        }
    }
}

impl fmt::Display for PassPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::EarlyExit => write!(f, "early-exit"),
        }
    }
}

impl std::str::FromStr for PassPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "early-exit" | "early_exit" => Ok(Self::EarlyExit),
            _ => Err(format!("invalid pass policy: {s}")),
        }
    }
}
