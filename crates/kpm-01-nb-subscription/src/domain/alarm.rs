//! Operational alarms raised towards fault management.

use std::fmt;
use std::str::FromStr;

/// Perceived severity of an alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlarmSeverity {
    Unspecified,
    Critical,
    Major,
    Minor,
    Warning,
    Cleared,
    Default,
}

impl AlarmSeverity {
    /// Wire name used by the alarm manager.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::Critical => "CRITICAL",
            Self::Major => "MAJOR",
            Self::Minor => "MINOR",
            Self::Warning => "WARNING",
            Self::Cleared => "CLEARED",
            Self::Default => "DEFAULT",
        }
    }
}

impl fmt::Display for AlarmSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlarmSeverity {
    type Err = String;

    /// Case-insensitive wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Unspecified,
            Self::Critical,
            Self::Major,
            Self::Minor,
            Self::Warning,
            Self::Cleared,
            Self::Default,
        ]
        .into_iter()
        .find(|sev| sev.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown alarm severity: {s}"))
    }
}

/// An alarm about one affected object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    /// Specific problem code
    pub code: i32,
    pub severity: AlarmSeverity,
    /// Inventory name of the peer the alarm concerns
    pub affected_object: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_wire_names() {
        assert_eq!(AlarmSeverity::Critical.to_string(), "CRITICAL");
        assert_eq!(AlarmSeverity::Cleared.as_str(), "CLEARED");
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("critical".parse::<AlarmSeverity>(), Ok(AlarmSeverity::Critical));
        assert_eq!("MAJOR".parse::<AlarmSeverity>(), Ok(AlarmSeverity::Major));
        assert!("fatal".parse::<AlarmSeverity>().is_err());
    }
}
