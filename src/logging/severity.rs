//! Severity tags and their display glyphs

use std::fmt;
use std::str::FromStr;

/// Which gates must be open for a severity to produce output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRule {
    /// Only the general gate
    General,
    /// Only the memory gate
    Memory,
    /// Both the general and the network gate
    GeneralAndNetwork,
}

/// A severity channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Info,
    Debug,
    Verbose,
    Warning,
    Severe,
    Memory,
    Network,
}

impl Severity {
    /// Every severity, in declaration order
    pub const ALL: [Severity; 8] = [
        Severity::Error,
        Severity::Info,
        Severity::Debug,
        Severity::Verbose,
        Severity::Warning,
        Severity::Severe,
        Severity::Memory,
        Severity::Network,
    ];

    /// Get the glyph printed in front of the source location
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Error => "[‼️]",
            Severity::Info => "[ℹ️]",
            Severity::Debug => "[🦟]",
            Severity::Verbose => "[💬]",
            Severity::Warning => "[⚠️]",
            Severity::Severe => "[🔥]",
            Severity::Memory => "[💾]",
            Severity::Network => "[🌐]",
        }
    }

    /// Get the lower-case name of this severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Verbose => "verbose",
            Severity::Warning => "warning",
            Severity::Severe => "severe",
            Severity::Memory => "memory",
            Severity::Network => "network",
        }
    }

    /// Get the gate rule that decides whether this severity is logged
    pub fn gates(&self) -> GateRule {
        match self {
            Severity::Memory => GateRule::Memory,
            Severity::Network => GateRule::GeneralAndNetwork,
            _ => GateRule::General,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{0}'")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    /// Accepts full names and the one-letter short forms (`e`, `i`, `d`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str() == lower || sev.as_str()[..1] == lower)
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_rules() {
        assert_eq!(Severity::Network.gates(), GateRule::GeneralAndNetwork);
        assert_eq!(Severity::Memory.gates(), GateRule::Memory);
        for sev in [
            Severity::Error,
            Severity::Info,
            Severity::Debug,
            Severity::Verbose,
            Severity::Warning,
            Severity::Severe,
        ] {
            assert_eq!(sev.gates(), GateRule::General);
        }
    }

    #[test]
    fn test_glyphs_are_bracketed() {
        for sev in Severity::ALL {
            let glyph = sev.glyph();
            assert!(glyph.starts_with('[') && glyph.ends_with(']'), "{}", sev);
        }
        assert_eq!(Severity::Error.glyph(), "[‼️]");
        assert_eq!(Severity::Network.glyph(), "[🌐]");
    }

    #[test]
    fn test_parse_names_and_short_forms() {
        assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("n".parse::<Severity>().unwrap(), Severity::Network);
        assert_eq!("m".parse::<Severity>().unwrap(), Severity::Memory);
        assert!("trace".parse::<Severity>().is_err());
        assert!("".parse::<Severity>().is_err());
    }
}
