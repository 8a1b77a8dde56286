//! Advisory diagnostics for streams that fall out of step

use serde::Serialize;
use std::fmt;

/// Fields missing from one note slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Missing {
    pub syllable: bool,
    pub pitch: bool,
    pub duration: bool,
}

impl Missing {
    pub fn any(&self) -> bool {
        self.syllable || self.pitch || self.duration
    }
}

/// A note slot where a specified input had nothing to offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Time cursor at the slot
    pub time: u64,
    pub missing: Missing,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time)?;
        if self.missing.syllable {
            write!(f, " No syllable.")?;
        }
        if self.missing.pitch {
            write!(f, " No pitch.")?;
        }
        if self.missing.duration {
            write!(f, " No time.")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_missing_fields() {
        let diag = Diagnostic {
            time: 14,
            missing: Missing {
                syllable: true,
                pitch: false,
                duration: true,
            },
        };
        assert_eq!(diag.to_string(), "14 No syllable. No time.");
    }

    #[test]
    fn test_any() {
        assert!(!Missing::default().any());
        assert!(Missing { pitch: true, ..Default::default() }.any());
    }
}
