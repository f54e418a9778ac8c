//! Numeric Annotation Glyphs for moves and positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Assessment of a single move (`$0` to `$9`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MoveAssessment {
    #[default]
    Null,
    Good,
    Mistake,
    Brilliant,
    Blunder,
    Interesting,
    Dubious,
    Forced,
    Singular,
    Worst,
}

impl MoveAssessment {
    const ALL: [MoveAssessment; 10] = [
        MoveAssessment::Null,
        MoveAssessment::Good,
        MoveAssessment::Mistake,
        MoveAssessment::Brilliant,
        MoveAssessment::Blunder,
        MoveAssessment::Interesting,
        MoveAssessment::Dubious,
        MoveAssessment::Forced,
        MoveAssessment::Singular,
        MoveAssessment::Worst,
    ];

    /// Looks up a move assessment by NAG number.
    pub fn from_nag(nag: u8) -> Option<Self> {
        Self::ALL.get(nag as usize).copied()
    }

    /// Parses a traditional glyph such as `!?` or `□`.
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            "!" => Some(MoveAssessment::Good),
            "?" => Some(MoveAssessment::Mistake),
            "!!" => Some(MoveAssessment::Brilliant),
            "??" => Some(MoveAssessment::Blunder),
            "!?" => Some(MoveAssessment::Interesting),
            "?!" => Some(MoveAssessment::Dubious),
            "□" => Some(MoveAssessment::Forced),
            _ => None,
        }
    }

    /// Returns the NAG number.
    pub fn nag(self) -> u8 {
        self as u8
    }

    /// Returns the traditional glyph, if this assessment has one.
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            MoveAssessment::Good => Some("!"),
            MoveAssessment::Mistake => Some("?"),
            MoveAssessment::Brilliant => Some("!!"),
            MoveAssessment::Blunder => Some("??"),
            MoveAssessment::Interesting => Some("!?"),
            MoveAssessment::Dubious => Some("?!"),
            MoveAssessment::Forced => Some("□"),
            MoveAssessment::Null | MoveAssessment::Singular | MoveAssessment::Worst => None,
        }
    }

    /// Returns true for `$0`.
    pub fn is_null(self) -> bool {
        self == MoveAssessment::Null
    }
}

impl fmt::Display for MoveAssessment {
    /// Glyph when one exists, `$N` otherwise, nothing for `$0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.glyph() {
            Some(glyph) => f.write_str(glyph),
            None if self.is_null() => Ok(()),
            None => write!(f, "${}", self.nag()),
        }
    }
}

/// Assessment of the position reached after a move (`$10` and above).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PositionAssessment {
    #[default]
    Null,
    Drawish,
    EqualQuiet,
    EqualActive,
    Unclear,
    WhiteSlightAdvantage,
    BlackSlightAdvantage,
    WhiteModerateAdvantage,
    BlackModerateAdvantage,
    WhiteDecisiveAdvantage,
    BlackDecisiveAdvantage,
    /// Any other glyph in `$20..=$255`.
    Other(u8),
}

impl PositionAssessment {
    /// Looks up a position assessment by NAG number.
    ///
    /// Returns `None` for the move-assessment range `$1..=$9`.
    pub fn from_nag(nag: u8) -> Option<Self> {
        let assessment = match nag {
            0 => PositionAssessment::Null,
            1..=9 => return None,
            10 => PositionAssessment::Drawish,
            11 => PositionAssessment::EqualQuiet,
            12 => PositionAssessment::EqualActive,
            13 => PositionAssessment::Unclear,
            14 => PositionAssessment::WhiteSlightAdvantage,
            15 => PositionAssessment::BlackSlightAdvantage,
            16 => PositionAssessment::WhiteModerateAdvantage,
            17 => PositionAssessment::BlackModerateAdvantage,
            18 => PositionAssessment::WhiteDecisiveAdvantage,
            19 => PositionAssessment::BlackDecisiveAdvantage,
            n => PositionAssessment::Other(n),
        };
        Some(assessment)
    }

    /// Returns the NAG number.
    pub fn nag(self) -> u8 {
        match self {
            PositionAssessment::Null => 0,
            PositionAssessment::Drawish => 10,
            PositionAssessment::EqualQuiet => 11,
            PositionAssessment::EqualActive => 12,
            PositionAssessment::Unclear => 13,
            PositionAssessment::WhiteSlightAdvantage => 14,
            PositionAssessment::BlackSlightAdvantage => 15,
            PositionAssessment::WhiteModerateAdvantage => 16,
            PositionAssessment::BlackModerateAdvantage => 17,
            PositionAssessment::WhiteDecisiveAdvantage => 18,
            PositionAssessment::BlackDecisiveAdvantage => 19,
            PositionAssessment::Other(n) => n,
        }
    }

    /// Returns true for the default, unassessed state.
    pub fn is_null(self) -> bool {
        self == PositionAssessment::Null
    }
}

impl fmt::Display for PositionAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            Ok(())
        } else {
            write!(f, "${}", self.nag())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_assessment_nag_roundtrip() {
        for nag in 0..=9 {
            let assessment = MoveAssessment::from_nag(nag).unwrap();
            assert_eq!(assessment.nag(), nag);
        }
        assert_eq!(MoveAssessment::from_nag(10), None);
    }

    #[test]
    fn traditional_glyphs() {
        assert_eq!(MoveAssessment::from_glyph("!?"), Some(MoveAssessment::Interesting));
        assert_eq!(MoveAssessment::from_glyph("□"), Some(MoveAssessment::Forced));
        assert_eq!(MoveAssessment::from_glyph("!!!"), None);
        assert_eq!(MoveAssessment::Blunder.to_string(), "??");
        assert_eq!(MoveAssessment::Singular.to_string(), "$8");
        assert_eq!(MoveAssessment::Null.to_string(), "");
    }

    #[test]
    fn position_assessment_range() {
        assert_eq!(PositionAssessment::from_nag(5), None);
        assert_eq!(
            PositionAssessment::from_nag(14),
            Some(PositionAssessment::WhiteSlightAdvantage)
        );
        assert_eq!(PositionAssessment::from_nag(140), Some(PositionAssessment::Other(140)));
        assert_eq!(PositionAssessment::Unclear.to_string(), "$13");
        assert_eq!(PositionAssessment::Null.to_string(), "");
    }
}
