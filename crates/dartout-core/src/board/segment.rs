use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Base number shared by the outer bull and the double bull.
pub const BULL_BASE: u8 = 25;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
pub enum SegmentKind {
    #[strum(serialize = "S")]
    Single,
    #[strum(serialize = "D")]
    Double,
    #[strum(serialize = "T")]
    Treble,
    #[strum(serialize = "B")]
    Bull,
    #[strum(serialize = "DB")]
    DoubleBull,
}

impl SegmentKind {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn is_bull(&self) -> bool {
        matches!(self, Self::Bull | Self::DoubleBull)
    }

    /// Get the expanded kind name (for display and export)
    pub fn expand_name(&self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Double => "DOUBLE",
            Self::Treble => "TREBLE",
            Self::Bull => "OUTER BULL",
            Self::DoubleBull => "DOUBLE BULL",
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A single scoring region of the board.
///
/// The bull ring is modelled as multiplier 1 (outer bull, 25) and
/// multiplier 2 (double bull, 50), both with base number 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    pub base: u8,
    pub multiplier: u8,
    pub kind: SegmentKind,
    pub value: u32,
}

impl Segment {
    pub fn single(base: u8) -> Self {
        Self::wedge(base, 1, SegmentKind::Single)
    }

    pub fn double(base: u8) -> Self {
        Self::wedge(base, 2, SegmentKind::Double)
    }

    pub fn treble(base: u8) -> Self {
        Self::wedge(base, 3, SegmentKind::Treble)
    }

    pub fn outer_bull() -> Self {
        Self {
            base: BULL_BASE,
            multiplier: 1,
            kind: SegmentKind::Bull,
            value: 25,
        }
    }

    pub fn double_bull() -> Self {
        Self {
            base: BULL_BASE,
            multiplier: 2,
            kind: SegmentKind::DoubleBull,
            value: 50,
        }
    }

    fn wedge(base: u8, multiplier: u8, kind: SegmentKind) -> Self {
        Self {
            base,
            multiplier,
            kind,
            value: u32::from(base) * u32::from(multiplier),
        }
    }

    /// Board label, e.g. "20", "D16", "T20", "25", "BULL"
    pub fn label(&self) -> String {
        match self.kind {
            SegmentKind::Single => self.base.to_string(),
            SegmentKind::Double => format!("D{}", self.base),
            SegmentKind::Treble => format!("T{}", self.base),
            SegmentKind::Bull => "25".to_string(),
            SegmentKind::DoubleBull => "BULL".to_string(),
        }
    }

    pub fn is_double_sixteen(&self) -> bool {
        self.kind == SegmentKind::Double && self.value == 32
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
