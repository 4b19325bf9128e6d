//! Semantic face classification labels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Semantic label attached to a mesh face by the reconstruction subsystem.
///
/// The reconstruction engine stores one unsigned byte per face; the raw codes
/// are fixed by its wire format and decoded with [`FaceClassification::from_raw`].
/// Unrecognized codes decode to [`FaceClassification::None`], as does an
/// anchor that carries no classification buffer at all.
///
/// # Example
///
/// ```
/// use anchor_types::FaceClassification;
///
/// assert_eq!(FaceClassification::from_raw(2), FaceClassification::Floor);
/// assert_eq!(FaceClassification::from_raw(42), FaceClassification::None);
/// assert_eq!(FaceClassification::Seat.to_string(), "Seat");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum FaceClassification {
    /// No classification available.
    #[default]
    None = 0,
    /// A wall surface.
    Wall = 1,
    /// A floor surface.
    Floor = 2,
    /// A ceiling surface.
    Ceiling = 3,
    /// A table surface.
    Table = 4,
    /// A seat surface.
    Seat = 5,
    /// A window.
    Window = 6,
    /// A door.
    Door = 7,
}

impl FaceClassification {
    /// All classification variants, in raw-code order.
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Wall,
        Self::Floor,
        Self::Ceiling,
        Self::Table,
        Self::Seat,
        Self::Window,
        Self::Door,
    ];

    /// Decode a raw classification byte.
    ///
    /// Unrecognized codes map to [`FaceClassification::None`].
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Wall,
            2 => Self::Floor,
            3 => Self::Ceiling,
            4 => Self::Table,
            5 => Self::Seat,
            6 => Self::Window,
            7 => Self::Door,
            _ => Self::None,
        }
    }

    /// The raw wire code for this classification.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Human-readable label, suitable for 3D text placement.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Wall => "Wall",
            Self::Floor => "Floor",
            Self::Ceiling => "Ceiling",
            Self::Table => "Table",
            Self::Seat => "Seat",
            Self::Window => "Window",
            Self::Door => "Door",
        }
    }
}

impl std::fmt::Display for FaceClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trips_for_known_codes() {
        for classification in FaceClassification::ALL {
            assert_eq!(
                FaceClassification::from_raw(classification.raw()),
                classification
            );
        }
    }

    #[test]
    fn unknown_codes_decode_to_none() {
        assert_eq!(FaceClassification::from_raw(8), FaceClassification::None);
        assert_eq!(FaceClassification::from_raw(42), FaceClassification::None);
        assert_eq!(FaceClassification::from_raw(255), FaceClassification::None);
    }

    #[test]
    fn default_is_none() {
        assert_eq!(FaceClassification::default(), FaceClassification::None);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(FaceClassification::Wall.to_string(), "Wall");
        assert_eq!(FaceClassification::None.to_string(), "None");
    }
}
