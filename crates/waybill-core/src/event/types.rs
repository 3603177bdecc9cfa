//! Event kind enum covering the six wire codes in the log grammar.
//!
//! Each kind corresponds to one step of a parcel's journey. The string
//! representation uses the two-letter wire code from the log format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six event kinds in the logistics log.
///
/// Declaration order fixes [`ordinal`](Self::ordinal), which is the
/// low-order term of the event order key — do not reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Parcel registered: establishes sender/receiver and the planned route.
    Register,
    /// Parcel stored into a warehouse section.
    ArriveWarehouse,
    /// Parcel taken out of a warehouse section.
    RemoveFromWarehouse,
    /// Parcel unloaded from a route at a warehouse.
    UnloadRoute,
    /// Parcel transferred along a route between two warehouses.
    TransferRoute,
    /// Parcel enqueued for final delivery at its destination.
    Enqueue,
}

/// Error returned when parsing an unknown event kind code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event type '{raw}': expected one of RG, AR, RM, UR, TR, EN")]
pub struct UnknownEventKind {
    /// The unrecognised input token.
    pub raw: String,
}

impl EventKind {
    /// All known kinds in wire-catalog order.
    pub const ALL: [Self; 6] = [
        Self::Register,
        Self::ArriveWarehouse,
        Self::RemoveFromWarehouse,
        Self::UnloadRoute,
        Self::TransferRoute,
        Self::Enqueue,
    ];

    /// The canonical two-letter wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Register => "RG",
            Self::ArriveWarehouse => "AR",
            Self::RemoveFromWarehouse => "RM",
            Self::UnloadRoute => "UR",
            Self::TransferRoute => "TR",
            Self::Enqueue => "EN",
        }
    }

    /// Position in the wire catalog, the low-order term of the order key.
    #[must_use]
    pub const fn ordinal(self) -> i64 {
        match self {
            Self::Register => 0,
            Self::ArriveWarehouse => 1,
            Self::RemoveFromWarehouse => 2,
            Self::UnloadRoute => 3,
            Self::TransferRoute => 4,
            Self::Enqueue => 5,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RG" => Ok(Self::Register),
            "AR" => Ok(Self::ArriveWarehouse),
            "RM" => Ok(Self::RemoveFromWarehouse),
            "UR" => Ok(Self::UnloadRoute),
            "TR" => Ok(Self::TransferRoute),
            "EN" => Ok(Self::Enqueue),
            _ => Err(UnknownEventKind { raw: s.to_string() }),
        }
    }
}

// Custom serde: serialize as the two-letter wire code.
impl Serialize for EventKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(kind.code().parse::<EventKind>(), Ok(kind));
        }
    }

    #[test]
    fn ordinals_are_dense_and_ordered() {
        let ordinals: Vec<i64> = EventKind::ALL.iter().map(|kind| kind.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn unknown_code_is_an_error() {
        let err = "XX".parse::<EventKind>().unwrap_err();
        assert_eq!(err.raw, "XX");
        assert!(err.to_string().contains("unknown event type"));
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(EventKind::TransferRoute.to_string(), "TR");
    }
}
