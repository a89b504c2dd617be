//! Player identity: stable per-session ids and display names.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::domain::{DomainError, ValidationKind};

/// Stable per-session player identifier.
///
/// Ids are assigned sequentially at session start (`p1`..`p6`) and are the
/// only key the rounds' maps cross-reference. A restarted session re-assigns
/// ids from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u8);

impl PlayerId {
    /// 1-based roster slot.
    pub fn new(slot: u8) -> Self {
        debug_assert!(slot >= 1, "player slots are 1-based");
        Self(slot)
    }

    pub fn slot(self) -> u8 {
        self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "p{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slot = s
            .strip_prefix('p')
            .and_then(|digits| digits.parse::<u8>().ok())
            .filter(|&slot| slot >= 1);
        match slot {
            Some(slot) => Ok(Self(slot)),
            None => Err(DomainError::validation(
                ValidationKind::Other("ParsePlayerId".into()),
                format!("invalid player id: {s}"),
            )),
        }
    }
}

// PlayerId serde: the wire form is the `p<slot>` string so snapshot maps
// keyed by id serialize as JSON objects.
impl Serialize for PlayerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid player id: {s}")))
    }
}

/// One seated player: immutable id plus the display name fixed at start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
