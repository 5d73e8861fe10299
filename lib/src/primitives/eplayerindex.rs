use crate::util::*;
use std::{fmt, str::FromStr};
use serde_repr::Serialize_repr;

// A player's fixed identity for the whole deal. Players 1 and 3 form one
// pair, players 2 and 4 the other; identities are numbered 1-4 towards the
// outside world.
plain_enum_mod!(modepi, derive(Serialize_repr, Hash,), map_derive(), EPlayerIndex {
    EPI0, EPI1, EPI2, EPI3,
});

impl fmt::Display for EPlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_usize() + 1)
    }
}
impl FromStr for EPlayerIndex {
    type Err = &'static str;
    fn from_str(str_epi: &str) -> Result<Self, Self::Err> {
        usize::from_str(str_epi).ok()
            .and_then(|n_epi| n_epi.checked_sub(1))
            .and_then(EPlayerIndex::checked_from_usize)
            .ok_or("Could not convert to EPlayerIndex (players are numbered 1 to 4)")
    }
}

plain_enum_mod!(modepair, EPair {
    PairA,
    PairB,
});

impl fmt::Display for EPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::PairA => "A",
            Self::PairB => "B",
        })
    }
}

impl EPlayerIndex {
    pub fn pair(self) -> EPair {
        match self {
            Self::EPI0 | Self::EPI2 => EPair::PairA,
            Self::EPI1 | Self::EPI3 => EPair::PairB,
        }
    }
}

#[test]
fn test_playerindex_from_str() {
    assert_eq!(EPlayerIndex::from_str("1"), Ok(EPlayerIndex::EPI0));
    assert_eq!(EPlayerIndex::from_str("4"), Ok(EPlayerIndex::EPI3));
    assert!(EPlayerIndex::from_str("0").is_err());
    assert!(EPlayerIndex::from_str("5").is_err());
    assert!(EPlayerIndex::from_str("first").is_err());
}

#[test]
fn test_pair() {
    assert_eq!(EPlayerIndex::EPI0.pair(), EPair::PairA);
    assert_eq!(EPlayerIndex::EPI1.pair(), EPair::PairB);
    assert_eq!(EPlayerIndex::EPI2.pair(), EPair::PairA);
    assert_eq!(EPlayerIndex::EPI3.pair(), EPair::PairB);
}
