use crate::util::*;
use std::{fmt, str::FromStr};

// A seat within one trick's card order. The seat is not a player: identities
// rotate over the seats from trick to trick (the winner of a trick leads the
// next one). Seat 1 always leads; seats are numbered 1-4 towards the outside
// world.
plain_enum_mod!(modepos, EPosition {
    EPOS0, EPOS1, EPOS2, EPOS3,
});

impl fmt::Display for EPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_usize() + 1)
    }
}
impl FromStr for EPosition {
    type Err = &'static str;
    fn from_str(str_epos: &str) -> Result<Self, Self::Err> {
        usize::from_str(str_epos).ok()
            .and_then(|n_epos| n_epos.checked_sub(1))
            .and_then(EPosition::checked_from_usize)
            .ok_or("Could not convert to EPosition (positions are numbered 1 to 4)")
    }
}

#[test]
fn test_position_from_str() {
    assert_eq!(EPosition::from_str("1"), Ok(EPosition::EPOS0));
    assert_eq!(EPosition::from_str("4"), Ok(EPosition::EPOS3));
    assert!(EPosition::from_str("0").is_err());
    assert!(EPosition::from_str("5").is_err());
    assert_eq!(EPosition::EPOS2.to_string(), "3");
}
