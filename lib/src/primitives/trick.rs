use crate::primitives::*;
use crate::util::*;
use itertools::Itertools;
use std::{fmt, ops::Index};

// One completed round of four cards, one per seat. The card at seat 1 fixes
// the trick's lead suit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct STrick {
    acard: [ECard; EPosition::SIZE],
}

impl STrick {
    pub fn new(acard: [ECard; EPosition::SIZE]) -> Self {
        STrick { acard }
    }
    pub fn first_card(&self) -> ECard {
        self[EPosition::EPOS0]
    }
    pub fn efarbe_lead(&self) -> EFarbe {
        self.first_card().farbe()
    }
    pub fn iter(&self) -> impl Iterator<Item=(EPosition, ECard)> + '_ {
        EPosition::values().map(move |epos| (epos, self[epos]))
    }
    pub fn cards(&self) -> &[ECard; EPosition::SIZE] {
        &self.acard
    }
}

impl Index<EPosition> for STrick {
    type Output = ECard;
    fn index(&self, epos: EPosition) -> &ECard {
        &self.acard[epos.to_usize()]
    }
}

impl fmt::Display for STrick {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.iter().map(|(_epos, card)| card).join(" "))
    }
}

#[test]
fn test_trick() {
    use crate::primitives::card_values::*;
    let trick = STrick::new([H7, HA, H4, H5]);
    assert_eq!(trick.first_card(), H7);
    assert_eq!(trick.efarbe_lead(), EFarbe::Hearts);
    assert_eq!(trick[EPosition::EPOS1], HA);
    assert_eq!(trick.iter().count(), EPosition::SIZE);
    assert_eq!(
        trick.iter().map(|(_epos, card)| card).collect::<Vec<_>>(),
        vec![H7, HA, H4, H5],
    );
    assert_eq!(trick.to_string(), "7H AH 4H 5H");
}
