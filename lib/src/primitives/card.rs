use crate::util::*;
use std::{
    fmt,
};
use serde::{Serializer};

plain_enum_mod!(modefarbe, EFarbe {
    Hearts,
    Clubs,
    Spades,
    Diamonds,
});

impl fmt::Display for EFarbe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
        } )
    }
}

impl EFarbe {
    pub fn to_char(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Clubs => 'C',
            Self::Spades => 'S',
            Self::Diamonds => 'D',
        }
    }
    pub fn from_char(chr_farbe: char) -> Option<EFarbe> {
        match chr_farbe.to_ascii_uppercase() {
            'H' => Some(Self::Hearts),
            'C' => Some(Self::Clubs),
            'S' => Some(Self::Spades),
            'D' => Some(Self::Diamonds),
            _ => None,
        }
    }
}

// Ranks in descending trick strength. Sueca's Jack outranks the Queen.
plain_enum_mod!(modeschlag, ESchlag {
    Ace,
    Seven,
    King,
    Jack,
    Queen,
    S6,
    S5,
    S4,
    S3,
    S2,
});

impl ESchlag {
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Seven => '7',
            Self::King => 'K',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::S6 => '6',
            Self::S5 => '5',
            Self::S4 => '4',
            Self::S3 => '3',
            Self::S2 => '2',
        }
    }
    pub fn from_char(chr_schlag: char) -> Option<ESchlag> {
        match chr_schlag.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            '7' => Some(Self::Seven),
            'K' => Some(Self::King),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            '6' => Some(Self::S6),
            '5' => Some(Self::S5),
            '4' => Some(Self::S4),
            '3' => Some(Self::S3),
            '2' => Some(Self::S2),
            _ => None,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub enum ECard {
    HA, H7, HK, HJ, HQ, H6, H5, H4, H3, H2,
    CA, C7, CK, CJ, CQ, C6, C5, C4, C3, C2,
    SA, S7, SK, SJ, SQ, S6, S5, S4, S3, S2,
    DA, D7, DK, DJ, DQ, D6, D5, D4, D3, D2,
}

pub mod card_values {
    pub use super::ECard::*;
}

impl serde::Serialize for ECard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ECard {
    fn deserialize<D>(deserializer: D) -> Result<ECard, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        parse_trimmed(
            &String::deserialize(deserializer)?,
            crate::primitives::cardvector::card_parser(),
        ).map_err(serde::de::Error::custom)
    }
}

impl fmt::Debug for ECard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// Canonical token form: rank symbol followed by suit symbol ("AH", "2C").
impl fmt::Display for ECard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.schlag().to_char(), self.farbe().to_char())
    }
}

impl ECard {
    pub const fn new(efarbe : EFarbe, eschlag : ESchlag) -> ECard {
        unsafe {
            std::mem::transmute(efarbe as u8 * (ESchlag::SIZE as u8) + eschlag as u8)
        }
    }
    pub const fn farbe(self) -> EFarbe {
        unsafe{ std::mem::transmute(self as usize / ESchlag::SIZE) }
    }
    pub const fn schlag(self) -> ESchlag {
        unsafe{ std::mem::transmute(self as usize % ESchlag::SIZE) }
    }
}

unsafe impl PlainEnum for ECard {
    const SIZE : usize = EFarbe::SIZE*ESchlag::SIZE;
    type EnumMapArray<T> = [T; ECard::SIZE];
    unsafe fn from_usize(n: usize) -> Self {
        debug_assert!(n < Self::SIZE);
        std::mem::transmute(n.as_num::<u8>())
    }
    fn to_usize(self) -> usize {
        (self as u8).as_num::<usize>()
    }
}

#[test]
fn test_farbe_schlag_enumerators() {
    assert_eq!(EFarbe::values().count(), 4);
    assert_eq!(ESchlag::values().count(), 10);
    assert_eq!(<ECard as PlainEnum>::values().count(), 40);
}

#[test]
fn test_card_ctor() {
    macro_rules! explicit_test{($($efarbe:ident, $eschlag:ident, $card:ident)+) => {{
        $({
            const CARD : ECard = ECard::new(EFarbe::$efarbe, ESchlag::$eschlag);
            assert_eq!(CARD, ECard::$card);
            const EFARBE : EFarbe = CARD.farbe();
            assert_eq!(EFARBE, EFarbe::$efarbe);
            const ESCHLAG : ESchlag = CARD.schlag();
            assert_eq!(ESCHLAG, ESchlag::$eschlag);
        })+
    }}}
    explicit_test!(
        Hearts, Ace, HA
        Hearts, Seven, H7
        Hearts, King, HK
        Hearts, Jack, HJ
        Hearts, Queen, HQ
        Hearts, S6, H6
        Hearts, S5, H5
        Hearts, S4, H4
        Hearts, S3, H3
        Hearts, S2, H2
        Clubs, Ace, CA
        Clubs, Seven, C7
        Clubs, King, CK
        Clubs, Jack, CJ
        Clubs, Queen, CQ
        Clubs, S6, C6
        Clubs, S5, C5
        Clubs, S4, C4
        Clubs, S3, C3
        Clubs, S2, C2
        Spades, Ace, SA
        Spades, Seven, S7
        Spades, King, SK
        Spades, Jack, SJ
        Spades, Queen, SQ
        Spades, S6, S6
        Spades, S5, S5
        Spades, S4, S4
        Spades, S3, S3
        Spades, S2, S2
        Diamonds, Ace, DA
        Diamonds, Seven, D7
        Diamonds, King, DK
        Diamonds, Jack, DJ
        Diamonds, Queen, DQ
        Diamonds, S6, D6
        Diamonds, S5, D5
        Diamonds, S4, D4
        Diamonds, S3, D3
        Diamonds, S2, D2
    )
}

#[test]
fn test_serialization() {
    macro_rules! test_card(($(($card:ident, $str_card:expr))*) => {
        $(
            let card = ECard::$card;
            serde_test::assert_tokens(&card, &[
                serde_test::Token::Str($str_card),
            ]);
        )*
    });
    test_card!(
        (HA, "AH") (H7, "7H") (HK, "KH") (HJ, "JH") (HQ, "QH")
        (H6, "6H") (H5, "5H") (H4, "4H") (H3, "3H") (H2, "2H")
        (CA, "AC") (C7, "7C") (CK, "KC") (CJ, "JC") (CQ, "QC")
        (C6, "6C") (C5, "5C") (C4, "4C") (C3, "3C") (C2, "2C")
        (SA, "AS") (S7, "7S") (SK, "KS") (SJ, "JS") (SQ, "QS")
        (S6, "6S") (S5, "5S") (S4, "4S") (S3, "3S") (S2, "2S")
        (DA, "AD") (D7, "7D") (DK, "KD") (DJ, "JD") (DQ, "QD")
        (D6, "6D") (D5, "5D") (D4, "4D") (D3, "3D") (D2, "2D")
    );
}
