use crate::primitives::*;
use crate::util::*;
use combine::{char::*, *};

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum VCardError {
    #[fail(display = "card '{}' is invalid: {}", str_card, str_reason)]
    CardFormat { str_card: String, str_reason: &'static str },
    #[fail(display = "invalid rank symbol '{}'", _0)]
    InvalidRank(char),
    #[fail(display = "invalid suit symbol '{}'", _0)]
    InvalidSuit(char),
}

pub fn farbe_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = EFarbe>
    where I::Error: ParseError<I::Item, I::Range, I::Position>, // Necessary due to rust-lang/rust#24159
{
    choice!(
        choice!(char('h'), char('H')).map(|_chr| EFarbe::Hearts),
        choice!(char('c'), char('C')).map(|_chr| EFarbe::Clubs),
        choice!(char('s'), char('S')).map(|_chr| EFarbe::Spades),
        choice!(char('d'), char('D')).map(|_chr| EFarbe::Diamonds)
    )
}

pub fn schlag_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = ESchlag>
    where I::Error: ParseError<I::Item, I::Range, I::Position>, // Necessary due to rust-lang/rust#24159
{
    choice!(
        choice!(char('a'), char('A')).map(|_chr| ESchlag::Ace),
        char('7').map(|_chr| ESchlag::Seven),
        choice!(char('k'), char('K')).map(|_chr| ESchlag::King),
        choice!(char('j'), char('J')).map(|_chr| ESchlag::Jack),
        choice!(char('q'), char('Q')).map(|_chr| ESchlag::Queen),
        char('6').map(|_chr| ESchlag::S6),
        char('5').map(|_chr| ESchlag::S5),
        char('4').map(|_chr| ESchlag::S4),
        char('3').map(|_chr| ESchlag::S3),
        char('2').map(|_chr| ESchlag::S2)
    )
}

// A card token is the rank followed by the suit ("AH", "2c").
pub fn card_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = ECard>
    where I::Error: ParseError<I::Item, I::Range, I::Position>, // Necessary due to rust-lang/rust#24159
{
    (schlag_parser(), farbe_parser()).map(|(eschlag, efarbe)| ECard::new(efarbe, eschlag))
}

pub fn parse_cards<C: std::iter::Extend<ECard>+Default>(str_cards: &str) -> Option<C> {
    spaces()
        .with(sep_by::<C,_,_>(card_parser(), spaces()))
        .skip(spaces())
        .skip(eof())
        // end of parser
        .parse(str_cards)
        .ok()
        .map(|pairoutconsumed| pairoutconsumed.0)
}

pub fn parse_card(str_card: &str) -> Result<ECard, VCardError> {
    parse_trimmed(str_card, card_parser())
        .map_err(|_err| card_error(str_card))
}

fn card_error(str_card: &str) -> VCardError {
    let vecchr = str_card.trim().chars().collect::<Vec<_>>();
    if let [chr_schlag, chr_farbe] = vecchr[..] {
        if ESchlag::from_char(chr_schlag).is_none() {
            VCardError::InvalidRank(chr_schlag)
        } else if EFarbe::from_char(chr_farbe).is_none() {
            VCardError::InvalidSuit(chr_farbe)
        } else {
            VCardError::CardFormat {
                str_card: str_card.to_string(),
                str_reason: "malformed card token",
            }
        }
    } else {
        VCardError::CardFormat {
            str_card: str_card.to_string(),
            str_reason: "a card token must contain exactly two characters (rank followed by suit)",
        }
    }
}

pub fn parse_trick(str_trick: &str) -> Result<STrick, Error> {
    let veccard = match parse_cards::<Vec<_>>(str_trick) {
        Some(veccard) => veccard,
        None => {
            // pinpoint the offending token
            for str_card in str_trick.split_whitespace() {
                parse_card(str_card)?;
            }
            bail!("could not parse trick '{}'", str_trick);
        }
    };
    if veccard.len()!=EPosition::SIZE {
        bail!("a trick must comprise exactly four cards; the given trick is: {}", str_trick);
    }
    Ok(STrick::new([veccard[0], veccard[1], veccard[2], veccard[3]]))
}

#[test]
fn test_cardvectorparser() {
    use crate::primitives::card_values::*;
    assert_eq!(
        verify!(parse_cards::<Vec<_>>("ah 2D 7h qS")).unwrap(),
        vec![HA, D2, H7, SQ]
    );
}

#[test]
fn test_parse_card() {
    use crate::primitives::card_values::*;
    assert_eq!(parse_card("AH"), Ok(HA));
    assert_eq!(parse_card("ah"), Ok(HA));
    assert_eq!(parse_card(" 2c "), Ok(C2));
    assert_eq!(parse_card("XH"), Err(VCardError::InvalidRank('X')));
    assert_eq!(parse_card("AX"), Err(VCardError::InvalidSuit('X')));
    assert_eq!(
        parse_card("A"),
        Err(VCardError::CardFormat {
            str_card: "A".to_string(),
            str_reason: "a card token must contain exactly two characters (rank followed by suit)",
        })
    );
    assert!(parse_card("AHC").is_err());
}

#[test]
fn test_parse_trick() {
    use crate::primitives::card_values::*;
    assert_eq!(
        unwrap!(parse_trick("AH 2D 5H 2H")).cards(),
        &[HA, D2, H5, H2],
    );
    assert!(parse_trick("AH 2D 5H").is_err());
    assert!(parse_trick("AH 2D 5H 2H 3H").is_err());
    assert!(parse_trick("AH 2D 5H XH").is_err());
    assert!(parse_trick("").is_err());
}
