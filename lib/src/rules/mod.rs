pub mod card_points;

use crate::primitives::*;
use std::cmp::Ordering;

// Strength of a rank within one suit: point value first; among the pointless
// ranks, face order 6 > 5 > 4 > 3 > 2.
pub fn compare_schlags(eschlag_fst: ESchlag, eschlag_snd: ESchlag) -> Ordering {
    let get_schlag_value = |eschlag: ESchlag| { match eschlag {
        ESchlag::S2 => 0,
        ESchlag::S3 => 1,
        ESchlag::S4 => 2,
        ESchlag::S5 => 3,
        ESchlag::S6 => 4,
        ESchlag::Queen => 5,
        ESchlag::Jack => 6,
        ESchlag::King => 7,
        ESchlag::Seven => 8,
        ESchlag::Ace => 9,
    } };
    get_schlag_value(eschlag_fst).cmp(&get_schlag_value(eschlag_snd))
}

// Only meaningful relative to a fixed lead and trump suit; within a trick it
// is antisymmetric since a trick cannot contain a card twice.
pub fn compare_cards(efarbe_lead: EFarbe, efarbe_trump: EFarbe, card_fst: ECard, card_snd: ECard) -> Ordering {
    if card_fst.farbe()==card_snd.farbe() {
        compare_schlags(card_fst.schlag(), card_snd.schlag())
    } else {
        match (card_fst.farbe()==efarbe_trump, card_snd.farbe()==efarbe_trump) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => unreachable!("distinct suits cannot both be trump"),
            (false, false) => match (card_fst.farbe()==efarbe_lead, card_snd.farbe()==efarbe_lead) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (true, true) => unreachable!("distinct suits cannot both be the lead suit"),
                (false, false) => compare_schlags(card_fst.schlag(), card_snd.schlag()),
            },
        }
    }
}

// Returns the winning seat, not a player: only cards of the lead or trump
// suit can take a trick, and the leading card is always eligible.
pub fn winner_position(trick: &STrick, efarbe_trump: EFarbe) -> EPosition {
    let efarbe_lead = trick.efarbe_lead();
    let fn_eligible = |card: ECard| card.farbe()==efarbe_lead || card.farbe()==efarbe_trump;
    let mut epos_winner = EPosition::EPOS0;
    for (epos, card) in trick.iter().skip(1) {
        if fn_eligible(card) {
            if let Ordering::Less = compare_cards(efarbe_lead, efarbe_trump, trick[epos_winner], card) {
                epos_winner = epos;
            }
        }
    }
    epos_winner
}
