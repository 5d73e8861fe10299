use crate::primitives::*;
use crate::rules::{self, card_points::points_trick};
use crate::util::*;
use arrayvec::ArrayVec;

pub const N_TRICKS_PER_GAME: usize = ECard::SIZE / EPlayerIndex::SIZE;

// The deal fixes player 2 as the dealer; the trump card belongs to their hand
// and may only be played by them.
pub const EPI_DEALER: EPlayerIndex = EPlayerIndex::EPI1;

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum VGameError {
    #[fail(display = "the card {} has already been played", _0)]
    CardAlreadyPlayed(ECard),
    #[fail(display = "trick {}: the trump card is played by player {} (position {}), not by the dealer", n_trick, epi, epos)]
    DealerMissingTrump {
        n_trick: usize, // 1-based, as shown to users
        epos: EPosition,
        epi: EPlayerIndex,
    },
    #[fail(display = "player {} did not follow the lead suit ({}) in trick {} but played it in trick {}", epi, efarbe_lead, n_trick_accused, n_trick_proof)]
    IllegalCardPlayed {
        epi: EPlayerIndex,
        efarbe_lead: EFarbe,
        n_trick_accused: usize, // 1-based
        n_trick_proof: usize,   // 1-based
    },
    #[fail(display = "the game is already complete ({} tricks)", _0)]
    GameComplete(usize),
}

fn mapposepi_initial() -> EnumMap<EPosition, EPlayerIndex> {
    EPosition::map_from_fn(|epos| EPlayerIndex::wrapped_from_usize(epos.to_usize()))
}

fn mapposepi_rotated(epi_winner: EPlayerIndex) -> EnumMap<EPosition, EPlayerIndex> {
    EPosition::map_from_fn(|epos| epi_winner.wrapping_add(epos.to_usize()))
}

// A completed or partially recorded deal: the trump card and the tricks
// accepted so far, in play order. Tricks are only ever appended, and only
// after all legality checks passed; queries recompute the seat-to-player
// assignment from the winner chain instead of storing it.
#[derive(Debug, Clone)]
pub struct SGame {
    card_trump: ECard,
    vectrick: ArrayVec<STrick, N_TRICKS_PER_GAME>,
}

impl SGame {
    pub fn new(card_trump: ECard) -> Self {
        SGame {
            card_trump,
            vectrick: ArrayVec::new(),
        }
    }

    pub fn card_trump(&self) -> ECard {
        self.card_trump
    }

    pub fn efarbe_trump(&self) -> EFarbe {
        self.card_trump.farbe()
    }

    pub fn tricks(&self) -> &[STrick] {
        &self.vectrick
    }

    pub fn trick_count(&self) -> usize {
        self.vectrick.len()
    }

    pub fn game_finished(&self) -> bool {
        self.vectrick.is_full()
    }

    fn winner_position(&self, trick: &STrick) -> EPosition {
        rules::winner_position(trick, self.efarbe_trump())
    }

    // Seat-to-player assignments for the trick indices 0..=trick_count():
    // trick 0 seats the players in identity order, and the winner of each
    // trick takes seat 1 of the next one, the others following in rotation.
    fn vecmapposepi(&self) -> Vec<EnumMap<EPosition, EPlayerIndex>> {
        let mut vecmapposepi = vec![mapposepi_initial()];
        for trick in self.vectrick.iter() {
            let epi_winner = vecmapposepi[vecmapposepi.len()-1][self.winner_position(trick)];
            vecmapposepi.push(mapposepi_rotated(epi_winner));
        }
        vecmapposepi
    }

    pub fn players_at_trick(&self, i_trick: usize) -> EnumMap<EPosition, EPlayerIndex> {
        assert!(i_trick<=self.vectrick.len());
        self.vectrick[0..i_trick].iter().fold(mapposepi_initial(), |mapposepi, trick| {
            let epi_winner = mapposepi[self.winner_position(trick)];
            mapposepi_rotated(epi_winner)
        })
    }

    pub fn player_at_position(&self, epos: EPosition, i_trick: usize) -> EPlayerIndex {
        self.players_at_trick(i_trick)[epos]
    }

    pub fn position_of_player(&self, epi: EPlayerIndex, i_trick: usize) -> EPosition {
        let mapposepi = self.players_at_trick(i_trick);
        unwrap!(EPosition::values().find(|&epos| mapposepi[epos]==epi)) // every player occupies exactly one seat
    }

    pub fn completed_tricks_winner_index(&self) -> impl Iterator<Item=(&STrick, EPlayerIndex)> + '_ {
        let vecmapposepi = self.vecmapposepi();
        self.vectrick.iter().enumerate()
            .map(move |(i_trick, trick)| (trick, vecmapposepi[i_trick][self.winner_position(trick)]))
    }

    // Accepts the next trick of the deal, or rejects it without touching the
    // recorded game. The checks run in a fixed order: duplicate cards, the
    // dealer holding the trump card, then the suit-following scan over the
    // whole history (the new trick can prove a past trick illegal).
    pub fn play_trick(&mut self, trick: STrick) -> Result<(), VGameError> {
        if self.vectrick.is_full() {
            return Err(VGameError::GameComplete(self.vectrick.len()));
        }
        let vecmapposepi = self.vecmapposepi();

        let mut setcard_played = EnumSet::new_empty();
        for trick_played in self.vectrick.iter() {
            for (_epos, card) in trick_played.iter() {
                setcard_played.insert(card);
            }
        }
        for (_epos, card) in trick.iter() {
            if setcard_played.contains(card) {
                return Err(VGameError::CardAlreadyPlayed(card));
            }
        }

        let mapposepi_current = &vecmapposepi[self.vectrick.len()];
        for (epos, card) in trick.iter() {
            if card==self.card_trump {
                let epi = mapposepi_current[epos];
                if epi!=EPI_DEALER {
                    return Err(VGameError::DealerMissingTrump {
                        n_trick: self.vectrick.len()+1,
                        epos,
                        epi,
                    });
                }
            }
        }

        // A player who discarded off-suit on some lead is proven guilty as
        // soon as they play that suit in a later trick; a player who never
        // shows the suit again is never convicted.
        for (i_trick_accused, trick_accused) in self.vectrick.iter().enumerate() {
            let efarbe_lead = trick_accused.efarbe_lead();
            for (epos_accused, card_accused) in trick_accused.iter() {
                if card_accused.farbe()==efarbe_lead {
                    continue;
                }
                let epi_accused = vecmapposepi[i_trick_accused][epos_accused];
                for (i_trick_later, trick_later) in itertools::chain(self.vectrick.iter(), std::iter::once(&trick))
                    .enumerate()
                    .skip(i_trick_accused+1)
                {
                    for (epos_later, card_later) in trick_later.iter() {
                        if card_later.farbe()==efarbe_lead && vecmapposepi[i_trick_later][epos_later]==epi_accused {
                            return Err(VGameError::IllegalCardPlayed {
                                epi: epi_accused,
                                efarbe_lead,
                                n_trick_accused: i_trick_accused+1,
                                n_trick_proof: i_trick_later+1,
                            });
                        }
                    }
                }
            }
        }

        self.vectrick.push(trick);
        Ok(())
    }

    pub fn score(&self) -> EnumMap<EPair, isize> {
        let mut mapepairn_points = EPair::map_from_fn(|_epair| 0);
        for (trick, epi_winner) in self.completed_tricks_winner_index() {
            mapepairn_points[epi_winner.pair()] += points_trick(trick);
        }
        mapepairn_points
    }

    pub fn cards_of(&self, epi: EPlayerIndex) -> Vec<ECard> {
        let vecmapposepi = self.vecmapposepi();
        self.vectrick.iter().enumerate()
            .map(|(i_trick, trick)| {
                let mapposepi = &vecmapposepi[i_trick];
                unwrap!(trick.iter().filter_map(|(epos, card)| if_then_some!(mapposepi[epos]==epi, card)).next())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::card_values::*;

    fn trick_from_str(str_trick: &str) -> STrick {
        unwrap!(parse_trick(str_trick))
    }

    // Trump AH. Pair A (players 1/3) takes 61 points, pair B (players 2/4)
    // takes 59. Hand-checked: every trick is followed except the two suit
    // changeovers (tricks 3 and 8), whose discarded suits never reappear.
    const ASTR_TRICK_COMPLETE_GAME: [&str; N_TRICKS_PER_GAME] = [
        "7H AH 4H 5H",
        "KH JH QH 6H",
        "3H 2H 4C 5C",
        "2C AC KC 6C",
        "3C 7C JC QC",
        "2S AS 7S 3S",
        "KS JS QS 6S",
        "5S 4S KD QD",
        "4D AD JD 2D",
        "3D 7D 5D 6D",
    ];

    fn complete_game() -> SGame {
        let mut game = SGame::new(HA);
        for str_trick in ASTR_TRICK_COMPLETE_GAME {
            unwrap!(game.play_trick(trick_from_str(str_trick)));
        }
        game
    }

    #[test]
    fn test_accessors() {
        let game = SGame::new(HA);
        assert_eq!(game.card_trump(), HA);
        assert_eq!(game.efarbe_trump(), EFarbe::Hearts);
        assert_eq!(game.trick_count(), 0);
        assert!(!game.game_finished());
        let game = complete_game();
        assert_eq!(game.trick_count(), N_TRICKS_PER_GAME);
        assert!(game.game_finished());
        assert_eq!(game.tricks()[0], trick_from_str("7H AH 4H 5H"));
    }

    #[test]
    fn test_initial_seating() {
        let game = SGame::new(HA);
        let mapposepi = game.players_at_trick(0);
        for epos in EPosition::values() {
            assert_eq!(mapposepi[epos].to_usize(), epos.to_usize());
        }
    }

    #[test]
    fn test_winner_chain() {
        let game = complete_game();
        assert_eq!(
            game.completed_tricks_winner_index().map(|(_trick, epi)| epi).collect::<Vec<_>>(),
            ["2", "2", "2", "3", "4", "1", "1", "1", "2", "3"].iter()
                .map(|str_epi| unwrap!(str_epi.parse::<EPlayerIndex>()))
                .collect::<Vec<_>>(),
        );
    }

    #[test]
    fn test_rotation_law() {
        // the winner of trick t leads trick t+1
        let game = complete_game();
        for (i_trick, (_trick, epi_winner)) in game.completed_tricks_winner_index().enumerate() {
            assert_eq!(game.player_at_position(EPosition::EPOS0, i_trick+1), epi_winner);
        }
    }

    #[test]
    fn test_position_player_roundtrip() {
        let game = complete_game();
        for i_trick in 0..=game.trick_count() {
            for epi in EPlayerIndex::values() {
                assert_eq!(game.player_at_position(game.position_of_player(epi, i_trick), i_trick), epi);
            }
        }
        // trick 5 seats players as 3, 4, 1, 2
        assert_eq!(game.player_at_position(EPosition::EPOS0, 4), EPlayerIndex::EPI2);
        assert_eq!(game.position_of_player(EPlayerIndex::EPI0, 4), EPosition::EPOS2);
    }

    #[test]
    fn test_score_complete_game() {
        let game = complete_game();
        let mapepairn_points = game.score();
        assert_eq!(mapepairn_points[EPair::PairA], 61);
        assert_eq!(mapepairn_points[EPair::PairB], 59);
        assert_eq!(mapepairn_points[EPair::PairA] + mapepairn_points[EPair::PairB], 120);
    }

    #[test]
    fn test_queries_idempotent() {
        let game = complete_game();
        for epair in EPair::values() {
            assert_eq!(game.score()[epair], game.score()[epair]);
        }
        for epi in EPlayerIndex::values() {
            assert_eq!(game.cards_of(epi), game.cards_of(epi));
        }
    }

    #[test]
    fn test_cards_of() {
        let game = complete_game();
        let assert_cards = |epi, str_cards| {
            assert_eq!(
                game.cards_of(epi),
                verify!(parse_cards::<Vec<_>>(str_cards)).unwrap(),
            );
        };
        assert_cards(EPlayerIndex::EPI0, "7H 6H 5C 6C JC AS KS 5S 4D 6D");
        assert_cards(EPlayerIndex::EPI1, "AH KH 3H 2C QC 7S JS 4S AD 3D");
        assert_cards(EPlayerIndex::EPI2, "4H JH 2H AC 3C 3S QS KD JD 7D");
        assert_cards(EPlayerIndex::EPI3, "5H QH 4C KC 7C 2S 6S QD 2D 5D");
        // every player contributes one card per trick, and nobody shares one
        let mut setcard = EnumSet::new_empty();
        for epi in EPlayerIndex::values() {
            let veccard = game.cards_of(epi);
            assert_eq!(veccard.len(), N_TRICKS_PER_GAME);
            for card in veccard {
                assert!(setcard.insert(card));
            }
        }
        assert!(setcard.is_full());
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let mut game = SGame::new(HA);
        unwrap!(game.play_trick(trick_from_str("7H AH 4H 5H")));
        assert_eq!(
            game.play_trick(trick_from_str("KH JH QH AH")),
            Err(VGameError::CardAlreadyPlayed(HA)),
        );
        assert_eq!(game.trick_count(), 1);
        // the rejected trick left no trace: only trick 1's points are counted
        assert_eq!(game.score()[EPair::PairB], 21);
        assert_eq!(game.score()[EPair::PairA], 0);
    }

    #[test]
    fn test_duplicate_only_checked_against_previous_tricks() {
        // a card repeated within one submitted trick slips through; only
        // cards of earlier tricks are compared
        let mut game = SGame::new(HA);
        unwrap!(game.play_trick(trick_from_str("7H AH 7H 5H")));
    }

    #[test]
    fn test_dealer_must_hold_trump() {
        let mut game = SGame::new(HA);
        assert_eq!(
            game.play_trick(trick_from_str("AH 7H 4H 5H")),
            Err(VGameError::DealerMissingTrump {
                n_trick: 1,
                epos: EPosition::EPOS0,
                epi: EPlayerIndex::EPI0,
            }),
        );
        assert_eq!(game.trick_count(), 0);
        // fine once the trump card sits at the dealer's seat
        unwrap!(game.play_trick(trick_from_str("7H AH 4H 5H")));
        // the dealer rotates with the seating: player 2 won trick 1, so they
        // lead trick 2 and a trump card elsewhere would be rejected again
        assert_eq!(game.player_at_position(EPosition::EPOS0, 1), EPI_DEALER);
    }

    #[test]
    fn test_dealer_check_applies_to_later_tricks() {
        let mut game = SGame::new(HA);
        unwrap!(game.play_trick(trick_from_str("2H 4H 5H 6H")));
        // trick 1 went to player 4 (6H); seating for trick 2 is 4, 1, 2, 3,
        // so the trump card is only legal at position 3
        assert_eq!(
            game.completed_tricks_winner_index().map(|(_trick, epi)| epi).collect::<Vec<_>>(),
            vec![EPlayerIndex::EPI3],
        );
        assert_eq!(
            game.play_trick(trick_from_str("3H AH 7H KH")),
            Err(VGameError::DealerMissingTrump {
                n_trick: 2,
                epos: EPosition::EPOS1,
                epi: EPlayerIndex::EPI0,
            }),
        );
        unwrap!(game.play_trick(trick_from_str("3H 7H AH KH")));
    }

    #[test]
    fn test_retroactive_suit_following() {
        let mut game = SGame::new(HA);
        unwrap!(game.play_trick(trick_from_str("2H AH 4H 5H")));
        // player 1 (seat 4 of trick 2) discards a diamond on a club lead
        unwrap!(game.play_trick(trick_from_str("2C 3C 4C KD")));
        // ... and playing a club later proves the discard illegal
        assert_eq!(
            game.play_trick(trick_from_str("7S 5C 2S 3S")),
            Err(VGameError::IllegalCardPlayed {
                epi: EPlayerIndex::EPI0,
                efarbe_lead: EFarbe::Clubs,
                n_trick_accused: 2,
                n_trick_proof: 3,
            }),
        );
        assert_eq!(game.trick_count(), 2);
        // without the club, nothing ever proves the discard
        unwrap!(game.play_trick(trick_from_str("7S 2S 3S 4S")));
        assert_eq!(game.trick_count(), 3);
    }

    #[test]
    fn test_game_complete() {
        let mut game = complete_game();
        assert_eq!(
            game.play_trick(trick_from_str("3D 7D 5D 6D")),
            Err(VGameError::GameComplete(N_TRICKS_PER_GAME)),
        );
        assert_eq!(game.trick_count(), N_TRICKS_PER_GAME);
    }
}
