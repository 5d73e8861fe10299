use failure::{format_err, Error, Fail};
use suecascorer_lib::game::N_TRICKS_PER_GAME;
use suecascorer_lib::primitives::*;

#[derive(Debug, Fail)]
#[fail(display = "could not find the game file '{}'", _0)]
pub struct SGameFileCouldNotBeFound(pub String);

#[derive(Debug, Fail)]
#[fail(display = "the sueca game is incomplete: has {} tricks, but should have {}", n_trick, n_trick_required)]
pub struct SSuecaGameIncomplete {
    pub n_trick: usize,
    pub n_trick_required: usize,
}

// Bare file names get the customary extension appended ("mygame" names the
// file "mygame.sueca").
pub fn game_file_path(str_file: &str) -> std::path::PathBuf {
    let path = std::path::PathBuf::from(str_file);
    if path.extension().is_none() {
        path.with_extension("sueca")
    } else {
        path
    }
}

// First line: the trump card. Each further line: one trick, four card tokens
// in seating order. Surrounding whitespace and blank lines are ignored.
pub fn parse_game_str(str_game: &str) -> Result<(ECard, Vec<STrick>), Error> {
    let mut itstr_line = str_game.lines()
        .map(str::trim)
        .filter(|str_line| !str_line.is_empty());
    let card_trump = parse_card(
        itstr_line.next().ok_or_else(|| format_err!("empty game file"))?
    )?;
    Ok((
        card_trump,
        itstr_line.map(parse_trick).collect::<Result<Vec<_>,_>>()?,
    ))
}

pub fn assert_complete(vectrick: &[STrick]) -> Result<(), SSuecaGameIncomplete> {
    if vectrick.len() < N_TRICKS_PER_GAME {
        Err(SSuecaGameIncomplete {
            n_trick: vectrick.len(),
            n_trick_required: N_TRICKS_PER_GAME,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suecascorer_util::*;

    #[test]
    fn test_game_file_path() {
        assert_eq!(game_file_path("mygame"), std::path::PathBuf::from("mygame.sueca"));
        assert_eq!(game_file_path("mygame.sueca"), std::path::PathBuf::from("mygame.sueca"));
        assert_eq!(game_file_path("dir/other.txt"), std::path::PathBuf::from("dir/other.txt"));
    }

    #[test]
    fn test_parse_game_str() {
        use suecascorer_lib::primitives::card_values::*;
        let (card_trump, vectrick) = unwrap!(parse_game_str(
            "AH\n7H AH 4H 5H\n\nKH JH QH 6H\n"
        ));
        assert_eq!(card_trump, HA);
        assert_eq!(vectrick.len(), 2);
        assert_eq!(vectrick[0][EPosition::EPOS1], HA);
        assert!(parse_game_str("").is_err());
        assert!(parse_game_str("AH\n7H AH 4H").is_err());
        assert!(parse_game_str("XX\n7H AH 4H 5H").is_err());
    }

    #[test]
    fn test_assert_complete() {
        use suecascorer_lib::primitives::card_values::*;
        let trick = STrick::new([H7, HA, H4, H5]);
        assert!(assert_complete(&vec![trick; N_TRICKS_PER_GAME]).is_ok());
        assert!(assert_complete(&vec![trick; N_TRICKS_PER_GAME-1]).is_err());
        assert!(assert_complete(&[]).is_err());
    }
}
