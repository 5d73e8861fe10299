pub mod check;
pub mod score;

use crate::gamefile;
use failure::Error;
use suecascorer_lib::game::SGame;

pub fn input_files_arg(str_name: &'static str) -> clap::Arg<'static> {
    clap::Arg::new(str_name)
        .required(true)
        .takes_value(true)
        .multiple_values(true)
        .help("Game files ('.sueca' is appended to bare names) or glob patterns")
}

pub fn glob_files<'str_file>(
    itstr_file: impl Iterator<Item=&'str_file str>,
    mut fn_file: impl FnMut(&std::path::Path, String) -> Result<(), Error>,
) -> Result<(), Error> {
    for str_file in itstr_file {
        let path = gamefile::game_file_path(str_file);
        if path.is_file() {
            let str_input = std::fs::read_to_string(&path)?;
            fn_file(&path, str_input)?;
        } else {
            let mut b_found = false;
            for globresult in glob::glob(str_file)? {
                let path = globresult?;
                let str_input = std::fs::read_to_string(&path)?;
                b_found = true;
                fn_file(&path, str_input)?;
            }
            if !b_found {
                return Err(gamefile::SGameFileCouldNotBeFound(str_file.to_string()).into());
            }
        }
    }
    Ok(())
}

// Replays a game file through the engine; any rule violation surfaces as the
// engine's error for the offending trick.
pub fn load_game(str_input: &str) -> Result<SGame, Error> {
    let (card_trump, vectrick) = gamefile::parse_game_str(str_input)?;
    gamefile::assert_complete(&vectrick)?;
    let mut game = SGame::new(card_trump);
    for trick in vectrick {
        game.play_trick(trick)?;
    }
    Ok(game)
}
