use failure::{bail, Error};
use suecascorer_logging::info;
use suecascorer_util::*;

pub fn subcommand(str_subcommand: &'static str) -> clap::Command<'static> {
    clap::Command::new(str_subcommand)
        .about("Check game files for rule violations without scoring them")
        .arg(super::input_files_arg("file"))
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let mut n_invalid = 0;
    super::glob_files(
        unwrap!(clapmatches.values_of("file")),
        |path, str_input| {
            info!("checking {}", path.display());
            match super::load_game(&str_input) {
                Ok(_game) => println!("{}: ok", path.display()),
                Err(err) => {
                    n_invalid += 1;
                    println!("{}: {}", path.display(), err);
                }
            }
            Ok(())
        },
    )?;
    if 0<n_invalid {
        bail!("{} invalid game file(s)", n_invalid);
    }
    Ok(())
}
