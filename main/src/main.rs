mod gamefile;
mod subcommands;

use failure::Error;

fn main() -> Result<(), Error> {
    suecascorer_logging::init_logging()?;
    macro_rules! subcommands{($(($mod:ident, $str_cmd:expr))*) => {
        let clapmatches = clap::Command::new("sueca")
            .about("Validate and score completed sueca deals")
            $(.subcommand(subcommands::$mod::subcommand($str_cmd)))*
            .get_matches();
        $(
            if let Some(clapmatches_subcommand)=clapmatches.subcommand_matches($str_cmd) {
                return subcommands::$mod::run(clapmatches_subcommand);
            }
        )*
    }}
    subcommands!(
        (score, "score")
        (check, "check")
    );
    Ok(())
}
