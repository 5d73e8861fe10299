use failure::Error;
use itertools::Itertools;
use plain_enum::*;
use std::cmp::Ordering;
use suecascorer_lib::primitives::*;
use suecascorer_logging::info;
use suecascorer_util::*;

pub fn subcommand(str_subcommand: &'static str) -> clap::Command<'static> {
    clap::Command::new(str_subcommand)
        .about("Score completed sueca games and report the winning pair")
        .arg(super::input_files_arg("file"))
        .arg(clap::Arg::new("cards")
            .short('c')
            .long("cards")
            .help("Show the cards each player held during the game")
        )
        .arg(clap::Arg::new("game")
            .short('g')
            .long("game")
            .help("Show the trump card and the accepted tricks")
        )
        .arg(clap::Arg::new("json")
            .long("json")
            .help("Emit one JSON record per game instead of plain text")
        )
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let b_show_cards = clapmatches.is_present("cards");
    let b_show_game = clapmatches.is_present("game");
    let b_json = clapmatches.is_present("json");
    super::glob_files(
        unwrap!(clapmatches.values_of("file")),
        |path, str_input| {
            info!("scoring {}", path.display());
            let game = super::load_game(&str_input)?;
            let mapepairn_points = game.score();
            let n_points_a = mapepairn_points[EPair::PairA];
            let n_points_b = mapepairn_points[EPair::PairB];
            if b_json {
                let mapstr_cards = EPlayerIndex::values()
                    .map(|epi| (
                        format!("player{}", epi),
                        serde_json::json!(
                            game.cards_of(epi).iter().map(|card| card.to_string()).collect::<Vec<_>>()
                        ),
                    ))
                    .collect::<serde_json::Map<_, _>>();
                println!("{}", serde_json::json!({
                    "file": path.display().to_string(),
                    "trump": game.card_trump().to_string(),
                    "score": {"pair_a": n_points_a, "pair_b": n_points_b},
                    "winner": match n_points_a.cmp(&n_points_b) {
                        Ordering::Greater => serde_json::json!("A"),
                        Ordering::Less => serde_json::json!("B"),
                        Ordering::Equal => serde_json::Value::Null,
                    },
                    "cards": mapstr_cards,
                }));
            } else {
                match n_points_a.cmp(&n_points_b) {
                    Ordering::Greater => println!("Pair A won the given sueca game."),
                    Ordering::Less => println!("Pair B won the given sueca game."),
                    Ordering::Equal => println!("The game resulted in a draw"),
                }
                println!("Score: {} - {}", n_points_a, n_points_b);
                if b_show_cards {
                    println!("Players' cards in the sueca game");
                    for epi in EPlayerIndex::values() {
                        println!("Player {}: {}", epi, game.cards_of(epi).iter().join(", "));
                    }
                }
                if b_show_game {
                    println!("Trump: {} - {}", game.card_trump(), game.card_trump().farbe());
                    for (i_trick, trick) in game.tricks().iter().enumerate() {
                        println!("{}: {}", i_trick+1, trick);
                    }
                }
            }
            Ok(())
        },
    )
}
