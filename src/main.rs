// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
#![allow(unknown_lints)]
#![warn(clippy::all)]

use std::env;
use std::process;
use std::time::Duration;

use clap::{App, Arg, ArgGroup, ArgMatches};

use sokobot::config::{Format, Limits, Method};
use sokobot::solver::SearchStatus;
use sokobot::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokobot")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Greedy best-first Sokoban solver")
        .arg(
            Arg::with_name("custom")
                .short("c")
                .long("custom")
                .help("print levels in custom format"),
        )
        .arg(
            Arg::with_name("xsb")
                .short("x")
                .long("xsb")
                .help("print levels in XSB format (default)"),
        )
        .group(ArgGroup::with_name("format").arg("custom").arg("xsb"))
        .arg(
            Arg::with_name("pushes")
                .short("p")
                .long("pushes")
                .help("return only the pushes"),
        )
        .arg(
            Arg::with_name("moves")
                .short("m")
                .long("moves")
                .help("return all moves including walking (default)"),
        )
        .group(ArgGroup::with_name("method").arg("pushes").arg("moves"))
        .arg(
            Arg::with_name("max-expansions")
                .long("max-expansions")
                .takes_value(true)
                .value_name("N")
                .help("give up after expanding N states"),
        )
        .arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .takes_value(true)
                .value_name("SECS")
                .help("give up after SECS seconds"),
        )
        .arg(
            Arg::with_name("print-states")
                .short("s")
                .long("print-states")
                .help("print the level after every move, not just pushes"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let format = if matches.is_present("custom") {
        Format::Custom
    } else {
        Format::Xsb
    };
    let method = if matches.is_present("pushes") {
        Method::Pushes
    } else {
        Method::Moves
    };
    let limits = parse_limits(&matches).unwrap_or_else(|err| {
        eprintln!("Invalid arguments: {}", err);
        process::exit(1);
    });
    let print_states = matches.is_present("print-states");
    // required arg
    let path = matches.value_of("file").unwrap_or_default();

    let level = path.load_level().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => eprintln!("Can't load level {} in {}: {}", path, dir.display(), err),
            Err(_) => eprintln!("Can't load level {}: {}", path, err),
        }
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver_ok = level.solve(method, &limits).unwrap_or_else(|err| {
        eprintln!("Invalid level: {}", err);
        process::exit(1);
    });
    println!("{}", solver_ok.stats);

    match solver_ok.moves {
        Some(ref moves) => {
            println!("Found solution:");
            // pushes alone can't be replayed, the walks between them are missing
            if method == Method::Moves {
                print!("{}", level.format_solution(format, moves, print_states));
            }
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        None => {
            println!("{}", solver_ok.status);
            if solver_ok.status == SearchStatus::TimedOut {
                process::exit(2);
            }
        }
    }
}

fn parse_limits(matches: &ArgMatches<'_>) -> Result<Limits, String> {
    let mut limits = Limits::unbounded();
    if let Some(max) = matches.value_of("max-expansions") {
        let max = max
            .parse()
            .map_err(|_| format!("expected a number of states, got {}", max))?;
        limits = limits.with_max_expansions(max);
    }
    if let Some(secs) = matches.value_of("timeout") {
        let secs: f64 = secs
            .parse()
            .map_err(|_| format!("expected a number of seconds, got {}", secs))?;
        if secs.is_nan() || secs < 0.0 {
            return Err(format!("timeout can't be negative: {}", secs));
        }
        let millis = (secs * 1000.0) as u64;
        limits = limits.with_time_limit(Duration::from_millis(millis));
    }
    Ok(limits)
}
