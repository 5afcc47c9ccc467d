// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod util;
util::mod_days![
	01, 02, 03, 04, 05, 06, 07, 08, 09, 10,
	11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
	21, 22, 23, 24, 25,
];

use std::path::PathBuf;
use anyhow::Context as _;
use clap::{Parser, value_parser};


#[derive(Parser, Debug)]
#[command(name = "advent22", version, about = "Solves one day of the 2022 puzzle calendar")]
struct Args {
	/// Day of the calendar (1 to 25)
	#[arg(value_parser = value_parser!(u8).range(1..=25))]
	day: u8,

	/// Puzzle input file
	input: PathBuf,

	/// Only solve this part (1 or 2)
	#[arg(short, long, env = "ADVENT22_PART", value_parser = value_parser!(u8).range(1..=2))]
	part: Option<u8>,

	#[command(flatten)]
	tuning: Tuning,

	/// Raise log verbosity (repeatable); `RUST_LOG` overrides
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

/// Puzzle parameters that are not part of the input itself.
#[derive(clap::Args, Debug, Clone)]
struct Tuning {
	/// Row scanned for beacon exclusion (day 15, part 1)
	#[arg(long, env = "ADVENT22_ROW", default_value_t = 2_000_000, allow_negative_numbers = true)]
	row: isize,

	/// Upper bound of the distress beacon search square (day 15, part 2)
	#[arg(long, env = "ADVENT22_BOUND", default_value_t = 4_000_000)]
	bound: isize,
}


fn solve(day: u8, part: u8, input: &str, tuning: &Tuning) -> anyhow::Result<String> {
	macro_rules! answer { ( $day:ident :: $part:ident ( $( $arg:expr ),* ) ) => {
		$day::$part(input $(, $arg)*)?.to_string()
	} }

	Ok(match (day, part) {
		(1, 1) => answer!(day01::part1()),
		(1, 2) => answer!(day01::part2()),
		(2, 1) => answer!(day02::part1()),
		(2, 2) => answer!(day02::part2()),
		(3, 1) => answer!(day03::part1()),
		(3, 2) => answer!(day03::part2()),
		(4, 1) => answer!(day04::part1()),
		(4, 2) => answer!(day04::part2()),
		(5, 1) => answer!(day05::part1()),
		(5, 2) => answer!(day05::part2()),
		(6, 1) => answer!(day06::part1()),
		(6, 2) => answer!(day06::part2()),
		(7, 1) => answer!(day07::part1()),
		(7, 2) => answer!(day07::part2()),
		(8, 1) => answer!(day08::part1()),
		(8, 2) => answer!(day08::part2()),
		(9, 1) => answer!(day09::part1()),
		(9, 2) => answer!(day09::part2()),
		(10, 1) => answer!(day10::part1()),
		(10, 2) => format!("\n{}", answer!(day10::part2())),
		(11, 1) => answer!(day11::part1()),
		(11, 2) => answer!(day11::part2()),
		(12, 1) => answer!(day12::part1()),
		(12, 2) => answer!(day12::part2()),
		(13, 1) => answer!(day13::part1()),
		(13, 2) => answer!(day13::part2()),
		(14, 1) => answer!(day14::part1()),
		(14, 2) => answer!(day14::part2()),
		(15, 1) => answer!(day15::part1(tuning.row)),
		(15, 2) => answer!(day15::part2(tuning.bound)),
		(16, 1) => answer!(day16::part1()),
		(16, 2) => answer!(day16::part2()),
		(17, 1) => answer!(day17::part1()),
		(17, 2) => answer!(day17::part2()),
		(18, 1) => answer!(day18::part1()),
		(18, 2) => answer!(day18::part2()),
		(19, 1) => answer!(day19::part1()),
		(19, 2) => answer!(day19::part2()),
		(20, 1) => answer!(day20::part1()),
		(20, 2) => answer!(day20::part2()),
		(21, 1) => answer!(day21::part1()),
		(21, 2) => answer!(day21::part2()),
		(22, 1) => answer!(day22::part1()),
		(22, 2) => answer!(day22::part2()),
		(23, 1) => answer!(day23::part1()),
		(23, 2) => answer!(day23::part2()),
		(24, 1) => answer!(day24::part1()),
		(24, 2) => answer!(day24::part2()),
		(25, 1) => answer!(day25::part1()),
		(25, 2) => answer!(day25::part2()),
		(day, part) => anyhow::bail!("no solver for day {day}, part {part}"),
	})
}


fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	util::init_tracing(args.verbose);

	let input = std::fs::read_to_string(&args.input)
		.with_context(|| format!("reading {}", args.input.display()))?;
	tracing::debug!(path = %args.input.display(), bytes = input.len(), "read input");

	let parts = match args.part { Some(part) => part..=part, None => 1..=2 };
	let mut answers = vec![];
	for part in parts {
		let _span = tracing::info_span!("solve", day = args.day, part).entered();
		let started = std::time::Instant::now();
		let answer = solve(args.day, part, &input, &args.tuning)
			.with_context(|| format!("solving day {} part {part}", args.day))?;
		tracing::info!(elapsed = ?started.elapsed(), "solved");
		answers.push(format!("part {part}: {answer}"));
	}

	println!("Day {:02}; {}", args.day, answers.join(", "));
	Ok(())
}


#[cfg(test)]
mod tests {
	use clap::{CommandFactory as _, Parser as _};
	use super::{Args, Tuning, solve};

	const TUNING: Tuning = Tuning { row: 10, bound: 20 };

	#[test]
	fn args() {
		Args::command().debug_assert();

		let args = Args::try_parse_from(["advent22", "15", "in.txt", "--row", "-3", "-p", "1"]).unwrap();
		assert_eq!((args.day, args.part, args.tuning.row), (15, Some(1), -3));
		assert_eq!(args.tuning.bound, 4_000_000);

		assert!(Args::try_parse_from(["advent22", "0", "in.txt"]).is_err());
		assert!(Args::try_parse_from(["advent22", "26", "in.txt"]).is_err());
		assert!(Args::try_parse_from(["advent22", "1", "in.txt", "--part", "3"]).is_err());
	}

	#[test]
	fn dispatch() {
		const INPUT: &str = "1\n2\n\n3\n\n4\n\n5\n";
		assert_eq!(solve(1, 1, INPUT, &TUNING).unwrap(), "5");
		assert_eq!(solve(1, 2, INPUT, &TUNING).unwrap(), "12");
		assert!(solve(1, 3, INPUT, &TUNING).is_err());
		assert!(solve(2, 1, "A W\n", &TUNING).is_err());
		assert_eq!(solve(25, 2, "", &TUNING).unwrap(), "Merry Christmas!");
	}
}
