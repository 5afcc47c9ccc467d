// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Shape { Rock, Paper, Scissors }

impl Shape {
	fn score(self) -> usize { self as usize + 1 }

	/// The shape that this shape defeats.
	fn defeats(self) -> Shape {
		use Shape::*;
		match self { Rock => Scissors, Paper => Rock, Scissors => Paper }
	}

	/// The shape that defeats this shape.
	fn defeated_by(self) -> Shape {
		use Shape::*;
		match self { Rock => Paper, Paper => Scissors, Scissors => Rock }
	}
}

#[derive(Clone, Copy)]
enum Outcome { Loss, Draw, Win }

impl Outcome {
	fn of(mine: Shape, theirs: Shape) -> Outcome {
		if mine == theirs { Outcome::Draw }
		else if mine.defeats() == theirs { Outcome::Win }
		else { Outcome::Loss }
	}

	fn score(self) -> usize { self as usize * 3 }
}

/// Second column of the strategy guide, whose meaning differs between parts.
#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug))]
enum Column { X, Y, Z }

#[cfg_attr(test, derive(Debug))]
struct Round {
	theirs: Shape,
	column: Column,
}


fn input_rounds_from_str(s: &str) -> Result<Vec<Round>, parsing::RoundError> {
	parsing::rounds_from_str(s).collect()
}


fn total_score(rounds: &[Round], my_shape: impl Fn(&Round) -> Shape) -> usize {
	rounds.iter()
		.map(|round| {
			let mine = my_shape(round);
			mine.score() + Outcome::of(mine, round.theirs).score()
		})
		.sum()
}


fn part1_impl(input_rounds: &[Round]) -> usize {
	total_score(input_rounds, |round| match round.column {
		Column::X => Shape::Rock,
		Column::Y => Shape::Paper,
		Column::Z => Shape::Scissors,
	})
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::RoundError> {
	Ok(part1_impl(&input_rounds_from_str(input)?))
}


fn part2_impl(input_rounds: &[Round]) -> usize {
	total_score(input_rounds, |round| match round.column {
		Column::X => round.theirs.defeats(),
		Column::Y => round.theirs,
		Column::Z => round.theirs.defeated_by(),
	})
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::RoundError> {
	Ok(part2_impl(&input_rounds_from_str(input)?))
}


mod parsing {
	use super::{Shape, Column, Round};

	#[derive(Debug, thiserror::Error)]
	#[error("line {line}: expected `<A|B|C> <X|Y|Z>`, found {found:?}")]
	pub(crate) struct RoundError { line: usize, found: String }

	pub(super) fn rounds_from_str(s: &str) -> impl Iterator<Item = Result<Round, RoundError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| {
				let theirs_column = match line.trim_end().as_bytes() {
					[theirs @ b'A'..=b'C', b' ', column @ b'X'..=b'Z'] => Some((*theirs, *column)),
					_ => None,
				};
				let Some((theirs, column)) = theirs_column else {
					return Err(RoundError { line: l + 1, found: line.to_owned() })
				};
				Ok(Round {
					theirs: match theirs { b'A' => Shape::Rock, b'B' => Shape::Paper, _ => Shape::Scissors },
					column: match column { b'X' => Column::X, b'Y' => Column::Y, _ => Column::Z },
				})
			})
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		A Y
		B X
		C Z
	" };
	assert_eq!(part1(INPUT).unwrap(), 15);
	assert_eq!(part2(INPUT).unwrap(), 12);
	assert!(part1("A Y\nD X\n").is_err());
}
