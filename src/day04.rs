// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;


/// Section IDs assigned to one elf.
#[cfg_attr(test, derive(Debug))]
struct Assignment(RangeInclusive<u32>);

impl Assignment {
	fn contains(&self, other: &Assignment) -> bool {
		self.0.start() <= other.0.start() && other.0.end() <= self.0.end()
	}

	fn overlaps(&self, other: &Assignment) -> bool {
		self.0.start() <= other.0.end() && other.0.start() <= self.0.end()
	}
}

type Pair = [Assignment; 2];


fn input_pairs_from_str(s: &str) -> Result<Vec<Pair>, parsing::PairError> {
	parsing::pairs_from_str(s).collect()
}


fn count_pairs(pairs: &[Pair], predicate: impl Fn(&Assignment, &Assignment) -> bool) -> usize {
	pairs.iter().filter(|[a, b]| predicate(a, b)).count()
}


fn part1_impl(input_pairs: &[Pair]) -> usize {
	count_pairs(input_pairs, |a, b| a.contains(b) || b.contains(a))
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::PairError> {
	Ok(part1_impl(&input_pairs_from_str(input)?))
}


fn part2_impl(input_pairs: &[Pair]) -> usize {
	count_pairs(input_pairs, Assignment::overlaps)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::PairError> {
	Ok(part2_impl(&input_pairs_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Assignment, Pair};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum AssignmentError {
		#[error("expected `<start>-<end>`")]
		Format,
		#[error("invalid section ID")]
		Section(#[from] ParseIntError),
		#[error("range {start}-{end} is reversed")]
		Reversed { start: u32, end: u32 },
	}

	impl FromStr for Assignment {
		type Err = AssignmentError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (start, end) = s.split_once('-').ok_or(AssignmentError::Format)?;
			let (start, end) = (start.trim().parse::<u32>()?, end.trim().parse::<u32>()?);
			if start > end { return Err(AssignmentError::Reversed { start, end }) }
			Ok(Assignment(start..=end))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum PairError {
		#[error("line {line}: expected two comma-separated assignments")]
		Format { line: usize },
		#[error("line {line}, assignment {index}")]
		Assignment { line: usize, index: usize, source: AssignmentError },
	}

	pub(super) fn pairs_from_str(s: &str) -> impl Iterator<Item = Result<Pair, PairError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| -> Result<Pair, PairError> {
				let (first, second) = line.split_once(',')
					.ok_or(PairError::Format { line: l + 1 })?;
				let parse = |index, s: &str| s.trim().parse::<Assignment>()
					.map_err(|e| PairError::Assignment { line: l + 1, index, source: e });
				Ok([parse(1, first)?, parse(2, second)?])
			})
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2-4,6-8
		2-3,4-5
		5-7,7-9
		2-8,3-7
		6-6,4-6
		2-6,4-8
	" };
	assert_eq!(part1(INPUT).unwrap(), 2);
	assert_eq!(part2(INPUT).unwrap(), 4);
	assert!(matches!(part1("3-1,1-2\n"), Err(parsing::PairError::Assignment {
		line: 1, index: 1, source: parsing::AssignmentError::Reversed { start: 3, end: 1 } })));
}
