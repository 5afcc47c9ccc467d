// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, HashSet};


type Pos = [i32; 2];

const NEIGHBORS: [Pos; 8] = [
	[-1, -1], [0, -1], [1, -1],
	[-1, 0],           [1, 0],
	[-1, 1],  [0, 1],  [1, 1],
];

/// North, south, west & east: the step, followed by the two diagonals that
/// also need to be clear.
const LOOKS: [[Pos; 3]; 4] = [
	[[0, -1], [-1, -1], [1, -1]],
	[[0, 1], [-1, 1], [1, 1]],
	[[-1, 0], [-1, -1], [-1, 1]],
	[[1, 0], [1, -1], [1, 1]],
];


#[derive(Clone)]
struct Grove { elves: HashSet<Pos> }

impl Grove {
	fn proposal(&self, [x, y]: Pos, round: usize) -> Option<Pos> {
		let occupied = |[dx, dy]: Pos| self.elves.contains(&[x + dx, y + dy]);
		if !NEIGHBORS.into_iter().any(occupied) { return None }
		(0..LOOKS.len())
			.map(|i| LOOKS[(round + i) % LOOKS.len()])
			.find(|look| !look.iter().copied().any(occupied))
			.map(|[[dx, dy], ..]| [x + dx, y + dy])
	}

	/// Returns whether any elf moved.
	fn spread(&mut self, round: usize) -> bool {
		use rayon::prelude::{IntoParallelRefIterator as _, ParallelIterator as _};

		let proposals = self.elves.par_iter()
			.filter_map(|&elf| Some((elf, self.proposal(elf, round)?)))
			.collect::<Vec<_>>();
		let mut proposed = HashMap::new();
		for (_, to) in &proposals { *proposed.entry(*to).or_insert(0) += 1 }

		let mut moved = 0;
		for (from, to) in proposals {
			if proposed[&to] > 1 { continue }
			self.elves.remove(&from);
			self.elves.insert(to);
			moved += 1;
		}
		tracing::trace!(round, moved, "elves spread");
		moved > 0
	}

	fn empty_ground(&self) -> usize {
		use itertools::{Itertools as _, MinMaxResult::*};
		let extent = |axis: usize| match self.elves.iter().map(|pos| pos[axis]).minmax() {
			NoElements => 0,
			OneElement(_) => 1,
			MinMax(min, max) => (max - min + 1) as usize,
		};
		extent(0) * extent(1) - self.elves.len()
	}
}


fn input_grove_from_str(s: &str) -> Result<Grove, parsing::GroveError> {
	s.parse()
}


fn part1_impl(mut input_grove: Grove) -> usize {
	for round in 0..10 {
		if !input_grove.spread(round) { break }
	}
	input_grove.empty_ground()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::GroveError> {
	Ok(part1_impl(input_grove_from_str(input)?))
}


fn part2_impl(mut input_grove: Grove) -> usize {
	(0..).find(|&round| !input_grove.spread(round)).map_or(0, |round| round + 1)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::GroveError> {
	Ok(part2_impl(input_grove_from_str(input)?))
}


mod parsing {
	use std::{collections::HashSet, str::FromStr};
	use super::Grove;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum GroveError {
		#[error("line {line}, column {column}: expected `#` or `.`, found {found:?}")]
		InvalidByte { line: usize, column: usize, found: char },
	}

	impl FromStr for Grove {
		type Err = GroveError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut elves = HashSet::new();
			for (l, line) in s.lines().enumerate() {
				for (c, b) in line.trim_end().bytes().enumerate() {
					match b {
						b'#' => { elves.insert([c as i32, l as i32]); }
						b'.' => (),
						_ => return Err(GroveError::InvalidByte { line: l + 1, column: c + 1, found: b as char }),
					}
				}
			}
			Ok(Grove { elves })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		....#..
		..###.#
		#...#.#
		.#...##
		#.###..
		##.#.##
		.#..#..
	" };
	assert_eq!(part1(INPUT).unwrap(), 110);
	assert_eq!(part2(INPUT).unwrap(), 20);

	// The small example settles after three rounds
	let mut grove = input_grove_from_str(".....\n..##.\n..#..\n.....\n..##.\n.....\n").unwrap();
	for round in 0..3 { assert!(grove.spread(round)) }
	assert!(!grove.spread(3));
	assert_eq!(grove.elves, HashSet::from([[2, 0], [4, 1], [0, 2], [4, 3], [2, 5]]));

	assert_eq!(part1("").unwrap(), 0);
}
