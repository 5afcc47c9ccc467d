// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{BinaryHeap, HashSet};


#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Blizzard { North, East, South, West }

/// X & Y relative to the inside of the walls, so the entrance has Y -1.
type Pos = [isize; 2];

#[cfg_attr(test, derive(Debug))]
struct Valley {
	/// Blizzards initially inside the walls, row-major
	blizzards: Vec<Option<Blizzard>>,
	width: usize,
	height: usize,
	entrance: Pos,
	exit: Pos,
}

fn gcd(a: usize, b: usize) -> usize {
	if b == 0 { a } else { gcd(b, a % b) }
}

impl Valley {
	/// After this many minutes all blizzards are back where they started.
	fn period(&self) -> usize {
		self.width / gcd(self.width, self.height) * self.height
	}

	fn blizzard(&self, x: usize, y: usize) -> Option<Blizzard> {
		self.blizzards[y * self.width + x]
	}

	fn is_clear(&self, pos: Pos, time: usize) -> bool {
		if pos == self.entrance || pos == self.exit { return true }
		let [x, y] = pos;
		if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize { return false }

		// Look back to where a blizzard would have to start to be here now
		let (x, y, w, h) = (x as usize, y as usize, self.width, self.height);
		let (tw, th) = (time % w, time % h);
		self.blizzard((x + w - tw) % w, y) != Some(Blizzard::East)
			&& self.blizzard((x + tw) % w, y) != Some(Blizzard::West)
			&& self.blizzard(x, (y + h - th) % h) != Some(Blizzard::South)
			&& self.blizzard(x, (y + th) % h) != Some(Blizzard::North)
	}

	/// A* over position and time (modulo the blizzards' period), estimating
	/// by distance. Returns the time of arrival.
	fn crossing(&self, from: Pos, to: Pos, start_time: usize) -> Option<usize> {
		use std::cmp::Reverse;

		let estimate = |[x, y]: Pos| start_time + ((to[0] - x).abs() + (to[1] - y).abs()) as usize;
		let period = self.period();

		let mut heap = BinaryHeap::from([Reverse((estimate(from), start_time, from))]);
		let mut seen = HashSet::new();
		while let Some(Reverse((_, time, pos))) = heap.pop() {
			if pos == to { return Some(time) }
			if !seen.insert((pos, time % period)) { continue }

			let [x, y] = pos;
			for next in [[x, y], [x + 1, y], [x, y + 1], [x - 1, y], [x, y - 1]] {
				if !self.is_clear(next, time + 1) { continue }
				heap.push(Reverse((estimate(next) + (time + 1 - start_time), time + 1, next)));
			}
		}

		tracing::warn!(?from, ?to, start_time, "no way through the blizzards");
		None
	}
}


fn input_valley_from_str(s: &str) -> Result<Valley, parsing::ValleyError> {
	s.parse()
}


fn part1_impl(input_valley: &Valley) -> Option<usize> {
	input_valley.crossing(input_valley.entrance, input_valley.exit, 0)
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::ValleyError> {
	part1_impl(&input_valley_from_str(input)?).ok_or(parsing::ValleyError::Unreachable)
}


fn part2_impl(input_valley: &Valley) -> Option<usize> {
	let Valley { entrance, exit, .. } = *input_valley;
	let there = input_valley.crossing(entrance, exit, 0)?;
	let back = input_valley.crossing(exit, entrance, there)?;
	tracing::debug!(there, back, "fetched the snacks");
	input_valley.crossing(entrance, exit, back)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::ValleyError> {
	part2_impl(&input_valley_from_str(input)?).ok_or(parsing::ValleyError::Unreachable)
}


mod parsing {
	use std::str::FromStr;
	use super::{Blizzard, Valley};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum ValleyError {
		#[error("line {line}: expected a wall with exactly one gap")]
		Gap { line: usize },
		#[error("line {line}: expected walls on both sides")]
		Wall { line: usize },
		#[error("line {line}: expected {width} columns, found {found}")]
		LineLen { line: usize, width: usize, found: usize },
		#[error("line {line}, column {column}: invalid tile {found:?}")]
		InvalidByte { line: usize, column: usize, found: char },
		#[error("the valley has no room inside its walls")]
		Empty,
		#[error("the blizzards never clear a way through")]
		Unreachable,
	}

	/// Column (inside the walls) of the only gap in a wall line.
	fn gap(l: usize, line: &[u8]) -> Result<isize, ValleyError> {
		let mut gaps = line.iter().enumerate().filter(|&(_, &b)| b != b'#');
		match (gaps.next(), gaps.next()) {
			(Some((c, &b'.')), None) if c > 0 && c < line.len() - 1 => Ok(c as isize - 1),
			_ => Err(ValleyError::Gap { line: l + 1 }),
		}
	}

	impl FromStr for Valley {
		type Err = ValleyError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use ValleyError as E;

			let lines = s.lines()
				.map(str::trim)
				.enumerate()
				.filter(|(_, line)| !line.is_empty())
				.map(|(l, line)| (l, line.as_bytes()))
				.collect::<Vec<_>>();
			let (&(first_l, top), &(last_l, bottom)) = match (lines.first(), lines.last()) {
				(Some(first), Some(last)) if lines.len() >= 3 => (first, last),
				_ => return Err(E::Empty),
			};
			let width = top.len();
			if width < 3 { return Err(E::Empty) }

			let mut blizzards = vec![];
			for &(l, line) in &lines {
				if line.len() != width { return Err(E::LineLen { line: l + 1, width, found: line.len() }) }
				if l == first_l || l == last_l { continue }
				let [b'#', inside @ .., b'#'] = line else { return Err(E::Wall { line: l + 1 }) };
				for (c, &b) in inside.iter().enumerate() {
					blizzards.push(match b {
						b'.' => None,
						b'^' => Some(Blizzard::North),
						b'>' => Some(Blizzard::East),
						b'v' => Some(Blizzard::South),
						b'<' => Some(Blizzard::West),
						_ => return Err(E::InvalidByte { line: l + 1, column: c + 2, found: b as char }),
					});
				}
			}

			let [width, height] = [width - 2, lines.len() - 2];
			Ok(Valley {
				blizzards,
				width,
				height,
				entrance: [gap(first_l, top)?, -1],
				exit: [gap(last_l, bottom)?, height as isize],
			})
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		#.######
		#>>.<^<#
		#.<..<<#
		#>v.><>#
		#<^v^^>#
		######.#
	" };
	assert_eq!(part1(INPUT).unwrap(), 18);
	assert_eq!(part2(INPUT).unwrap(), 54);

	let valley = input_valley_from_str(INPUT).unwrap();
	assert_eq!((valley.width, valley.height, valley.period()), (6, 4, 12));
	assert_eq!((valley.entrance, valley.exit), ([0, -1], [5, 4]));

	// The simple example's lone `>` blizzard reaches column 3 after three
	// minutes, then wraps around to column 0
	let simple = input_valley_from_str("#.#####\n#.....#\n#>....#\n#.....#\n#.....#\n#...v.#\n#####.#\n").unwrap();
	assert!(!simple.is_clear([3, 1], 3));
	assert!(!simple.is_clear([0, 1], 5));
	assert!(simple.is_clear([0, 1], 4));

	assert!(matches!(part1("#.##\n#..#\n#..#\n"), Err(parsing::ValleyError::Gap { line: 3 })));

	// A blizzard wrapping within a single column never leaves it
	assert!(matches!(part1("#.#\n#>#\n#.#\n"), Err(parsing::ValleyError::Unreachable)));
}
