// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


const SOURCE: [i32; 2] = [500, 0];


#[cfg_attr(test, derive(Debug))]
struct Cave {
	rock: HashSet<[i32; 2]>,
	lowest_rock: i32,
}

impl Cave {
	/// Counts grains that come to rest. Without a floor, pouring stops once a
	/// grain falls below all rock; with one (two below the lowest rock), it
	/// stops once the source itself is covered.
	fn pour(&self, floor: bool) -> usize {
		let floor_y = self.lowest_rock + 2;
		let mut blocked = self.rock.clone();
		let mut rested = 0;

		// Each grain follows the previous one's path until it diverges
		let mut path = vec![SOURCE];
		while let Some(&[x, y]) = path.last() {
			if !floor && y > self.lowest_rock { break }

			let next = [[x, y + 1], [x - 1, y + 1], [x + 1, y + 1]].into_iter()
				.find(|pos| pos[1] < floor_y && !blocked.contains(pos));
			match next {
				Some(pos) => path.push(pos),
				None => {
					blocked.insert([x, y]);
					rested += 1;
					path.pop();
				}
			}
		}

		tracing::debug!(rested, floor, "sand settled");
		rested
	}
}


fn input_cave_from_str(s: &str) -> Result<Cave, parsing::ScanError> {
	s.parse()
}


fn part1_impl(input_cave: &Cave) -> usize {
	input_cave.pour(false)
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::ScanError> {
	Ok(part1_impl(&input_cave_from_str(input)?))
}


fn part2_impl(input_cave: &Cave) -> usize {
	input_cave.pour(true)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::ScanError> {
	Ok(part2_impl(&input_cave_from_str(input)?))
}


mod parsing {
	use std::{collections::HashSet, num::ParseIntError, str::FromStr};
	use itertools::Itertools as _;
	use super::{Cave, SOURCE};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum ScanError {
		#[error("line {line}, point {point}: expected `<x>,<y>`")]
		Format { line: usize, point: usize },
		#[error("line {line}, point {point}: invalid coordinate")]
		Coordinate { line: usize, point: usize, source: ParseIntError },
		#[error("line {line}: segment {segment} is diagonal")]
		Diagonal { line: usize, segment: usize },
		#[error("line {line}: rock above the sand source")]
		AboveSource { line: usize },
		#[error("no rock")]
		Empty,
	}

	impl FromStr for Cave {
		type Err = ScanError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use ScanError as E;

			let mut rock = HashSet::new();
			for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()) {
				let points = line.split("->")
					.enumerate()
					.map(|(p, point)| -> Result<[i32; 2], E> {
						let (x, y) = point.trim().split_once(',')
							.ok_or(E::Format { line: l + 1, point: p + 1 })?;
						let coordinate = |c: &str| c.parse::<i32>()
							.map_err(|e| E::Coordinate { line: l + 1, point: p + 1, source: e });
						Ok([coordinate(x)?, coordinate(y)?])
					})
					.collect::<Result<Vec<_>, _>>()?;

				if points.iter().any(|[_, y]| *y < SOURCE[1]) {
					return Err(E::AboveSource { line: l + 1 })
				}
				rock.extend(points.iter().copied());
				for (i, (from, to)) in points.iter().tuple_windows().enumerate() {
					let ([x0, y0], [x1, y1]) = (*from, *to);
					if x0 != x1 && y0 != y1 { return Err(E::Diagonal { line: l + 1, segment: i + 1 }) }
					rock.extend(itertools::iproduct!(x0.min(x1)..=x0.max(x1), y0.min(y1)..=y0.max(y1))
						.map(|(x, y)| [x, y]));
				}
			}

			let lowest_rock = rock.iter().map(|[_, y]| *y).max().ok_or(E::Empty)?;
			Ok(Cave { rock, lowest_rock })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		498,4 -> 498,6 -> 496,6
		503,4 -> 502,4 -> 502,9 -> 494,9
	" };
	assert_eq!(part1(INPUT).unwrap(), 24);
	assert_eq!(part2(INPUT).unwrap(), 93);
	assert!(matches!(part1("1,1 -> 2,2\n"), Err(parsing::ScanError::Diagonal { line: 1, segment: 1 })));
}
