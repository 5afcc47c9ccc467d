// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Row-major elevations (`a` = 0 … `z` = 25).
#[cfg_attr(test, derive(Debug))]
struct Heightmap {
	elevations: Vec<u8>,
	width: usize,
	start: usize,
	end: usize,
}

impl Heightmap {
	fn neighbors(&self, pos: usize) -> impl Iterator<Item = usize> {
		let (w, len) = (self.width, self.elevations.len());
		let up = pos.checked_sub(w);
		let left = (pos % w > 0).then(|| pos - 1);
		let right = (pos % w < w - 1).then(|| pos + 1);
		let down = (pos + w < len).then(|| pos + w);
		[up, left, right, down].into_iter().flatten()
	}

	/// Fewest steps from every position to the end, searching backwards from
	/// the end (a step may climb at most one level, so backwards it may descend
	/// at most one level). Unreachable positions are `None`.
	fn steps_to_end(&self) -> Vec<Option<usize>> {
		use std::collections::VecDeque;

		let mut steps = vec![None; self.elevations.len()];
		let mut queue = VecDeque::from([self.end]);
		steps[self.end] = Some(0);

		while let Some(pos) = queue.pop_front() {
			let (elevation, n) = (self.elevations[pos], steps[pos].unwrap_or_default());
			for prev in self.neighbors(pos) {
				if steps[prev].is_some() || self.elevations[prev] + 1 < elevation { continue }
				steps[prev] = Some(n + 1);
				queue.push_back(prev);
			}
		}

		steps
	}
}


fn input_heightmap_from_str(s: &str) -> Result<Heightmap, parsing::HeightmapError> {
	s.parse()
}


fn part1_impl(input_heightmap: &Heightmap) -> Option<usize> {
	input_heightmap.steps_to_end()[input_heightmap.start]
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::HeightmapError> {
	part1_impl(&input_heightmap_from_str(input)?).ok_or(parsing::HeightmapError::Unreachable)
}


fn part2_impl(input_heightmap: &Heightmap) -> Option<usize> {
	input_heightmap.steps_to_end().into_iter()
		.zip(&input_heightmap.elevations)
		.filter_map(|(steps, &elevation)| (elevation == 0).then_some(steps).flatten())
		.min()
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::HeightmapError> {
	part2_impl(&input_heightmap_from_str(input)?).ok_or(parsing::HeightmapError::Unreachable)
}


mod parsing {
	use std::str::FromStr;
	use super::Heightmap;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum HeightmapError {
		#[error("empty heightmap")]
		Empty,
		#[error("line {line}: expected {width} columns, found {found}")]
		LineLen { line: usize, width: usize, found: usize },
		#[error("line {line}, column {column}: invalid square {found:?}")]
		InvalidByte { line: usize, column: usize, found: char },
		#[error("line {line}, column {column}: second {which:?} marker")]
		Duplicate { line: usize, column: usize, which: char },
		#[error("missing {0:?} marker")]
		Missing(char),
		#[error("the best signal is out of reach")]
		Unreachable,
	}

	impl FromStr for Heightmap {
		type Err = HeightmapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use HeightmapError as E;

			let mut elevations = vec![];
			let mut width = None;
			let [mut start, mut end] = [None, None];

			for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.is_empty()) {
				let width = *width.get_or_insert(line.len());
				if line.len() != width {
					return Err(E::LineLen { line: l + 1, width, found: line.len() })
				}
				for (c, b) in line.bytes().enumerate() {
					let (marker, elevation) = match b {
						b'S' => (Some(&mut start), 0),
						b'E' => (Some(&mut end), 25),
						b'a'..=b'z' => (None, b - b'a'),
						_ => return Err(E::InvalidByte { line: l + 1, column: c + 1, found: b as char }),
					};
					if let Some(marker) = marker {
						if marker.replace(elevations.len()).is_some() {
							return Err(E::Duplicate { line: l + 1, column: c + 1, which: b as char })
						}
					}
					elevations.push(elevation);
				}
			}

			Ok(Heightmap {
				elevations,
				width: width.ok_or(E::Empty)?,
				start: start.ok_or(E::Missing('S'))?,
				end: end.ok_or(E::Missing('E'))?,
			})
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Sabqponm
		abcryxxl
		accszExk
		acctuvwj
		abdefghi
	" };
	assert_eq!(part1(INPUT).unwrap(), 31);
	assert_eq!(part2(INPUT).unwrap(), 29);
	assert!(matches!(part1("SaE\n"), Err(parsing::HeightmapError::Unreachable)));
	assert!(matches!(part1("SaS\n"), Err(parsing::HeightmapError::Duplicate { line: 1, column: 3, which: 'S' })));
}
