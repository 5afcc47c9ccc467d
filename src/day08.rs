// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Row-major tree heights (0..=9).
#[cfg_attr(test, derive(Debug))]
struct Forest {
	heights: Vec<u8>,
	width: usize,
}

const DIRS: [[isize; 2]; 4] = [[0, -1], [-1, 0], [1, 0], [0, 1]];

impl Forest {
	fn height(&self) -> usize {
		self.heights.len() / self.width
	}

	fn positions(&self) -> impl Iterator<Item = [usize; 2]> {
		itertools::iproduct!(0..self.height(), 0..self.width).map(|(y, x)| [x, y])
	}

	/// Heights of the trees from `[x, y]` (exclusive) up to the edge in direction `dir`.
	fn line_of_sight(&self, [x, y]: [usize; 2], [dx, dy]: [isize; 2]) -> impl Iterator<Item = u8> + '_ {
		let (w, h) = (self.width as isize, self.height() as isize);
		(1..)
			.map(move |d| [x as isize + dx * d, y as isize + dy * d])
			.take_while(move |&[x, y]| (0..w).contains(&x) && (0..h).contains(&y))
			.map(move |[x, y]| self.heights[y as usize * self.width + x as usize])
	}

	fn tree(&self, [x, y]: [usize; 2]) -> u8 {
		self.heights[y * self.width + x]
	}

	fn is_visible(&self, pos: [usize; 2]) -> bool {
		let tree = self.tree(pos);
		DIRS.iter().any(|&dir| self.line_of_sight(pos, dir).all(|other| other < tree))
	}

	fn scenic_score(&self, pos: [usize; 2]) -> usize {
		let tree = self.tree(pos);
		DIRS.iter()
			.map(|&dir| {
				let mut seen = 0;
				for other in self.line_of_sight(pos, dir) {
					seen += 1;
					if other >= tree { break }
				}
				seen
			})
			.product()
	}
}


fn input_forest_from_str(s: &str) -> Result<Forest, parsing::ForestError> {
	s.parse()
}


fn part1_impl(input_forest: &Forest) -> usize {
	input_forest.positions().filter(|&pos| input_forest.is_visible(pos)).count()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::ForestError> {
	Ok(part1_impl(&input_forest_from_str(input)?))
}


fn part2_impl(input_forest: &Forest) -> usize {
	input_forest.positions().map(|pos| input_forest.scenic_score(pos)).max().unwrap_or(0)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::ForestError> {
	Ok(part2_impl(&input_forest_from_str(input)?))
}


mod parsing {
	use std::str::FromStr;
	use super::Forest;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum ForestError {
		#[error("empty map")]
		Empty,
		#[error("line {line}: expected {width} trees, found {found}")]
		LineLen { line: usize, width: usize, found: usize },
		#[error("line {line}, column {column}: expected a digit, found {found:?}")]
		InvalidByte { line: usize, column: usize, found: char },
	}

	impl FromStr for Forest {
		type Err = ForestError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut heights = vec![];
			let mut width = None;
			for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.is_empty()) {
				let width = *width.get_or_insert(line.len());
				if line.len() != width {
					return Err(ForestError::LineLen { line: l + 1, width, found: line.len() })
				}
				for (c, b) in line.bytes().enumerate() {
					if !b.is_ascii_digit() {
						return Err(ForestError::InvalidByte { line: l + 1, column: c + 1, found: b as char })
					}
					heights.push(b - b'0');
				}
			}
			let width = width.ok_or(ForestError::Empty)?;
			Ok(Forest { heights, width })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		30373
		25512
		65332
		33549
		35390
	" };
	assert_eq!(part1(INPUT).unwrap(), 21);
	assert_eq!(part2(INPUT).unwrap(), 8);
	assert!(matches!(part1("123\n45\n"), Err(parsing::ForestError::LineLen { line: 2, width: 3, found: 2 })));
}
