// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Tile { Void, Open, Wall }

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Facing { East, South, West, North }

impl Facing {
	const ALL: [Facing; 4] = {
		use Facing::*;
		[East, South, West, North]
	};

	fn turned(self, clockwise: bool) -> Self {
		Self::ALL[(self as usize + if clockwise { 1 } else { 3 }) % 4]
	}

	fn delta(self) -> [isize; 2] {
		use Facing::*;
		match self {
			East => [1, 0],
			South => [0, 1],
			West => [-1, 0],
			North => [0, -1],
		}
	}
}

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Instruction {
	Forward(usize),
	Turn { clockwise: bool },
}

/// Rows padded with `Tile::Void` to equal widths.
#[cfg_attr(test, derive(Debug))]
struct Board {
	rows: Vec<Vec<Tile>>,
	width: usize,
}

/// Position (X & Y) and facing
type Pose = ([usize; 2], Facing);

impl Board {
	fn get(&self, x: isize, y: isize) -> Tile {
		if x < 0 || y < 0 { return Tile::Void }
		self.rows.get(y as usize).and_then(|row| row.get(x as usize)).copied().unwrap_or(Tile::Void)
	}

	fn at(&self, [x, y]: [usize; 2]) -> Tile {
		self.rows[y][x]
	}

	fn start(&self) -> Option<[usize; 2]> {
		let x = self.rows.first()?.iter().position(|&tile| tile == Tile::Open)?;
		Some([x, 0])
	}

	/// Follows the path from the start, calling `wrap` when stepping off the
	/// board, and returns the final password.
	fn password(&self, path: &[Instruction], wrap: impl Fn(Pose) -> Option<Pose>) -> Option<usize> {
		let mut pose = (self.start()?, Facing::East);
		for &instruction in path {
			match instruction {
				Instruction::Turn { clockwise } => pose.1 = pose.1.turned(clockwise),
				Instruction::Forward(steps) => for _ in 0..steps {
					let ([x, y], facing) = pose;
					let [dx, dy] = facing.delta();
					let [ax, ay] = [x as isize + dx, y as isize + dy];
					let next = match self.get(ax, ay) {
						Tile::Void => wrap(pose)?,
						_ => ([ax as usize, ay as usize], facing),
					};
					if self.at(next.0) == Tile::Wall { break }
					pose = next;
				}
			}
		}

		let ([x, y], facing) = pose;
		tracing::debug!(x, y, ?facing, "path followed");
		Some(1000 * (y + 1) + 4 * (x + 1) + facing as usize)
	}

	/// Back up against the facing until the other side of the board.
	fn wrap_flat(&self, (pos, facing): Pose) -> Option<Pose> {
		let [dx, dy] = facing.delta();
		let [mut x, mut y] = pos.map(|c| c as isize);
		while self.get(x - dx, y - dy) != Tile::Void {
			x -= dx;
			y -= dy;
		}
		Some(([x as usize, y as usize], facing))
	}
}


type Vector = [i8; 3];

fn neg(v: Vector) -> Vector {
	v.map(|c| -c)
}

/// A square of the board as a side of the cube, oriented in 3D.
#[cfg_attr(test, derive(Debug))]
struct Face {
	/// Top-left position on the board
	corner: [usize; 2],
	right: Vector,
	down: Vector,
	normal: Vector,
}

impl Face {
	fn direction(&self, facing: Facing) -> Vector {
		use Facing::*;
		match facing {
			East => self.right,
			South => self.down,
			West => neg(self.right),
			North => neg(self.down),
		}
	}

	/// The orientation of the adjacent square after folding along the edge
	/// in the given direction.
	fn folded(&self, facing: Facing, corner: [usize; 2]) -> Face {
		use Facing::*;
		let Face { right, down, normal, .. } = *self;
		let [right, down, normal] = match facing {
			East => [neg(normal), down, right],
			South => [right, neg(normal), down],
			West => [normal, down, neg(right)],
			North => [right, normal, neg(down)],
		};
		Face { corner, right, down, normal }
	}
}

struct Cube {
	size: usize,
	faces: Vec<Face>,
}

impl Cube {
	/// Folds the board's net, whatever its shape, starting from the top-left
	/// square.
	fn fold(board: &Board) -> Result<Cube, parsing::MapError> {
		use {std::collections::VecDeque, parsing::MapError as E};

		let tiles = board.rows.iter().flatten().filter(|&&tile| tile != Tile::Void).count();
		let size = (1_usize..).take_while(|&n| 6 * n * n <= tiles).last().unwrap_or(0);
		if size == 0 || 6 * size * size != tiles { return Err(E::NotACube { tiles }) }

		let squares = itertools::iproduct!(
				0..(board.rows.len() + size - 1) / size,
				0..(board.width + size - 1) / size)
			.map(|(fy, fx)| [fx * size, fy * size])
			.filter(|&corner| board.at(corner) != Tile::Void)
			.collect::<Vec<_>>();
		let first = *squares.first().ok_or(E::NotACube { tiles })?;

		let mut faces = vec![Face { corner: first, right: [1, 0, 0], down: [0, 1, 0], normal: [0, 0, 1] }];
		let mut queue = VecDeque::from([0]);
		while let Some(i) = queue.pop_front() {
			for facing in Facing::ALL {
				let [dx, dy] = facing.delta();
				let [x, y] = faces[i].corner;
				let corner = [x as isize + dx * size as isize, y as isize + dy * size as isize];
				if corner.iter().any(|&c| c < 0) { continue }
				let corner = corner.map(|c| c as usize);
				if !squares.contains(&corner) || faces.iter().any(|face| face.corner == corner) { continue }
				let face = faces[i].folded(facing, corner);
				faces.push(face);
				queue.push_back(faces.len() - 1);
			}
		}

		let mut normals = faces.iter().map(|face| face.normal).collect::<Vec<_>>();
		normals.sort_unstable();
		normals.dedup();
		if faces.len() != squares.len() || normals.len() != 6 { return Err(E::NotACube { tiles }) }

		tracing::debug!(size, "folded board into a cube");
		Ok(Cube { size, faces })
	}

	fn face_at(&self, [x, y]: [usize; 2]) -> Option<&Face> {
		let corner = [x / self.size * self.size, y / self.size * self.size];
		self.faces.iter().find(|face| face.corner == corner)
	}

	/// Continue over the edge onto the face whose normal points the way we
	/// were going, entering it heading away from the face we left.
	fn wrap(&self, ([x, y], facing): Pose) -> Option<Pose> {
		use Facing::*;
		let n = self.size;

		let from = self.face_at([x, y])?;
		let [i, j] = [x - from.corner[0], y - from.corner[1]];
		let (edge, offset) = match facing {
			East | West => (from.down, j),
			South | North => (from.right, i),
		};

		let travel = from.direction(facing);
		let to = self.faces.iter().find(|face| face.normal == travel)?;
		let facing = Facing::ALL.into_iter().find(|&f| to.direction(f) == neg(from.normal))?;
		let offset = match facing {
			East | West if to.down == edge => offset,
			South | North if to.right == edge => offset,
			_ => n - 1 - offset,
		};

		let [i, j] = match facing {
			East => [0, offset],
			South => [offset, 0],
			West => [n - 1, offset],
			North => [offset, n - 1],
		};
		Some(([to.corner[0] + i, to.corner[1] + j], facing))
	}
}


fn input_notes_from_str(s: &str) -> Result<(Board, Vec<Instruction>), parsing::MapError> {
	parsing::notes_from_str(s)
}


fn part1_impl(input_board: &Board, input_path: &[Instruction]) -> Option<usize> {
	input_board.password(input_path, |pose| input_board.wrap_flat(pose))
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::MapError> {
	let (board, path) = input_notes_from_str(input)?;
	part1_impl(&board, &path).ok_or(parsing::MapError::NoStart)
}


fn part2_impl(input_board: &Board, input_path: &[Instruction]) -> Result<usize, parsing::MapError> {
	let cube = Cube::fold(input_board)?;
	input_board.password(input_path, |pose| cube.wrap(pose)).ok_or(parsing::MapError::NoStart)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::MapError> {
	let (board, path) = input_notes_from_str(input)?;
	part2_impl(&board, &path)
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Board, Instruction, Tile};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum MapError {
		#[error("line {line}, column {column}: invalid tile {found:?}")]
		InvalidTile { line: usize, column: usize, found: char },
		#[error("expected a blank line and a path after the board")]
		NoPath,
		#[error("path column {column}: invalid instruction {found:?}")]
		InvalidInstruction { column: usize, found: char },
		#[error("path column {column}: invalid step count")]
		Steps { column: usize, source: ParseIntError },
		#[error("no open tile on the top row to start from")]
		NoStart,
		#[error("{tiles} tiles do not fold into a cube")]
		NotACube { tiles: usize },
	}

	fn board_from_str(s: &str) -> Result<Board, MapError> {
		let mut rows = s.lines()
			.enumerate()
			.map(|(l, line)| line.bytes()
				.enumerate()
				.map(|(c, b)| match b {
					b' ' => Ok(Tile::Void),
					b'.' => Ok(Tile::Open),
					b'#' => Ok(Tile::Wall),
					_ => Err(MapError::InvalidTile { line: l + 1, column: c + 1, found: b as char }),
				})
				.collect::<Result<Vec<_>, _>>())
			.collect::<Result<Vec<_>, _>>()?;
		let width = rows.iter().map(Vec::len).max().unwrap_or(0);
		for row in &mut rows { row.resize(width, Tile::Void) }
		Ok(Board { rows, width })
	}

	fn path_from_str(s: &str) -> Result<Vec<Instruction>, MapError> {
		let mut path = vec![];
		let mut digits_start = None;
		for (c, b) in s.bytes().enumerate().chain(std::iter::once((s.len(), b'\n'))) {
			if b.is_ascii_digit() {
				digits_start.get_or_insert(c);
				continue
			}
			if let Some(start) = digits_start.take() {
				let steps = s[start..c].parse::<usize>().map_err(|e| MapError::Steps { column: start + 1, source: e })?;
				path.push(Instruction::Forward(steps));
			}
			match b {
				b'L' => path.push(Instruction::Turn { clockwise: false }),
				b'R' => path.push(Instruction::Turn { clockwise: true }),
				b'\n' => (),
				_ => return Err(MapError::InvalidInstruction { column: c + 1, found: b as char }),
			}
		}
		Ok(path)
	}

	pub(super) fn notes_from_str(s: &str) -> Result<(Board, Vec<Instruction>), MapError> {
		let (board, path) = s.split_once("\n\n").ok_or(MapError::NoPath)?;
		let path = path.trim();
		if path.is_empty() { return Err(MapError::NoPath) }
		Ok((board_from_str(board.trim_start_matches('\n'))?, path_from_str(path)?))
	}
}


#[cfg(test)]
const INPUT: &str = indoc::indoc! { "
	        ...#
	        .#..
	        #...
	        ....
	...#.......#
	........#...
	..#....#....
	..........#.
	        ...#....
	        .....#..
	        .#......
	        ......#.

	10R5L5R10L4R5L5
" };

#[test]
fn tests() {
	assert_eq!(part1(INPUT).unwrap(), 6032);
	assert_eq!(part2(INPUT).unwrap(), 5031);

	let (_, path) = input_notes_from_str(INPUT).unwrap();
	assert_eq!(path[..3], [Instruction::Forward(10), Instruction::Turn { clockwise: true }, Instruction::Forward(5)]);
	assert!(matches!(part2("..\n..\n\n1\n"), Err(parsing::MapError::NotACube { tiles: 4 })));
}

#[test]
fn cube_circumnavigation() {
	// Going straight for four edge lengths leads back to where you started,
	// on any net
	let nets = [
		"   ......\n   ......\n   ......\n   ...\n   ...\n   ...\n......\n......\n......\n...\n...\n...\n\n1\n",
		"  ..\n  ..\n......\n......\n  ..\n  ..\n  ..\n  ..\n\n1\n",
		INPUT,
	];
	for net in nets {
		let (board, _) = input_notes_from_str(net).unwrap();
		let cube = Cube::fold(&board).unwrap();
		for (y, row) in board.rows.iter().enumerate() {
			for x in (0..row.len()).filter(|&x| row[x] != Tile::Void) {
				for facing in Facing::ALL {
					let start = ([x, y], facing);
					let mut pose = start;
					for _ in 0..4 * cube.size {
						let ([x, y], facing) = pose;
						let [dx, dy] = facing.delta();
						let [ax, ay] = [x as isize + dx, y as isize + dy];
						pose = match board.get(ax, ay) {
							Tile::Void => cube.wrap(pose).unwrap(),
							_ => ([ax as usize, ay as usize], facing),
						};
					}
					assert_eq!(pose, start);
				}
			}
		}
	}
}
