// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug))]
enum Dir { Up, Down, Left, Right }

impl Dir {
	fn delta(self) -> [i32; 2] {
		match self {
			Dir::Up => [0, 1],
			Dir::Down => [0, -1],
			Dir::Left => [-1, 0],
			Dir::Right => [1, 0],
		}
	}
}

#[cfg_attr(test, derive(Debug))]
struct Motion {
	dir: Dir,
	steps: usize,
}

/// A rope of `N` knots; knot 0 is the head.
struct Rope<const N: usize>([[i32; 2]; N]);

impl<const N: usize> Rope<N> {
	fn step(&mut self, dir: Dir) {
		let [dx, dy] = dir.delta();
		self.0[0][0] += dx;
		self.0[0][1] += dy;
		for i in 1..N {
			let [lead, knot] = [self.0[i - 1], self.0[i]];
			let offset = [lead[0] - knot[0], lead[1] - knot[1]];
			// Touching knots (including diagonally) stay put, and so do all behind them
			if offset[0].abs() <= 1 && offset[1].abs() <= 1 { break }
			self.0[i][0] += offset[0].signum();
			self.0[i][1] += offset[1].signum();
		}
	}

	fn tail(&self) -> [i32; 2] {
		self.0[N - 1]
	}
}


fn input_motions_from_str(s: &str) -> Result<Vec<Motion>, parsing::MotionError> {
	parsing::motions_from_str(s).collect()
}


fn tail_visits<const N: usize>(input_motions: &[Motion]) -> usize {
	let mut rope = Rope([[0; 2]; N]);
	let mut visited = HashSet::from([rope.tail()]);
	for motion in input_motions {
		for _ in 0..motion.steps {
			rope.step(motion.dir);
			visited.insert(rope.tail());
		}
	}
	visited.len()
}


pub(crate) fn part1(input: &str) -> Result<usize, parsing::MotionError> {
	Ok(tail_visits::<2>(&input_motions_from_str(input)?))
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::MotionError> {
	Ok(tail_visits::<10>(&input_motions_from_str(input)?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Dir, Motion};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum MotionError {
		#[error("line {line}: expected `<U|D|L|R> <steps>`")]
		Format { line: usize },
		#[error("line {line}: invalid step count")]
		Steps { line: usize, source: ParseIntError },
	}

	pub(super) fn motions_from_str(s: &str) -> impl Iterator<Item = Result<Motion, MotionError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| {
				let (dir, steps) = match line.split_once(' ') {
					Some(("U", steps)) => (Dir::Up, steps),
					Some(("D", steps)) => (Dir::Down, steps),
					Some(("L", steps)) => (Dir::Left, steps),
					Some(("R", steps)) => (Dir::Right, steps),
					_ => return Err(MotionError::Format { line: l + 1 }),
				};
				match steps.parse() {
					Ok(steps) => Ok(Motion { dir, steps }),
					Err(e) => Err(MotionError::Steps { line: l + 1, source: e }),
				}
			})
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			R 4
			U 4
			L 3
			D 1
			R 4
			D 1
			L 5
			R 2
		" },
		indoc::indoc! { "
			R 5
			U 8
			L 8
			D 3
			R 17
			D 10
			L 25
			U 20
		" },
	];
	assert_eq!(part1(INPUTS[0]).unwrap(), 13);
	assert_eq!(part2(INPUTS[0]).unwrap(), 1);
	assert_eq!(part2(INPUTS[1]).unwrap(), 36);
	assert!(matches!(part1("X 3\n"), Err(parsing::MotionError::Format { line: 1 })));
}
