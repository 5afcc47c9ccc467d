// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


#[derive(PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(test, derive(Debug))]
struct Cube([i32; 3]);

impl Cube {
	fn adjacent(self) -> impl Iterator<Item = Cube> {
		let Cube(pos) = self;
		(0..3).flat_map(move |axis| [-1, 1].map(|delta| {
			let mut adjacent = pos;
			adjacent[axis] += delta;
			Cube(adjacent)
		}))
	}
}

type Droplet = HashSet<Cube>;


fn input_droplet_from_str(s: &str) -> Result<Droplet, parsing::CubeError> {
	parsing::cubes_from_str(s).collect()
}


fn part1_impl(input_droplet: &Droplet) -> usize {
	input_droplet.iter()
		.flat_map(|cube| cube.adjacent())
		.filter(|adjacent| !input_droplet.contains(adjacent))
		.count()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::CubeError> {
	Ok(part1_impl(&input_droplet_from_str(input)?))
}


/// Flood-fills the air around the droplet within its bounding box grown by one
/// on every side, counting each face the steam touches.
fn part2_impl(input_droplet: &Droplet) -> usize {
	let Some(&Cube(first)) = input_droplet.iter().next() else { return 0 };
	let [min, max] = input_droplet.iter().fold([first, first], |[mut min, mut max], Cube(pos)| {
		for axis in 0..3 {
			min[axis] = min[axis].min(pos[axis] - 1);
			max[axis] = max[axis].max(pos[axis] + 1);
		}
		[min, max]
	});
	let in_bounds = |Cube(pos): &Cube| (0..3).all(|axis| (min[axis]..=max[axis]).contains(&pos[axis]));

	let mut steam = HashSet::from([Cube(min)]);
	let mut queue = vec![Cube(min)];
	let mut faces = 0;
	while let Some(cube) = queue.pop() {
		for adjacent in cube.adjacent().filter(in_bounds) {
			if input_droplet.contains(&adjacent) {
				faces += 1;
			} else if steam.insert(adjacent) {
				queue.push(adjacent);
			}
		}
	}

	tracing::debug!(steam = steam.len(), faces, "steam settled");
	faces
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::CubeError> {
	Ok(part2_impl(&input_droplet_from_str(input)?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Cube;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum CubeError {
		#[error("line {line}: expected `<x>,<y>,<z>`")]
		Format { line: usize },
		#[error("line {line}: invalid coordinate")]
		Coordinate { line: usize, source: ParseIntError },
	}

	pub(super) fn cubes_from_str(s: &str) -> impl Iterator<Item = Result<Cube, CubeError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| -> Result<Cube, CubeError> {
				let mut coordinates = line.trim().split(',')
					.map(|c| c.parse::<i32>().map_err(|e| CubeError::Coordinate { line: l + 1, source: e }));
				match (coordinates.next(), coordinates.next(), coordinates.next(), coordinates.next()) {
					(Some(x), Some(y), Some(z), None) => Ok(Cube([x?, y?, z?])),
					_ => Err(CubeError::Format { line: l + 1 }),
				}
			})
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2,2,2
		1,2,2
		3,2,2
		2,1,2
		2,3,2
		2,2,1
		2,2,3
		2,2,4
		2,2,6
		1,2,5
		3,2,5
		2,1,5
		2,3,5
	" };
	assert_eq!(part1(INPUT).unwrap(), 64);
	assert_eq!(part2(INPUT).unwrap(), 58);
	assert_eq!(part1("1,1,1\n2,1,1\n").unwrap(), 10);
	assert_eq!(part2("").unwrap(), 0);
	assert!(matches!(part1("1,1\n"), Err(parsing::CubeError::Format { line: 1 })));
}
