// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


const WIDTH: usize = 7;
const LEFT_WALL: u8 = 1 << (WIDTH - 1);


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Jet { Left, Right }

#[derive(Clone, Copy)]
enum RockShape { Bar, Plus, Angle, Pole, Block }

impl RockShape {
	const ALL: [RockShape; 5] = {
		use RockShape::*;
		[Bar, Plus, Angle, Pole, Block]
	};

	/// Rows bottom to top, bit `6 - x` set for column `x`, as spawned two
	/// columns in from the left wall. Unused rows are empty.
	fn rows(self) -> [u8; 4] {
		use RockShape::*;
		match self {
			Bar => [0b0011110, 0, 0, 0],
			Plus => [0b0001000, 0b0011100, 0b0001000, 0],
			Angle => [0b0011100, 0b0000100, 0b0000100, 0],
			Pole => [0b0010000; 4],
			Block => [0b0011000, 0b0011000, 0, 0],
		}
	}
}

impl Jet {
	/// `None` if the rock is against the wall it is pushed towards.
	fn push(self, rock: [u8; 4]) -> Option<[u8; 4]> {
		match self {
			Jet::Left if rock.iter().all(|row| row & LEFT_WALL == 0) => Some(rock.map(|row| row << 1)),
			Jet::Right if rock.iter().all(|row| row & 1 == 0) => Some(rock.map(|row| row >> 1)),
			_ => None,
		}
	}
}


struct Chamber<'j> {
	jets: &'j [Jet],
	next_jet: usize,
	dropped: u64,
	/// Settled rock, bottom to top.
	rows: Vec<u8>,
}

impl<'j> Chamber<'j> {
	fn new(jets: &'j [Jet]) -> Self {
		Chamber { jets, next_jet: 0, dropped: 0, rows: vec![] }
	}

	fn collides(&self, rock: &[u8; 4], y: usize) -> bool {
		rock.iter().zip(self.rows.iter().skip(y)).any(|(r, row)| r & row != 0)
	}

	fn drop_rock(&mut self) {
		let shape = RockShape::ALL[(self.dropped % RockShape::ALL.len() as u64) as usize];
		let mut rock = shape.rows();
		let mut y = self.rows.len() + 3;

		loop {
			let jet = self.jets[self.next_jet];
			self.next_jet = (self.next_jet + 1) % self.jets.len();
			if let Some(pushed) = jet.push(rock) {
				if !self.collides(&pushed, y) { rock = pushed }
			}
			if y == 0 || self.collides(&rock, y - 1) { break }
			y -= 1;
		}

		for (i, r) in rock.into_iter().enumerate().filter(|(_, r)| *r != 0) {
			if self.rows.len() <= y + i { self.rows.resize(y + i + 1, 0) }
			self.rows[y + i] |= r;
		}
		self.dropped += 1;
	}

	/// Depth below the top of the highest rock in every column.
	fn skyline(&self) -> [usize; WIDTH] {
		std::array::from_fn(|x| {
			let bit = LEFT_WALL >> x;
			self.rows.iter().rev().position(|row| row & bit != 0).unwrap_or(self.rows.len())
		})
	}
}


fn tower_height(jets: &[Jet], rocks: u64) -> u64 {
	let mut chamber = Chamber::new(jets);
	let mut seen = HashMap::new();
	let mut skipped_height = None;

	while chamber.dropped < rocks {
		chamber.drop_rock();
		if skipped_height.is_some() { continue }

		// The same rock and jet over the same surface repeat the same growth
		let key = (chamber.dropped % RockShape::ALL.len() as u64, chamber.next_jet, chamber.skyline());
		let now = (chamber.dropped, chamber.rows.len() as u64);
		if let Some((then_dropped, then_height)) = seen.insert(key, now) {
			let period = now.0 - then_dropped;
			let cycles = (rocks - chamber.dropped) / period;
			tracing::debug!(period, growth = now.1 - then_height, cycles, "tower repeats");
			chamber.dropped += cycles * period;
			skipped_height = Some(cycles * (now.1 - then_height));
		}
	}

	chamber.rows.len() as u64 + skipped_height.unwrap_or(0)
}


fn input_jets_from_str(s: &str) -> Result<Vec<Jet>, parsing::JetError> {
	parsing::jets_from_str(s)
}


fn part1_impl(input_jets: &[Jet]) -> u64 {
	tower_height(input_jets, 2022)
}

pub(crate) fn part1(input: &str) -> Result<u64, parsing::JetError> {
	Ok(part1_impl(&input_jets_from_str(input)?))
}


fn part2_impl(input_jets: &[Jet]) -> u64 {
	tower_height(input_jets, 1_000_000_000_000)
}

pub(crate) fn part2(input: &str) -> Result<u64, parsing::JetError> {
	Ok(part2_impl(&input_jets_from_str(input)?))
}


mod parsing {
	use super::Jet;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum JetError {
		#[error("column {column}: expected `<` or `>`, found {found:?}")]
		InvalidByte { column: usize, found: char },
		#[error("no jets")]
		Empty,
	}

	pub(super) fn jets_from_str(s: &str) -> Result<Vec<Jet>, JetError> {
		let jets = s.trim().bytes()
			.enumerate()
			.map(|(c, b)| match b {
				b'<' => Ok(Jet::Left),
				b'>' => Ok(Jet::Right),
				_ => Err(JetError::InvalidByte { column: c + 1, found: b as char }),
			})
			.collect::<Result<Vec<_>, _>>()?;
		if jets.is_empty() { return Err(JetError::Empty) }
		Ok(jets)
	}
}


#[test]
fn tests() {
	const INPUT: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>\n";
	assert_eq!(part1(INPUT).unwrap(), 3068);
	assert_eq!(part2(INPUT).unwrap(), 1514285714288);

	let jets = input_jets_from_str(INPUT).unwrap();
	let mut chamber = Chamber::new(&jets);
	for _ in 0..2 { chamber.drop_rock() }
	// The plus comes to rest on top of the bar
	assert_eq!(chamber.rows, [0b0011110, 0b0001000, 0b0011100, 0b0001000]);
	assert_eq!(tower_height(&jets, 10), 17);

	assert!(matches!(part1("<>x"), Err(parsing::JetError::InvalidByte { column: 3, found: 'x' })));
}
