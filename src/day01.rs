// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Calories carried by each elf, one entry per food item.
#[cfg_attr(test, derive(Debug))]
struct Elf(Vec<usize>);

impl Elf {
	fn total(&self) -> usize {
		self.0.iter().sum()
	}
}


fn input_elves_from_str(s: &str) -> Result<Vec<Elf>, parsing::CaloriesError> {
	parsing::elves_from_str(s)
}


fn part1_impl(input_elves: &[Elf]) -> usize {
	input_elves.iter().map(Elf::total).max().unwrap_or(0)
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::CaloriesError> {
	Ok(part1_impl(&input_elves_from_str(input)?))
}


fn part2_impl(input_elves: &[Elf]) -> usize {
	use std::{cmp::Reverse, collections::BinaryHeap};

	// Min-heap holding the three largest totals seen so far
	let mut top = BinaryHeap::with_capacity(4);
	for total in input_elves.iter().map(Elf::total) {
		top.push(Reverse(total));
		if top.len() > 3 { top.pop(); }
	}
	top.into_iter().map(|Reverse(total)| total).sum()
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::CaloriesError> {
	Ok(part2_impl(&input_elves_from_str(input)?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Elf;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum CaloriesError {
		#[error("no calories listed")]
		Empty,
		#[error("line {line}: invalid calories")]
		Invalid { line: usize, source: ParseIntError },
	}

	pub(super) fn elves_from_str(s: &str) -> Result<Vec<Elf>, CaloriesError> {
		let mut elves = vec![];
		let mut items = vec![];

		for (l, line) in s.lines().enumerate() {
			let line = line.trim();
			if line.is_empty() {
				if !items.is_empty() { elves.push(Elf(std::mem::take(&mut items))) }
				continue
			}
			items.push(line.parse()
				.map_err(|e| CaloriesError::Invalid { line: l + 1, source: e })?);
		}
		if !items.is_empty() { elves.push(Elf(items)) }

		if elves.is_empty() { return Err(CaloriesError::Empty) }
		Ok(elves)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1000
		2000
		3000

		4000

		5000
		6000

		7000
		8000
		9000

		10000
	" };
	assert_eq!(part1(INPUT).unwrap(), 24_000);
	assert_eq!(part2(INPUT).unwrap(), 45_000);
	assert_eq!(part2("100\n\n200\n").unwrap(), 300);
	assert!(matches!(part1("\n\n"), Err(parsing::CaloriesError::Empty)));
	assert!(matches!(part1("1\n\nx\n"), Err(parsing::CaloriesError::Invalid { line: 3, .. })));
}
