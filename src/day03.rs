// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Item priorities (1..=52) of one rucksack, in packing order.
#[cfg_attr(test, derive(Debug))]
struct Rucksack(Vec<u8>);

/// Set of item priorities, bit `p` set for priority `p`.
#[derive(Clone, Copy)]
struct Items(u64);

impl Items {
	fn of(priorities: &[u8]) -> Items {
		Items(priorities.iter().fold(0, |bits, p| bits | 1 << p))
	}

	fn intersection(self, other: Items) -> Items {
		Items(self.0 & other.0)
	}

	fn priorities(self) -> impl Iterator<Item = usize> {
		(1..=52).filter(move |p| self.0 & 1 << p != 0)
	}
}

impl Rucksack {
	fn compartments(&self) -> [Items; 2] {
		let (left, right) = self.0.split_at(self.0.len() / 2);
		[Items::of(left), Items::of(right)]
	}
}


fn input_rucksacks_from_str(s: &str) -> Result<Vec<Rucksack>, parsing::RucksackError> {
	parsing::rucksacks_from_str(s).collect()
}


fn part1_impl(input_rucksacks: &[Rucksack]) -> usize {
	input_rucksacks.iter()
		.map(|rucksack| {
			let [left, right] = rucksack.compartments();
			// Items present in both halves count once, however often they appear
			left.intersection(right).priorities().sum::<usize>()
		})
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::RucksackError> {
	Ok(part1_impl(&input_rucksacks_from_str(input)?))
}


fn part2_impl(input_rucksacks: &[Rucksack]) -> Result<usize, parsing::RucksackError> {
	use parsing::RucksackError;

	if input_rucksacks.len() % 3 != 0 {
		return Err(RucksackError::Ungrouped { count: input_rucksacks.len() })
	}

	input_rucksacks.chunks(3)
		.enumerate()
		.map(|(g, group)| {
			let common = group.iter()
				.map(|rucksack| Items::of(&rucksack.0))
				.reduce(Items::intersection)
				.unwrap_or(Items(0));
			match common.0.count_ones() {
				1 => Ok(common.0.trailing_zeros() as usize),
				found => Err(RucksackError::Badge { group: g + 1, found }),
			}
		})
		.sum()
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::RucksackError> {
	part2_impl(&input_rucksacks_from_str(input)?)
}


mod parsing {
	use super::Rucksack;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RucksackError {
		#[error("line {line}: odd number of items ({len})")]
		OddLen { line: usize, len: usize },
		#[error("line {line}, column {column}: invalid item {found:?}")]
		InvalidItem { line: usize, column: usize, found: char },
		#[error("{count} rucksacks cannot be split into groups of three")]
		Ungrouped { count: usize },
		#[error("group {group}: expected exactly one common item, found {found}")]
		Badge { group: usize, found: u32 },
	}

	fn priority(b: u8) -> Option<u8> {
		match b {
			b'a'..=b'z' => Some(b - b'a' + 1),
			b'A'..=b'Z' => Some(b - b'A' + 27),
			_ => None,
		}
	}

	pub(super) fn rucksacks_from_str(s: &str) -> impl Iterator<Item = Result<Rucksack, RucksackError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| {
				if line.len() % 2 != 0 {
					return Err(RucksackError::OddLen { line: l + 1, len: line.len() })
				}
				line.bytes()
					.enumerate()
					.map(|(c, b)| priority(b).ok_or(RucksackError::InvalidItem {
						line: l + 1, column: c + 1, found: b as char }))
					.collect::<Result<_, _>>()
					.map(Rucksack)
			})
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		vJrwpWtwJgWrhcsFMMfFFhFp
		jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
		PmmdzqPrVvPwwTWBwg
		wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
		ttgJtRGJQctTZtZT
		CrZsJsPPZsGzwwsLwLmpwMDw
	" };
	assert_eq!(part1(INPUT).unwrap(), 157);
	assert_eq!(part2(INPUT).unwrap(), 70);
	assert!(matches!(part1("abc\n"), Err(parsing::RucksackError::OddLen { line: 1, len: 3 })));
	assert!(matches!(part2("ab\ncd\nef\n"), Err(parsing::RucksackError::Badge { group: 1, found: 0 })));
}
