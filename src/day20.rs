// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn input_numbers_from_str(s: &str) -> Result<Vec<i64>, parsing::NumberError> {
	parsing::numbers_from_str(s).collect()
}


/// Mixes `ROUNDS` times, moving every number (in file order) by its value,
/// then sums the numbers 1000, 2000 & 3000 positions after the zero.
fn grove_coordinates<const ROUNDS: usize, const DECRYPTION_KEY: i64>(numbers: &[i64]) -> Option<i64> {
	let numbers = numbers.iter().map(|n| n * DECRYPTION_KEY).collect::<Vec<_>>();
	let len = numbers.len();
	let zero = numbers.iter().position(|&n| n == 0)?;

	// File indices of the numbers in their current order
	let mut order = (0..len).collect::<Vec<_>>();
	if len > 1 {
		for _ in 0..ROUNDS {
			for (i, number) in numbers.iter().enumerate() {
				let Some(from) = order.iter().position(|&j| j == i) else { continue };
				// A number moving past all others ends up where it started
				let to = (from as i64 + number).rem_euclid(len as i64 - 1) as usize;
				order.remove(from);
				order.insert(to, i);
			}
		}
	}

	let at = order.iter().position(|&j| j == zero)?;
	let coordinates = [1000, 2000, 3000].map(|offset| numbers[order[(at + offset) % len]]);
	tracing::debug!(?coordinates, "grove coordinates");
	Some(coordinates.iter().sum())
}


fn part1_impl(input_numbers: &[i64]) -> Option<i64> {
	grove_coordinates::<1, 1>(input_numbers)
}

pub(crate) fn part1(input: &str) -> Result<i64, parsing::NumberError> {
	part1_impl(&input_numbers_from_str(input)?).ok_or(parsing::NumberError::NoZero)
}


fn part2_impl(input_numbers: &[i64]) -> Option<i64> {
	grove_coordinates::<10, 811_589_153>(input_numbers)
}

pub(crate) fn part2(input: &str) -> Result<i64, parsing::NumberError> {
	part2_impl(&input_numbers_from_str(input)?).ok_or(parsing::NumberError::NoZero)
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum NumberError {
		#[error("line {line}: invalid number")]
		Invalid { line: usize, source: ParseIntError },
		#[error("the file contains no zero")]
		NoZero,
	}

	pub(super) fn numbers_from_str(s: &str) -> impl Iterator<Item = Result<i64, NumberError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim().parse::<i64>()
				.map_err(|e| NumberError::Invalid { line: l + 1, source: e }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1
		2
		-3
		3
		-2
		0
		4
	" };
	assert_eq!(part1(INPUT).unwrap(), 3);
	assert_eq!(part2(INPUT).unwrap(), 1623178306);
	assert_eq!(part1("0\n").unwrap(), 0);
	assert!(matches!(part1("1\n2\n"), Err(parsing::NumberError::NoZero)));
	assert!(matches!(part1("1\nx\n"), Err(parsing::NumberError::Invalid { line: 2, .. })));
}
