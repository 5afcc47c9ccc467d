// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Balanced base-5 number, digits `=` (-2), `-` (-1), `0`, `1` & `2`.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct Snafu(i64);

impl std::fmt::Display for Snafu {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write as _;
		if self.0 == 0 { return f.write_char('0') }

		let digits = itertools::unfold(self.0, |rem| (*rem != 0).then(|| {
			let digit = (*rem + 2).rem_euclid(5) - 2;
			*rem = (*rem - digit) / 5;
			digit
		})).collect::<Vec<_>>();
		digits.into_iter().rev().try_for_each(|digit| f.write_char(match digit {
			-2 => '=',
			-1 => '-',
			0 => '0',
			1 => '1',
			_ => '2',
		}))
	}
}


fn input_snafus_from_str(s: &str) -> Result<Vec<Snafu>, parsing::SnafuError> {
	parsing::snafus_from_str(s).collect()
}


fn part1_impl(input_snafus: &[Snafu]) -> Option<Snafu> {
	input_snafus.iter().try_fold(0_i64, |total, Snafu(n)| total.checked_add(*n)).map(Snafu)
}

pub(crate) fn part1(input: &str) -> Result<Snafu, parsing::SnafuError> {
	part1_impl(&input_snafus_from_str(input)?).ok_or(parsing::SnafuError::Overflow)
}


pub(crate) fn part2(_input: &str) -> Result<&'static str, std::convert::Infallible> {
	Ok("Merry Christmas!")
}


mod parsing {
	use std::str::FromStr;
	use super::Snafu;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum SnafuError {
		#[error("empty number")]
		Empty,
		#[error("column {column}: invalid SNAFU digit {found:?}")]
		InvalidDigit { column: usize, found: char },
		#[error("number too large")]
		Overflow,
		#[error("line {line}: {source}")]
		Line { line: usize, source: Box<SnafuError> },
	}

	impl FromStr for Snafu {
		type Err = SnafuError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.is_empty() { return Err(SnafuError::Empty) }
			s.bytes().enumerate().try_fold(Snafu(0), |Snafu(n), (c, b)| {
				let digit = match b {
					b'=' => -2,
					b'-' => -1,
					b'0'..=b'2' => (b - b'0') as i64,
					_ => return Err(SnafuError::InvalidDigit { column: c + 1, found: b as char }),
				};
				n.checked_mul(5).and_then(|n| n.checked_add(digit))
					.map(Snafu)
					.ok_or(SnafuError::Overflow)
			})
		}
	}

	pub(super) fn snafus_from_str(s: &str) -> impl Iterator<Item = Result<Snafu, SnafuError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim().parse::<Snafu>()
				.map_err(|e| SnafuError::Line { line: l + 1, source: Box::new(e) }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1=-0-2
		12111
		2=0=
		21
		2=01
		111
		20012
		112
		1=-1=
		1-12
		12
		1=
		122
	" };
	assert_eq!(part1(INPUT).unwrap().to_string(), "2=-1=0");
	assert_eq!(input_snafus_from_str(INPUT).unwrap().iter().map(|s| s.0).sum::<i64>(), 4890);
	assert_eq!(part2(INPUT).unwrap(), "Merry Christmas!");
	assert_eq!(Snafu(-8).to_string(), "=2");
	assert!(matches!(part1("12\n1x\n"),
		Err(parsing::SnafuError::Line { line: 2, source }) if matches!(*source, parsing::SnafuError::InvalidDigit { column: 2, found: 'x' })));
}

#[cfg(test)]
mod conversions {
	use test_case::test_case;
	use super::Snafu;

	#[test_case(1, "1")]
	#[test_case(3, "1=")]
	#[test_case(8, "2=")]
	#[test_case(10, "20")]
	#[test_case(2022, "1=11-2")]
	#[test_case(12345, "1-0---0")]
	#[test_case(314159265, "1121-1110-1=0")]
	fn decimal_and_snafu(decimal: i64, snafu: &str) {
		assert_eq!(Snafu(decimal).to_string(), snafu);
		assert_eq!(snafu.parse::<Snafu>().unwrap(), Snafu(decimal));
	}
}
