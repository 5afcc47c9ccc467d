// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Operation {
	Add(u64),
	Mul(u64),
	Square,
}

impl Operation {
	fn apply(self, old: u64) -> u64 {
		match self {
			Operation::Add(v) => old + v,
			Operation::Mul(v) => old * v,
			Operation::Square => old * old,
		}
	}
}

#[derive(Clone)]
#[cfg_attr(test, derive(Debug))]
struct Monkey {
	items: Vec<u64>,
	operation: Operation,
	divisor: u64,
	/// Target monkey if the test fails, and if it passes.
	targets: [usize; 2],
}


fn input_monkeys_from_str(s: &str) -> Result<Vec<Monkey>, parsing::MonkeyError> {
	parsing::monkeys_from_str(s)
}


fn monkey_business(mut monkeys: Vec<Monkey>, rounds: usize, relief: impl Fn(u64) -> u64) -> u64 {
	let mut inspections = vec![0_u64; monkeys.len()];

	for _ in 0..rounds {
		for i in 0..monkeys.len() {
			let items = std::mem::take(&mut monkeys[i].items);
			inspections[i] += items.len() as u64;

			let Monkey { operation, divisor, targets, .. } = monkeys[i];
			for worry in items {
				let worry = relief(operation.apply(worry));
				monkeys[targets[(worry % divisor == 0) as usize]].items.push(worry);
			}
		}
	}

	tracing::debug!(?inspections, "inspections per monkey");
	inspections.sort_unstable_by(|a, b| b.cmp(a));
	inspections.iter().take(2).product()
}


fn part1_impl(input_monkeys: Vec<Monkey>) -> u64 {
	monkey_business(input_monkeys, 20, |worry| worry / 3)
}

pub(crate) fn part1(input: &str) -> Result<u64, parsing::MonkeyError> {
	Ok(part1_impl(input_monkeys_from_str(input)?))
}


fn part2_impl(input_monkeys: Vec<Monkey>) -> u64 {
	// Every test only cares about the worry level modulo its divisor
	let modulus = input_monkeys.iter().map(|monkey| monkey.divisor).product::<u64>();
	monkey_business(input_monkeys, 10_000, |worry| worry % modulus)
}

pub(crate) fn part2(input: &str) -> Result<u64, parsing::MonkeyError> {
	Ok(part2_impl(input_monkeys_from_str(input)?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Monkey, Operation};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum MonkeyError {
		#[error("line {line}: expected {expected:?}")]
		Format { line: usize, expected: &'static str },
		#[error("description of monkey {monkey} ends early")]
		Truncated { monkey: usize },
		#[error("line {line}: monkeys must be numbered 0, 1, 2, …")]
		Id { line: usize },
		#[error("line {line}: invalid number")]
		Number { line: usize, source: ParseIntError },
		#[error("line {line}: unsupported operation {found:?}")]
		Operation { line: usize, found: String },
		#[error("line {line}: divisor must not be zero")]
		ZeroDivisor { line: usize },
		#[error("monkey {monkey} throws to monkey {target}, which is itself or missing")]
		Target { monkey: usize, target: usize },
		#[error("need at least two monkeys")]
		TooFew,
	}

	pub(super) fn monkeys_from_str(s: &str) -> Result<Vec<Monkey>, MonkeyError> {
		use MonkeyError as E;

		let mut lines = s.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());
		let mut monkeys = vec![];

		macro_rules! field { ( $prefix:literal ) => { {
			let (l, line) = lines.next().ok_or(E::Truncated { monkey: monkeys.len() })?;
			let value = line.trim().strip_prefix($prefix)
				.ok_or(E::Format { line: l + 1, expected: $prefix })?;
			(l + 1, value)
		} } }

		macro_rules! number { ( $l:expr, $s:expr ) => {
			$s.trim().parse().map_err(|e| E::Number { line: $l, source: e })?
		} }

		while let Some((l, header)) = lines.next() {
			let id = header.trim()
				.strip_prefix("Monkey ")
				.and_then(|id| id.strip_suffix(':'))
				.ok_or(E::Format { line: l + 1, expected: "Monkey <id>:" })?;
			if id.parse::<usize>() != Ok(monkeys.len()) { return Err(E::Id { line: l + 1 }) }

			let (l, items) = field!("Starting items:");
			let items = items.split(',')
				.map(|item| -> Result<u64, E> { Ok(number!(l, item)) })
				.collect::<Result<_, E>>()?;

			let (l, operation) = field!("Operation: new = old ");
			let operation = match operation.split_once(' ') {
				Some(("*", "old")) => Operation::Square,
				Some(("+", "old")) => Operation::Mul(2),
				Some(("*", v)) => Operation::Mul(number!(l, v)),
				Some(("+", v)) => Operation::Add(number!(l, v)),
				_ => return Err(E::Operation { line: l, found: operation.to_owned() }),
			};

			let (l, divisor) = field!("Test: divisible by");
			let divisor: u64 = number!(l, divisor);
			if divisor == 0 { return Err(E::ZeroDivisor { line: l }) }

			let (l, if_true) = field!("If true: throw to monkey");
			let if_true: usize = number!(l, if_true);
			let (l, if_false) = field!("If false: throw to monkey");
			let if_false: usize = number!(l, if_false);

			monkeys.push(Monkey { items, operation, divisor, targets: [if_false, if_true] });
		}

		if monkeys.len() < 2 { return Err(E::TooFew) }
		for (monkey, target) in monkeys.iter().enumerate()
			.flat_map(|(i, monkey)| monkey.targets.map(|target| (i, target))) {
			if target == monkey || target >= monkeys.len() {
				return Err(E::Target { monkey, target })
			}
		}

		Ok(monkeys)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Monkey 0:
		  Starting items: 79, 98
		  Operation: new = old * 19
		  Test: divisible by 23
		    If true: throw to monkey 2
		    If false: throw to monkey 3

		Monkey 1:
		  Starting items: 54, 65, 75, 74
		  Operation: new = old + 6
		  Test: divisible by 19
		    If true: throw to monkey 2
		    If false: throw to monkey 0

		Monkey 2:
		  Starting items: 79, 60, 97
		  Operation: new = old * old
		  Test: divisible by 13
		    If true: throw to monkey 1
		    If false: throw to monkey 3

		Monkey 3:
		  Starting items: 74
		  Operation: new = old + 3
		  Test: divisible by 17
		    If true: throw to monkey 0
		    If false: throw to monkey 1
	" };
	assert_eq!(part1(INPUT).unwrap(), 10605);
	assert_eq!(part2(INPUT).unwrap(), 2713310158);

	let monkeys = input_monkeys_from_str(INPUT).unwrap();
	assert_eq!(monkeys[2].operation, Operation::Square);
	assert_eq!(monkeys[1].targets, [0, 2]);
	assert!(matches!(part1(&INPUT.replace("monkey 1\n", "monkey 7\n")),
		Err(parsing::MonkeyError::Target { monkey: 2, target: 7 })));
}
