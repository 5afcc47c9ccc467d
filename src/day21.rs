// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use either::Either;


const ROOT: &str = "root";
const HUMAN: &str = "humn";


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Operator { Add, Sub, Mul, Div }

impl Operator {
	fn operate(self, [left, right]: [i64; 2]) -> Option<i64> {
		use Operator::*;
		match self {
			Add => left.checked_add(right),
			Sub => left.checked_sub(right),
			Mul => left.checked_mul(right),
			Div => left.checked_div(right),
		}
	}

	/// Solves `operate` for the unknown operand, given its `output` and the
	/// `known` operand (`Left` if that is the left-hand side).
	fn unoperate(self, output: i64, known: Either<i64, i64>) -> Option<i64> {
		use {Operator::*, Either::*};
		match (self, known) {
			(Add, Left(k) | Right(k)) => output.checked_sub(k),
			(Mul, Left(k) | Right(k)) => (output.checked_rem(k) == Some(0)).then(|| output / k),
			(Sub, Left(k)) => k.checked_sub(output),
			(Sub, Right(k)) => output.checked_add(k),
			(Div, Left(k)) => (k.checked_rem(output) == Some(0)).then(|| k / output),
			(Div, Right(k)) => output.checked_mul(k),
		}
	}
}

#[cfg_attr(test, derive(Debug))]
enum Job<'a> {
	Number(i64),
	Operation(Operator, [&'a str; 2]),
}

struct Troop<'a>(std::collections::HashMap<&'a str, Job<'a>>);

impl<'a> Troop<'a> {
	fn job(&self, monkey: &str) -> Result<&Job<'a>, parsing::MathError> {
		self.0.get(monkey).ok_or_else(|| parsing::MathError::Unknown { monkey: monkey.to_owned() })
	}

	/// What `monkey` yells, or `None` if that depends on the `unknown` monkey.
	fn yell(&self, monkey: &str, unknown: Option<&str>, depth: usize) -> Result<Option<i64>, parsing::MathError> {
		use parsing::MathError as E;

		if Some(monkey) == unknown { return Ok(None) }
		if depth > self.0.len() { return Err(E::Cycle { monkey: monkey.to_owned() }) }
		match self.job(monkey)? {
			&Job::Number(number) => Ok(Some(number)),
			&Job::Operation(operator, [left, right]) => {
				let left = self.yell(left, unknown, depth + 1)?;
				let right = self.yell(right, unknown, depth + 1)?;
				match (left, right) {
					(Some(left), Some(right)) => operator.operate([left, right])
						.map(Some)
						.ok_or_else(|| E::Arithmetic { monkey: monkey.to_owned() }),
					_ => Ok(None),
				}
			}
		}
	}

	/// Walks down from `monkey` (which must yell `output`) to the human,
	/// undoing every operation on the way.
	fn solve_for_human(&self, mut monkey: &'a str, mut output: i64) -> Result<i64, parsing::MathError> {
		use parsing::MathError as E;

		while monkey != HUMAN {
			let &Job::Operation(operator, [left, right]) = self.job(monkey)? else {
				return Err(E::Unsolvable { monkey: monkey.to_owned() })
			};
			let (known, next) = match (self.yell(left, Some(HUMAN), 0)?, self.yell(right, Some(HUMAN), 0)?) {
				(Some(known), None) => (Either::Left(known), right),
				(None, Some(known)) => (Either::Right(known), left),
				_ => return Err(E::Unsolvable { monkey: monkey.to_owned() }),
			};
			output = operator.unoperate(output, known)
				.ok_or_else(|| E::Unsolvable { monkey: monkey.to_owned() })?;
			tracing::trace!(monkey, output, "inverted");
			monkey = next;
		}
		Ok(output)
	}
}


fn input_troop_from_str(s: &str) -> Result<Troop<'_>, parsing::MathError> {
	parsing::troop_from_str(s)
}


fn part1_impl(input_troop: &Troop) -> Result<i64, parsing::MathError> {
	input_troop.yell(ROOT, None, 0)?
		.ok_or_else(|| parsing::MathError::Unsolvable { monkey: ROOT.to_owned() })
}

pub(crate) fn part1(input: &str) -> Result<i64, parsing::MathError> {
	part1_impl(&input_troop_from_str(input)?)
}


fn part2_impl(input_troop: &Troop) -> Result<i64, parsing::MathError> {
	use parsing::MathError as E;

	// The root's operands must be equal
	let &Job::Operation(_, [left, right]) = input_troop.job(ROOT)? else {
		return Err(E::Unsolvable { monkey: ROOT.to_owned() })
	};
	match (input_troop.yell(left, Some(HUMAN), 0)?, input_troop.yell(right, Some(HUMAN), 0)?) {
		(Some(target), None) => input_troop.solve_for_human(right, target),
		(None, Some(target)) => input_troop.solve_for_human(left, target),
		_ => Err(E::Unsolvable { monkey: ROOT.to_owned() }),
	}
}

pub(crate) fn part2(input: &str) -> Result<i64, parsing::MathError> {
	part2_impl(&input_troop_from_str(input)?)
}


mod parsing {
	use std::{collections::HashMap, num::ParseIntError};
	use super::{Job, Operator, Troop};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum MathError {
		#[error("line {line}: expected `<name>: <number>` or `<name>: <name> <op> <name>`")]
		Format { line: usize },
		#[error("line {line}: invalid number")]
		Number { line: usize, source: ParseIntError },
		#[error("line {line}: monkey {monkey:?} already has a job")]
		Duplicate { line: usize, monkey: String },
		#[error("no monkey named {monkey:?}")]
		Unknown { monkey: String },
		#[error("monkey {monkey:?} waits on itself")]
		Cycle { monkey: String },
		#[error("monkey {monkey:?} overflows or divides by zero")]
		Arithmetic { monkey: String },
		#[error("cannot work out what monkey {monkey:?} needs from the human")]
		Unsolvable { monkey: String },
	}

	pub(super) fn troop_from_str(s: &str) -> Result<Troop<'_>, MathError> {
		use MathError as E;

		let mut jobs = HashMap::new();
		for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()) {
			let (name, job) = line.trim().split_once(": ").ok_or(E::Format { line: l + 1 })?;
			let job = match job.split(' ').collect::<Vec<_>>().as_slice() {
				&[left, operator, right] => {
					let operator = match operator {
						"+" => Operator::Add,
						"-" => Operator::Sub,
						"*" => Operator::Mul,
						"/" => Operator::Div,
						_ => return Err(E::Format { line: l + 1 }),
					};
					Job::Operation(operator, [left, right])
				}
				&[number] => Job::Number(number.parse::<i64>()
					.map_err(|e| E::Number { line: l + 1, source: e })?),
				_ => return Err(E::Format { line: l + 1 }),
			};
			if jobs.insert(name, job).is_some() {
				return Err(E::Duplicate { line: l + 1, monkey: name.to_owned() })
			}
		}
		Ok(Troop(jobs))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		root: pppw + sjmn
		dbpl: 5
		cczh: sllz + lgvd
		zczc: 2
		ptdq: humn - dvpt
		dvpt: 3
		lfqf: 4
		humn: 5
		ljgn: 2
		sjmn: drzm * dbpl
		sllz: 4
		pppw: cczh / lfqf
		lgvd: ljgn * ptdq
		drzm: hmdt - zczc
		hmdt: 32
	" };
	assert_eq!(part1(INPUT).unwrap(), 152);
	assert_eq!(part2(INPUT).unwrap(), 301);

	assert_eq!(Operator::Sub.unoperate(3, Either::Left(10)), Some(7));
	assert_eq!(Operator::Div.unoperate(4, Either::Right(3)), Some(12));

	use parsing::MathError;
	assert!(matches!(part1("root: a + b\na: 1\n"), Err(MathError::Unknown { .. })));
	assert!(matches!(part1("root: a + a\na: root * root\n"), Err(MathError::Cycle { .. })));
	assert!(matches!(part1("root: a / b\na: 1\nb: 0\n"), Err(MathError::Arithmetic { .. })));

	// No integer `humn` makes 7 / humn yield 2, nor humn * 2 yield 3
	assert!(matches!(part2("root: a + b\na: c / humn\nc: 7\nhumn: 1\nb: 2\n"),
		Err(MathError::Unsolvable { monkey }) if monkey == "a"));
	assert!(matches!(part2("root: a + b\na: humn * c\nc: 2\nhumn: 1\nb: 3\n"),
		Err(MathError::Unsolvable { monkey }) if monkey == "a"));
}
