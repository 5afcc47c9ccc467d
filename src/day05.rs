// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Crate labels per stack, bottom first.
#[cfg_attr(test, derive(Debug))]
#[derive(Clone)]
struct Stacks(Vec<Vec<u8>>);

/// A rearrangement step; stack indices are zero-based.
#[cfg_attr(test, derive(Debug))]
struct Move {
	count: usize,
	from: usize,
	to: usize,
}

#[derive(Clone, Copy)]
enum Crane {
	/// Lifts one crate at a time, reversing the moved crates.
	CrateMover9000,
	/// Lifts all moved crates at once, keeping their order.
	CrateMover9001,
}

impl Stacks {
	fn apply(&mut self, step: usize, mv: &Move, crane: Crane) -> Result<(), parsing::ProcedureError> {
		let available = self.0[mv.from].len();
		let Some(keep) = available.checked_sub(mv.count) else {
			return Err(parsing::ProcedureError::Underflow {
				step, stack: mv.from + 1, count: mv.count, available })
		};
		tracing::trace!(step, count = mv.count, from = mv.from + 1, to = mv.to + 1, "moving crates");

		match crane {
			Crane::CrateMover9000 => for _ in 0..mv.count {
				if let Some(label) = self.0[mv.from].pop() { self.0[mv.to].push(label) }
			},
			Crane::CrateMover9001 => {
				let lifted = self.0[mv.from].split_off(keep);
				self.0[mv.to].extend(lifted);
			}
		}
		Ok(())
	}

	fn tops(&self) -> Result<String, parsing::ProcedureError> {
		self.0.iter()
			.enumerate()
			.map(|(i, stack)| stack.last()
				.map(|&label| label as char)
				.ok_or(parsing::ProcedureError::EmptyStack { stack: i + 1 }))
			.collect()
	}
}


fn rearrange(input: &str, crane: Crane) -> Result<String, parsing::ProcedureError> {
	let (mut stacks, moves) = parsing::procedure_from_str(input)?;
	for (i, mv) in moves.iter().enumerate() {
		stacks.apply(i + 1, mv, crane)?;
	}
	stacks.tops()
}


pub(crate) fn part1(input: &str) -> Result<String, parsing::ProcedureError> {
	rearrange(input, Crane::CrateMover9000)
}

pub(crate) fn part2(input: &str) -> Result<String, parsing::ProcedureError> {
	rearrange(input, Crane::CrateMover9001)
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Stacks, Move};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum MoveError {
		#[error("expected `move <count> from <stack> to <stack>`")]
		Format,
		#[error("invalid number")]
		Number(#[from] ParseIntError),
		#[error("stack labels start at 1")]
		ZeroStack,
	}

	impl FromStr for Move {
		type Err = MoveError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut words = s.split_whitespace();
			let mut expect = |keyword: &str| match words.next() {
				Some(word) if word == keyword => words.next().ok_or(MoveError::Format),
				_ => Err(MoveError::Format),
			};
			let count = expect("move")?.parse::<usize>()?;
			let from = expect("from")?.parse::<usize>()?;
			let to = expect("to")?.parse::<usize>()?;
			if words.next().is_some() { return Err(MoveError::Format) }
			if from == 0 || to == 0 { return Err(MoveError::ZeroStack) }
			Ok(Move { count, from: from - 1, to: to - 1 })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum ProcedureError {
		#[error("missing stack drawing")]
		NoDrawing,
		#[error("line {line}: stack labels must read 1, 2, 3, …")]
		Labels { line: usize },
		#[error("line {line}, column {column}: expected `[A-Z]` or blank")]
		Cell { line: usize, column: usize },
		#[error("line {line}: crate floating above empty space in stack {stack}")]
		Floating { line: usize, stack: usize },
		#[error("line {line}")]
		Move { line: usize, source: MoveError },
		#[error("line {line}: no stack {stack}")]
		NoStack { line: usize, stack: usize },
		#[error("step {step}: cannot move {count} crates from stack {stack} holding {available}")]
		Underflow { step: usize, stack: usize, count: usize, available: usize },
		#[error("stack {stack} ends up empty")]
		EmptyStack { stack: usize },
	}

	fn stacks_from_drawing(drawing: &[(usize, &str)]) -> Result<Stacks, ProcedureError> {
		let ((labels_l, labels), rows) = drawing.split_last().ok_or(ProcedureError::NoDrawing)?;

		let mut num_stacks = 0;
		for (i, label) in labels.split_whitespace().enumerate() {
			if label.parse::<usize>() != Ok(i + 1) {
				return Err(ProcedureError::Labels { line: labels_l + 1 })
			}
			num_stacks += 1;
		}
		if num_stacks == 0 { return Err(ProcedureError::Labels { line: labels_l + 1 }) }

		let mut stacks = vec![vec![]; num_stacks];
		for (height, (l, row)) in rows.iter().rev().enumerate() {
			for (i, stack) in stacks.iter_mut().enumerate() {
				let cell = row.get(4 * i..(4 * i + 3).min(row.len())).unwrap_or("");
				if cell.trim().is_empty() { continue }
				let [b'[', label @ b'A'..=b'Z', b']'] = cell.as_bytes() else {
					return Err(ProcedureError::Cell { line: l + 1, column: 4 * i + 1 })
				};
				if stack.len() != height {
					return Err(ProcedureError::Floating { line: l + 1, stack: i + 1 })
				}
				stack.push(*label);
			}
		}

		Ok(Stacks(stacks))
	}

	pub(super) fn procedure_from_str(s: &str) -> Result<(Stacks, Vec<Move>), ProcedureError> {
		let mut lines = s.lines().enumerate();
		let drawing = (&mut lines)
			.take_while(|(_, line)| !line.trim().is_empty())
			.collect::<Vec<_>>();
		let stacks = stacks_from_drawing(&drawing)?;

		let moves = lines
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| -> Result<Move, ProcedureError> {
				let mv = line.parse::<Move>()
					.map_err(|e| ProcedureError::Move { line: l + 1, source: e })?;
				match [mv.from, mv.to].into_iter().find(|&stack| stack >= stacks.0.len()) {
					Some(stack) => Err(ProcedureError::NoStack { line: l + 1, stack: stack + 1 }),
					None => Ok(mv),
				}
			})
			.collect::<Result<_, _>>()?;

		Ok((stacks, moves))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		    [D]
		[N] [C]
		[Z] [M] [P]
		 1   2   3

		move 1 from 2 to 1
		move 3 from 1 to 3
		move 2 from 2 to 1
		move 1 from 1 to 2
	" };
	assert_eq!(part1(INPUT).unwrap(), "CMZ");
	assert_eq!(part2(INPUT).unwrap(), "MCD");

	use parsing::ProcedureError;
	assert!(matches!(part1(&INPUT.replace("move 1 from 1 to 2", "move 1 from 1 to 4")),
		Err(ProcedureError::NoStack { line: 9, stack: 4 })));
	assert!(matches!(part1(&INPUT.replace("move 3 from 1", "move 4 from 1")),
		Err(ProcedureError::Underflow { step: 2, stack: 1, count: 4, available: 3 })));

	// Moving onto the same stack leaves it as it was, whichever the crane
	const SELF_MOVE: &str = "[A]\n[B]\n[C]\n 1 \n\nmove 2 from 1 to 1\n";
	assert_eq!(part1(SELF_MOVE).unwrap(), "A");
	assert_eq!(part2(SELF_MOVE).unwrap(), "A");
	let (mut stacks, moves) = parsing::procedure_from_str(SELF_MOVE).unwrap();
	stacks.apply(1, &moves[0], Crane::CrateMover9000).unwrap();
	assert_eq!(stacks.0, [b"CBA".to_vec()]);

	assert!(matches!(part1("[A]\n 1   2\n\nmove 1 from 1 to 2\n"),
		Err(ProcedureError::EmptyStack { stack: 1 })));
}
