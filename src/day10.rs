// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const CRT_WIDTH: usize = 40;
const CRT_HEIGHT: usize = 6;


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug))]
enum Instr { Noop, Addx(i32) }

impl Instr {
	fn cycles(self) -> usize {
		match self { Instr::Noop => 1, Instr::Addx(_) => 2 }
	}
}

/// Value of the X register *during* each cycle, starting with cycle 1.
fn register_trace(instrs: &[Instr]) -> Vec<i32> {
	let mut x = 1;
	let mut trace = Vec::with_capacity(instrs.iter().map(|i| i.cycles()).sum());
	for &instr in instrs {
		trace.extend(std::iter::repeat(x).take(instr.cycles()));
		if let Instr::Addx(v) = instr { x += v }
	}
	trace
}

pub(crate) struct Crt([[bool; CRT_WIDTH]; CRT_HEIGHT]);

impl std::fmt::Display for Crt {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use itertools::Itertools as _;
		let rows = self.0.iter()
			.map(|row| row.iter().map(|&lit| if lit { '#' } else { '.' }).collect::<String>());
		write!(f, "{}", rows.format("\n"))
	}
}


fn input_instrs_from_str(s: &str) -> Result<Vec<Instr>, parsing::InstrError> {
	parsing::instrs_from_str(s).collect()
}


fn part1_impl(input_instrs: &[Instr]) -> i32 {
	let trace = register_trace(input_instrs);
	(20..=220).step_by(40)
		.filter_map(|cycle| trace.get(cycle - 1).map(|x| cycle as i32 * x))
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<i32, parsing::InstrError> {
	Ok(part1_impl(&input_instrs_from_str(input)?))
}


fn part2_impl(input_instrs: &[Instr]) -> Crt {
	let mut crt = Crt([[false; CRT_WIDTH]; CRT_HEIGHT]);
	for (i, x) in register_trace(input_instrs).into_iter().take(CRT_WIDTH * CRT_HEIGHT).enumerate() {
		let (row, column) = (i / CRT_WIDTH, i % CRT_WIDTH);
		crt.0[row][column] = (x - column as i32).abs() <= 1;
	}
	crt
}

pub(crate) fn part2(input: &str) -> Result<Crt, parsing::InstrError> {
	Ok(part2_impl(&input_instrs_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Instr;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum InstrError {
		#[error("line {line}: unknown instruction {found:?}")]
		Unknown { line: usize, found: String },
		#[error("line {line}: invalid `addx` operand")]
		Operand { line: usize, source: ParseIntError },
	}

	pub(super) fn instrs_from_str(s: &str) -> impl Iterator<Item = Result<Instr, InstrError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| match line.trim().split_once(' ') {
				None if line.trim() == "noop" => Ok(Instr::Noop),
				Some(("addx", v)) => i32::from_str(v)
					.map(Instr::Addx)
					.map_err(|e| InstrError::Operand { line: l + 1, source: e }),
				_ => Err(InstrError::Unknown { line: l + 1, found: line.to_owned() }),
			})
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			noop
			addx 3
			addx -5
		" },
		include_str!("day10-example.txt"),
	];
	assert_eq!(part1(INPUTS[0]).unwrap(), 0);
	assert_eq!(part1(INPUTS[1]).unwrap(), 13140);
	assert_eq!(part2(INPUTS[1]).unwrap().to_string(), indoc::indoc! { "
		##..##..##..##..##..##..##..##..##..##..
		###...###...###...###...###...###...###.
		####....####....####....####....####....
		#####.....#####.....#####.....#####.....
		######......######......######......####
		#######.......#######.......#######....." });
	assert_eq!(register_trace(&input_instrs_from_str(INPUTS[0]).unwrap()), [1, 1, 1, 4, 4]);
}
