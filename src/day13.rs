// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::cmp::Ordering;


#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Packet {
	Int(u32),
	List(Vec<Packet>),
}

impl Ord for Packet {
	fn cmp(&self, other: &Self) -> Ordering {
		use Packet::*;
		match (self, other) {
			(Int(l), Int(r)) => l.cmp(r),
			(List(l), List(r)) => l.cmp(r),
			(Int(l), List(r)) => std::slice::from_ref(&Int(*l)).cmp(r.as_slice()),
			(List(l), Int(r)) => l.as_slice().cmp(std::slice::from_ref(&Int(*r))),
		}
	}
}

impl PartialOrd for Packet {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

fn divider(value: u32) -> Packet {
	Packet::List(vec![Packet::List(vec![Packet::Int(value)])])
}


fn input_packets_from_str(s: &str) -> Result<Vec<Packet>, parsing::PacketError> {
	parsing::packets_from_str(s).collect()
}


fn part1_impl(input_packets: &[Packet]) -> usize {
	input_packets.chunks_exact(2)
		.enumerate()
		.filter(|(_, pair)| pair[0] <= pair[1])
		.map(|(i, _)| i + 1)
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::PacketError> {
	let packets = input_packets_from_str(input)?;
	if packets.len() % 2 != 0 { return Err(parsing::PacketError::Unpaired) }
	Ok(part1_impl(&packets))
}


fn part2_impl(input_packets: &[Packet]) -> usize {
	// Positions follow from counting smaller packets, no sort needed
	let [first, second] = [divider(2), divider(6)];
	let before_first = input_packets.iter().filter(|p| **p < first).count();
	let before_second = input_packets.iter().filter(|p| **p < second).count();
	(before_first + 1) * (before_second + 2)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::PacketError> {
	Ok(part2_impl(&input_packets_from_str(input)?))
}


mod parsing {
	use super::Packet;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum PacketError {
		#[error("line {line}, column {column}: unexpected {found:?}")]
		Unexpected { line: usize, column: usize, found: Option<char> },
		#[error("line {line}, column {column}: integer out of range")]
		Int { line: usize, column: usize },
		#[error("packets do not form pairs")]
		Unpaired,
	}

	/// Recursive-descent parser over one line’s bytes.
	struct Parser<'s> {
		bytes: &'s [u8],
		pos: usize,
		line: usize,
	}

	impl Parser<'_> {
		fn unexpected(&self) -> PacketError {
			PacketError::Unexpected {
				line: self.line,
				column: self.pos + 1,
				found: self.bytes.get(self.pos).map(|&b| b as char),
			}
		}

		fn packet(&mut self) -> Result<Packet, PacketError> {
			match self.bytes.get(self.pos) {
				Some(b'[') => {
					self.pos += 1;
					let mut items = vec![];
					if self.bytes.get(self.pos) == Some(&b']') {
						self.pos += 1;
						return Ok(Packet::List(items))
					}
					loop {
						items.push(self.packet()?);
						match self.bytes.get(self.pos) {
							Some(b',') => self.pos += 1,
							Some(b']') => { self.pos += 1; return Ok(Packet::List(items)) }
							_ => return Err(self.unexpected()),
						}
					}
				}
				Some(b'0'..=b'9') => {
					let start = self.pos;
					while matches!(self.bytes.get(self.pos), Some(b'0'..=b'9')) { self.pos += 1 }
					self.bytes[start..self.pos].iter()
						.try_fold(0_u32, |n, &b| n.checked_mul(10)?.checked_add((b - b'0') as u32))
						.map(Packet::Int)
						.ok_or(PacketError::Int { line: self.line, column: start + 1 })
				}
				_ => Err(self.unexpected()),
			}
		}
	}

	pub(super) fn packets_from_str(s: &str) -> impl Iterator<Item = Result<Packet, PacketError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| -> Result<Packet, PacketError> {
				let mut parser = Parser { bytes: line.trim_end().as_bytes(), pos: 0, line: l + 1 };
				let packet = parser.packet()?;
				if parser.pos != parser.bytes.len() { return Err(parser.unexpected()) }
				Ok(packet)
			})
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		[1,1,3,1,1]
		[1,1,5,1,1]

		[[1],[2,3,4]]
		[[1],4]

		[9]
		[[8,7,6]]

		[[4,4],4,4]
		[[4,4],4,4,4]

		[7,7,7,7]
		[7,7,7]

		[]
		[3]

		[[[]]]
		[[]]

		[1,[2,[3,[4,[5,6,7]]]],8,9]
		[1,[2,[3,[4,[5,6,0]]]],8,9]
	" };
	assert_eq!(part1(INPUT).unwrap(), 13);
	assert_eq!(part2(INPUT).unwrap(), 140);

	use parsing::PacketError;
	assert!(matches!(part1("[1,2\n[1]\n"),
		Err(PacketError::Unexpected { line: 1, column: 5, found: None })));
	assert!(matches!(part1("[1]\n[1]]\n"),
		Err(PacketError::Unexpected { line: 2, column: 4, found: Some(']') })));
	assert!(matches!(part1("[1,4294967296]\n[1]\n"),
		Err(PacketError::Int { line: 1, column: 4 })));
}
