// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Label([u8; 2]);

const START: Label = Label(*b"AA");

impl std::fmt::Display for Label {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
	}
}

impl std::fmt::Debug for Label {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "\"{self}\"")
	}
}

#[cfg_attr(test, derive(Debug))]
struct Valve {
	flow_rate: usize,
	tunnels: Vec<Label>,
}

type Valves = HashMap<Label, Valve>;


/// The valves worth opening, with travel times between them. Node `i` is the
/// `i`th valve with a nonzero flow rate (bit `1 << i` when opened); the start
/// is the extra node after those.
struct Network {
	flow_rates: Vec<usize>,
	distances: Vec<Vec<Option<usize>>>,
}

impl Network {
	fn new(valves: &Valves) -> Self {
		use std::collections::VecDeque;

		let mut useful = valves.iter()
			.filter(|(_, valve)| valve.flow_rate > 0)
			.map(|(label, _)| *label)
			.collect::<Vec<_>>();
		useful.sort_unstable();

		let distances: Vec<Vec<_>> = useful.iter().chain(std::iter::once(&START))
			.map(|&from| {
				let mut steps = HashMap::from([(from, 0_usize)]);
				let mut queue = VecDeque::from([from]);
				while let Some(label) = queue.pop_front() {
					let n = steps[&label];
					for &next in valves.get(&label).map_or(&[][..], |v| v.tunnels.as_slice()) {
						steps.entry(next).or_insert_with(|| {
							queue.push_back(next);
							n + 1
						});
					}
				}
				useful.iter().map(|to| steps.get(to).copied()).collect::<Vec<_>>()
			})
			.collect();

		Network { flow_rates: useful.iter().map(|l| valves[l].flow_rate).collect(), distances }
	}

	fn start(&self) -> usize {
		self.flow_rates.len()
	}

	/// Most pressure releasable within `minutes` for every set of opened
	/// valves that can be reached (including none).
	fn best_per_opened(&self, minutes: usize) -> HashMap<u64, usize> {
		let mut best = HashMap::new();
		self.visit(self.start(), minutes, 0, 0, &mut best);
		tracing::debug!(minutes, sets = best.len(), "explored valve sets");
		best
	}

	fn visit(&self, at: usize, remaining: usize, opened: u64, released: usize, best: &mut HashMap<u64, usize>) {
		let entry = best.entry(opened).or_insert(0);
		*entry = (*entry).max(released);

		for (next, distance) in self.distances[at].iter().enumerate() {
			if opened & 1 << next != 0 { continue }
			// Travel plus one minute to open, leaving at least a minute of flow
			let cost = match distance {
				Some(d) if d + 1 < remaining => d + 1,
				_ => continue,
			};
			let remaining = remaining - cost;
			self.visit(next, remaining, opened | 1 << next,
				released + remaining * self.flow_rates[next], best);
		}
	}
}


fn input_network_from_str(s: &str) -> Result<Network, parsing::ValveError> {
	let valves = parsing::valves_from_str(s)?;
	Ok(Network::new(&valves))
}


fn part1_impl(input_network: &Network) -> usize {
	input_network.best_per_opened(30).into_values().max().unwrap_or_default()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::ValveError> {
	Ok(part1_impl(&input_network_from_str(input)?))
}


fn part2_impl(input_network: &Network) -> usize {
	// The elephant and I open disjoint sets of valves
	let best = input_network.best_per_opened(26).into_iter().collect::<Vec<_>>();
	best.iter()
		.flat_map(|&(mine, me)| best.iter()
			.filter(move |(theirs, _)| mine & theirs == 0)
			.map(move |(_, elephant)| me + elephant))
		.max()
		.unwrap_or_default()
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::ValveError> {
	Ok(part2_impl(&input_network_from_str(input)?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Label, Valve, Valves, START};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum ValveError {
		#[error("line {line}: expected `Valve <label> has flow rate=<n>; tunnels lead to valves <label>, …`")]
		Format { line: usize },
		#[error("line {line}: invalid label {found:?}")]
		Label { line: usize, found: String },
		#[error("line {line}: invalid flow rate")]
		FlowRate { line: usize, source: ParseIntError },
		#[error("line {line}: valve {label} was already described")]
		Duplicate { line: usize, label: Label },
		#[error("valve {from} leads to undescribed valve {to}")]
		UnknownTunnel { from: Label, to: Label },
		#[error("no valve AA to start from")]
		NoStart,
		#[error("more than 64 valves with a nonzero flow rate")]
		TooMany,
	}

	fn label(line: usize, s: &str) -> Result<Label, ValveError> {
		match s.as_bytes() {
			&[a, b] if a.is_ascii_uppercase() && b.is_ascii_uppercase() => Ok(Label([a, b])),
			_ => Err(ValveError::Label { line, found: s.to_owned() }),
		}
	}

	pub(super) fn valves_from_str(s: &str) -> Result<Valves, ValveError> {
		use ValveError as E;

		let mut valves = Valves::new();
		for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()) {
			let (name, rest) = line.trim()
				.strip_prefix("Valve ")
				.and_then(|rest| rest.split_once(" has flow rate="))
				.ok_or(E::Format { line: l + 1 })?;
			let (flow_rate, tunnels) = rest.split_once("; ").ok_or(E::Format { line: l + 1 })?;
			let tunnels = tunnels.strip_prefix("tunnels lead to valves ")
				.or_else(|| tunnels.strip_prefix("tunnel leads to valve "))
				.ok_or(E::Format { line: l + 1 })?;

			let name = label(l + 1, name)?;
			let valve = Valve {
				flow_rate: flow_rate.parse::<usize>().map_err(|e| E::FlowRate { line: l + 1, source: e })?,
				tunnels: tunnels.split(", ").map(|t| label(l + 1, t)).collect::<Result<_, _>>()?,
			};
			if valves.insert(name, valve).is_some() {
				return Err(E::Duplicate { line: l + 1, label: name })
			}
		}

		if !valves.contains_key(&START) { return Err(E::NoStart) }
		if valves.values().filter(|v| v.flow_rate > 0).count() > 64 { return Err(E::TooMany) }
		for (&from, valve) in &valves {
			if let Some(&to) = valve.tunnels.iter().find(|to| !valves.contains_key(to)) {
				return Err(E::UnknownTunnel { from, to })
			}
		}

		Ok(valves)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
		Valve BB has flow rate=13; tunnels lead to valves CC, AA
		Valve CC has flow rate=2; tunnels lead to valves DD, BB
		Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
		Valve EE has flow rate=3; tunnels lead to valves FF, DD
		Valve FF has flow rate=0; tunnels lead to valves EE, GG
		Valve GG has flow rate=0; tunnels lead to valves FF, HH
		Valve HH has flow rate=22; tunnel leads to valve GG
		Valve II has flow rate=0; tunnels lead to valves AA, JJ
		Valve JJ has flow rate=21; tunnel leads to valve II
	" };
	assert_eq!(part1(INPUT).unwrap(), 1651);
	assert_eq!(part2(INPUT).unwrap(), 1707);

	let network = input_network_from_str(INPUT).unwrap();
	assert_eq!(network.flow_rates, [13, 2, 20, 3, 22, 21]);
	// From AA: BB 1, DD 1, JJ 2, HH 5
	assert_eq!(network.distances[network.start()][4], Some(5));

	use parsing::ValveError;
	assert!(matches!(part1("Valve BB has flow rate=1; tunnel leads to valve BB\n"), Err(ValveError::NoStart)));
	assert!(matches!(part1("Valve AA has flow rate=0; tunnel leads to valve ZZ\n"),
		Err(ValveError::UnknownTunnel { .. })));
	assert!(matches!(part1("Valve aA has flow rate=0; tunnel leads to valve AA\n"),
		Err(ValveError::Label { line: 1, .. })));
}
