// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const ORE: usize = 0;
const CLAY: usize = 1;
const OBSIDIAN: usize = 2;
const GEODE: usize = 3;
const RESOURCES: [&str; 4] = ["ore", "clay", "obsidian", "geode"];

/// Indexed by `ORE`, `CLAY`, `OBSIDIAN` & `GEODE`.
type Amounts = [u32; 4];


#[cfg_attr(test, derive(Debug))]
struct Blueprint {
	id: u32,
	/// Cost of each kind of robot
	costs: [Amounts; 4],
}

#[derive(Clone, Copy)]
struct Inventory {
	minutes_left: u32,
	robots: Amounts,
	stock: Amounts,
}

impl Blueprint {
	fn max_geodes(&self, minutes: u32) -> u32 {
		// No use producing more of a resource per minute than can be spent
		let mut max_spend = [u32::MAX; 4];
		for resource in [ORE, CLAY, OBSIDIAN] {
			max_spend[resource] = self.costs.iter().map(|cost| cost[resource]).max().unwrap_or_default();
		}

		let mut best = 0;
		self.search(Inventory { minutes_left: minutes, robots: [1, 0, 0, 0], stock: [0; 4] }, &max_spend, &mut best);
		tracing::debug!(id = self.id, minutes, geodes = best, "blueprint evaluated");
		best
	}

	/// Branches on which robot to build next, waiting as long as needed.
	fn search(&self, inventory: Inventory, max_spend: &Amounts, best: &mut u32) {
		let Inventory { minutes_left: left, robots, stock } = inventory;

		let idle = stock[GEODE] + robots[GEODE] * left;
		*best = (*best).max(idle);
		// Even a new geode robot every remaining minute would not do better
		if idle + left * left.saturating_sub(1) / 2 <= *best { return }

		for robot in (ORE..=GEODE).rev() {
			if robot != GEODE && robots[robot] * left + stock[robot] >= max_spend[robot] * left { continue }

			let cost = &self.costs[robot];
			let wait = (ORE..GEODE).try_fold(0, |wait: u32, resource| {
				if cost[resource] <= stock[resource] { return Some(wait) }
				if robots[resource] == 0 { return None }
				let missing = cost[resource] - stock[resource];
				Some(wait.max((missing + robots[resource] - 1) / robots[resource]))
			});
			let Some(elapsed) = wait.map(|wait| wait + 1).filter(|&elapsed| elapsed < left) else { continue };

			let mut next = Inventory { minutes_left: left - elapsed, robots, stock };
			for resource in ORE..=GEODE {
				next.stock[resource] = stock[resource] + robots[resource] * elapsed - cost[resource];
			}
			next.robots[robot] += 1;
			self.search(next, max_spend, best);
		}
	}
}


fn input_blueprints_from_str(s: &str) -> Result<Vec<Blueprint>, parsing::BlueprintError> {
	parsing::blueprints_from_str(s)
}


fn part1_impl(input_blueprints: &[Blueprint]) -> u32 {
	use rayon::prelude::{IntoParallelRefIterator as _, ParallelIterator as _};
	input_blueprints.par_iter()
		.map(|bp| bp.id * bp.max_geodes(24))
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u32, parsing::BlueprintError> {
	Ok(part1_impl(&input_blueprints_from_str(input)?))
}


fn part2_impl(input_blueprints: &[Blueprint]) -> u64 {
	use rayon::prelude::{IntoParallelRefIterator as _, ParallelIterator as _};
	input_blueprints[..input_blueprints.len().min(3)].par_iter()
		.map(|bp| bp.max_geodes(32) as u64)
		.product()
}

pub(crate) fn part2(input: &str) -> Result<u64, parsing::BlueprintError> {
	Ok(part2_impl(&input_blueprints_from_str(input)?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Amounts, Blueprint, GEODE, RESOURCES};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum BlueprintError {
		#[error("blueprint {blueprint}: expected `Blueprint <id>: Each <kind> robot costs <amount> <kind>[ and …]. …`")]
		Format { blueprint: usize },
		#[error("blueprint {blueprint}: invalid number")]
		Number { blueprint: usize, source: ParseIntError },
		#[error("blueprint {blueprint}: unknown resource {found:?}")]
		Resource { blueprint: usize, found: String },
		#[error("blueprint {blueprint}: {kind} robot described twice")]
		Duplicate { blueprint: usize, kind: &'static str },
		#[error("blueprint {blueprint}: {kind} robot missing")]
		Missing { blueprint: usize, kind: &'static str },
		#[error("blueprint {blueprint}: robots cannot cost geodes")]
		GeodeCost { blueprint: usize },
		#[error("no blueprints")]
		Empty,
	}

	fn resource(blueprint: usize, s: &str) -> Result<usize, BlueprintError> {
		RESOURCES.iter().position(|r| *r == s)
			.ok_or_else(|| BlueprintError::Resource { blueprint, found: s.to_owned() })
	}

	fn blueprint_from_str(b: usize, s: &str) -> Result<Blueprint, BlueprintError> {
		use BlueprintError as E;

		let (id, robots) = s.split_once(':').ok_or(E::Format { blueprint: b })?;
		let id = id.trim().parse::<u32>().map_err(|e| E::Number { blueprint: b, source: e })?;

		let mut costs: [Option<Amounts>; 4] = [None; 4];
		for sentence in robots.split('.').filter(|s| !s.trim().is_empty()) {
			let words = sentence.split_whitespace().collect::<Vec<_>>();
			let [ "Each", kind, "robot", "costs", amounts @ .. ] = words.as_slice() else {
				return Err(E::Format { blueprint: b })
			};

			let mut cost = [0; 4];
			for amount in amounts.split(|w| *w == "and") {
				let &[number, name] = amount else { return Err(E::Format { blueprint: b }) };
				let spent = resource(b, name)?;
				if spent == GEODE { return Err(E::GeodeCost { blueprint: b }) }
				cost[spent] = number.parse::<u32>().map_err(|e| E::Number { blueprint: b, source: e })?;
			}

			let robot = resource(b, kind)?;
			if costs[robot].replace(cost).is_some() {
				return Err(E::Duplicate { blueprint: b, kind: RESOURCES[robot] })
			}
		}

		let mut complete = [[0; 4]; 4];
		for (robot, cost) in costs.into_iter().enumerate() {
			complete[robot] = cost.ok_or(E::Missing { blueprint: b, kind: RESOURCES[robot] })?;
		}
		Ok(Blueprint { id, costs: complete })
	}

	/// Blueprints may wrap across lines, so split on the keyword instead.
	pub(super) fn blueprints_from_str(s: &str) -> Result<Vec<Blueprint>, BlueprintError> {
		let mut chunks = s.split("Blueprint ");
		if chunks.next().map_or(false, |before| !before.trim().is_empty()) {
			return Err(BlueprintError::Format { blueprint: 1 })
		}
		let blueprints = chunks
			.enumerate()
			.map(|(b, chunk)| blueprint_from_str(b + 1, chunk))
			.collect::<Result<Vec<_>, _>>()?;
		if blueprints.is_empty() { return Err(BlueprintError::Empty) }
		Ok(blueprints)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Blueprint 1:
		  Each ore robot costs 4 ore.
		  Each clay robot costs 2 ore.
		  Each obsidian robot costs 3 ore and 14 clay.
		  Each geode robot costs 2 ore and 7 obsidian.

		Blueprint 2:
		  Each ore robot costs 2 ore.
		  Each clay robot costs 3 ore.
		  Each obsidian robot costs 3 ore and 8 clay.
		  Each geode robot costs 3 ore and 12 obsidian.
	" };
	let blueprints = input_blueprints_from_str(INPUT).unwrap();
	assert_eq!(blueprints[0].costs, [[4, 0, 0, 0], [2, 0, 0, 0], [3, 14, 0, 0], [2, 0, 7, 0]]);
	assert_eq!(blueprints[0].max_geodes(24), 9);
	assert_eq!(blueprints[1].max_geodes(24), 12);
	assert_eq!(part1(INPUT).unwrap(), 33);
	assert_eq!(part2(INPUT).unwrap(), 56 * 62);

	// One blueprint per line works too
	assert_eq!(part1(&INPUT.replace(":\n", ":").replace(".\n ", ". ")).unwrap(), 33);

	use parsing::BlueprintError;
	assert!(matches!(part1("Blueprint 1: Each ore robot costs 4 ore."),
		Err(BlueprintError::Missing { blueprint: 1, kind: "clay" })));
	assert!(matches!(part1("Blueprint 1: Each ore robot costs 4 gold."),
		Err(BlueprintError::Resource { blueprint: 1, .. })));
}
