// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const TUNING_MULTIPLIER: isize = 4_000_000;


#[derive(Clone)]
#[cfg_attr(test, derive(Debug))]
struct Sensor {
	pos: [isize; 2],
	beacon: [isize; 2],
}

fn distance(a: [isize; 2], b: [isize; 2]) -> isize {
	(a[0] - b[0]).abs() + (a[1] - b[1]).abs()
}

impl Sensor {
	fn radius(&self) -> isize {
		distance(self.pos, self.beacon)
	}

	fn covers(&self, pos: [isize; 2]) -> bool {
		distance(self.pos, pos) <= self.radius()
	}

	/// Inclusive X span this sensor covers on row `y`.
	fn row_span(&self, y: isize) -> Option<[isize; 2]> {
		let reach = self.radius() - (self.pos[1] - y).abs();
		(reach >= 0).then(|| [self.pos[0] - reach, self.pos[0] + reach])
	}
}

/// Covered spans on row `y`, ordered by start (possibly overlapping).
fn row_spans(sensors: &[Sensor], y: isize) -> Vec<[isize; 2]> {
	let mut spans = sensors.iter().filter_map(|s| s.row_span(y)).collect::<Vec<_>>();
	spans.sort_unstable();
	spans
}


fn input_sensors_from_str(s: &str) -> Result<Vec<Sensor>, parsing::SensorError> {
	parsing::sensors_from_str(s).collect()
}


fn part1_impl(input_sensors: &[Sensor], row: isize) -> usize {
	let mut covered = 0;
	let mut next_x = isize::MIN;
	for [start, end] in row_spans(input_sensors, row) {
		let start = start.max(next_x);
		if end >= start { covered += (end - start + 1) as usize }
		next_x = next_x.max(end + 1);
	}

	let beacons_on_row = input_sensors.iter()
		.filter(|s| s.beacon[1] == row)
		.map(|s| s.beacon[0])
		.collect::<std::collections::HashSet<_>>();
	covered - beacons_on_row.len()
}

pub(crate) fn part1(input: &str, row: isize) -> Result<usize, parsing::SensorError> {
	Ok(part1_impl(&input_sensors_from_str(input)?, row))
}


/// The uncovered position must border at least two sensor ranges unless it
/// sits on the edge of the search square, so try the intersections of the
/// diagonal lines just outside every range first.
fn find_beacon_on_borders(sensors: &[Sensor], bound: isize) -> Option<[isize; 2]> {
	// Lines x + y = a and x - y = b
	let (mut ascending, mut descending): (Vec<isize>, Vec<isize>) = sensors.iter()
		.flat_map(|s| {
			let [x, y] = s.pos;
			let r = s.radius() + 1;
			[(x + y - r, x - y - r), (x + y + r, x - y + r)]
		})
		.unzip();
	for lines in [&mut ascending, &mut descending] {
		lines.sort_unstable();
		lines.dedup();
	}

	itertools::iproduct!(&ascending, &descending)
		.filter(|(a, b)| (*a + *b) % 2 == 0)
		.map(|(a, b)| [(a + b) / 2, (a - b) / 2])
		.filter(|pos| pos.iter().all(|c| (0..=bound).contains(c)))
		.find(|&pos| !sensors.iter().any(|s| s.covers(pos)))
}

/// Exhaustive scan for the first uncovered position, one row per task.
fn find_beacon_by_rows(sensors: &[Sensor], bound: isize) -> Option<[isize; 2]> {
	use rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _};

	(0..=bound).into_par_iter().find_map_any(|y| {
		let mut x = 0;
		for [start, end] in row_spans(sensors, y) {
			if start > x { break }
			x = x.max(end + 1);
		}
		(x <= bound).then_some([x, y])
	})
}

fn part2_impl(input_sensors: &[Sensor], bound: isize) -> Option<isize> {
	let [x, y] = find_beacon_on_borders(input_sensors, bound)
		.or_else(|| {
			tracing::info!(bound, "no uncovered border intersection, scanning rows");
			find_beacon_by_rows(input_sensors, bound)
		})?;
	tracing::debug!(x, y, "distress beacon located");
	Some(x * TUNING_MULTIPLIER + y)
}

pub(crate) fn part2(input: &str, bound: isize) -> Result<isize, parsing::SensorError> {
	part2_impl(&input_sensors_from_str(input)?, bound)
		.ok_or(parsing::SensorError::NoBeacon { bound })
}


mod parsing {
	use std::num::ParseIntError;
	use super::Sensor;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum SensorError {
		#[error("line {line}: expected `Sensor at x=…, y=…: closest beacon is at x=…, y=…`")]
		Format { line: usize },
		#[error("line {line}: invalid coordinate")]
		Coordinate { line: usize, source: ParseIntError },
		#[error("every position in 0..={bound} is covered")]
		NoBeacon { bound: isize },
	}

	fn position(s: &str) -> Option<Result<[isize; 2], ParseIntError>> {
		let (x, y) = s.strip_prefix("x=")?.split_once(", y=")?;
		Some(x.parse().and_then(|x| Ok([x, y.parse()?])))
	}

	pub(super) fn sensors_from_str(s: &str) -> impl Iterator<Item = Result<Sensor, SensorError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| {
				let positions = line.trim()
					.strip_prefix("Sensor at ")
					.and_then(|rest| rest.split_once(": closest beacon is at "))
					.and_then(|(sensor, beacon)| Some((position(sensor)?, position(beacon)?)));
				match positions {
					None => Err(SensorError::Format { line: l + 1 }),
					Some((Ok(pos), Ok(beacon))) => Ok(Sensor { pos, beacon }),
					Some((Err(e), _) | (_, Err(e))) => Err(SensorError::Coordinate { line: l + 1, source: e }),
				}
			})
	}
}


#[cfg(test)]
const INPUT: &str = indoc::indoc! { "
	Sensor at x=2, y=18: closest beacon is at x=-2, y=15
	Sensor at x=9, y=16: closest beacon is at x=10, y=16
	Sensor at x=13, y=2: closest beacon is at x=15, y=3
	Sensor at x=12, y=14: closest beacon is at x=10, y=16
	Sensor at x=10, y=20: closest beacon is at x=10, y=16
	Sensor at x=14, y=17: closest beacon is at x=10, y=16
	Sensor at x=8, y=7: closest beacon is at x=2, y=10
	Sensor at x=2, y=0: closest beacon is at x=2, y=10
	Sensor at x=0, y=11: closest beacon is at x=2, y=10
	Sensor at x=20, y=14: closest beacon is at x=25, y=17
	Sensor at x=17, y=20: closest beacon is at x=21, y=22
	Sensor at x=16, y=7: closest beacon is at x=15, y=3
	Sensor at x=14, y=3: closest beacon is at x=15, y=3
	Sensor at x=20, y=1: closest beacon is at x=15, y=3
" };

#[test]
fn tests() {
	assert_eq!(part1(INPUT, 10).unwrap(), 26);
	assert_eq!(part2(INPUT, 20).unwrap(), 56_000_011);

	// Nothing in the square escapes a sensor reaching four away from its corner
	assert!(matches!(part2("Sensor at x=0, y=0: closest beacon is at x=4, y=0\n", 2),
		Err(parsing::SensorError::NoBeacon { bound: 2 })));
}

#[test]
fn row_scan() {
	let sensors = input_sensors_from_str(INPUT).unwrap();
	assert_eq!(find_beacon_by_rows(&sensors, 20), Some([14, 11]));
	assert_eq!(find_beacon_on_borders(&sensors, 20), Some([14, 11]));

	// A single sensor leaves the far corner of the square uncovered, which
	// no pair of border lines reaches
	let corner = input_sensors_from_str("Sensor at x=0, y=0: closest beacon is at x=3, y=0\n").unwrap();
	assert_eq!(part2_impl(&corner, 2), Some(2 * TUNING_MULTIPLIER + 2));
}
