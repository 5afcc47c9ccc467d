// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn input_datastream_from_str(s: &str) -> Result<&[u8], parsing::DatastreamError> {
	parsing::datastream_from_str(s)
}


/// Number of bytes processed once the first `WINDOW` bytes that are all
/// different have been received.
fn marker_end<const WINDOW: usize>(datastream: &[u8]) -> Option<usize> {
	// Sliding window with per-letter counts, tracking how many letters repeat
	let mut counts = [0_u8; 26];
	let mut repeated = 0;
	for (i, &b) in datastream.iter().enumerate() {
		let added = &mut counts[(b - b'a') as usize];
		*added += 1;
		if *added == 2 { repeated += 1 }

		if i >= WINDOW {
			let removed = &mut counts[(datastream[i - WINDOW] - b'a') as usize];
			*removed -= 1;
			if *removed == 1 { repeated -= 1 }
		}

		if i + 1 >= WINDOW && repeated == 0 { return Some(i + 1) }
	}
	None
}

fn find_marker<const WINDOW: usize>(input: &str) -> Result<usize, parsing::DatastreamError> {
	let datastream = input_datastream_from_str(input)?;
	marker_end::<WINDOW>(datastream)
		.ok_or(parsing::DatastreamError::NoMarker { window: WINDOW })
}


pub(crate) fn part1(input: &str) -> Result<usize, parsing::DatastreamError> {
	find_marker::<4>(input)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::DatastreamError> {
	find_marker::<14>(input)
}


mod parsing {
	#[derive(Debug, thiserror::Error)]
	pub(crate) enum DatastreamError {
		#[error("column {column}: expected a lowercase letter, found {found:?}")]
		InvalidByte { column: usize, found: char },
		#[error("no {window} consecutive distinct characters")]
		NoMarker { window: usize },
	}

	pub(super) fn datastream_from_str(s: &str) -> Result<&[u8], DatastreamError> {
		let datastream = s.trim_end().as_bytes();
		match datastream.iter().position(|b| !b.is_ascii_lowercase()) {
			Some(c) => Err(DatastreamError::InvalidByte { column: c + 1, found: datastream[c] as char }),
			None => Ok(datastream),
		}
	}
}


#[cfg(test)]
mod tests {
	use test_case::test_case;

	#[test_case("mjqjpqmgbljsphdztnvjfqwrcgsmlb" => (7, 19))]
	#[test_case("bvwbjplbgvbhsrlpgdmjqwftvncz" => (5, 23))]
	#[test_case("nppdvjthqldpwncqszvftbrmjlhg" => (6, 23))]
	#[test_case("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg" => (10, 29))]
	#[test_case("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw" => (11, 26))]
	fn examples(input: &str) -> (usize, usize) {
		(super::part1(input).unwrap(), super::part2(input).unwrap())
	}

	#[test]
	fn errors() {
		use super::parsing::DatastreamError;
		assert!(matches!(super::part1("abca"), Err(DatastreamError::NoMarker { window: 4 })));
		assert!(matches!(super::part1("abCd"), Err(DatastreamError::InvalidByte { column: 3, found: 'C' })));
	}
}
