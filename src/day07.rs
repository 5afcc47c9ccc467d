// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


const SMALL_DIR_LIMIT: usize = 100_000;
const DISK_SIZE: usize = 70_000_000;
const UPDATE_SIZE: usize = 30_000_000;


#[derive(Default)]
#[cfg_attr(test, derive(Debug))]
struct Dir {
	parent: Option<usize>,
	subdirs: HashMap<String, usize>,
	files: HashMap<String, usize>,
}

/// Directory arena; index 0 is `/`, and every directory is stored after its parent.
#[cfg_attr(test, derive(Debug))]
struct FileSystem(Vec<Dir>);

impl FileSystem {
	fn subdir(&mut self, dir: usize, name: &str) -> usize {
		if let Some(&subdir) = self.0[dir].subdirs.get(name) { return subdir }
		let subdir = self.0.len();
		self.0.push(Dir { parent: Some(dir), ..Default::default() });
		self.0[dir].subdirs.insert(name.to_owned(), subdir);
		subdir
	}

	/// Total sizes, including nested directories, indexed like the arena.
	fn total_sizes(&self) -> Vec<usize> {
		let mut totals = self.0.iter()
			.map(|dir| dir.files.values().sum())
			.collect::<Vec<usize>>();
		for (i, dir) in self.0.iter().enumerate().skip(1).rev() {
			if let Some(parent) = dir.parent { totals[parent] += totals[i] }
		}
		totals
	}
}


fn input_file_system_from_str(s: &str) -> Result<FileSystem, parsing::TranscriptError> {
	s.parse()
}


fn part1_impl(input_file_system: &FileSystem) -> usize {
	input_file_system.total_sizes().into_iter()
		.filter(|&size| size <= SMALL_DIR_LIMIT)
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::TranscriptError> {
	Ok(part1_impl(&input_file_system_from_str(input)?))
}


fn part2_impl(input_file_system: &FileSystem) -> usize {
	let totals = input_file_system.total_sizes();
	let free = DISK_SIZE.saturating_sub(totals[0]);
	let needed = UPDATE_SIZE.saturating_sub(free);
	tracing::debug!(used = totals[0], free, needed, "disk usage");
	totals.into_iter()
		.filter(|&size| size >= needed)
		.min()
		.unwrap_or(0)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::TranscriptError> {
	Ok(part2_impl(&input_file_system_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Dir, FileSystem};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum TranscriptError {
		#[error("line {line}: `cd ..` from the root directory")]
		AboveRoot { line: usize },
		#[error("line {line}: listing output without `ls`")]
		UnexpectedOutput { line: usize },
		#[error("line {line}: invalid file size")]
		FileSize { line: usize, source: ParseIntError },
		#[error("line {line}: unrecognized {found:?}")]
		Unrecognized { line: usize, found: String },
	}

	impl FromStr for FileSystem {
		type Err = TranscriptError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use TranscriptError as E;

			let mut fs = FileSystem(vec![Dir::default()]);
			let mut cwd = 0;
			let mut listing = false;

			for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.is_empty()) {
				if let Some(command) = line.strip_prefix("$ ") {
					listing = false;
					match command.split_once(' ') {
						None if command == "ls" => listing = true,
						Some(("cd", "/")) => cwd = 0,
						Some(("cd", "..")) => cwd = fs.0[cwd].parent
							.ok_or(E::AboveRoot { line: l + 1 })?,
						Some(("cd", name)) => cwd = fs.subdir(cwd, name),
						_ => return Err(E::Unrecognized { line: l + 1, found: line.to_owned() }),
					}
					continue
				}

				if !listing { return Err(E::UnexpectedOutput { line: l + 1 }) }
				match line.split_once(' ') {
					Some(("dir", name)) => { fs.subdir(cwd, name); }
					Some((size, name)) => {
						let size = size.parse::<usize>()
							.map_err(|e| E::FileSize { line: l + 1, source: e })?;
						// Listing the same directory twice must not count files twice
						fs.0[cwd].files.insert(name.to_owned(), size);
					}
					None => return Err(E::Unrecognized { line: l + 1, found: line.to_owned() }),
				}
			}

			Ok(fs)
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		$ cd /
		$ ls
		dir a
		14848514 b.txt
		8504156 c.dat
		dir d
		$ cd a
		$ ls
		dir e
		29116 f
		2557 g
		62596 h.lst
		$ cd e
		$ ls
		584 i
		$ cd ..
		$ cd ..
		$ cd d
		$ ls
		4060174 j
		8033020 d.log
		5626152 d.ext
		7214296 k
	" };
	assert_eq!(part1(INPUT).unwrap(), 95437);
	assert_eq!(part2(INPUT).unwrap(), 24933642);

	let relisted = INPUT.replace("$ cd e\n", "$ ls\n29116 f\n$ cd e\n");
	assert_eq!(part1(&relisted).unwrap(), 95437);
	assert!(matches!(part1("$ cd ..\n"), Err(parsing::TranscriptError::AboveRoot { line: 1 })));
}
