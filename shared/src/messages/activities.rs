// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

/// A single extracurricular activity as sent by the server
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Activity {
	pub description: String,
	pub schedule: String,
	pub max_participants: i64,
	#[serde(default)]
	pub participants: Vec<String>,
}

impl Activity {
	/// Remaining capacity. This isn't clamped, so an overfull activity reports a negative number.
	pub fn spots_left(&self) -> i64 {
		self.max_participants - self.participants.len() as i64
	}

	pub fn has_participants(&self) -> bool {
		!self.participants.is_empty()
	}
}

/// The full set of activities, keyed by name.
///
/// Entries keep the order in which the server listed them so that the page renders cards and selection options in
/// the same order every time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActivityList {
	entries: Vec<(String, Activity)>,
	positions: HashMap<String, usize>,
}

impl ActivityList {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an activity to the end of the list. If an activity with the same name already exists, it's replaced in
	/// its current position.
	pub fn insert(&mut self, name: String, activity: Activity) {
		match self.positions.get(&name) {
			Some(&index) => self.entries[index].1 = activity,
			None => {
				self.positions.insert(name.clone(), self.entries.len());
				self.entries.push((name, activity));
			}
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
		self.entries.iter().map(|(name, activity)| (name.as_str(), activity))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(name, _)| name.as_str())
	}
}

struct ActivityListVisitor;

impl<'de> Visitor<'de> for ActivityListVisitor {
	type Value = ActivityList;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a map of activity names to activities")
	}

	fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
		let capacity = access.size_hint().unwrap_or(0);
		let mut list = ActivityList {
			entries: Vec::with_capacity(capacity),
			positions: HashMap::with_capacity(capacity),
		};
		while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
			list.insert(name, activity);
		}
		Ok(list)
	}
}

impl<'de> Deserialize<'de> for ActivityList {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_map(ActivityListVisitor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn activity(max_participants: i64, participants: &[&str]) -> Activity {
		Activity {
			description: String::from("Play chess"),
			schedule: String::from("Fri 3pm"),
			max_participants,
			participants: participants.iter().map(|p| p.to_string()).collect(),
		}
	}

	#[test]
	fn spots_left_subtracts_participants() {
		assert_eq!(activity(10, &["a@x.com"]).spots_left(), 9);
		assert_eq!(activity(2, &[]).spots_left(), 2);
	}

	#[test]
	fn spots_left_is_not_clamped() {
		assert_eq!(activity(1, &["a@x.com", "b@x.com", "c@x.com"]).spots_left(), -2);
	}

	#[test]
	fn insert_replaces_in_place() {
		let mut list = ActivityList::new();
		list.insert(String::from("Chess Club"), activity(10, &[]));
		list.insert(String::from("Art Club"), activity(5, &[]));
		list.insert(String::from("Chess Club"), activity(12, &["a@x.com"]));

		assert_eq!(list.len(), 2);
		assert_eq!(list.names().collect::<Vec<_>>(), vec!["Chess Club", "Art Club"]);
		let chess = list.iter().find(|(name, _)| *name == "Chess Club").map(|(_, a)| a.max_participants);
		assert_eq!(chess, Some(12));
	}

	#[test]
	fn later_entries_keep_their_position_after_replacement() {
		let mut list = ActivityList::new();
		for name in ["Chess Club", "Art Club", "Drama Club"] {
			list.insert(String::from(name), activity(5, &[]));
		}
		list.insert(String::from("Art Club"), activity(7, &[]));
		list.insert(String::from("Math Club"), activity(9, &[]));

		assert_eq!(
			list.names().collect::<Vec<_>>(),
			vec!["Chess Club", "Art Club", "Drama Club", "Math Club"]
		);
		let maxima: Vec<i64> = list.iter().map(|(_, a)| a.max_participants).collect();
		assert_eq!(maxima, vec![5, 7, 5, 9]);
	}
}
