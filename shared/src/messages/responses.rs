// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Body returned by the signup and unregister endpoints. Successful calls fill `message`; failed calls fill
/// `detail`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct ApiMessage {
	#[serde(default, deserialize_with = "text_or_none")]
	pub message: Option<String>,
	#[serde(default, deserialize_with = "text_or_none")]
	pub detail: Option<String>,
}

impl ApiMessage {
	/// The success message, or `fallback` if the server didn't send a usable one
	pub fn message_or(&self, fallback: &str) -> String {
		non_empty_or(self.message.as_deref(), fallback)
	}

	/// The failure detail, or `fallback` if the server didn't send a usable one
	pub fn detail_or(&self, fallback: &str) -> String {
		non_empty_or(self.detail.as_deref(), fallback)
	}
}

fn non_empty_or(text: Option<&str>, fallback: &str) -> String {
	match text {
		Some(text) if !text.is_empty() => text.to_string(),
		_ => fallback.to_string(),
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientText {
	Text(String),
	Other(IgnoredAny),
}

/// Validation failures can put a structured value in `detail`; anything that isn't a string is treated as missing.
fn text_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
	let value: Option<LenientText> = Option::deserialize(deserializer)?;
	Ok(match value {
		Some(LenientText::Text(text)) => Some(text),
		Some(LenientText::Other(_)) | None => None,
	})
}
