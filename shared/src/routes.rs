// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Paths of the activity API endpoints.
//!
//! All paths are origin-relative so that the client talks to whichever host served the page.

const ACTIVITIES_PATH: &str = "/activities";

pub fn activities_path() -> String {
	String::from(ACTIVITIES_PATH)
}

/// Path for signing `email` up to `activity`
pub fn signup_path(activity: &str, email: &str) -> String {
	format!(
		"{}/{}/signup?email={}",
		ACTIVITIES_PATH,
		encode_uri_component(activity),
		encode_uri_component(email)
	)
}

/// Path for removing `email` from `activity`
pub fn participants_path(activity: &str, email: &str) -> String {
	format!(
		"{}/{}/participants?email={}",
		ACTIVITIES_PATH,
		encode_uri_component(activity),
		encode_uri_component(email)
	)
}

/// Percent-encodes a value for use as a single path segment or query value. The set of characters left alone is
/// the same one the browser's `encodeURIComponent` leaves alone.
pub fn encode_uri_component(value: &str) -> String {
	let mut encoded = String::with_capacity(value.len());
	for byte in value.bytes() {
		if is_unreserved(byte) {
			encoded.push(byte as char);
		} else {
			encoded.push_str(&format!("%{:02X}", byte));
		}
	}
	encoded
}

fn is_unreserved(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}
