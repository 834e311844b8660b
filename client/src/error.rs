// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Errors that can occur talking to the activity API. A server answering with an error status isn't one of these;
/// that's still a readable reply.
#[derive(Debug)]
pub enum RequestError {
	Network(gloo_net::Error),
	InvalidBody(serde_json::Error),
}

impl From<gloo_net::Error> for RequestError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

impl From<serde_json::Error> for RequestError {
	fn from(error: serde_json::Error) -> Self {
		Self::InvalidBody(error)
	}
}

impl fmt::Display for RequestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "The request couldn't be completed: {}", error),
			Self::InvalidBody(error) => write!(f, "The server sent an unreadable response: {}", error),
		}
	}
}
