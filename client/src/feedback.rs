// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::ApiReply;
use crate::banner::BannerKind;
use crate::error::RequestError;

pub const SIGNUP_MESSAGE_DURATION_MS: u32 = 5_000;
pub const UNREGISTER_MESSAGE_DURATION_MS: u32 = 4_000;

/// The user actions that change a roster
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mutation {
	SignUp,
	Unregister,
}

/// What the page should do once a mutation request finishes
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feedback {
	pub text: String,
	pub kind: BannerKind,
	pub hide_after_ms: u32,
	pub refresh: bool,
	pub reset_form: bool,
}

impl Mutation {
	fn hide_after_ms(self) -> u32 {
		match self {
			Self::SignUp => SIGNUP_MESSAGE_DURATION_MS,
			Self::Unregister => UNREGISTER_MESSAGE_DURATION_MS,
		}
	}

	fn success_fallback(self) -> &'static str {
		match self {
			Self::SignUp => "Signup complete",
			Self::Unregister => "Participant removed",
		}
	}

	fn failure_fallback(self) -> &'static str {
		match self {
			Self::SignUp => "An error occurred",
			Self::Unregister => "Failed to remove participant",
		}
	}

	fn request_failure_text(self) -> &'static str {
		match self {
			Self::SignUp => "Failed to sign up. Please try again.",
			Self::Unregister => "Failed to unregister participant",
		}
	}

	pub fn feedback(self, result: &Result<ApiReply, RequestError>) -> Feedback {
		let hide_after_ms = self.hide_after_ms();
		match result {
			Ok(reply) if reply.ok => Feedback {
				text: reply.body.message_or(self.success_fallback()),
				kind: BannerKind::Success,
				hide_after_ms,
				refresh: true,
				reset_form: self == Self::SignUp,
			},
			Ok(reply) => Feedback {
				text: reply.body.detail_or(self.failure_fallback()),
				kind: BannerKind::Error,
				hide_after_ms,
				refresh: false,
				reset_form: false,
			},
			Err(_) => Feedback {
				text: String::from(self.request_failure_text()),
				kind: BannerKind::Error,
				hide_after_ms,
				refresh: false,
				reset_form: false,
			},
		}
	}
}
