// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::RequestError;
use activity_board_shared::messages::activities::ActivityList;
use activity_board_shared::messages::responses::ApiMessage;
use activity_board_shared::routes::{activities_path, participants_path, signup_path};
use gloo_net::http::{Request, RequestBuilder};

/// A readable reply from one of the mutating endpoints
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApiReply {
	pub ok: bool,
	pub body: ApiMessage,
}

/// Gets the current list of activities.
///
/// # Errors
///
/// Fails when the request can't be made or when the body isn't an activity listing. The status code isn't checked;
/// an error response simply won't parse as a listing.
pub async fn fetch_activities() -> Result<ActivityList, RequestError> {
	let response = Request::get(&activities_path()).send().await?;
	let body = response.text().await?;
	Ok(serde_json::from_str(&body)?)
}

/// Registers `email` for `activity`
pub async fn sign_up(activity: &str, email: &str) -> Result<ApiReply, RequestError> {
	send_mutation(Request::post(&signup_path(activity, email))).await
}

/// Removes `email` from `activity`
pub async fn unregister(activity: &str, email: &str) -> Result<ApiReply, RequestError> {
	send_mutation(Request::delete(&participants_path(activity, email))).await
}

async fn send_mutation(request: RequestBuilder) -> Result<ApiReply, RequestError> {
	let response = request.send().await?;
	let ok = response.ok();
	let body = response.text().await?;
	read_reply(ok, &body)
}

/// Decodes a mutation response body. Both success and error statuses are expected to carry a JSON body.
pub fn read_reply(ok: bool, body: &str) -> Result<ApiReply, RequestError> {
	let body: ApiMessage = serde_json::from_str(body)?;
	Ok(ApiReply { ok, body })
}
