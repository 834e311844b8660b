// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::{fetch_activities, sign_up, unregister, ApiReply};
use crate::banner::{Banner, MessageBanner, Notifier};
use crate::components::activities_list::ActivitiesList;
use crate::components::signup_form::SignupForm;
use crate::error::RequestError;
use crate::feedback::{Feedback, Mutation};
use activity_board_shared::messages::activities::ActivityList;
use futures::channel::mpsc::{self, UnboundedSender};
use futures::StreamExt;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

/// Requests handled by the board. User actions and refreshes all go through here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BoardCommand {
	Refresh,
	SignUp { email: String, activity: String },
	Unregister { activity: String, email: String },
}

/// Sends a command to the board. The board outlives every control that can send to it, so a closed channel only
/// happens while the page is being torn down.
pub fn send_command(commands: &UnboundedSender<BoardCommand>, command: BoardCommand) {
	if let Err(error) = commands.unbounded_send(command) {
		log::error!("Failed to send board command: {}", error);
	}
}

/// What the activity list area displays
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ListState {
	#[default]
	Loading,
	Loaded(ActivityList),
	Failed,
}

/// The board's state. Command handlers are the only things that change it.
struct Board<'a> {
	list: &'a Signal<ListState>,
	options: &'a Signal<Vec<String>>,
	email: &'a Signal<String>,
	selected_activity: &'a Signal<String>,
	banner: &'a dyn Notifier,
	commands: UnboundedSender<BoardCommand>,
}

impl<'a> Board<'a> {
	async fn run(&self, command: BoardCommand) {
		match command {
			BoardCommand::Refresh => self.load_activities().await,
			BoardCommand::SignUp { email, activity } => self.submit_signup(&email, &activity).await,
			BoardCommand::Unregister { activity, email } => self.submit_unregister(&activity, &email).await,
		}
	}

	async fn load_activities(&self) {
		log::debug!("Loading activities");
		self.apply_listing(fetch_activities().await);
	}

	fn apply_listing(&self, result: Result<ActivityList, RequestError>) {
		match result {
			Ok(activities) => {
				log::debug!("Loaded {} activities", activities.len());
				self.options.set(activities.names().map(String::from).collect());
				self.list.set(ListState::Loaded(activities));
			}
			Err(error) => {
				// The selection options are left as they were
				log::error!("Error fetching activities: {}", error);
				self.list.set(ListState::Failed);
			}
		}
	}

	async fn submit_signup(&self, email: &str, activity: &str) {
		self.apply_mutation(Mutation::SignUp, sign_up(activity, email).await);
	}

	async fn submit_unregister(&self, activity: &str, email: &str) {
		if activity.is_empty() || email.is_empty() {
			return;
		}
		self.apply_mutation(Mutation::Unregister, unregister(activity, email).await);
	}

	fn apply_mutation(&self, mutation: Mutation, result: Result<ApiReply, RequestError>) {
		if let Err(error) = result.as_ref() {
			match mutation {
				Mutation::SignUp => log::error!("Error signing up: {}", error),
				Mutation::Unregister => log::error!("Error unregistering participant: {}", error),
			}
		}
		self.apply_feedback(mutation.feedback(&result));
	}

	fn apply_feedback(&self, feedback: Feedback) {
		self.banner.notify(feedback.text, feedback.kind, feedback.hide_after_ms);
		if feedback.reset_form {
			self.email.set(String::new());
			self.selected_activity.set(String::new());
		}
		if feedback.refresh {
			send_command(&self.commands, BoardCommand::Refresh);
		}
	}
}

#[component]
pub fn ActivityBoard<G: Html>(ctx: Scope<'_>) -> View<G> {
	let list = create_signal(ctx, ListState::Loading);
	let options: &Signal<Vec<String>> = create_signal(ctx, Vec::new());
	let email = create_signal(ctx, String::new());
	let selected_activity = create_signal(ctx, String::new());
	let banner = create_ref(ctx, MessageBanner::new());

	let (command_tx, mut command_rx) = mpsc::unbounded();
	let board = create_ref(
		ctx,
		Board {
			list,
			options,
			email,
			selected_activity,
			banner,
			commands: command_tx.clone(),
		},
	);

	// Each command runs in its own task so a slow request doesn't hold up later ones
	spawn_local_scoped(ctx, async move {
		while let Some(command) = command_rx.next().await {
			spawn_local_scoped(ctx, board.run(command));
		}
	});
	send_command(&command_tx, BoardCommand::Refresh);

	let list_commands = command_tx.clone();

	view! {
		ctx,
		main {
			section(id="activities-container") {
				h3 { "Available Activities" }
				ActivitiesList(list=list, commands=list_commands)
			}
			section(id="signup-container") {
				h3 { "Sign Up for an Activity" }
				SignupForm(email=email, selected_activity=selected_activity, options=options, commands=command_tx)
				Banner(banner=banner)
			}
		}
	}
}
