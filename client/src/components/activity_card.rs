// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::board::{send_command, BoardCommand};
use activity_board_shared::messages::activities::Activity;
use futures::channel::mpsc::UnboundedSender;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct ActivityCardProps {
	name: String,
	activity: Activity,
	commands: UnboundedSender<BoardCommand>,
}

#[component]
pub fn ActivityCard<G: Html>(ctx: Scope<'_>, props: ActivityCardProps) -> View<G> {
	let ActivityCardProps {
		name,
		activity,
		commands,
	} = props;

	let participants_view = if activity.has_participants() {
		let rows = View::new_fragment(
			activity
				.participants
				.iter()
				.map(|email| {
					let command = BoardCommand::Unregister {
						activity: name.clone(),
						email: email.clone(),
					};
					let commands = commands.clone();
					let unregister_handler = move |_event: WebEvent| send_command(&commands, command.clone());

					let row_email = email.clone();
					let button_activity = name.clone();
					let button_email = email.clone();
					let label = email.clone();
					view! {
						ctx,
						li(data-email=row_email) {
							(label)
							" "
							button(
								type="button",
								class="unregister-btn",
								title="Unregister",
								data-activity=button_activity,
								data-email=button_email,
								on:click=unregister_handler
							) {
								"🗑️"
							}
						}
					}
				})
				.collect(),
		);
		view! { ctx, ul(class="participants-list") { (rows) } }
	} else {
		view! { ctx, p(class="no-participants") { "No participants yet" } }
	};

	let availability = format!("{} spots left", activity.spots_left());
	let description = activity.description;
	let schedule = activity.schedule;

	view! {
		ctx,
		div(class="activity-card") {
			h4 { (name) }
			p { (description) }
			p {
				strong { "Schedule:" }
				" "
				(schedule)
			}
			p {
				strong { "Availability:" }
				" "
				(availability)
			}
			div(class="participants") {
				strong { "Participants:" }
				(participants_view)
			}
		}
	}
}
