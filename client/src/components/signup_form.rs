// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::board::{send_command, BoardCommand};
use futures::channel::mpsc::UnboundedSender;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

pub const ACTIVITY_PLACEHOLDER: &str = "-- Select an activity --";

#[derive(Prop)]
pub struct SignupFormProps<'a> {
	email: &'a Signal<String>,
	selected_activity: &'a Signal<String>,
	options: &'a ReadSignal<Vec<String>>,
	commands: UnboundedSender<BoardCommand>,
}

#[component]
pub fn SignupForm<'a, G: Html>(ctx: Scope<'a>, props: SignupFormProps<'a>) -> View<G> {
	let email = props.email;
	let selected_activity = props.selected_activity;
	let options = props.options;
	let commands = props.commands;

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let command = BoardCommand::SignUp {
			email: (*email.get()).clone(),
			activity: (*selected_activity.get()).clone(),
		};
		send_command(&commands, command);
	};

	view! {
		ctx,
		form(id="signup-form", on:submit=form_submission_handler) {
			div(class="form-group") {
				label(for="email") { "Student Email:" }
				input(id="email", type="text", required=true, placeholder="your-email@mergington.edu", bind:value=email)
			}
			div(class="form-group") {
				label(for="activity") { "Select Activity:" }
				select(id="activity", required=true, bind:value=selected_activity) {
					option(value="") { (ACTIVITY_PLACEHOLDER) }
					(View::new_fragment(
						options
							.get()
							.iter()
							.map(|name| {
								let value = name.clone();
								let label = name.clone();
								view! { ctx, option(value=value) { (label) } }
							})
							.collect(),
					))
				}
			}
			button(type="submit") { "Sign Up" }
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::channel::mpsc;

	#[test]
	fn placeholder_comes_before_activities() {
		let (commands, _receiver) = mpsc::unbounded();
		let html = sycamore::render_to_string(|ctx| {
			let email = create_signal(ctx, String::new());
			let selected_activity = create_signal(ctx, String::new());
			let options = create_signal(ctx, vec![String::from("Chess Club"), String::from("Art Club")]);
			view! {
				ctx,
				SignupForm(email=email, selected_activity=selected_activity, options=options, commands=commands)
			}
		});

		assert!(html.contains("id=\"signup-form\""));
		assert!(html.contains("id=\"email\""));
		assert!(html.contains("id=\"activity\""));
		assert_eq!(html.matches("<option").count(), 3);

		let placeholder = html.find(ACTIVITY_PLACEHOLDER).expect("placeholder option");
		let chess = html.find("Chess Club").expect("chess option");
		let art = html.find("Art Club").expect("art option");
		assert!(placeholder < chess && chess < art);
	}
}
