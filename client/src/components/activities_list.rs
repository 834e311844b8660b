// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::activity_card::ActivityCard;
use crate::board::{BoardCommand, ListState};
use futures::channel::mpsc::UnboundedSender;
use sycamore::prelude::*;

pub const LOAD_FAILURE_NOTICE: &str = "Failed to load activities. Please try again later.";

#[derive(Prop)]
pub struct ActivitiesListProps<'a> {
	list: &'a ReadSignal<ListState>,
	commands: UnboundedSender<BoardCommand>,
}

/// The list of activity cards. Every change to the list state rebuilds all of the cards, dropping the old controls
/// along with their handlers.
#[component]
pub fn ActivitiesList<'a, G: Html>(ctx: Scope<'a>, props: ActivitiesListProps<'a>) -> View<G> {
	let list = props.list;
	let commands = props.commands;

	view! {
		ctx,
		div(id="activities-list") {
			(match &*list.get() {
				ListState::Loading => view! { ctx, p { "Loading activities..." } },
				ListState::Failed => view! { ctx, p { (LOAD_FAILURE_NOTICE) } },
				ListState::Loaded(activities) => View::new_fragment(
					activities
						.iter()
						.map(|(name, activity)| {
							let name = name.to_string();
							let activity = activity.clone();
							let commands = commands.clone();
							view! { ctx, ActivityCard(name=name, activity=activity, commands=commands) }
						})
						.collect(),
				),
			})
		}
	}
}
