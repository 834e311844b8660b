// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::board::ActivityBoard;
use sycamore::prelude::*;

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	view! {
		ctx,
		header {
			h1 { "Mergington High School" }
			h2 { "Extracurricular Activities" }
		}
		ActivityBoard {}
	}
}
