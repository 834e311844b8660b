// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

mod api;
mod app;
mod banner;
mod board;
mod components;
mod error;
mod feedback;
use app::App;

fn main() {
	console_error_panic_hook::set_once();

	let log_level = if cfg!(debug_assertions) {
		log::Level::Debug
	} else {
		log::Level::Info
	};
	wasm_logger::init(wasm_logger::Config::new(log_level));

	log::debug!("Starting activity board");

	sycamore::render(|ctx| view! { ctx, App {} });
}
