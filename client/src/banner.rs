// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use sycamore::prelude::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BannerKind {
	Success,
	Error,
}

impl BannerKind {
	pub fn class_name(self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
		}
	}
}

/// What the message banner currently shows
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BannerState {
	pub text: String,
	pub kind: Option<BannerKind>,
	pub visible: bool,
	generation: u64,
}

impl BannerState {
	/// Replaces the current message and makes the banner visible. Returns the generation of the new message, which
	/// is what a later hide has to match.
	pub fn show(&mut self, text: String, kind: BannerKind) -> u64 {
		self.text = text;
		self.kind = Some(kind);
		self.visible = true;
		self.generation += 1;
		self.generation
	}

	/// Hides the banner if it's still showing the message from `generation`
	pub fn hide_if_current(&mut self, generation: u64) -> bool {
		if generation != self.generation {
			return false;
		}
		self.visible = false;
		true
	}

	/// The CSS classes for the banner element
	pub fn class_name(&self) -> String {
		match (self.kind, self.visible) {
			(Some(kind), true) => String::from(kind.class_name()),
			(Some(kind), false) => format!("{} hidden", kind.class_name()),
			(None, _) => String::from("hidden"),
		}
	}
}

/// Anything that can show a feedback message for a limited time
pub trait Notifier {
	fn notify(&self, text: String, kind: BannerKind, hide_after_ms: u32);
}

/// The single feedback banner on the page. Each message gets its own hide timer, and showing a new message cancels
/// the timer of the one it replaces.
pub struct MessageBanner {
	state: RcSignal<BannerState>,
	hide_timer: RefCell<Option<Timeout>>,
}

impl MessageBanner {
	pub fn new() -> Self {
		Self {
			state: create_rc_signal(BannerState::default()),
			hide_timer: RefCell::new(None),
		}
	}

	pub fn state(&self) -> RcSignal<BannerState> {
		self.state.clone()
	}
}

impl Notifier for MessageBanner {
	fn notify(&self, text: String, kind: BannerKind, hide_after_ms: u32) {
		let generation = self.state.modify().show(text, kind);

		let state = self.state.clone();
		let timer = Timeout::new(hide_after_ms, move || {
			state.modify().hide_if_current(generation);
		});

		// Dropping the previous timeout cancels it
		self.hide_timer.replace(Some(timer));
	}
}

#[derive(Prop)]
pub struct BannerProps<'a> {
	banner: &'a MessageBanner,
}

#[component]
pub fn Banner<'a, G: Html>(ctx: Scope<'a>, props: BannerProps<'a>) -> View<G> {
	let state = props.banner.state();
	let class_signal = create_memo(ctx, {
		let state = state.clone();
		move || state.get().class_name()
	});
	let text_signal = create_memo(ctx, move || state.get().text.clone());

	view! {
		ctx,
		div(id="message", class=class_signal.get()) { (text_signal.get()) }
	}
}
