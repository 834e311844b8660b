use activity_board_shared::messages::activities::{Activity, ActivityList};
use activity_board_shared::messages::responses::ApiMessage;

const CHESS_ONLY: &str = r#"{"Chess Club": {"description":"Play chess","schedule":"Fri 3pm","max_participants":10,"participants":["a@x.com"]}}"#;

fn find<'a>(list: &'a ActivityList, name: &str) -> Option<&'a Activity> {
	list.iter().find(|(entry_name, _)| *entry_name == name).map(|(_, activity)| activity)
}

#[test]
fn decodes_activity_listing() {
	let list: ActivityList = serde_json::from_str(CHESS_ONLY).expect("valid listing");

	assert_eq!(list.len(), 1);
	let chess = find(&list, "Chess Club").expect("chess club present");
	assert_eq!(chess.description, "Play chess");
	assert_eq!(chess.schedule, "Fri 3pm");
	assert_eq!(chess.participants, vec![String::from("a@x.com")]);
	assert_eq!(chess.spots_left(), 9);
}

#[test]
fn listing_keeps_server_order() {
	let json = r#"{
		"Programming Class": {"description":"d","schedule":"s","max_participants":20,"participants":[]},
		"Chess Club": {"description":"d","schedule":"s","max_participants":12,"participants":[]},
		"Art Club": {"description":"d","schedule":"s","max_participants":15,"participants":[]}
	}"#;
	let list: ActivityList = serde_json::from_str(json).expect("valid listing");

	assert_eq!(
		list.names().collect::<Vec<_>>(),
		vec!["Programming Class", "Chess Club", "Art Club"]
	);
}

#[test]
fn missing_participants_means_empty() {
	let json = r#"{"Drama Club": {"description":"Act","schedule":"Mon","max_participants":3}}"#;
	let list: ActivityList = serde_json::from_str(json).expect("valid listing");
	let drama = find(&list, "Drama Club").expect("drama present");

	assert!(!drama.has_participants());
	assert_eq!(drama.spots_left(), 3);
}

#[test]
fn rejects_non_object_listing() {
	assert!(serde_json::from_str::<ActivityList>("[]").is_err());
	assert!(serde_json::from_str::<ActivityList>(r#"{"Chess Club": {"description":"x"}}"#).is_err());
}

#[test]
fn decodes_success_and_failure_bodies() {
	let success: ApiMessage = serde_json::from_str(r#"{"message":"Signed up b@x.com"}"#).expect("success body");
	assert_eq!(success.message.as_deref(), Some("Signed up b@x.com"));
	assert!(success.detail.is_none());

	let failure: ApiMessage = serde_json::from_str(r#"{"detail":"Already signed up"}"#).expect("failure body");
	assert_eq!(failure.detail_or("An error occurred"), "Already signed up");
}

#[test]
fn structured_detail_falls_back() {
	let body = r#"{"detail":[{"loc":["query","email"],"msg":"field required","type":"value_error.missing"}]}"#;
	let failure: ApiMessage = serde_json::from_str(body).expect("validation body");

	assert!(failure.detail.is_none());
	assert_eq!(failure.detail_or("An error occurred"), "An error occurred");
}

#[test]
fn duplicate_keys_keep_the_last_value_in_the_first_position() {
	let json = r#"{
		"Chess Club": {"description":"old","schedule":"s","max_participants":10,"participants":[]},
		"Art Club": {"description":"d","schedule":"s","max_participants":15,"participants":[]},
		"Chess Club": {"description":"new","schedule":"s","max_participants":12,"participants":[]}
	}"#;
	let list: ActivityList = serde_json::from_str(json).expect("valid listing");

	assert_eq!(list.names().collect::<Vec<_>>(), vec!["Chess Club", "Art Club"]);
	assert_eq!(find(&list, "Chess Club").map(|a| a.description.as_str()), Some("new"));
}
