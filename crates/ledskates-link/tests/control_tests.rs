//! Integration tests for control surface request decoding.

mod common;

use common::FakeEngine;
use ledskates_link::control::{parse_query, route, write_mode_list};
use ledskates_link::{Command, MAX_REQUEST_COMMANDS, Route};

#[test]
fn routes_known_paths() {
    assert_eq!(route("/set?b=-"), Route::Set("b=-"));
    assert_eq!(route("/set"), Route::Set(""));
    assert_eq!(route("/modes"), Route::Modes);
    assert_eq!(route("/"), Route::NotFound);
    assert_eq!(route("/main.js"), Route::NotFound);
}

#[test]
fn query_pairs_become_commands_in_order() {
    let request = parse_query("c=16711680&m=3&a=1");

    assert_eq!(
        request.as_slice(),
        [
            Command::parse("c", "16711680").unwrap(),
            Command::parse("m", "3").unwrap(),
            Command::parse("a", "1").unwrap(),
        ]
    );
}

#[test]
fn encoded_space_and_minus_survive_decoding() {
    let request = parse_query("b=%20&s=-&b=+");

    let values: Vec<&str> = request.iter().map(Command::value).collect();
    assert_eq!(values, [" ", "-", " "]);
}

#[test]
fn pairs_without_value_or_key_are_skipped() {
    let request = parse_query("b&=5&&m=1");

    assert_eq!(request.as_slice(), [Command::parse("m", "1").unwrap()]);
}

#[test]
fn extra_pairs_are_dropped() {
    let query = vec!["b=1"; MAX_REQUEST_COMMANDS + 3].join("&");

    assert_eq!(parse_query(&query).len(), MAX_REQUEST_COMMANDS);
}

#[test]
fn mode_list_has_one_name_per_line() {
    let engine = FakeEngine::with_mode_count(3);
    let mut out = String::new();

    write_mode_list(&engine, &mut out).unwrap();

    assert_eq!(out, "Static\nBlink\nBreath\n");
}

#[test]
fn encoded_nul_drops_the_pair() {
    let request = parse_query("b=1%002&m=1");

    assert_eq!(request.as_slice(), [Command::parse("m", "1").unwrap()]);
}
