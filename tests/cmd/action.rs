use usersapp::cmd::action::{ACTION_HELP, ACTION_KEYWORDS, Action, parse};

#[test]
fn parses_each_keyword() {
    assert_eq!(parse("list"), Action::List);
    assert_eq!(parse("add"), Action::Add);
    assert_eq!(parse("edit"), Action::Edit);
    assert_eq!(parse("remove"), Action::Remove);
    assert_eq!(parse("quit"), Action::Quit);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse("  list\t"), Action::List);
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(parse("LIST"), Action::Unrecognized("LIST".into()));
}

#[test]
fn unknown_or_extra_tokens_are_unrecognized() {
    assert_eq!(parse("foo"), Action::Unrecognized("foo".into()));
    assert_eq!(parse("add Ann"), Action::Unrecognized("add Ann".into()));
    assert_eq!(parse(""), Action::Unrecognized("".into()));
}

#[test]
fn unbalanced_quotes_are_unrecognized() {
    assert_eq!(parse("\"list"), Action::Unrecognized("\"list".into()));
}

#[test]
fn keyword_round_trips_through_action() {
    for keyword in ACTION_KEYWORDS {
        assert_eq!(parse(keyword).keyword(), Some(keyword));
    }
    assert_eq!(parse("nope").keyword(), None);
}

#[test]
fn help_covers_every_keyword_in_order() {
    let helped: Vec<&str> = ACTION_HELP.iter().map(|(keyword, _)| *keyword).collect();
    assert_eq!(helped, ACTION_KEYWORDS.to_vec());
}
