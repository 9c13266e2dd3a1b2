use portfolio_wasm::config::FilterConfig;
use portfolio_wasm::filter::{FilterBoard, FilterValue, TagSet, Transition, Visibility};

fn board(buttons: &[&str], items: &[&str]) -> FilterBoard {
    FilterBoard::new(
        buttons.iter().map(|b| FilterValue::parse(Some(*b))).collect(),
        items.iter().map(|i| TagSet::parse(i)).collect(),
        &FilterConfig::default(),
    )
}

fn visible(plan: &[Transition]) -> Vec<bool> {
    plan.iter()
        .map(|t| t.visibility == Visibility::Shown)
        .collect()
}

#[test]
fn all_shows_every_item() {
    let mut board = board(&["all", "web", "cli"], &["web", "cli", "web cli", "", "design"]);
    let plan = board.activate(0).unwrap();
    assert_eq!(visible(&plan), vec![true; 5]);
}

#[test]
fn tag_shows_only_members() {
    let mut board = board(&["all", "web", "cli"], &["web", "cli", "web cli", "", "design"]);

    let plan = board.activate(1).unwrap();
    assert_eq!(visible(&plan), vec![true, false, true, false, false]);

    let plan = board.activate(2).unwrap();
    assert_eq!(visible(&plan), vec![false, true, true, false, false]);
}

#[test]
fn item_without_known_tag_never_shown_under_specific_filter() {
    let mut board = board(&["all", "web", "cli"], &["design"]);
    for index in 1..3 {
        let plan = board.activate(index).unwrap();
        assert_eq!(visible(&plan), vec![false]);
    }
    assert_eq!(visible(&board.activate(0).unwrap()), vec![true]);
}

#[test]
fn tags_match_whole_words_only() {
    let tags = TagSet::parse("  webgl\tdesign  ");
    assert_eq!(tags.len(), 2);
    assert!(!FilterValue::Tag("web".into()).matches(&tags));
    assert!(FilterValue::Tag("webgl".into()).matches(&tags));
    assert!(FilterValue::All.matches(&TagSet::parse("")));
}

#[test]
fn missing_or_blank_filter_means_all() {
    assert_eq!(FilterValue::parse(None), FilterValue::All);
    assert_eq!(FilterValue::parse(Some("   ")), FilterValue::All);
    assert_eq!(FilterValue::parse(Some("all")), FilterValue::All);
    assert_eq!(
        FilterValue::parse(Some(" cli ")),
        FilterValue::Tag("cli".into())
    );
}

#[test]
fn show_and_hide_use_fixed_delays() {
    let mut board = board(&["web"], &["web", "cli"]);
    let plan = board.activate(0).unwrap();

    let show = plan[0];
    assert_eq!(show.immediate.display, Some("block"));
    assert_eq!(show.deferred.opacity, Some("1"));
    assert_eq!(show.deferred.transform, Some("scale(1)"));
    assert_eq!(show.delay_ms, 50);

    let hide = plan[1];
    assert_eq!(hide.immediate.opacity, Some("0"));
    assert_eq!(hide.immediate.transform, Some("scale(0.8)"));
    assert_eq!(hide.immediate.display, None);
    assert_eq!(hide.deferred.display, Some("none"));
    assert_eq!(hide.delay_ms, 300);
}

#[test]
fn exactly_one_button_is_active() {
    let mut board = board(&["all", "web", "cli"], &["web"]).with_active(2);
    assert_eq!(board.active(), Some(2));
    assert_eq!(board.active_value(), FilterValue::Tag("cli".into()));

    board.activate(1).unwrap();
    assert_eq!(board.active(), Some(1));

    // unknown button leaves the selection alone
    assert!(board.activate(7).is_none());
    assert_eq!(board.active(), Some(1));
}

#[test]
fn no_buttons_means_all() {
    let board = board(&[], &["web"]).with_active(3);
    assert_eq!(board.active(), None);
    assert_eq!(board.active_value(), FilterValue::All);
}

#[test]
fn custom_delays_flow_into_transitions() {
    let config = FilterConfig {
        show_settle_ms: 10,
        hide_delay_ms: 120,
        ..FilterConfig::default()
    };
    let board = FilterBoard::new(
        vec![FilterValue::Tag("a".into())],
        vec![TagSet::parse("a"), TagSet::parse("b")],
        &config,
    );
    let plan = board.plan(&FilterValue::Tag("a".into()));
    assert_eq!(plan[0].delay_ms, 10);
    assert_eq!(plan[1].delay_ms, 120);
}
