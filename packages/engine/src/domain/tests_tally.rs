use crate::domain::round_lifecycle::{finalize, lock_bids, set_actuals, set_bids};
use crate::domain::session::Session;
use crate::domain::state::Round;
use crate::domain::tally::{compute_tallies, find_leaders};
use crate::domain::test_state_helpers::{entries, named_roster, pid, round_with, three_players};

/// Round 5 played out as bids {2,2,2}, actuals {2,2,1} and finalized:
/// scores 12 / 12 / 8.
fn finished_round_five() -> Round {
    let players = three_players();
    let mut round = round_with(5, &players);
    set_bids(
        &mut round,
        entries(&[(1, Some(2)), (2, Some(2)), (3, Some(2))]),
    )
    .unwrap();
    assert!(lock_bids(&mut round));
    set_actuals(
        &mut round,
        entries(&[(1, Some(2)), (2, Some(2)), (3, Some(1))]),
    )
    .unwrap();
    assert!(finalize(&mut round));
    round
}

#[test]
fn done_rounds_accumulate() {
    let players = three_players();
    let rounds = vec![finished_round_five()];

    let tallies = compute_tallies(&rounds, &players);
    assert_eq!(tallies.cumulative[&pid(1)], 12);
    assert_eq!(tallies.cumulative[&pid(2)], 12);
    assert_eq!(tallies.cumulative[&pid(3)], 8);
    assert_eq!(tallies.cum_total, 32);
    assert_eq!(tallies.exact_hits[&pid(1)], 1);
    assert_eq!(tallies.exact_hits[&pid(2)], 1);
    assert_eq!(tallies.exact_hits[&pid(3)], 0);
}

#[test]
fn rounds_not_done_contribute_nothing() {
    let players = three_players();

    // Fully scored but never finalized: speculative scores must not leak
    let mut open = round_with(4, &players);
    set_bids(
        &mut open,
        entries(&[(1, Some(2)), (2, Some(1)), (3, Some(0))]),
    )
    .unwrap();
    set_actuals(
        &mut open,
        entries(&[(1, Some(2)), (2, Some(1)), (3, Some(1))]),
    )
    .unwrap();
    assert!(open.round_total != 0);

    let tallies = compute_tallies(&[open], &players);
    assert!(tallies.cumulative.values().all(|&v| v == 0));
    assert!(tallies.exact_hits.values().all(|&v| v == 0));
    assert_eq!(tallies.cum_total, 0);
}

#[test]
fn share_pct_is_the_cumulative_share_of_the_total() {
    let players = three_players();
    let rounds = vec![finished_round_five()];

    let tallies = compute_tallies(&rounds, &players);
    assert!((tallies.share_pct[&pid(1)] - 100.0 * 12.0 / 32.0).abs() < 1e-9);
    assert!((tallies.share_pct[&pid(3)] - 100.0 * 8.0 / 32.0).abs() < 1e-9);
    let total: f64 = tallies.share_pct.values().sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn share_pct_is_zero_without_a_positive_total() {
    let players = three_players();

    // No finalized rounds at all
    let tallies = compute_tallies(&[], &players);
    assert_eq!(tallies.cum_total, 0);
    assert!(tallies.share_pct.values().all(|&v| v == 0.0));

    // Known boundary: a penalty-dominated negative total also reports
    // all-zero shares, falling into the same branch as the empty board
    let two = Session::start(&named_roster(&["A", "B"]));
    let mut negative = round_with(26, two.players());
    set_bids(&mut negative, entries(&[(1, Some(0)), (2, Some(0))])).unwrap();
    assert!(lock_bids(&mut negative));
    set_actuals(&mut negative, entries(&[(1, Some(13)), (2, Some(13))])).unwrap();
    assert!(finalize(&mut negative));

    let tallies = compute_tallies(&[negative], two.players());
    assert_eq!(tallies.cum_total, -6);
    assert!(tallies.share_pct.values().all(|&v| v == 0.0));
}

#[test]
fn shares_with_mixed_signs_leave_the_percent_range() {
    let two = Session::start(&named_roster(&["A", "B"]));
    let mut round = round_with(12, two.players());
    set_bids(&mut round, entries(&[(1, Some(0)), (2, Some(0))])).unwrap();
    assert!(lock_bids(&mut round));
    set_actuals(&mut round, entries(&[(1, Some(12)), (2, Some(0))])).unwrap();
    assert!(finalize(&mut round));

    // p1: 10 - 12 = -2, p2: exact zero bid = 10, total 8
    let tallies = compute_tallies(&[round], two.players());
    assert_eq!(tallies.cum_total, 8);
    assert!((tallies.share_pct[&pid(1)] - (-25.0)).abs() < 1e-9);
    assert!((tallies.share_pct[&pid(2)] - 125.0).abs() < 1e-9);
}

#[test]
fn leaders_include_every_tie() {
    let players = three_players();
    let rounds = vec![finished_round_five()];
    let tallies = compute_tallies(&rounds, &players);

    let leaders = find_leaders(&tallies.cumulative);
    assert_eq!(leaders.len(), 2);
    assert!(leaders.contains(&pid(1)));
    assert!(leaders.contains(&pid(2)));
    assert!(!leaders.contains(&pid(3)));
}

#[test]
fn leaders_of_empty_standings_is_empty() {
    assert!(find_leaders(&Default::default()).is_empty());
}
