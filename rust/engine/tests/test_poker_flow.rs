use std::collections::HashSet;

use felt_engine::errors::GameError;
use felt_engine::table::Table;

const EPS: f64 = 1e-9;

#[test]
fn start_deals_five_each_from_one_deck_and_debits() {
    let mut table = Table::new(20.0, Some(11));
    let view = table.start_poker(4.0).expect("valid bet");
    assert_eq!(view.player.len(), 5);
    assert_eq!(view.dealer.len(), 5);
    assert!((view.bankroll - 16.0).abs() < EPS);
    assert!(view.can_exchange);
    assert!(view.player_rank.is_none() && view.dealer_rank.is_none());

    let mut seen = HashSet::new();
    for c in view.player.iter().chain(view.dealer.iter()) {
        assert!(seen.insert(*c), "card {:?} dealt twice", c);
    }
}

#[test]
fn invalid_bets_reject_without_mutating_anything() {
    let mut table = Table::new(20.0, Some(2));
    for bet in [-1.0, 0.0, f64::NAN, 20.01] {
        assert!(
            matches!(
                table.start_poker(bet),
                Err(GameError::InvalidBet { .. })
            ),
            "bet {}",
            bet
        );
        assert!((table.bankroll() - 20.0).abs() < EPS, "bet {}", bet);
    }
    assert_eq!(
        table.exchange_poker([false; 5]).unwrap_err(),
        GameError::NoRoundInProgress
    );
}

#[test]
fn exchange_replaces_exactly_the_selected_cards() {
    let mut table = Table::new(20.0, Some(33));
    let dealt = table.start_poker(1.0).expect("valid bet");
    let originals: HashSet<_> = dealt.player.iter().chain(dealt.dealer.iter()).copied().collect();

    let view = table
        .exchange_poker([true, false, false, false, true])
        .expect("round in progress");

    // kept positions are untouched
    assert_eq!(view.player[1], dealt.player[1]);
    assert_eq!(view.player[2], dealt.player[2]);
    assert_eq!(view.player[3], dealt.player[3]);
    // replacements come from the remaining deck, so they can never be any
    // originally dealt card
    assert!(!originals.contains(&view.player[0]));
    assert!(!originals.contains(&view.player[4]));
    // dealer still holds five cards whatever it swapped
    assert_eq!(view.dealer.len(), 5);

    // no card appears twice across both final hands
    let mut seen = HashSet::new();
    for c in view.player.iter().chain(view.dealer.iter()) {
        assert!(seen.insert(*c), "card {:?} held twice after exchange", c);
    }
}

#[test]
fn exchange_settles_and_credits_match_reported_outcome() {
    for seed in [8, 21, 300, 7777] {
        let mut table = Table::new(10.0, Some(seed));
        table.start_poker(5.0).expect("valid bet");
        let view = table.exchange_poker([false; 5]).expect("round in progress");
        assert!(!view.can_exchange);
        assert!(view.player_rank.is_some() && view.dealer_rank.is_some());
        let expected = match view.message.as_deref() {
            Some("You win!") => 15.0,
            Some("Tie.") => 10.0,
            Some("Dealer wins.") => 5.0,
            other => panic!("unexpected settlement message {:?}", other),
        };
        assert!(
            (view.bankroll - expected).abs() < EPS,
            "seed {}: {:?} should leave {}",
            seed,
            view.message,
            expected
        );
        // the reported outcome must agree with the reported ranks
        let (p, d) = (view.player_rank.unwrap(), view.dealer_rank.unwrap());
        match view.message.as_deref() {
            Some("You win!") => assert!(p > d),
            Some("Dealer wins.") => assert!(p < d),
            _ => assert_eq!(p, d),
        }
    }
}

#[test]
fn second_exchange_is_a_noop() {
    let mut table = Table::new(10.0, Some(4));
    table.start_poker(2.0).expect("valid bet");
    let settled = table.exchange_poker([true; 5]).expect("round in progress");
    let again = table.exchange_poker([true; 5]).expect("settled round tolerates exchange");
    assert_eq!(again.player, settled.player);
    assert_eq!(again.dealer, settled.dealer);
    assert_eq!(again.player_rank, settled.player_rank);
    assert_eq!(again.message, settled.message);
    assert!((again.bankroll - settled.bankroll).abs() < EPS);
}

#[test]
fn same_seed_and_inputs_replay_identically() {
    let mut a = Table::new(50.0, Some(12345));
    let mut b = Table::new(50.0, Some(12345));
    let da = a.start_poker(3.0).expect("valid bet");
    let db = b.start_poker(3.0).expect("valid bet");
    assert_eq!(da.player, db.player);
    assert_eq!(da.dealer, db.dealer);

    let sel = [true, true, false, false, true];
    let va = a.exchange_poker(sel).expect("round in progress");
    let vb = b.exchange_poker(sel).expect("round in progress");
    assert_eq!(va.player, vb.player);
    assert_eq!(va.dealer, vb.dealer);
    assert_eq!(va.player_rank, vb.player_rank);
    assert_eq!(va.dealer_rank, vb.dealer_rank);
    assert!((va.bankroll - vb.bankroll).abs() < EPS);
}

#[test]
fn blackjack_and_poker_rounds_do_not_interact() {
    let mut table = Table::new(100.0, Some(6));
    table.start_blackjack(10.0).expect("valid bet");
    let poker = table.start_poker(20.0).expect("valid bet");
    assert!((poker.bankroll - 70.0).abs() < EPS);

    // settling the poker round leaves the blackjack round live
    table.exchange_poker([false; 5]).expect("round in progress");
    let bj = table.hit().expect("blackjack round unaffected");
    assert_eq!(bj.player.len(), 3);
}
