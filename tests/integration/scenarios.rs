//! End-to-end evaluation scenarios through the public library API.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use sector_calc::strategy::{compute_skip_distance, evaluate_bet};
use sector_calc::types::{
    parse_wheel_number, BetRecommendation, CalcError, CalculationInput, Direction,
};
use sector_calc::wheel::{self, WHEEL_LAYOUT};

fn eval(
    previous: i64,
    current: i64,
    direction: Direction,
    bankroll: Decimal,
) -> Result<BetRecommendation, CalcError> {
    evaluate_bet(&CalculationInput {
        previous,
        current,
        direction,
        bankroll,
    })
}

#[test]
fn repeat_number_counter_clockwise() {
    let rec = eval(0, 0, Direction::CounterClockwise, dec!(100)).unwrap();
    assert_eq!(rec.skip_distance, 0);
    assert!(!rec.is_valid);
    assert_eq!(rec.bet_per_number, dec!(0.1));
    assert_eq!(rec.total_bet, dec!(1.7));
    assert!(rec.sector.is_empty());
}

#[test]
fn neighbour_clockwise_is_outside_window() {
    let rec = eval(0, 32, Direction::Clockwise, dec!(100)).unwrap();
    assert_eq!(rec.skip_distance, 1);
    assert!(!rec.is_valid);
}

#[test]
fn counter_clockwise_sector_bet() {
    let rec = eval(0, 5, Direction::CounterClockwise, dec!(250)).unwrap();
    assert_eq!(rec.skip_distance, 18);
    assert!(rec.is_valid);
    assert_eq!(rec.bet_per_number, dec!(0.2));
    assert_eq!(rec.total_bet, dec!(3.4));
    assert_eq!(rec.sector.len(), 17);
    assert_eq!(rec.sector[8], 5);
    assert_eq!(rec.sector[0], 27);
    assert_eq!(rec.sector[16], 9);
}

#[test]
fn off_wheel_numbers_are_rejected_regardless_of_other_fields() {
    for &d in Direction::ALL {
        for bankroll in [dec!(-5), dec!(0), dec!(100000)] {
            assert_eq!(
                eval(40, 5, d, bankroll),
                Err(CalcError::InvalidNumber("40".into()))
            );
            assert!(eval(0, 37, d, bankroll).is_err());
        }
    }
}

#[test]
fn text_input_goes_through_numeric_parsing() {
    let previous = parse_wheel_number(" 0 ").unwrap();
    let current = parse_wheel_number("5").unwrap();
    let rec = eval(previous, current, Direction::CounterClockwise, dec!(250)).unwrap();
    assert!(rec.is_valid);

    assert!(parse_wheel_number("seventeen").is_err());
}

#[test]
fn every_valid_sector_is_a_contiguous_arc() {
    for &p in WHEEL_LAYOUT.iter() {
        for &c in WHEEL_LAYOUT.iter() {
            for &d in Direction::ALL {
                let rec = eval(p as i64, c as i64, d, dec!(1000)).unwrap();
                if !rec.is_valid {
                    continue;
                }
                let start = wheel::position_of(rec.sector[0] as i64).unwrap();
                for (k, &n) in rec.sector.iter().enumerate() {
                    assert_eq!(n, WHEEL_LAYOUT[(start + k) % 37]);
                }
            }
        }
    }
}

#[test]
fn directions_mirror_each_other() {
    for p in 0..=36 {
        for c in 0..=36 {
            if p == c {
                continue;
            }
            let cw = compute_skip_distance(p, c, Direction::Clockwise).unwrap() as i64;
            let ccw = compute_skip_distance(p, c, Direction::CounterClockwise).unwrap() as i64;
            assert_eq!(cw, (37 - ccw) % 37);
        }
    }
}

#[test]
fn stake_is_monotonic_and_total_exact() {
    let mut last = Decimal::ZERO;
    for hundreds in -2i64..80 {
        let bankroll = Decimal::from(hundreds * 100 + 50);
        let rec = eval(0, 0, Direction::Clockwise, bankroll).unwrap();
        assert!(rec.bet_per_number >= last);
        assert!(rec.bet_per_number >= dec!(0.1) && rec.bet_per_number <= dec!(5.0));
        assert_eq!(rec.total_bet, rec.bet_per_number * dec!(17));
        last = rec.bet_per_number;
    }
}
