#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate holdem_equity;
use holdem_equity::core::{BitSetEvaluator, ComboEvaluator, HandEvaluator, parse_cards};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(cards) = parse_cards(s) {
            if (5..=7).contains(&cards.len()) {
                assert_eq!(
                    BitSetEvaluator.evaluate(&cards),
                    ComboEvaluator.evaluate(&cards)
                );
            }
        }
    }
});
