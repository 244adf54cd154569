#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate holdem_equity;
use holdem_equity::core::{CardBitSet, parse_cards};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(cards) = parse_cards(s) {
            // Whatever parses is distinct and prints back the same.
            let set: CardBitSet = cards.iter().copied().collect();
            assert_eq!(set.count(), cards.len());
            let printed: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
            assert_eq!(Ok(cards), parse_cards(&printed.join(" ")));
        }
    }
});
