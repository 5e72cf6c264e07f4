#![no_main]

use anchor_lang::prelude::Pubkey;
use libfuzzer_sys::fuzz_target;
use timed_auction::{AuctionConfig, AuctionState, Deposit, Vault};

const START: i64 = 1_700_000_000;

fn read_u64(chunk: &[u8]) -> u64 {
    u64::from_le_bytes(chunk.try_into().unwrap_or([0; 8]))
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 40 {
        return;
    }

    // Configuration straight from the input; invalid ones must be rejected cleanly.
    let config = AuctionConfig {
        time_increase_per_bet: read_u64(&data[0..8]) % 100_000,
        minimal_time_increase_per_bet: read_u64(&data[8..16]) % 100_000,
        auction_duration: read_u64(&data[16..24]),
        max_participation_amount: read_u64(&data[24..32]),
        min_pot_size: read_u64(&data[32..40]),
    };

    let mut auction = AuctionState::default();
    let mut vault = Vault::default();
    if auction
        .open(&config, Pubkey::new_unique(), Pubkey::new_unique(), 255, 255, START)
        .is_err()
    {
        assert_eq!(auction, AuctionState::default());
        return;
    }

    let bidders = [Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique()];
    let mut receipts = [Deposit::default(), Deposit::default()];
    let mut now = START;

    // Each 9-byte record is one call: opcode + u64 operand.
    for record in data[40..].chunks_exact(9) {
        let operand = read_u64(&record[1..9]);
        let before = (auction.clone(), vault.clone(), receipts.clone());
        let deadline_before = auction.deadline;
        let leading_before = auction.leading_amount;
        let increase = auction.next_time_increase();
        let is_bid = record[0] % 5 == 1;

        let result = match record[0] % 5 {
            0 => {
                let receipt = &mut receipts[(operand % 2) as usize];
                auction.deposit(&mut vault, Some(receipt), operand, now)
            }
            1 => {
                let bidder = bidders[(operand % 3) as usize];
                auction.place_bid(&mut vault, bidder, operand, now)
            }
            2 => {
                now = now.saturating_add((operand % 10_000) as i64);
                Ok(())
            }
            3 => auction.settle(&mut vault, now).map(|_| ()),
            _ => {
                let receipt = &mut receipts[(operand % 2) as usize];
                auction.reclaim(&mut vault, receipt, now).map(|_| ())
            }
        };

        match result {
            Ok(()) => {
                assert!(auction.holds_invariants(&vault));
                assert!(auction.deadline >= deadline_before);
                assert!(auction.leading_amount >= leading_before);
                if is_bid {
                    assert!(increase >= auction.minimal_time_increase_per_bet);
                    assert!(increase <= auction.time_increase_per_bet);
                    assert_eq!(auction.leading_bid_at, now);
                    assert!(auction.deadline >= now.saturating_add(increase as i64));
                }
            }
            Err(_) => {
                assert_eq!((auction.clone(), vault.clone(), receipts.clone()), before);
            }
        }
    }
});
