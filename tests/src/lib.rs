use anchor_client::{
    solana_sdk::{
        commitment_config::CommitmentConfig,
        instruction::InstructionError,
        pubkey::Pubkey,
        signature::{read_keypair_file, Keypair},
        signer::Signer,
        system_instruction, system_program,
        transaction::TransactionError,
    },
    Client, ClientError, Cluster,
};
use timed_auction::{utils::pda, AuctionError, AuctionState, AuctionStatus, Deposit, Vault};

const TIME_INCREASE_PER_BET: u64 = 60;
const MINIMAL_TIME_INCREASE_PER_BET: u64 = 24;
const AUCTION_DURATION: u64 = 15 * 60;
const MAX_PARTICIPATION_AMOUNT: u64 = 100_000;
const MIN_POT_SIZE: u64 = 100_000;

/// Asserts that a transaction failed with exactly `expected` as its custom program error.
fn assert_auction_error<T>(result: Result<T, ClientError>, expected: AuctionError) {
    let err = match result {
        Ok(_) => panic!("expected {expected:?}, but the transaction succeeded"),
        Err(err) => err,
    };
    let code = match &err {
        ClientError::SolanaClientError(client_err) => match client_err.get_transaction_error() {
            Some(TransactionError::InstructionError(_, InstructionError::Custom(code))) => Some(code),
            _ => None,
        },
        _ => None,
    };
    assert_eq!(code, Some(u32::from(expected)), "unexpected failure: {err:?}");
}

// The state and vault PDAs are singletons, so the whole flow runs as one
// ordered scenario against a fresh `anchor test` validator.
#[test]
#[ignore = "requires a local validator started by `anchor test`"]
fn test_auction_lifecycle() {
    let anchor_wallet = std::env::var("ANCHOR_WALLET").unwrap();
    let payer = read_keypair_file(&anchor_wallet).unwrap();

    let client = Client::new_with_options(Cluster::Localnet, &payer, CommitmentConfig::confirmed());
    let program = client.program(timed_auction::ID).unwrap();

    let (state_pda, _) = pda::state_address();
    let (vault_pda, _) = pda::vault_address();

    // Initialize the auction
    let tx = program
        .request()
        .accounts(timed_auction::accounts::Initialize {
            vault: vault_pda,
            auction_instance: state_pda,
            user: payer.pubkey(),
            system_program: system_program::ID,
        })
        .args(timed_auction::instruction::Initialize {
            time_increase_per_bet: TIME_INCREASE_PER_BET,
            minimal_time_increase_per_bet: MINIMAL_TIME_INCREASE_PER_BET,
            auction_duration: AUCTION_DURATION,
            max_participation_amount: MAX_PARTICIPATION_AMOUNT,
            min_pot_size: MIN_POT_SIZE,
        })
        .send()
        .expect("Failed to initialize auction");
    println!("Initialize transaction signature: {}", tx);

    let auction = program
        .account::<AuctionState>(state_pda)
        .expect("Failed to fetch auction account");
    assert_eq!(auction.status, AuctionStatus::Open);
    assert_eq!(auction.authority, payer.pubkey());
    assert_eq!(auction.vault, vault_pda);
    assert_eq!(auction.deadline, auction.started_at + AUCTION_DURATION as i64);
    assert_eq!(auction.leader, None);

    // A second initialize must be rejected
    let reinit = program
        .request()
        .accounts(timed_auction::accounts::Initialize {
            vault: vault_pda,
            auction_instance: state_pda,
            user: payer.pubkey(),
            system_program: system_program::ID,
        })
        .args(timed_auction::instruction::Initialize {
            time_increase_per_bet: TIME_INCREASE_PER_BET,
            minimal_time_increase_per_bet: MINIMAL_TIME_INCREASE_PER_BET,
            auction_duration: AUCTION_DURATION,
            max_participation_amount: MAX_PARTICIPATION_AMOUNT,
            min_pot_size: MIN_POT_SIZE,
        })
        .send();
    assert_auction_error(reinit, AuctionError::AlreadyInitialized);

    // Fund a fresh user and let them fund the vault
    let funder = Keypair::new();
    let fund_user_ix = system_instruction::transfer(&payer.pubkey(), &funder.pubkey(), 5_000_000_000);
    program
        .request()
        .instruction(fund_user_ix)
        .send()
        .expect("Failed to fund user account");

    let (deposit_pda, _) = pda::deposit_address(&funder.pubkey());
    let tx = program
        .request()
        .accounts(timed_auction::accounts::FundVault {
            auction_instance: state_pda,
            vault: vault_pda,
            deposit: deposit_pda,
            payer: funder.pubkey(),
            system_program: system_program::ID,
        })
        .args(timed_auction::instruction::FundVault {
            amount: Some(2_000_000_000),
        })
        .signer(&funder)
        .send()
        .expect("Failed to fund vault");
    println!("Fund vault transaction signature: {}", tx);

    let vault = program
        .account::<Vault>(vault_pda)
        .expect("Failed to fetch vault account");
    assert_eq!(vault.balance, 2_000_000_000);

    let receipt = program
        .account::<Deposit>(deposit_pda)
        .expect("Failed to fetch deposit receipt");
    assert_eq!(receipt.depositor, funder.pubkey());
    assert_eq!(receipt.amount, 2_000_000_000);

    // Asking for more than the payer holds fails and leaves the vault alone
    let overdraw = program
        .request()
        .accounts(timed_auction::accounts::FundVault {
            auction_instance: state_pda,
            vault: vault_pda,
            deposit: deposit_pda,
            payer: funder.pubkey(),
            system_program: system_program::ID,
        })
        .args(timed_auction::instruction::FundVault {
            amount: Some(50_000_000_000),
        })
        .signer(&funder)
        .send();
    assert_auction_error(overdraw, AuctionError::InsufficientFunds);
    let vault = program.account::<Vault>(vault_pda).unwrap();
    assert_eq!(vault.balance, 2_000_000_000);

    // A zero deposit moves nothing and creates no receipt
    let idle = Keypair::new();
    let (idle_receipt, _) = pda::deposit_address(&idle.pubkey());
    program
        .request()
        .accounts(timed_auction::accounts::FundVault {
            auction_instance: state_pda,
            vault: vault_pda,
            deposit: idle_receipt,
            payer: idle.pubkey(),
            system_program: system_program::ID,
        })
        .args(timed_auction::instruction::FundVault { amount: Some(0) })
        .signer(&idle)
        .send()
        .expect("Failed to fund vault with zero");
    assert!(program.account::<Deposit>(idle_receipt).is_err());
    assert_eq!(program.account::<Vault>(vault_pda).unwrap().balance, 2_000_000_000);

    // `None` moves the whole balance, minus the rent of the new receipt
    let all_in = Keypair::new();
    let fund_all_in_ix = system_instruction::transfer(&payer.pubkey(), &all_in.pubkey(), 1_000_000_000);
    program
        .request()
        .instruction(fund_all_in_ix)
        .send()
        .expect("Failed to fund user account");

    let (all_in_receipt, _) = pda::deposit_address(&all_in.pubkey());
    program
        .request()
        .accounts(timed_auction::accounts::FundVault {
            auction_instance: state_pda,
            vault: vault_pda,
            deposit: all_in_receipt,
            payer: all_in.pubkey(),
            system_program: system_program::ID,
        })
        .args(timed_auction::instruction::FundVault { amount: None })
        .signer(&all_in)
        .send()
        .expect("Failed to fund vault with the whole balance");

    let receipt_rent = program
        .rpc()
        .get_minimum_balance_for_rent_exemption(Deposit::LEN)
        .unwrap();
    let whole_balance = 1_000_000_000 - receipt_rent;
    let receipt = program.account::<Deposit>(all_in_receipt).unwrap();
    assert_eq!(receipt.amount, whole_balance);
    assert_eq!(program.rpc().get_balance(&all_in.pubkey()).unwrap(), 0);
    let pot = 2_000_000_000 + whole_balance;
    assert_eq!(program.account::<Vault>(vault_pda).unwrap().balance, pot);

    // A bidder that cannot cover the amount is refused
    let broke = Keypair::new();
    let broke_bid = program
        .request()
        .accounts(timed_auction::accounts::PlaceBid {
            auction_instance: state_pda,
            vault: vault_pda,
            bidder: broke.pubkey(),
            system_program: system_program::ID,
        })
        .args(timed_auction::instruction::PlaceBid { amount: 50_000 })
        .signer(&broke)
        .send();
    assert_auction_error(broke_bid, AuctionError::InsufficientFunds);

    // Place a bid
    let bidder = Keypair::new();
    let fund_bidder_ix = system_instruction::transfer(&payer.pubkey(), &bidder.pubkey(), 1_000_000_000);
    program
        .request()
        .instruction(fund_bidder_ix)
        .send()
        .expect("Failed to fund bidder account");

    let deadline_before = program.account::<AuctionState>(state_pda).unwrap().deadline;
    let tx = program
        .request()
        .accounts(timed_auction::accounts::PlaceBid {
            auction_instance: state_pda,
            vault: vault_pda,
            bidder: bidder.pubkey(),
            system_program: system_program::ID,
        })
        .args(timed_auction::instruction::PlaceBid { amount: 50_000 })
        .signer(&bidder)
        .send()
        .expect("Failed to place bid");
    println!("Bid transaction signature: {}", tx);

    let auction = program.account::<AuctionState>(state_pda).unwrap();
    assert_eq!(auction.leader, Some(bidder.pubkey()));
    assert_eq!(auction.leading_amount, 50_000);
    assert!(auction.deadline >= deadline_before);
    assert_eq!(auction.bid_count, 1);
    assert!(auction.leading_bid_at >= auction.started_at);

    let vault = program.account::<Vault>(vault_pda).unwrap();
    assert_eq!(vault.balance, pot + 50_000);

    // An equal bid does not qualify
    let equal_bid = program
        .request()
        .accounts(timed_auction::accounts::PlaceBid {
            auction_instance: state_pda,
            vault: vault_pda,
            bidder: payer.pubkey(),
            system_program: system_program::ID,
        })
        .args(timed_auction::instruction::PlaceBid { amount: 50_000 })
        .send();
    assert_auction_error(equal_bid, AuctionError::BidTooLow);

    // Settling before the deadline is refused
    let early_settle = program
        .request()
        .accounts(timed_auction::accounts::Settle {
            auction_instance: state_pda,
            vault: vault_pda,
            winner: bidder.pubkey(),
            caller: payer.pubkey(),
        })
        .args(timed_auction::instruction::Settle {})
        .send();
    assert_auction_error(early_settle, AuctionError::AuctionStillOpen);

    // Reading the status never mutates the auction
    program
        .request()
        .accounts(timed_auction::accounts::GetStatus {
            auction_instance: state_pda,
            vault: vault_pda,
        })
        .args(timed_auction::instruction::GetStatus {})
        .send()
        .expect("Failed to read auction status");
    let after_read = program.account::<AuctionState>(state_pda).unwrap();
    assert_eq!(after_read, auction);
}

#[test]
#[ignore = "requires a local validator started by `anchor test`"]
fn test_vault_rejects_foreign_address() {
    let anchor_wallet = std::env::var("ANCHOR_WALLET").unwrap();
    let payer = read_keypair_file(&anchor_wallet).unwrap();

    let client = Client::new_with_options(Cluster::Localnet, &payer, CommitmentConfig::confirmed());
    let program = client.program(timed_auction::ID).unwrap();

    let (state_pda, _) = pda::state_address();
    let (deposit_pda, _) = pda::deposit_address(&payer.pubkey());
    let not_the_vault = Pubkey::new_unique();

    let result = program
        .request()
        .accounts(timed_auction::accounts::FundVault {
            auction_instance: state_pda,
            vault: not_the_vault,
            deposit: deposit_pda,
            payer: payer.pubkey(),
            system_program: system_program::ID,
        })
        .args(timed_auction::instruction::FundVault { amount: Some(1) })
        .send();
    assert_auction_error(result, AuctionError::InvalidAccount);
}
