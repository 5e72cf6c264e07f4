use anchor_lang::prelude::*;
use crate::{
    state::{AuctionConfig, AuctionState, Vault},
    utils::{
        constants::{STATE_SEED, VAULT_SEED},
        errors::AuctionError,
        events::AuctionInitialized,
        lamports, pda, storage,
    },
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// CHECK: must be the ["vault"] PDA; created and loaded by the handler
    #[account(mut, address = pda::vault_address().0 @ AuctionError::InvalidAccount)]
    pub vault: UncheckedAccount<'info>,

    /// CHECK: must be the ["state"] PDA; created and loaded by the handler
    #[account(mut, address = pda::state_address().0 @ AuctionError::InvalidAccount)]
    pub auction_instance: UncheckedAccount<'info>,

    /// Pays for both accounts and becomes the auction authority
    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<Initialize>, config: AuctionConfig) -> Result<()> {
    let clock = Clock::get()?;
    let accounts = &ctx.accounts;
    let (state_key, state_bump) = pda::state_address();
    let (vault_key, vault_bump) = pda::vault_address();
    let authority = accounts.user.key();

    // A second call finds the state in place and is refused by `open`
    let mut auction = if accounts.auction_instance.data_is_empty() {
        lamports::create_pda(
            &accounts.system_program,
            &accounts.user,
            &accounts.auction_instance,
            AuctionState::LEN,
            &[STATE_SEED, &[state_bump]],
        )?;
        AuctionState::default()
    } else {
        storage::load::<AuctionState>(&accounts.auction_instance)?
    };
    auction.open(
        &config,
        authority,
        vault_key,
        state_bump,
        vault_bump,
        clock.unix_timestamp,
    )?;

    let mut vault = if accounts.vault.data_is_empty() {
        lamports::create_pda(
            &accounts.system_program,
            &accounts.user,
            &accounts.vault,
            Vault::LEN,
            &[VAULT_SEED, &[vault_bump]],
        )?;
        Vault::default()
    } else {
        storage::load::<Vault>(&accounts.vault)?
    };
    vault.bump = vault_bump;

    storage::store(&accounts.auction_instance, &auction)?;
    storage::store(&accounts.vault, &vault)?;

    emit!(AuctionInitialized {
        auction: state_key,
        authority,
        vault: vault_key,
        time_increase_per_bet: auction.time_increase_per_bet,
        minimal_time_increase_per_bet: auction.minimal_time_increase_per_bet,
        auction_duration: auction.auction_duration,
        max_participation_amount: auction.max_participation_amount,
        min_pot_size: auction.min_pot_size,
        deadline: auction.deadline,
    });

    msg!(
        "[auction] initialized authority={} deadline={}",
        authority,
        auction.deadline
    );
    Ok(())
}
