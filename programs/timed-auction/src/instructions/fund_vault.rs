use anchor_lang::prelude::*;
use crate::{
    state::{AuctionState, Deposit, Vault},
    utils::{
        constants::DEPOSIT_SEED,
        errors::AuctionError,
        events::{emit_if_closed, VaultFunded},
        lamports, pda, storage,
    },
};

#[derive(Accounts)]
pub struct FundVault<'info> {
    /// CHECK: must be the ["state"] PDA; loaded by the handler
    #[account(mut, address = pda::state_address().0 @ AuctionError::InvalidAccount)]
    pub auction_instance: UncheckedAccount<'info>,

    /// CHECK: must be the ["vault"] PDA; loaded by the handler
    #[account(mut, address = pda::vault_address().0 @ AuctionError::InvalidAccount)]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: the payer's ["deposit", payer] receipt; only created once value moves
    #[account(
        mut,
        address = pda::deposit_address(&payer.key()).0 @ AuctionError::InvalidAccount,
    )]
    pub deposit: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Resolves the requested amount against what the payer holds. `None` takes
/// everything left once a missing receipt's rent is set aside.
fn resolve_amount(requested: Option<u64>, available: u64, receipt_rent: u64) -> Result<u64> {
    let amount = match requested {
        Some(amount) => amount,
        None => available.saturating_sub(receipt_rent),
    };
    if amount == 0 {
        return Ok(0);
    }

    let required = amount
        .checked_add(receipt_rent)
        .ok_or(AuctionError::ArithmeticOverflow)?;
    require!(available >= required, AuctionError::InsufficientFunds);
    Ok(amount)
}

pub fn fund_vault_handler(ctx: Context<FundVault>, amount: Option<u64>) -> Result<()> {
    let clock = Clock::get()?;
    let accounts = &ctx.accounts;
    let payer = accounts.payer.key();

    let receipt_missing = accounts.deposit.data_is_empty();
    let receipt_rent = if receipt_missing {
        Rent::get()?.minimum_balance(Deposit::LEN)
    } else {
        0
    };
    let amount = resolve_amount(amount, accounts.payer.lamports(), receipt_rent)?;

    let mut auction = storage::load::<AuctionState>(&accounts.auction_instance)?;
    let mut vault = storage::load::<Vault>(&accounts.vault)?;
    let before = auction.status;

    if amount == 0 {
        auction.deposit(&mut vault, None, 0, clock.unix_timestamp)?;
    } else {
        let mut receipt = if receipt_missing {
            let (_, bump) = pda::deposit_address(&payer);
            lamports::create_pda(
                &accounts.system_program,
                &accounts.payer,
                &accounts.deposit,
                Deposit::LEN,
                &[DEPOSIT_SEED, payer.as_ref(), &[bump]],
            )?;
            Deposit {
                depositor: payer,
                amount: 0,
                bump,
            }
        } else {
            storage::load::<Deposit>(&accounts.deposit)?
        };

        lamports::transfer_in(
            &accounts.system_program,
            &accounts.payer,
            accounts.vault.to_account_info(),
            amount,
        )?;
        auction.deposit(&mut vault, Some(&mut receipt), amount, clock.unix_timestamp)?;
        storage::store(&accounts.deposit, &receipt)?;
    }

    storage::store(&accounts.auction_instance, &auction)?;
    storage::store(&accounts.vault, &vault)?;

    emit_if_closed(&auction, accounts.auction_instance.key(), before, clock.unix_timestamp);

    emit!(VaultFunded {
        vault: accounts.vault.key(),
        payer,
        amount,
        vault_balance: vault.balance,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "[auction] vault funded payer={} amount={} balance={}",
        payer,
        amount,
        vault.balance
    );
    Ok(())
}
