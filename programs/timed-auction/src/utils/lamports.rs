use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::utils::errors::AuctionError;

/// Moves lamports from a system-owned signer into the vault through the system program.
pub fn transfer_in<'info>(
    system_program: &Program<'info, System>,
    from: &Signer<'info>,
    vault: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_ctx = CpiContext::new(
        system_program.to_account_info(),
        Transfer {
            from: from.to_account_info(),
            to: vault,
        },
    );
    transfer(cpi_ctx, amount)
}

/// Debits the program-owned vault directly, never dipping into its rent reserve.
pub fn release<'info>(
    vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let rent_exempt_balance = Rent::get()?.minimum_balance(vault.data_len());

    let vault_balance = vault.lamports();
    let recipient_balance = recipient.lamports();

    let remaining = vault_balance
        .checked_sub(amount)
        .ok_or(AuctionError::InsufficientFunds)?;
    require!(
        remaining >= rent_exempt_balance,
        AuctionError::InsufficientFunds
    );
    let credited = recipient_balance
        .checked_add(amount)
        .ok_or(AuctionError::ArithmeticOverflow)?;

    **vault.try_borrow_mut_lamports()? = remaining;
    **recipient.try_borrow_mut_lamports()? = credited;
    Ok(())
}

/// Creates a rent-exempt, program-owned account at a PDA. Lamports already sitting
/// at the address are kept and only topped up.
pub fn create_pda<'info>(
    system_program: &Program<'info, System>,
    payer: &Signer<'info>,
    target: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let rent_exempt_balance = Rent::get()?.minimum_balance(space);
    let signer = &[signer_seeds];
    let current = target.lamports();

    if current == 0 {
        let cpi_ctx = CpiContext::new_with_signer(
            system_program.to_account_info(),
            CreateAccount {
                from: payer.to_account_info(),
                to: target.clone(),
            },
            signer,
        );
        return create_account(cpi_ctx, rent_exempt_balance, space as u64, &crate::ID);
    }

    let top_up = rent_exempt_balance.saturating_sub(current);
    if top_up > 0 {
        transfer_in(system_program, payer, target.clone(), top_up)?;
    }
    allocate(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer,
        ),
        space as u64,
    )?;
    assign(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer,
        ),
        &crate::ID,
    )
}
