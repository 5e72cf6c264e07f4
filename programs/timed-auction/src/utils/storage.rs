use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;

/// Reads a program account whose address has already been checked.
/// Rejects foreign owners and mismatched discriminators.
pub fn load<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Result<T> {
    if info.owner != &T::owner() {
        return Err(Error::from(ErrorCode::AccountOwnedByWrongProgram)
            .with_pubkeys((*info.owner, T::owner())));
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Writes `account` back, discriminator first.
pub fn store<T: AccountSerialize>(info: &AccountInfo, account: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    account.try_serialize(&mut writer)
}

/// Hands every lamport of `info` to `destination` and returns the account to the system program.
pub fn close<'info>(info: &AccountInfo<'info>, destination: &AccountInfo<'info>) -> Result<()> {
    let credited = destination
        .lamports()
        .checked_add(info.lamports())
        .ok_or(crate::utils::errors::AuctionError::ArithmeticOverflow)?;
    **destination.try_borrow_mut_lamports()? = credited;
    **info.try_borrow_mut_lamports()? = 0;

    info.assign(&anchor_lang::system_program::ID);
    info.realloc(0, false)?;
    Ok(())
}
