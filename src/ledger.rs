use crate::address::AccountAddress;
use crate::coins::Coins;
use crate::error::{ChannelError, Result};
use std::collections::HashMap;

/// The external account ledger holding spendable balances.
///
/// `debit` fails with [`ChannelError::InsufficientFunds`] and must leave the
/// account untouched on failure. `credit` always succeeds, creating the
/// account if absent.
pub trait Ledger {
    fn debit(&mut self, account: &AccountAddress, amount: &Coins) -> Result<()>;
    fn credit(&mut self, account: &AccountAddress, amount: &Coins);
    fn balance(&self, account: &AccountAddress) -> Coins;
}

/// Simple in-process ledger, used in tests and by hosts without an
/// external account service.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: HashMap<AccountAddress, Coins>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `account` with `amount` on top of whatever it already holds.
    pub fn fund(&mut self, account: &AccountAddress, amount: &Coins) {
        self.credit(account, amount);
    }
}

impl Ledger for InMemoryLedger {
    fn debit(&mut self, account: &AccountAddress, amount: &Coins) -> Result<()> {
        let balance = self.balance(account);
        let remaining = balance.sub(amount);
        if !remaining.is_non_negative() {
            return Err(ChannelError::InsufficientFunds(format!(
                "account {account} holds {balance}, cannot debit {amount}"
            )));
        }
        self.balances.insert(*account, remaining);
        Ok(())
    }

    fn credit(&mut self, account: &AccountAddress, amount: &Coins) {
        let balance = self.balance(account);
        self.balances.insert(*account, balance.add(amount));
    }

    fn balance(&self, account: &AccountAddress) -> Coins {
        self.balances.get(account).cloned().unwrap_or_default()
    }
}
