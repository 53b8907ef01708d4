//! In-memory dev wallet balances.
//!
//! Kept outside the round state: balances survive round resets. Owned by the
//! caller rather than living in a module-global so parallel engines (tests)
//! never share funds.

use std::collections::BTreeMap;

use crate::constants::DEV_WALLETS;
use crate::error::GameError;

#[derive(Debug, Clone, Default)]
pub struct WalletBook {
    balances: BTreeMap<String, u64>,
}

impl WalletBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Book pre-funded with the six well-known dev wallets.
    pub fn with_dev_wallets(starting_balance: u64) -> Self {
        let mut book = Self::new();
        for addr in DEV_WALLETS {
            book.credit(addr, starting_balance);
        }
        book
    }

    pub fn credit(&mut self, address: &str, amount: u64) {
        *self.balances.entry(address.to_string()).or_insert(0) += amount;
    }

    /// Fails closed: an unknown address has balance 0 and cannot be debited.
    pub fn debit(&mut self, address: &str, amount: u64) -> Result<(), GameError> {
        let have = self.balances.get(address).copied().unwrap_or(0);
        if have < amount {
            return Err(GameError::InsufficientBalance { need: amount, have });
        }
        self.balances.insert(address.to_string(), have - amount);
        Ok(())
    }

    pub fn balance(&self, address: &str) -> u64 {
        self.balances.get(address).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEV_WALLET_1, DEV_WALLET_BALANCE_MIST};

    #[test]
    fn test_credit_debit_roundtrip() {
        let mut book = WalletBook::new();
        book.credit("addr", 500);
        book.debit("addr", 200).unwrap();
        assert_eq!(book.balance("addr"), 300);
    }

    #[test]
    fn test_debit_insufficient_fails_closed() {
        let mut book = WalletBook::new();
        book.credit("addr", 100);
        let err = book.debit("addr", 101).unwrap_err();
        assert_eq!(err, GameError::InsufficientBalance { need: 101, have: 100 });
        // Balance untouched by the failed debit.
        assert_eq!(book.balance("addr"), 100);
    }

    #[test]
    fn test_unknown_address_is_zero() {
        let mut book = WalletBook::new();
        assert_eq!(book.balance("nobody"), 0);
        assert!(book.debit("nobody", 1).is_err());
    }

    #[test]
    fn test_dev_wallets_prefunded() {
        let book = WalletBook::with_dev_wallets(DEV_WALLET_BALANCE_MIST);
        assert_eq!(book.balance(DEV_WALLET_1), DEV_WALLET_BALANCE_MIST);
        for addr in DEV_WALLETS {
            assert_eq!(book.balance(addr), DEV_WALLET_BALANCE_MIST);
        }
    }
}
