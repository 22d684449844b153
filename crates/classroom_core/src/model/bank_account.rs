//! In-memory bank account from the single-class lab.

use serde::{Deserialize, Serialize};

/// Account category; decides the monthly fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Personal,
    Business,
}

impl AccountKind {
    /// Fee taken by `BankAccount::pay_monthly_fee`, in whole currency units.
    pub fn monthly_fee(self) -> i64 {
        match self {
            Self::Personal => 10,
            Self::Business => 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    holder: String,
    balance: i64,
    kind: AccountKind,
}

impl BankAccount {
    pub fn new(holder: impl Into<String>, balance: i64, kind: AccountKind) -> Self {
        Self {
            holder: holder.into(),
            balance,
            kind,
        }
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn set_holder(&mut self, holder: impl Into<String>) {
        self.holder = holder.into();
    }

    pub fn set_balance(&mut self, balance: i64) {
        self.balance = balance;
    }

    pub fn set_kind(&mut self, kind: AccountKind) {
        self.kind = kind;
    }

    /// Saturates at the `i64` bounds.
    pub fn pay_in(&mut self, amount: i64) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Deducts the fee for the current kind. Balances may go negative.
    pub fn pay_monthly_fee(&mut self) {
        self.balance = self.balance.saturating_sub(self.kind.monthly_fee());
    }
}
