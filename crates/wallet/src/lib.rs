//! Wallet domain module: bank-transfer top-ups.
//!
//! Covers the manual top-up flow: the user picks an amount, gets transfer
//! instructions (account, content line, QR payload) and the request sits in
//! `Pending` until the operator confirms the transfer. No gateway
//! integration; the bank leg happens outside this repository.

pub mod topup;

pub use topup::{
    receiving_account, BankAccount, TopUpRequest, TopUpStatus, MIN_TOPUP, QUICK_AMOUNTS,
};
