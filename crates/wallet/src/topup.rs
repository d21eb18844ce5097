use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use mmomart_core::{DomainError, DomainResult, Money, TopUpId};

/// Smallest accepted top-up.
pub const MIN_TOPUP: Money = Money::dong(10_000);

/// Preset amounts offered as one-tap buttons.
pub const QUICK_AMOUNTS: [Money; 5] = [
    Money::dong(50_000),
    Money::dong(100_000),
    Money::dong(200_000),
    Money::dong(500_000),
    Money::dong(1_000_000),
];

/// Receiving bank account shown in the transfer instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub bank: String,
    pub holder: String,
    pub number: String,
}

/// The storefront's mock receiving account.
pub fn receiving_account() -> BankAccount {
    BankAccount {
        bank: "Techcombank".to_string(),
        holder: "CHOTROIMMO COMPANY".to_string(),
        number: "19035272837465".to_string(),
    }
}

/// Top-up lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopUpStatus {
    Pending,
    Confirmed,
}

/// A bank-transfer top-up request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopUpRequest {
    id: TopUpId,
    customer: String,
    amount: Money,
    status: TopUpStatus,
    created_at: DateTime<Utc>,
    confirmed_at: Option<DateTime<Utc>>,
}

impl TopUpRequest {
    /// Open a new pending request.
    ///
    /// Amounts come through [`Money::parse_input`] sanitization upstream, so
    /// by the time they reach here they are well-formed; only business rules
    /// are checked (blank customer, minimum amount).
    pub fn new(customer: impl Into<String>, amount: Money, now: DateTime<Utc>) -> DomainResult<Self> {
        let customer = customer.into();
        if customer.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        if amount < MIN_TOPUP {
            return Err(DomainError::validation(format!(
                "minimum top-up is {MIN_TOPUP}"
            )));
        }
        Ok(Self {
            id: TopUpId::new(),
            customer,
            amount,
            status: TopUpStatus::Pending,
            created_at: now,
            confirmed_at: None,
        })
    }

    pub fn id(&self) -> TopUpId {
        self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn status(&self) -> TopUpStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Short reference the customer puts in the transfer, e.g. `TX042917`.
    ///
    /// Six digits derived from the request id, so the code is stable for the
    /// lifetime of the request.
    pub fn transaction_code(&self) -> String {
        let bytes = self.id.as_uuid().as_bytes();
        let tail = u32::from_be_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
        format!("TX{:06}", tail % 1_000_000)
    }

    /// The content line for the bank transfer: `NAP <customer> <code>`.
    pub fn transfer_content(&self) -> String {
        format!("NAP {} {}", self.customer, self.transaction_code())
    }

    /// Payload encoded into the payment QR code.
    pub fn qr_payload(&self, account: &BankAccount) -> serde_json::Value {
        json!({
            "bank": account.bank,
            "account_number": account.number,
            "amount": self.amount.amount(),
            "content": self.transfer_content(),
        })
    }

    /// Mark the transfer as received. Confirming twice is a conflict.
    pub fn confirm(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status == TopUpStatus::Confirmed {
            return Err(DomainError::conflict("top-up is already confirmed"));
        }
        self.status = TopUpStatus::Confirmed;
        self.confirmed_at = Some(now);
        Ok(())
    }
}
