use anchor_lang::prelude::*;

#[event]
pub struct SplitComputed {
    pub recipient_count: u32,
    pub total_units: u64,
    pub recipients_funded: u32,
    pub timestamp: i64,
}

#[event]
pub struct RecipientsNormalized {
    pub recipient_count: u32,
    pub share_recipients: u32,
    pub fee_recipients: u32,
    pub timestamp: i64,
}

#[event]
pub struct PaymentSplit {
    pub recipient_count: u32,
    pub total_units: u64,
    pub fee_units: u64,
    pub recipients_funded: u32,
    pub timestamp: i64,
}
