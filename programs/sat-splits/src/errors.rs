use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Fee percentages sum to more than 100%")]
    TotalFeeExceeds100,

    #[msg("Fee percentages sum to 100% but share recipients exist")]
    FeeIsFullButSharesExist,
}
