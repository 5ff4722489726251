#![allow(ambiguous_glob_reexports)]

pub mod compute_split;
pub mod normalize_recipients;
pub mod split_payment;

pub use compute_split::*;
pub use normalize_recipients::*;
pub use split_payment::*;
