pub mod verifications;
pub mod wallets;
