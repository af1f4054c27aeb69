pub mod initialize_token_vault;
pub mod initialize_owner_scoped_vault;
pub mod create_claim_account;
pub mod claim_tokens;
pub mod sweep_tokens;
pub mod emit_claim_quote;

pub use initialize_token_vault::*;
pub use initialize_owner_scoped_vault::*;
pub use create_claim_account::*;
pub use claim_tokens::*;
pub use sweep_tokens::*;
pub use emit_claim_quote::*;
