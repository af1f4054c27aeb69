pub mod vault_state;
pub mod claim_state;

pub use vault_state::*;
pub use claim_state::*;
