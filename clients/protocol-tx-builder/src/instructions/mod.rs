pub mod risk_model;
pub mod interest_model;
pub mod limiter;
pub mod whitelist;
pub mod incentive;
pub mod asset_state;
pub mod lock_key;
pub mod borrow_fee;
pub mod version;
pub mod mint;
pub mod open_obligation;
pub mod deposit_collateral;
pub mod withdraw_collateral;
pub mod borrow;

pub use risk_model::*;
pub use interest_model::*;
pub use limiter::*;
pub use incentive::*;
pub use borrow_fee::*;
pub use open_obligation::*;
pub use withdraw_collateral::*;
