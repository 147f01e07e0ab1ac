use anchor_lang::prelude::*;

// Well-known shared objects
/// System clock object (`0x6`), injected into every time-dependent call
pub const CLOCK_OBJECT_ID: Pubkey = Pubkey::new_from_array([
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 6,
]);

// Entry modules
pub const APP_MODULE: &str = "app";
pub const MINT_MODULE: &str = "mint";
pub const OPEN_OBLIGATION_MODULE: &str = "open_obligation";
pub const DEPOSIT_COLLATERAL_MODULE: &str = "deposit_collateral";
pub const WITHDRAW_COLLATERAL_MODULE: &str = "withdraw_collateral";
pub const BORROW_MODULE: &str = "borrow";
pub const VERSION_MODULE: &str = "version";

// Admin entry functions (app module)
pub const CREATE_RISK_MODEL_CHANGE_FN: &str = "create_risk_model_change";
pub const ADD_RISK_MODEL_FN: &str = "add_risk_model";
pub const UPDATE_RISK_MODEL_FN: &str = "update_risk_model";
pub const CREATE_INTEREST_MODEL_CHANGE_FN: &str = "create_interest_model_change";
pub const ADD_INTEREST_MODEL_FN: &str = "add_interest_model";
pub const UPDATE_INTEREST_MODEL_FN: &str = "update_interest_model";
pub const ADD_LIMITER_FN: &str = "add_limiter";
pub const ADD_WHITELIST_ADDRESS_FN: &str = "add_whitelist_address";
pub const SET_INCENTIVE_REWARD_FACTOR_FN: &str = "set_incentive_reward_factor";
pub const SET_BASE_ASSET_ACTIVE_STATE_FN: &str = "set_base_asset_active_state";
pub const SET_COLLATERAL_ACTIVE_STATE_FN: &str = "set_collateral_active_state";
pub const ADD_LOCK_KEY_FN: &str = "add_lock_key";
pub const UPDATE_BORROW_FEE_FN: &str = "update_borrow_fee";
pub const UPDATE_BORROW_FEE_RECIPIENT_FN: &str = "update_borrow_fee_recipient";

// User entry functions
pub const MINT_ENTRY_FN: &str = "mint_entry";
pub const OPEN_OBLIGATION_FN: &str = "open_obligation";
pub const RETURN_OBLIGATION_FN: &str = "return_obligation";
pub const DEPOSIT_COLLATERAL_FN: &str = "deposit_collateral";
pub const WITHDRAW_COLLATERAL_FN: &str = "withdraw_collateral";
pub const BORROW_FN: &str = "borrow";
pub const UPGRADE_FN: &str = "upgrade";

// Block limits (command and input indices are u16 on the wire)
pub const MAX_COMMANDS: usize = u16::MAX as usize;
pub const MAX_INPUTS: usize = u16::MAX as usize;

// Object id text form
pub const OBJECT_ID_HEX_LEN: usize = 64;
