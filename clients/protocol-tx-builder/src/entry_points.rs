//! Argument layout of every entry point the composer targets.
//!
//! Each layout lists its slots in wire order. Fixed slots are filled from the
//! composer's [`ProtocolIds`](crate::state::ProtocolIds), `Clock` from the
//! well-known clock object, and `Value` slots from the caller's arguments in
//! the order they are given.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    AdminCap,
    Market,
    Version,
    VersionCap,
    AccessStore,
    Clock,
    /// Caller-supplied value, result handle or object
    Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryPoint {
    pub module: &'static str,
    pub function: &'static str,
    pub type_arity: usize,
    pub slots: &'static [Slot],
}

impl EntryPoint {
    /// Number of caller-supplied arguments
    pub fn value_count(&self) -> usize {
        self.slots.iter().filter(|slot| **slot == Slot::Value).count()
    }
}

use Slot::*;

pub const CREATE_RISK_MODEL_CHANGE: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: CREATE_RISK_MODEL_CHANGE_FN,
    type_arity: 1,
    // collateral_factor, liquidation_factor, liquidation_penalty,
    // liquidation_discount, scale, max_collateral_amount
    slots: &[AdminCap, Value, Value, Value, Value, Value, Value],
};

pub const ADD_RISK_MODEL: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: ADD_RISK_MODEL_FN,
    type_arity: 1,
    slots: &[Market, AdminCap, Value],
};

pub const UPDATE_RISK_MODEL: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: UPDATE_RISK_MODEL_FN,
    type_arity: 1,
    slots: &[Market, AdminCap, Value],
};

pub const CREATE_INTEREST_MODEL_CHANGE: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: CREATE_INTEREST_MODEL_CHANGE_FN,
    type_arity: 1,
    slots: &[
        AdminCap,
        Value, // base_borrow_rate_per_sec
        Value, // interest_rate_scale
        Value, // borrow_rate_on_mid_kink
        Value, // mid_kink
        Value, // borrow_rate_on_high_kink
        Value, // high_kink
        Value, // max_borrow_rate
        Value, // revenue_factor
        Value, // borrow_weight
        Value, // scale
        Value, // min_borrow_amount
    ],
};

// Accrual state starts at the current time
pub const ADD_INTEREST_MODEL: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: ADD_INTEREST_MODEL_FN,
    type_arity: 1,
    slots: &[Market, AdminCap, Value, Clock],
};

pub const UPDATE_INTEREST_MODEL: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: UPDATE_INTEREST_MODEL_FN,
    type_arity: 1,
    slots: &[Market, AdminCap, Value],
};

pub const ADD_LIMITER: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: ADD_LIMITER_FN,
    type_arity: 1,
    // outflow_limit, outflow_cycle_duration, outflow_segment_duration
    slots: &[AdminCap, Market, Value, Value, Value],
};

pub const ADD_WHITELIST_ADDRESS: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: ADD_WHITELIST_ADDRESS_FN,
    type_arity: 0,
    slots: &[AdminCap, Market, Value],
};

pub const SET_INCENTIVE_REWARD_FACTOR: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: SET_INCENTIVE_REWARD_FACTOR_FN,
    type_arity: 1,
    slots: &[AdminCap, Market, Value, Value],
};

pub const SET_BASE_ASSET_ACTIVE_STATE: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: SET_BASE_ASSET_ACTIVE_STATE_FN,
    type_arity: 1,
    slots: &[AdminCap, Market, Value],
};

pub const SET_COLLATERAL_ACTIVE_STATE: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: SET_COLLATERAL_ACTIVE_STATE_FN,
    type_arity: 1,
    slots: &[AdminCap, Market, Value],
};

// Type argument is the key type, not a coin
pub const ADD_LOCK_KEY: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: ADD_LOCK_KEY_FN,
    type_arity: 1,
    slots: &[AdminCap, AccessStore],
};

pub const UPDATE_BORROW_FEE: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: UPDATE_BORROW_FEE_FN,
    type_arity: 1,
    slots: &[AdminCap, Market, Value, Value],
};

pub const UPDATE_BORROW_FEE_RECIPIENT: EntryPoint = EntryPoint {
    module: APP_MODULE,
    function: UPDATE_BORROW_FEE_RECIPIENT_FN,
    type_arity: 0,
    slots: &[AdminCap, Market, Value],
};

pub const UPGRADE_VERSION: EntryPoint = EntryPoint {
    module: VERSION_MODULE,
    function: UPGRADE_FN,
    type_arity: 0,
    slots: &[Version, VersionCap],
};

pub const MINT_ENTRY: EntryPoint = EntryPoint {
    module: MINT_MODULE,
    function: MINT_ENTRY_FN,
    type_arity: 1,
    slots: &[Version, Market, Value, Clock],
};

pub const OPEN_OBLIGATION: EntryPoint = EntryPoint {
    module: OPEN_OBLIGATION_MODULE,
    function: OPEN_OBLIGATION_FN,
    type_arity: 0,
    slots: &[Version],
};

pub const RETURN_OBLIGATION: EntryPoint = EntryPoint {
    module: OPEN_OBLIGATION_MODULE,
    function: RETURN_OBLIGATION_FN,
    type_arity: 0,
    // obligation, hot potato
    slots: &[Version, Value, Value],
};

pub const DEPOSIT_COLLATERAL: EntryPoint = EntryPoint {
    module: DEPOSIT_COLLATERAL_MODULE,
    function: DEPOSIT_COLLATERAL_FN,
    type_arity: 1,
    // obligation, market, coin
    slots: &[Version, Value, Market, Value],
};

pub const WITHDRAW_COLLATERAL: EntryPoint = EntryPoint {
    module: WITHDRAW_COLLATERAL_MODULE,
    function: WITHDRAW_COLLATERAL_FN,
    type_arity: 1,
    // obligation, obligation key, market, decimals registry, amount, oracle, clock
    slots: &[Version, Value, Value, Market, Value, Value, Value, Clock],
};

pub const BORROW: EntryPoint = EntryPoint {
    module: BORROW_MODULE,
    function: BORROW_FN,
    type_arity: 1,
    slots: &[Version, Value, Value, Market, Value, Value, Value, Clock],
};

pub const ENTRY_POINTS: &[EntryPoint] = &[
    CREATE_RISK_MODEL_CHANGE,
    ADD_RISK_MODEL,
    UPDATE_RISK_MODEL,
    CREATE_INTEREST_MODEL_CHANGE,
    ADD_INTEREST_MODEL,
    UPDATE_INTEREST_MODEL,
    ADD_LIMITER,
    ADD_WHITELIST_ADDRESS,
    SET_INCENTIVE_REWARD_FACTOR,
    SET_BASE_ASSET_ACTIVE_STATE,
    SET_COLLATERAL_ACTIVE_STATE,
    ADD_LOCK_KEY,
    UPDATE_BORROW_FEE,
    UPDATE_BORROW_FEE_RECIPIENT,
    UPGRADE_VERSION,
    MINT_ENTRY,
    OPEN_OBLIGATION,
    RETURN_OBLIGATION,
    DEPOSIT_COLLATERAL,
    WITHDRAW_COLLATERAL,
    BORROW,
];
