use anchor_lang::prelude::*;
use crate::utils::parse_object_id;

/// Fixed protocol identifiers
/// Supplied once when the composer is built and reused verbatim by every call
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProtocolIds {
    /// Published package holding every entry module
    pub package_id: Pubkey,

    /// Admin capability owned by the protocol operator
    pub admin_cap_id: Pubkey,

    /// Shared market object
    pub market_id: Pubkey,

    /// Shared version object checked by user-facing entry points
    pub version_id: Pubkey,

    /// Capability allowed to bump the version object
    pub version_cap_id: Pubkey,

    /// Shared store of obligation lock keys
    pub obligation_access_store_id: Pubkey,
}

impl ProtocolIds {
    pub const LEN: usize = 32 + // package_id
        32 + // admin_cap_id
        32 + // market_id
        32 + // version_id
        32 + // version_cap_id
        32; // obligation_access_store_id

    pub fn new(
        package_id: Pubkey,
        admin_cap_id: Pubkey,
        market_id: Pubkey,
        version_id: Pubkey,
        version_cap_id: Pubkey,
        obligation_access_store_id: Pubkey,
    ) -> Self {
        Self {
            package_id,
            admin_cap_id,
            market_id,
            version_id,
            version_cap_id,
            obligation_access_store_id,
        }
    }

    /// Build from hex ids as published in deployment output
    pub fn parse(
        package_id: &str,
        admin_cap_id: &str,
        market_id: &str,
        version_id: &str,
        version_cap_id: &str,
        obligation_access_store_id: &str,
    ) -> Result<Self> {
        Ok(Self {
            package_id: parse_object_id(package_id)?,
            admin_cap_id: parse_object_id(admin_cap_id)?,
            market_id: parse_object_id(market_id)?,
            version_id: parse_object_id(version_id)?,
            version_cap_id: parse_object_id(version_cap_id)?,
            obligation_access_store_id: parse_object_id(obligation_access_store_id)?,
        })
    }
}
