use anchor_lang::prelude::*;
use solana_program::pubkey::PUBKEY_BYTES;
use crate::constants::OBJECT_ID_HEX_LEN;
use crate::errors::ComposerError;

/// Parse a hex object id, with or without the `0x` prefix.
/// Short forms are left-padded, so `0x6` is the clock object.
pub fn parse_object_id(text: &str) -> Result<Pubkey> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    require!(
        !digits.is_empty() && digits.len() <= OBJECT_ID_HEX_LEN,
        ComposerError::InvalidObjectId
    );

    // Pad to full width before decoding so odd-length short forms work
    let padded = format!("{:0>width$}", digits, width = OBJECT_ID_HEX_LEN);
    let mut bytes = [0u8; PUBKEY_BYTES];
    hex::decode_to_slice(&padded, &mut bytes)
        .map_err(|_| error!(ComposerError::InvalidObjectId))?;

    Ok(Pubkey::new_from_array(bytes))
}

/// Canonical `0x`-prefixed, zero-padded lowercase form of an object id
pub fn format_object_id(id: &Pubkey) -> String {
    format!("0x{}", hex::encode(id.to_bytes()))
}
