//! Package password deobfuscation.

use log::{debug, trace};

use super::error::{As2Error, Result};
use super::models::PASSWORD_SLOTS;

/// Decrypt the obfuscated package password.
///
/// Each stored password slot is the password character's code multiplied by
/// the per-slot key, so decryption is an integer division. Slots holding 0
/// are empty and contribute nothing; the result keeps slot order. A zero key
/// under a non-zero slot makes the division undefined and fails with
/// [`As2Error::InvalidDivision`].
pub fn decrypt(
    password: &[i16; PASSWORD_SLOTS],
    password_key: &[i16; PASSWORD_SLOTS],
) -> Result<String> {
    let mut decrypted = String::new();

    for (slot, (&encrypted, &key)) in password.iter().zip(password_key.iter()).enumerate() {
        if encrypted == 0 {
            continue;
        }
        if key == 0 {
            return Err(As2Error::InvalidDivision { slot });
        }

        let code = (encrypted as i32 / key as i32) as u16;
        trace!("Password slot {}: code unit {:#06x}", slot, code);
        decrypted.push(char::from_u32(code as u32).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    debug!("Decrypted password has {} characters", decrypted.len());
    Ok(decrypted)
}
