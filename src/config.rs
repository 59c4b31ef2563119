/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::{Serialize, Deserialize};
use tracing::warn;

use crate::internal_common::*;

///Default anonymity floor.
pub const MIN_RING_SIZE: usize = 2;
///Default maximum number of keys in a ring.
pub const MAX_RING_SIZE: usize = 4096;

///Settings of an `Engine`. Read-only once the engine is built.
///
///Missing fields take their default values when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub min_ring_size: usize,
    pub max_ring_size: usize,
    ///curve of new private keys when none is named
    pub default_curve: CurveType,
    ///hash function of folded rings when none is named
    pub default_hasher: HasherType,
    ///order of folded rings when none is requested
    pub key_order: KeyOrder,

} impl Config {
    ///Check the settings are consistent.
    ///
    ///The anonymity floor is at least 2, the maximum not below the floor,
    ///and the default hash function must be usable with the default curve.
    pub fn validate(&self) -> Result<(), LsagError> {
        if self.min_ring_size < MIN_RING_SIZE || self.max_ring_size < self.min_ring_size {
            warn!(min = self.min_ring_size, max = self.max_ring_size, "invalid ring size bounds");
            return Err(LsagError::InvalidConfiguration)
        }
        if !self.default_hasher.is_supported_on(self.default_curve) {
            warn!(curve = %self.default_curve, hasher = %self.default_hasher, "invalid default curve and hasher");
            return Err(LsagError::InvalidConfiguration)
        }
        return Ok(())
    }

    ///Check a ring size against the configured bounds.
    pub fn check_ring_size(&self, size: usize) -> Result<(), LsagError> {
        if size < self.min_ring_size {
            return Err(LsagError::InsufficientNumberOfPublicKeys)
        }
        if size > self.max_ring_size {
            return Err(LsagError::ExcessiveNumberOfPublicKeys)
        }
        return Ok(())
    }

} impl Default for Config {
    fn default() -> Self {
        return Self {
            min_ring_size: MIN_RING_SIZE,
            max_ring_size: MAX_RING_SIZE,
            default_curve: CurveType::Prime256v1,
            default_hasher: HasherType::Sha3_256,
            key_order: KeyOrder::Hashes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn invalid_bounds() {
        let config = Config { min_ring_size: 1, ..Config::default() };
        assert_eq!(config.validate(), Err(LsagError::InvalidConfiguration));
        let config = Config { min_ring_size: 10, max_ring_size: 5, ..Config::default() };
        assert_eq!(config.validate(), Err(LsagError::InvalidConfiguration));
        let config = Config { default_hasher: HasherType::Sha384, ..Config::default() };
        assert_eq!(config.validate(), Err(LsagError::InvalidConfiguration));
    }

    #[test]
    fn ring_size_bounds() {
        let config = Config { max_ring_size: 3, ..Config::default() };
        assert_eq!(config.check_ring_size(0), Err(LsagError::InsufficientNumberOfPublicKeys));
        assert_eq!(config.check_ring_size(1), Err(LsagError::InsufficientNumberOfPublicKeys));
        assert_eq!(config.check_ring_size(2), Ok(()));
        assert_eq!(config.check_ring_size(3), Ok(()));
        assert_eq!(config.check_ring_size(4), Err(LsagError::ExcessiveNumberOfPublicKeys));
    }

    #[test]
    fn partial_json() {
        let config: Config = serde_json::from_str(r#"{"max_ring_size": 16, "default_curve": "secp256k1"}"#).unwrap();
        assert_eq!(config.max_ring_size, 16);
        assert_eq!(config.default_curve, CurveType::Secp256k1);
        assert_eq!(config.min_ring_size, MIN_RING_SIZE);
        assert_eq!(config.key_order, KeyOrder::Hashes);
    }
}
