/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Byte-level operations on encoded keys, rings and signatures.
//!
//! Every input may be DER or PEM, PEM is recognized by its `-----BEGIN ` boundary.
//! The curve of each operation is read from its inputs,
//! the hash function from the folded ring (or from the caller when folding).

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::internal_common::*;
use crate::config::Config;
use crate::curve::with_curve;
use crate::encoding::{
    FoldedPublicKeys,
    SignatureData,
    armor::{self, FOLDED_PUBLIC_KEYS_LABEL, PRIVATE_KEY_LABEL, PUBLIC_KEY_LABEL, SIGNATURE_LABEL}
};
use crate::keys;
use crate::ring::Ring;
use crate::signature::LsagSignature;

///Entry point of the byte-level operations, holding a validated `Config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    config: Config,

} impl Engine {
    ///Create an engine, or `InvalidConfiguration` if the settings are inconsistent.
    pub fn new(config: Config) -> Result<Self, LsagError> {
        config.validate()?;
        return Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        return &self.config
    }

    ///Generate a new private key on the named curve, or on the configured default curve.
    pub fn generate_private_key(&self, curve_name: Option<&str>, format: OutFormat) -> Result<Vec<u8>, LsagError> {
        let curve = match curve_name {
            Some(name) => CurveType::from_name(name)?,
            None => self.config.default_curve
        };
        return with_curve!(curve, C => {
            let private_key = keys::generate_private_key::<C>();
            armor::encode(PRIVATE_KEY_LABEL, keys::encode_private_key(&private_key)?, &[], format)
        })
    }

    ///Derive the public key of an encoded private key.
    pub fn derive_public_key(&self, private_key: &[u8], format: OutFormat) -> Result<Vec<u8>, LsagError> {
        let der = Zeroizing::new(armor::dearmor(private_key, PRIVATE_KEY_LABEL)?);
        return with_curve!(keys::private_key_curve(&der)?, C => {
            let private_key = keys::decode_private_key::<C>(&der)?;
            let public_key = keys::encode_public_key(&keys::derive_public_key(&private_key))?;
            armor::encode(PUBLIC_KEY_LABEL, public_key, &[], format)
        })
    }

    ///Fold encoded public keys into a ring.
    ///
    ///The hash function and key order fall back to the configured defaults.
    ///All keys must be on the same curve.
    pub fn fold_public_keys(
        &self, public_keys: &[Vec<u8>], hasher_name: Option<&str>, format: OutFormat, order: Option<KeyOrder>
    ) -> Result<Vec<u8>, LsagError> {
        let hasher = match hasher_name {
            Some(name) => HasherType::from_name(name)?,
            None => self.config.default_hasher
        };
        let order = order.unwrap_or(self.config.key_order);
        self.config.check_ring_size(public_keys.len())?;

        let ders = public_keys.iter()
            .map(|public_key| armor::dearmor(public_key, PUBLIC_KEY_LABEL))
            .collect::<Result<Vec<Vec<u8>>, LsagError>>()?;
        let curve = keys::public_key_curve(&ders[0])?;
        hasher.check_combination(curve)?;

        return with_curve!(curve, C => {
            let ring = Ring::<C>::from_keys(ders.iter()
                .map(|der| keys::decode_public_key::<C>(der))
                .collect::<Result<Vec<PublicKey<C>>, LsagError>>()?)
                .ordered(hasher, order)?;
            let folded = ring.fold(hasher)?;
            let headers = match format {
                OutFormat::Pem => armor::folded_public_keys_headers(&folded)?,
                OutFormat::Der => Vec::new()
            };
            armor::encode(FOLDED_PUBLIC_KEYS_LABEL, folded.to_bytes()?, &headers, format)
        })
    }

    ///Restore the encoded public keys of a folded ring, in ring order.
    pub fn unfold_public_keys(&self, ring: &[u8], format: OutFormat) -> Result<Vec<Vec<u8>>, LsagError> {
        let folded = parse_folded_public_keys(ring)?;
        return with_curve!(folded.curve()?, C => {
            let (ring, _) = Ring::<C>::unfold(&folded)?;
            ring.0.iter()
                .map(|public_key| armor::encode(PUBLIC_KEY_LABEL, keys::encode_public_key(public_key)?, &[], format))
                .collect()
        })
    }

    ///Hex digest of a folded ring, `:`-separated if `separator` is set.
    pub fn public_keys_digest(&self, ring: &[u8], separator: bool) -> Result<String, LsagError> {
        let folded = parse_folded_public_keys(ring)?;
        let digest = with_curve!(folded.curve()?, C => {
            let (ring, hasher) = Ring::<C>::unfold(&folded)?;
            ring.hex_digest(hasher)?
        });
        return Ok(match separator {
            true => format_digest(&digest),
            false => digest
        })
    }

    ///`0x04 || x || y` of an encoded public key.
    pub fn public_key_xy_coordinates(&self, public_key: &[u8]) -> Result<Vec<u8>, LsagError> {
        let der = armor::dearmor(public_key, PUBLIC_KEY_LABEL)?;
        return with_curve!(keys::public_key_curve(&der)?, C => {
            keys::xy_coordinates(&keys::decode_public_key::<C>(&der)?)
        })
    }

    ///Sign a message with a private key whose public key is a member of the folded ring.
    pub fn create_signature(
        &self, ring: &[u8], private_key: &[u8], msg: &[u8], case_identifier: &[u8], format: OutFormat
    ) -> Result<Vec<u8>, LsagError> {
        return self.sign(ring, private_key, None, msg, case_identifier, format)
    }

    ///Same as `create_signature`, with the signer's position in the ring given explicitly (starting at 0).
    pub fn create_signature_at(
        &self, ring: &[u8], private_key: &[u8], position: usize, msg: &[u8], case_identifier: &[u8], format: OutFormat
    ) -> Result<Vec<u8>, LsagError> {
        return self.sign(ring, private_key, Some(position), msg, case_identifier, format)
    }

    fn sign(
        &self, ring: &[u8], private_key: &[u8], position: Option<usize>, msg: &[u8], case_identifier: &[u8], format: OutFormat
    ) -> Result<Vec<u8>, LsagError> {
        let folded = parse_folded_public_keys(ring)?;
        let curve = folded.curve()?;
        let private_der = Zeroizing::new(armor::dearmor(private_key, PRIVATE_KEY_LABEL)?);
        if keys::private_key_curve(&private_der)? != curve {
            warn!(ring = %curve, "private key and ring are on different curves");
            return Err(LsagError::UnexpectedCurveType)
        }

        let data = with_curve!(curve, C => {
            let (ring, hasher) = Ring::<C>::unfold(&folded)?;
            self.config.check_ring_size(ring.len())?;
            let private_key = keys::decode_private_key::<C>(&private_der)?;
            let signature = match position {
                Some(position) => LsagSignature::sign_at(&ring, &private_key, position, msg, case_identifier, hasher)?,
                None => LsagSignature::sign(&ring, &private_key, msg, case_identifier, hasher)?
            };
            SignatureData::from_signature(&signature)?
        });
        let headers = match format {
            OutFormat::Pem => armor::signature_headers(&data)?,
            OutFormat::Der => Vec::new()
        };
        return armor::encode(SIGNATURE_LABEL, data.to_bytes()?, &headers, format)
    }

    ///Verify a signature against a folded ring.
    ///
    ///Returns `Ok(false)` if the signature does not verify,
    ///and an error if the inputs are malformed or do not belong together.
    pub fn verify_signature(
        &self, ring: &[u8], signature: &[u8], msg: &[u8], case_identifier: &[u8]
    ) -> Result<bool, LsagError> {
        let data = parse_signature(signature)?;
        let folded = parse_folded_public_keys(ring)?;
        let curve = folded.curve()?;
        if data.curve()? != curve {
            warn!(ring = %curve, "signature and ring are on different curves");
            return Err(LsagError::UnexpectedCurveType)
        }
        if data.hasher_oid != folded.hasher_oid {
            warn!(ring = %curve, "signature and ring use different hash functions");
            return Err(LsagError::UnexpectedHashType)
        }

        let valid = with_curve!(curve, C => {
            let (ring, _) = Ring::<C>::unfold(&folded)?;
            self.config.check_ring_size(ring.len())?;
            data.to_signature::<C>()?.verify(&ring, msg, case_identifier)?
        });
        if !valid {
            debug!(curve = %curve, "ring signature rejected");
        }
        return Ok(valid)
    }

    ///Hex key image of an encoded signature, `:`-separated if `separator` is set.
    pub fn signature_key_image(&self, signature: &[u8], separator: bool) -> Result<String, LsagError> {
        let data = parse_signature(signature)?;
        let key_image = hex::encode(data.key_image.as_bytes());
        return Ok(match separator {
            true => format_digest(&key_image),
            false => key_image
        })
    }

    ///Names of the supported curves.
    pub fn list_curves(&self) -> Vec<&'static str> {
        return CurveType::ALL.iter().map(|curve| curve.name()).collect()
    }

    ///Names of the hash functions usable with the named curve, or with any curve.
    pub fn list_hashers(&self, curve_name: Option<&str>) -> Result<Vec<&'static str>, LsagError> {
        let curves = match curve_name {
            Some(name) => vec![CurveType::from_name(name)?],
            None => CurveType::ALL.to_vec()
        };
        return Ok(HasherType::ALL.iter()
            .filter(|hasher| curves.iter().any(|curve| hasher.is_supported_on(*curve)))
            .map(|hasher| hasher.name())
            .collect())
    }

} impl Default for Engine {
    fn default() -> Self {
        return Self { config: Config::default() }
    }
}

fn parse_folded_public_keys(content: &[u8]) -> Result<FoldedPublicKeys, LsagError> {
    let der = armor::dearmor(content, FOLDED_PUBLIC_KEYS_LABEL)?;
    return FoldedPublicKeys::from_bytes(&der)
}

fn parse_signature(content: &[u8]) -> Result<SignatureData, LsagError> {
    let der = armor::dearmor(content, SIGNATURE_LABEL)?;
    return SignatureData::from_bytes(&der)
}
