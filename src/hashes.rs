/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt::Display,
    str::FromStr
};

use der::asn1::ObjectIdentifier;
use elliptic_curve::ops::Reduce;
use serde::{Serialize, Deserialize};
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Digest};

use crate::curve::*;
use crate::errors::LsagError;

///Maximum number of candidates tried by `domain_h_point` before giving up.
pub const HASH_TO_POINT_ATTEMPTS: u8 = 42;

///Tag of a supported hash function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum HasherType {
    ///SHA3-224, `2.16.840.1.101.3.4.2.7`
    #[serde(rename = "sha3-224")]
    Sha3_224,
    ///SHA3-256, `2.16.840.1.101.3.4.2.8`
    #[default]
    #[serde(rename = "sha3-256")]
    Sha3_256,
    ///SHA3-384, `2.16.840.1.101.3.4.2.9`
    #[serde(rename = "sha3-384")]
    Sha3_384,
    ///SHA3-512, `2.16.840.1.101.3.4.2.10`
    #[serde(rename = "sha3-512")]
    Sha3_512,
    ///SHA-256, `2.16.840.1.101.3.4.2.1`
    #[serde(rename = "sha256")]
    Sha256,
    ///SHA-384, `2.16.840.1.101.3.4.2.2`
    #[serde(rename = "sha384")]
    Sha384,
    ///SHA-512, `2.16.840.1.101.3.4.2.3`
    #[serde(rename = "sha512")]
    Sha512,

} impl HasherType {
    ///Every recognized hash function, supported on some curve or not.
    pub const ALL: [HasherType; 7] = [
        Self::Sha3_224, Self::Sha3_256, Self::Sha3_384, Self::Sha3_512,
        Self::Sha256, Self::Sha384, Self::Sha512
    ];

    ///Canonical name of the hash function.
    pub fn name(&self) -> &'static str {
        return match self {
            Self::Sha3_224 => "sha3-224",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_512 => "sha3-512",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    ///Look a hash function up by name.
    pub fn from_name(name: &str) -> Result<Self, LsagError> {
        return Self::ALL.into_iter()
            .find(|hasher| hasher.name() == name)
            .ok_or(LsagError::UnexpectedHashType)
    }

    ///ASN.1 object identifier of the hash function (NIST hash algorithms arc).
    pub fn oid(&self) -> ObjectIdentifier {
        return match self {
            Self::Sha3_224 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.7"),
            Self::Sha3_256 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.8"),
            Self::Sha3_384 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.9"),
            Self::Sha3_512 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.10"),
            Self::Sha256 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.1"),
            Self::Sha384 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.2"),
            Self::Sha512 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.3"),
        }
    }

    ///Look a hash function up by its object identifier.
    pub fn from_oid(oid: &ObjectIdentifier) -> Result<Self, LsagError> {
        return Self::ALL.into_iter()
            .find(|hasher| hasher.oid() == *oid)
            .ok_or(LsagError::OidHasherNotFound)
    }

    ///Digest width in bytes.
    pub fn output_size(&self) -> usize {
        return match self {
            Self::Sha3_224 => 28,
            Self::Sha3_256 | Self::Sha256 => 32,
            Self::Sha3_384 | Self::Sha384 => 48,
            Self::Sha3_512 | Self::Sha512 => 64,
        }
    }

    ///Hash bytes to bytes.
    pub fn digest(&self, msg: &[u8]) -> Vec<u8> {
        return match self {
            Self::Sha3_224 => Sha3_224::digest(msg).to_vec(),
            Self::Sha3_256 => Sha3_256::digest(msg).to_vec(),
            Self::Sha3_384 => Sha3_384::digest(msg).to_vec(),
            Self::Sha3_512 => Sha3_512::digest(msg).to_vec(),
            Self::Sha256 => Sha256::digest(msg).to_vec(),
            Self::Sha384 => Sha384::digest(msg).to_vec(),
            Self::Sha512 => Sha512::digest(msg).to_vec(),
        }
    }

    ///Lowercase hex of the digest of `msg`.
    pub fn hex_digest(&self, msg: &[u8]) -> String {
        return hex::encode(self.digest(msg))
    }

    ///A hash function may be paired with a curve when its digest fits into a scalar.
    pub fn is_supported_on(&self, curve: CurveType) -> bool {
        return self.output_size() <= curve.scalar_size()
    }

    ///Same as `is_supported_on`, as a `Result`.
    pub fn check_combination(&self, curve: CurveType) -> Result<(), LsagError> {
        if !self.is_supported_on(curve) {
            return Err(LsagError::UnsupportedCurveHashCombination)
        }
        return Ok(())
    }

    ///The hash function behind `H_p` for key images on `curve`.
    ///
    ///It depends only on the curve, so a key image is the same
    ///whichever hash function a signature is created with.
    pub fn key_image_hasher(curve: CurveType) -> Self {
        return match curve {
            CurveType::Secp384r1 => Self::Sha3_384,
            _ => Self::Sha3_256,
        }
    }

} impl Display for HasherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }

} impl FromStr for HasherType {
    type Err = LsagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        return Self::from_name(s)
    }
}

//left-pad (or truncate) a digest to the width of a field element
fn fit_to_field<C: RingCurve>(digest: &[u8]) -> FieldBytes<C> {
    let mut bytes = FieldBytes::<C>::default();
    let size = bytes.len();
    if digest.len() >= size {
        bytes.copy_from_slice(&digest[..size]);
    } else {
        bytes[size - digest.len()..].copy_from_slice(digest);
    }
    return bytes
}

///Hash bytes to bytes.
pub fn h_bytes(hasher: HasherType, msg: &[u8]) -> Vec<u8> {
    return hasher.digest(msg)
}

///Hash bytes to a scalar: the digest is read as a big-endian integer and reduced modulo the group order.
pub fn h_scalar<C: RingCurve>(hasher: HasherType, msg: &[u8]) -> C::Scalar {
    let digest = hasher.digest(msg);
    return <C::Scalar as Reduce<C::Uint>>::reduce_bytes(&fit_to_field::<C>(&digest))
}

///Hash bytes to elliptic curve point, domain separated.
///
///Try-and-increment: `digest(msg || domain || counter)` is taken as the x coordinate
///of a point with even y, for `counter` in `0..HASH_TO_POINT_ATTEMPTS`.
///The first candidate on the curve wins.
///Every supported curve has prime order, so the result is always in the right group.
pub fn domain_h_point<C: RingCurve>(hasher: HasherType, msg: &[u8], domain: &[u8]) -> Result<C::ProjectivePoint, LsagError> {
    let mut candidate = vec![0u8; C::POINT_SIZE];
    candidate[0] = 0x02;
    for counter in 0..HASH_TO_POINT_ATTEMPTS {
        let digest = hasher.digest(&[msg, domain, &[counter]].concat());
        candidate[1..].copy_from_slice(&fit_to_field::<C>(&digest));
        if let Ok(point) = C::decode_point(&candidate) {
            return Ok(point)
        }
    }
    return Err(LsagError::PointWasNotFound)
}

///Insert `:` between every pair of hex digits.
pub fn format_digest(text: &str) -> String {
    let mut formatted = String::with_capacity(text.len() * 3 / 2);
    for (i, character) in text.chars().enumerate() {
        if i > 0 && i % 2 == 0 {
            formatted.push(':');
        }
        formatted.push(character);
    }
    return formatted
}

pub mod domains {
    //! Pre-defined hash domains

    pub const SIGNATURE_KEY_IMAGE: &[u8] =  "lsag_key_img".as_bytes();
}
