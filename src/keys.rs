/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Key generation, derivation and DER encoding.
//!
//! Private keys are SEC1 `ECPrivateKey` structures which always carry the named curve,
//! public keys are PKIX `SubjectPublicKeyInfo` structures.
//! The curve of an encoded key can be read with `private_key_curve` / `public_key_curve`
//! before decoding it into a typed key.

use der::Decode;
use elliptic_curve::ALGORITHM_OID;
use rand::thread_rng;
use sec1::EcPrivateKey;
use spki::SubjectPublicKeyInfoRef;

use crate::curve::*;
use crate::errors::LsagError;

///Generate a new private key, uniformly random in `[1, n)`.
pub fn generate_private_key<C: RingCurve>() -> SecretKey<C> {
    return SecretKey::<C>::random(&mut thread_rng())
}

///`x * G`
pub fn derive_public_key<C: RingCurve>(private_key: &SecretKey<C>) -> PublicKey<C> {
    return private_key.public_key()
}

///Fixed-width, big-endian affine coordinates of a public key.
pub fn coordinates<C: RingCurve>(public_key: &PublicKey<C>) -> Result<(Vec<u8>, Vec<u8>), LsagError> {
    return C::point_coordinates(&public_key.to_projective())
}

///Uncompressed SEC1 form of a public key: `0x04 || x || y`.
pub fn xy_coordinates<C: RingCurve>(public_key: &PublicKey<C>) -> Result<Vec<u8>, LsagError> {
    let (x, y) = coordinates(public_key)?;
    return Ok([&[0x04u8][..], &x, &y].concat())
}

///Build a public key from a curve point.
pub fn public_key_from_point<C: RingCurve>(point: &C::ProjectivePoint) -> Result<PublicKey<C>, LsagError> {
    return match PublicKey::<C>::from_affine(point.to_affine()) {
        Ok(public_key) => Ok(public_key),
        Err(_) => Err(LsagError::NilPointCoordinates)
    }
}

///Encode a private key as SEC1 DER.
pub fn encode_private_key<C: RingCurve>(private_key: &SecretKey<C>) -> Result<Vec<u8>, LsagError> {
    return C::encode_private_key(private_key)
}

///Encode a public key as PKIX DER.
pub fn encode_public_key<C: RingCurve>(public_key: &PublicKey<C>) -> Result<Vec<u8>, LsagError> {
    return C::encode_public_key(public_key)
}

///Curve named by a SEC1 DER private key.
pub fn private_key_curve(der: &[u8]) -> Result<CurveType, LsagError> {
    let document = match EcPrivateKey::from_der(der) {
        Ok(document) => document,
        Err(_) => return Err(LsagError::ParseEcPrivateKeyFailure)
    };
    let oid = match document.parameters.and_then(|parameters| parameters.named_curve()) {
        Some(oid) => oid,
        None => return Err(LsagError::ParseEcPrivateKeyFailure)
    };
    return match CurveType::from_oid(&oid) {
        Ok(curve) => Ok(curve),
        Err(_) => Err(LsagError::UnexpectedCurveType)
    }
}

///Decode a SEC1 DER private key on curve `C`.
///
///The embedded public key, when present, must match the private scalar.
pub fn decode_private_key<C: RingCurve>(der: &[u8]) -> Result<SecretKey<C>, LsagError> {
    if private_key_curve(der)? != C::CURVE_TYPE {
        return Err(LsagError::UnexpectedCurveType)
    }
    let document = match EcPrivateKey::from_der(der) {
        Ok(document) => document,
        Err(_) => return Err(LsagError::ParseEcPrivateKeyFailure)
    };
    let private_key = match SecretKey::<C>::from_slice(document.private_key) {
        Ok(private_key) => private_key,
        Err(_) => return Err(LsagError::ParseEcPrivateKeyFailure)
    };
    if let Some(embedded) = document.public_key {
        match C::decode_point(embedded) {
            Ok(point) if point == private_key.public_key().to_projective() => (),
            _ => return Err(LsagError::ParseEcPrivateKeyFailure)
        }
    }
    return Ok(private_key)
}

///Curve named by a PKIX DER public key.
pub fn public_key_curve(der: &[u8]) -> Result<CurveType, LsagError> {
    let info = match SubjectPublicKeyInfoRef::try_from(der) {
        Ok(info) => info,
        Err(_) => return Err(LsagError::ParsePkixPublicKeyFailed)
    };
    if info.algorithm.oid != ALGORITHM_OID {
        return Err(LsagError::ParsePkixPublicKeyFailed)
    }
    let oid = match info.algorithm.parameters_oid() {
        Ok(oid) => oid,
        Err(_) => return Err(LsagError::ParsePkixPublicKeyFailed)
    };
    return match CurveType::from_oid(&oid) {
        Ok(curve) => Ok(curve),
        Err(_) => Err(LsagError::UnexpectedCurveType)
    }
}

///Decode a PKIX DER public key on curve `C`.
pub fn decode_public_key<C: RingCurve>(der: &[u8]) -> Result<PublicKey<C>, LsagError> {
    if public_key_curve(der)? != C::CURVE_TYPE {
        return Err(LsagError::UnexpectedCurveType)
    }
    let info = match SubjectPublicKeyInfoRef::try_from(der) {
        Ok(info) => info,
        Err(_) => return Err(LsagError::ParsePkixPublicKeyFailed)
    };
    let point = match info.subject_public_key.as_bytes() {
        Some(bytes) => match C::decode_point(bytes) {
            Ok(point) => point,
            Err(_) => return Err(LsagError::ParsePkixPublicKeyFailed)
        },
        None => return Err(LsagError::ParsePkixPublicKeyFailed)
    };
    return public_key_from_point::<C>(&point)
}
