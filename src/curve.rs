/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants
//!
//! Only a small, closed set of prime-order short-Weierstrass curves is supported.
//! Each of them is tagged by a `CurveType` and implements `RingCurve`,
//! which is everything the rest of the crate needs from a curve.

use std::{
    fmt::Display,
    str::FromStr
};

use der::{
    Encode,
    asn1::ObjectIdentifier,
    oid::AssociatedOid
};
pub use elliptic_curve::{
    AffinePoint,
    CurveArithmetic,
    FieldBytes,
    PublicKey,
    SecretKey,
    ff::{Field, PrimeField},
    group::{Curve as GroupCurve, Group},
    sec1::{EncodedPoint, FromEncodedPoint, ToEncodedPoint},
};
pub use k256::Secp256k1;
pub use p256::NistP256;
pub use p384::NistP384;
use rand::thread_rng;
use sec1::{EcParameters, EcPrivateKey};
use serde::{Serialize, Deserialize};
use spki::EncodePublicKey;
use zeroize::Zeroizing;

use crate::errors::LsagError;

///Run `$body` with `$C` bound to the concrete curve type selected by a `CurveType`.
macro_rules! with_curve {
    ($curve:expr, $C:ident => $body:expr) => {
        match $curve {
            $crate::curve::CurveType::Secp256k1 => {
                type $C = ::k256::Secp256k1;
                $body
            },
            $crate::curve::CurveType::Prime256v1 => {
                type $C = ::p256::NistP256;
                $body
            },
            $crate::curve::CurveType::Secp384r1 => {
                type $C = ::p384::NistP384;
                $body
            },
        }
    };
}
pub(crate) use with_curve;

///Tag of a supported curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CurveType {
    ///SECG curve over a 256 bit prime field, `1.3.132.0.10`
    #[serde(rename = "secp256k1")]
    Secp256k1,
    ///X9.62/SECG curve over a 256 bit prime field (NIST P-256), `1.2.840.10045.3.1.7`
    #[serde(rename = "prime256v1")]
    Prime256v1,
    ///NIST/SECG curve over a 384 bit prime field, `1.3.132.0.34`
    #[serde(rename = "secp384r1")]
    Secp384r1,

} impl CurveType {
    ///Every supported curve.
    pub const ALL: [CurveType; 3] = [Self::Secp256k1, Self::Prime256v1, Self::Secp384r1];

    ///Canonical (OpenSSL) name of the curve.
    pub fn name(&self) -> &'static str {
        return match self {
            Self::Secp256k1 => "secp256k1",
            Self::Prime256v1 => "prime256v1",
            Self::Secp384r1 => "secp384r1",
        }
    }

    ///Look a curve up by name. `secp256r1`, `P-256` and `P-384` are accepted as aliases.
    pub fn from_name(name: &str) -> Result<Self, LsagError> {
        return match name {
            "secp256k1" => Ok(Self::Secp256k1),
            "prime256v1" | "secp256r1" | "P-256" => Ok(Self::Prime256v1),
            "secp384r1" | "P-384" => Ok(Self::Secp384r1),
            _ => Err(LsagError::UnexpectedCurveType)
        }
    }

    ///ASN.1 object identifier of the curve.
    pub fn oid(&self) -> ObjectIdentifier {
        return with_curve!(*self, C => C::OID)
    }

    ///Look a curve up by its object identifier.
    pub fn from_oid(oid: &ObjectIdentifier) -> Result<Self, LsagError> {
        return Self::ALL.into_iter()
            .find(|curve| curve.oid() == *oid)
            .ok_or(LsagError::OidCurveNotFound)
    }

    ///Width in bytes of scalars (and of field elements) on this curve.
    pub fn scalar_size(&self) -> usize {
        return with_curve!(*self, C => C::SCALAR_SIZE)
    }

    ///Width in bytes of a compressed point on this curve.
    pub fn point_size(&self) -> usize {
        return self.scalar_size() + 1
    }

} impl Display for CurveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }

} impl FromStr for CurveType {
    type Err = LsagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        return Self::from_name(s)
    }
}

///A prime-order short-Weierstrass curve usable for ring signatures.
///
///Scalar multiplication is provided by the underlying RustCrypto arithmetic,
///which is constant time with respect to the scalar.
pub trait RingCurve: CurveArithmetic + AssociatedOid {
    ///Tag of this curve.
    const CURVE_TYPE: CurveType;
    ///Width in bytes of a scalar, and of a field element.
    const SCALAR_SIZE: usize;
    ///Width in bytes of a compressed point.
    const POINT_SIZE: usize = Self::SCALAR_SIZE + 1;

    ///Encode a point to its compressed SEC1 form.
    ///The identity encodes to a single zero byte.
    fn encode_point(point: &Self::ProjectivePoint) -> Vec<u8>;

    ///Decode a SEC1 encoded point (compressed or not).
    ///
    ///Returns `NilPointCoordinates` if the bytes hold no point (bad width, bad tag, identity),
    ///or `InvalidPointCoordinates` if they do not satisfy the curve equation.
    fn decode_point(bytes: &[u8]) -> Result<Self::ProjectivePoint, LsagError>;

    ///Build a point from fixed-width, big-endian affine coordinates.
    fn point_from_coordinates(x: &[u8], y: &[u8]) -> Result<Self::ProjectivePoint, LsagError>;

    ///Fixed-width, big-endian affine coordinates of a point.
    fn point_coordinates(point: &Self::ProjectivePoint) -> Result<(Vec<u8>, Vec<u8>), LsagError>;

    ///Encode a private key as a SEC1 `ECPrivateKey` (DER) including the named curve and the public key.
    fn encode_private_key(private_key: &SecretKey<Self>) -> Result<Vec<u8>, LsagError>;

    ///Encode a public key as a PKIX `SubjectPublicKeyInfo` (DER).
    fn encode_public_key(public_key: &PublicKey<Self>) -> Result<Vec<u8>, LsagError>;
}

macro_rules! impl_ring_curve {
    ($curve:ty, $curve_type:expr, $size:expr) => {
        impl RingCurve for $curve {
            const CURVE_TYPE: CurveType = $curve_type;
            const SCALAR_SIZE: usize = $size;

            fn encode_point(point: &Self::ProjectivePoint) -> Vec<u8> {
                return point.to_affine().to_encoded_point(true).as_bytes().to_vec()
            }

            fn decode_point(bytes: &[u8]) -> Result<Self::ProjectivePoint, LsagError> {
                let encoded = match EncodedPoint::<Self>::from_bytes(bytes) {
                    Ok(encoded) => encoded,
                    Err(_) => return Err(LsagError::NilPointCoordinates)
                };
                if encoded.is_identity() {
                    return Err(LsagError::NilPointCoordinates)
                }
                let point: Option<AffinePoint<Self>> = AffinePoint::<Self>::from_encoded_point(&encoded).into();
                return match point {
                    Some(point) => Ok(point.into()),
                    None => Err(LsagError::InvalidPointCoordinates)
                }
            }

            fn point_from_coordinates(x: &[u8], y: &[u8]) -> Result<Self::ProjectivePoint, LsagError> {
                if x.len() != $size || y.len() != $size {
                    return Err(LsagError::NilPointCoordinates)
                }
                let mut x_bytes = FieldBytes::<Self>::default();
                let mut y_bytes = FieldBytes::<Self>::default();
                x_bytes.copy_from_slice(x);
                y_bytes.copy_from_slice(y);
                let encoded = EncodedPoint::<Self>::from_affine_coordinates(&x_bytes, &y_bytes, false);
                let point: Option<AffinePoint<Self>> = AffinePoint::<Self>::from_encoded_point(&encoded).into();
                return match point {
                    Some(point) => Ok(point.into()),
                    None => Err(LsagError::InvalidPointCoordinates)
                }
            }

            fn point_coordinates(point: &Self::ProjectivePoint) -> Result<(Vec<u8>, Vec<u8>), LsagError> {
                let encoded = point.to_affine().to_encoded_point(false);
                return match (encoded.x(), encoded.y()) {
                    (Some(x), Some(y)) => Ok((x.to_vec(), y.to_vec())),
                    _ => Err(LsagError::NilPointCoordinates)
                }
            }

            fn encode_private_key(private_key: &SecretKey<Self>) -> Result<Vec<u8>, LsagError> {
                let private_bytes = Zeroizing::new(private_key.to_bytes());
                let public_point = private_key.public_key().to_encoded_point(false);
                let document = EcPrivateKey {
                    private_key: &private_bytes[..],
                    parameters: Some(EcParameters::NamedCurve(Self::OID)),
                    public_key: Some(public_point.as_bytes()),
                };
                return match document.to_der() {
                    Ok(der) => Ok(der),
                    Err(_) => Err(LsagError::MarshalKeyFailed)
                }
            }

            fn encode_public_key(public_key: &PublicKey<Self>) -> Result<Vec<u8>, LsagError> {
                return match public_key.to_public_key_der() {
                    Ok(document) => Ok(document.as_bytes().to_vec()),
                    Err(_) => Err(LsagError::MarshalPkixPublicKeyFailed)
                }
            }
        }
    };
}

impl_ring_curve!(Secp256k1, CurveType::Secp256k1, 32);
impl_ring_curve!(NistP256, CurveType::Prime256v1, 32);
impl_ring_curve!(NistP384, CurveType::Secp384r1, 48);

///The basepoint of the curve.
pub fn generator<C: RingCurve>() -> C::ProjectivePoint {
    return C::ProjectivePoint::generator()
}

///return a random scalar
pub fn random_scalar<C: RingCurve>() -> C::Scalar {
    return C::Scalar::random(&mut thread_rng())
}

///return a random point on the curve
pub fn random_point<C: RingCurve>() -> C::ProjectivePoint {
    return generator::<C>() * random_scalar::<C>()
}

///Fixed-width, big-endian encoding of a scalar.
pub fn encode_scalar<C: RingCurve>(scalar: &C::Scalar) -> Vec<u8> {
    return scalar.to_repr().to_vec()
}

///Decode a fixed-width, big-endian scalar. Values outside `[0, n)` are rejected.
pub fn decode_scalar<C: RingCurve>(bytes: &[u8]) -> Result<C::Scalar, LsagError> {
    let mut repr = FieldBytes::<C>::default();
    if bytes.len() != repr.len() {
        return Err(LsagError::InvalidScalar)
    }
    repr.copy_from_slice(bytes);
    let scalar: Option<C::Scalar> = C::Scalar::from_repr(repr).into();
    return scalar.ok_or(LsagError::InvalidScalar)
}
