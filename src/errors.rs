/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Errors returned by every fallible operation in this crate.
//!
//! A signature which simply does not verify is **not** an error:
//! verification returns `Ok(false)` in that case.
//! Errors are reserved for structurally invalid input.

use thiserror::Error;

///All failure modes of key management, ring folding, signing, verification and encoding.
///
///Each variant has a stable numeric status code, see `LsagError::code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LsagError {
    ///The private key does not match the public key at the given ring position.
    #[error("Private key not fit public.")]
    PrivateKeyNotFitPublic,
    ///The ring has fewer members than the configured anonymity floor.
    #[error("Insufficient number of public keys.")]
    InsufficientNumberOfPublicKeys,
    ///The given signer position is not inside the ring.
    #[error("Private key position out of range.")]
    PrivateKeyPositionOutOfRange,
    ///The public key of the signer is not a member of the ring.
    #[error("Private key not found among public keys.")]
    PrivateKeyNotFoundAmongPublicKeys,
    ///The curve is unknown, or inputs use different curves.
    #[error("Unexpected curve type.")]
    UnexpectedCurveType,
    ///The hash function is unknown, or inputs use different hash functions.
    #[error("Unexpected hash type.")]
    UnexpectedHashType,
    ///The number of response scalars does not match the ring size.
    #[error("Incorrect number of signatures.")]
    IncorrectNumberOfSignatures,
    ///The key image is not a valid non-identity curve point.
    #[error("Invalid key image.")]
    InvalidKeyImage,
    ///A folded ring is truncated or its digest does not match its keys.
    #[error("Incorrect checksum.")]
    IncorrectChecksum,
    ///No hash function is registered under the object identifier.
    #[error("OID hasher not found.")]
    OidHasherNotFound,
    ///No curve is registered under the object identifier.
    #[error("OID curve not found.")]
    OidCurveNotFound,
    ///The hash function cannot be paired with the curve.
    #[error("Unsupported curve hash combination.")]
    UnsupportedCurveHashCombination,
    ///Hashing to the curve did not hit a point within the attempt limit.
    #[error("A point on the curve was not found.")]
    PointWasNotFound,
    ///The PEM framing is broken or carries an unexpected label.
    #[error("Decode PEM failure.")]
    DecodePemFailure,
    ///Trailing bytes follow a fully parsed structure.
    #[error("Unexpected rest at the end of signature.")]
    UnexpectedRestOfSignature,
    ///ASN.1 encoding failed.
    #[error("ASN1 marshal failed.")]
    Asn1MarshalFailed,
    ///PEM encoding failed.
    #[error("PEM encode failed.")]
    PemEncodeFailed,
    ///The encoded coordinates do not satisfy the curve equation.
    #[error("Invalid point coordinates.")]
    InvalidPointCoordinates,
    ///The encoding holds no point where one is required.
    #[error("Nil point coordinates.")]
    NilPointCoordinates,
    ///The private key encoding could not be parsed.
    #[error("Parse EC private key failed.")]
    ParseEcPrivateKeyFailure,
    ///ASN.1 decoding failed.
    #[error("ASN1 unmarshal failed.")]
    Asn1UnmarshalFailed,
    ///The public key could not be encoded as a PKIX structure.
    #[error("Marshal PKIX public key failed.")]
    MarshalPkixPublicKeyFailed,
    ///The PKIX public key could not be parsed.
    #[error("Parse PKIX public key failed.")]
    ParsePkixPublicKeyFailed,
    ///The ring has more members than the configured maximum.
    #[error("Excessive number of public keys.")]
    ExcessiveNumberOfPublicKeys,
    ///The same public key appears more than once in the ring.
    #[error("Duplicate public keys.")]
    DuplicatePublicKeys,
    ///A scalar is out of range or has the wrong width.
    #[error("Invalid scalar.")]
    InvalidScalar,
    ///The private key could not be encoded.
    #[error("Marshal key failed.")]
    MarshalKeyFailed,
    ///The configuration is inconsistent.
    #[error("Invalid configuration.")]
    InvalidConfiguration,

} impl LsagError {
    ///Stable numeric status code of this error.
    ///
    ///Codes 1 to 23 keep the numbering used by existing language bindings,
    ///`0` is reserved for success.
    pub fn code(&self) -> u8 {
        return match self {
            Self::PrivateKeyNotFitPublic => 1,
            Self::InsufficientNumberOfPublicKeys => 2,
            Self::PrivateKeyPositionOutOfRange => 3,
            Self::PrivateKeyNotFoundAmongPublicKeys => 4,
            Self::UnexpectedCurveType => 5,
            Self::UnexpectedHashType => 6,
            Self::IncorrectNumberOfSignatures => 7,
            Self::InvalidKeyImage => 8,
            Self::IncorrectChecksum => 9,
            Self::OidHasherNotFound => 10,
            Self::OidCurveNotFound => 11,
            Self::UnsupportedCurveHashCombination => 12,
            Self::PointWasNotFound => 13,
            Self::DecodePemFailure => 14,
            Self::UnexpectedRestOfSignature => 15,
            Self::Asn1MarshalFailed => 16,
            Self::PemEncodeFailed => 17,
            Self::InvalidPointCoordinates => 18,
            Self::NilPointCoordinates => 19,
            Self::ParseEcPrivateKeyFailure => 20,
            Self::Asn1UnmarshalFailed => 21,
            Self::MarshalPkixPublicKeyFailed => 22,
            Self::ParsePkixPublicKeyFailed => 23,
            Self::ExcessiveNumberOfPublicKeys => 24,
            Self::DuplicatePublicKeys => 25,
            Self::InvalidScalar => 26,
            Self::MarshalKeyFailed => 27,
            Self::InvalidConfiguration => 28,
        }
    }
}
