/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use der::{
    Sequence,
    asn1::{ObjectIdentifier, OctetString}
};

use crate::internal_common::*;
use crate::signature::LsagSignature;

///Prefix of the `name` field of every structure this crate emits.
pub const ORIGIN: &str = "lsag";
///Current version of the `RingSignature` structure.
pub const SIGNATURE_VERSION: u8 = 1;

pub(crate) fn octet_string(bytes: Vec<u8>) -> Result<OctetString, LsagError> {
    return match OctetString::new(bytes) {
        Ok(octets) => Ok(octets),
        Err(_) => Err(LsagError::Asn1MarshalFailed)
    }
}

///`PointData ::= SEQUENCE { x OCTET STRING, y OCTET STRING }`
#[derive(Debug, Clone, PartialEq, Eq, Sequence)]
pub struct PointData {
    pub x: OctetString,
    pub y: OctetString,

} impl PointData {
    pub fn from_point<C: RingCurve>(point: &C::ProjectivePoint) -> Result<Self, LsagError> {
        let (x, y) = C::point_coordinates(point)?;
        return Ok(Self {
            x: octet_string(x)?,
            y: octet_string(y)?
        })
    }

    pub fn to_point<C: RingCurve>(&self) -> Result<C::ProjectivePoint, LsagError> {
        return C::point_from_coordinates(self.x.as_bytes(), self.y.as_bytes())
    }

    ///`x || y`
    pub fn as_bytes(&self) -> Vec<u8> {
        return [self.x.as_bytes(), self.y.as_bytes()].concat()
    }

} impl ToBytes<'_> for PointData {}

///A ring of public keys, folded into one structure.
///
///```text
///FoldedPublicKeys ::= SEQUENCE {
///    name       UTF8String,
///    curveOid   OBJECT IDENTIFIER,
///    hasherOid  OBJECT IDENTIFIER,
///    digest     OCTET STRING,
///    keys       OCTET STRING -- concatenated compressed points
///}
///```
#[derive(Debug, Clone, PartialEq, Eq, Sequence)]
pub struct FoldedPublicKeys {
    pub name: String,
    pub curve_oid: ObjectIdentifier,
    pub hasher_oid: ObjectIdentifier,
    pub digest: OctetString,
    pub keys: OctetString,

} impl FoldedPublicKeys {
    pub fn curve(&self) -> Result<CurveType, LsagError> {
        return CurveType::from_oid(&self.curve_oid)
    }

    pub fn hasher(&self) -> Result<HasherType, LsagError> {
        return HasherType::from_oid(&self.hasher_oid)
    }

    ///Number of folded keys, `0` when `keys` is not a whole number of points.
    pub fn number_of_keys(&self) -> Result<usize, LsagError> {
        let width = self.curve()?.point_size();
        return Ok(match self.keys.as_bytes().len() % width {
            0 => self.keys.as_bytes().len() / width,
            _ => 0
        })
    }

} impl ToBytes<'_> for FoldedPublicKeys {}

///A serialized ring signature.
///
///```text
///RingSignature ::= SEQUENCE {
///    name        UTF8String,
///    version     INTEGER,
///    curveOid    OBJECT IDENTIFIER,
///    hasherOid   OBJECT IDENTIFIER,
///    keyImage    PointData,
///    checksum    OCTET STRING,           -- c_0
///    signatures  SEQUENCE OF OCTET STRING -- s_0 .. s_{m-1}
///}
///```
#[derive(Debug, Clone, PartialEq, Eq, Sequence)]
pub struct SignatureData {
    pub name: String,
    pub version: u8,
    pub curve_oid: ObjectIdentifier,
    pub hasher_oid: ObjectIdentifier,
    pub key_image: PointData,
    pub checksum: OctetString,
    pub signatures: Vec<OctetString>,

} impl SignatureData {
    pub fn curve(&self) -> Result<CurveType, LsagError> {
        return CurveType::from_oid(&self.curve_oid)
    }

    pub fn hasher(&self) -> Result<HasherType, LsagError> {
        return HasherType::from_oid(&self.hasher_oid)
    }

    ///Serializable form of a signature.
    pub fn from_signature<C: RingCurve>(signature: &LsagSignature<C>) -> Result<Self, LsagError> {
        return Ok(Self {
            name: format!("{} Signature", ORIGIN),
            version: SIGNATURE_VERSION,
            curve_oid: C::CURVE_TYPE.oid(),
            hasher_oid: signature.hasher.oid(),
            key_image: PointData::from_point::<C>(&signature.key_image)?,
            checksum: octet_string(encode_scalar::<C>(&signature.challenge))?,
            signatures: signature.responses.iter()
                .map(|response| octet_string(encode_scalar::<C>(response)))
                .collect::<Result<Vec<OctetString>, LsagError>>()?
        })
    }

    ///Rebuild a signature on curve `C`.
    ///
    ///The curve must match `curve_oid`, the hasher must be known and paired with the curve,
    ///the key image must be on the curve and every scalar must be canonical.
    pub fn to_signature<C: RingCurve>(&self) -> Result<LsagSignature<C>, LsagError> {
        if self.curve()? != C::CURVE_TYPE {
            return Err(LsagError::UnexpectedCurveType)
        }
        let hasher = self.hasher()?;
        hasher.check_combination(C::CURVE_TYPE)?;

        let key_image = match self.key_image.to_point::<C>() {
            Ok(point) => point,
            Err(_) => return Err(LsagError::InvalidKeyImage)
        };
        let challenge = decode_scalar::<C>(self.checksum.as_bytes())?;
        let responses = self.signatures.iter()
            .map(|response| decode_scalar::<C>(response.as_bytes()))
            .collect::<Result<Vec<C::Scalar>, LsagError>>()?;

        return Ok(LsagSignature::from_parts(key_image, challenge, responses, hasher))
    }

} impl ToBytes<'_> for SignatureData {}
