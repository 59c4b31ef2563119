/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use der::{
    Decode,
    Encode,
};
use der::{Reader, SliceReader};

use crate::errors::LsagError;

///Implements functions to convert to (`to_bytes`) and from (`from_bytes`) DER bytes
///for the ASN.1 structures in this crate.
pub trait ToBytes<'a>: Sized + Encode + Decode<'a> {
    fn to_bytes(&self) -> Result<Vec<u8>, LsagError> {
        return match self.to_der() {
            Ok(bytes) => Ok(bytes),
            Err(_) => Err(LsagError::Asn1MarshalFailed)
        }
    }

    ///Decode exactly one structure; trailing bytes are rejected.
    fn from_bytes(bytes: &'a [u8]) -> Result<Self, LsagError> {
        let mut reader = match SliceReader::new(bytes) {
            Ok(reader) => reader,
            Err(_) => return Err(LsagError::Asn1UnmarshalFailed)
        };
        let decoded = match Self::decode(&mut reader) {
            Ok(decoded) => decoded,
            Err(_) => return Err(LsagError::Asn1UnmarshalFailed)
        };
        if !reader.is_finished() {
            return Err(LsagError::UnexpectedRestOfSignature)
        }
        return Ok(decoded)
    }
}
