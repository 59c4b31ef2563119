/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Rings of public keys, their digests and their folded form.
//!
//! The digest of a single key is `hex(H(0x04 || x || y))`,
//! the digest of a ring is `H(d_0 || "\n" || d_1 || "\n" || ...)` over the ring order.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::internal_common::*;
use crate::encoding::asn1::{FoldedPublicKeys, ORIGIN, octet_string};
use crate::keys::{public_key_from_point, xy_coordinates};

///An ordered list of public keys, one of which belongs to the signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring<C: RingCurve>(
    pub Vec<PublicKey<C>>

); impl<C: RingCurve> Ring<C> {
    ///Create an empty ring.
    pub fn new() -> Self {
        return Self(Vec::new())
    }

    pub fn from_keys(keys: Vec<PublicKey<C>>) -> Self {
        return Self(keys)
    }

    pub fn push(&mut self, public_key: PublicKey<C>) {
        self.0.push(public_key);
    }

    pub fn insert(&mut self, index: usize, public_key: PublicKey<C>) {
        self.0.insert(index, public_key);
    }

    pub fn len(&self) -> usize {
        return self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        return self.0.is_empty()
    }

    ///Index of `public_key` in the ring, if it is a member.
    pub fn position(&self, public_key: &PublicKey<C>) -> Option<usize> {
        return self.0.iter().position(|member| member == public_key)
    }

    ///Member keys as curve points.
    pub fn points(&self) -> Vec<C::ProjectivePoint> {
        return self.0.iter().map(|public_key| public_key.to_projective()).collect()
    }

    ///Reject rings holding the same key twice.
    pub fn check_duplicates(&self) -> Result<(), LsagError> {
        let mut seen: HashSet<Vec<u8>> = HashSet::with_capacity(self.len());
        for public_key in &self.0 {
            if !seen.insert(C::encode_point(&public_key.to_projective())) {
                warn!(curve = %C::CURVE_TYPE, "ring contains a duplicate public key");
                return Err(LsagError::DuplicatePublicKeys)
            }
        }
        return Ok(())
    }

    ///Hex digest of every member, in ring order.
    pub fn key_digests(&self, hasher: HasherType) -> Result<Vec<String>, LsagError> {
        return self.0.iter()
            .map(|public_key| -> Result<String, LsagError> {
                return Ok(hasher.hex_digest(&xy_coordinates(public_key)?))
            })
            .collect()
    }

    ///Digest of the whole ring. Depends on the order of the members.
    pub fn digest(&self, hasher: HasherType) -> Result<Vec<u8>, LsagError> {
        return Ok(hasher.digest(&join_digests(&self.key_digests(hasher)?)))
    }

    ///Same as `digest`, as lowercase hex.
    pub fn hex_digest(&self, hasher: HasherType) -> Result<String, LsagError> {
        return Ok(hex::encode(self.digest(hasher)?))
    }

    ///Return the ring sorted so that the result does not depend on the order of the input.
    ///
    ///Members are sorted by their digests, then sorted again by their digests
    ///salted with the digest of the first sorting.
    pub fn sorted_by_hashes(&self, hasher: HasherType) -> Result<Self, LsagError> {
        let mut members: Vec<(String, PublicKey<C>)> = self.key_digests(hasher)?
            .into_iter()
            .zip(self.0.iter().cloned())
            .collect();
        members.sort_by(|a, b| a.0.cmp(&b.0));

        let sorted_digests: Vec<String> = members.iter().map(|(digest, _)| digest.clone()).collect();
        let digest_sum = hasher.hex_digest(&join_digests(&sorted_digests));

        let mut salted: Vec<(String, PublicKey<C>)> = members.into_iter()
            .map(|(digest, public_key)| (hasher.hex_digest(format!("{}{}", digest_sum, digest).as_bytes()), public_key))
            .collect();
        salted.sort_by(|a, b| a.0.cmp(&b.0));

        return Ok(Self(salted.into_iter().map(|(_, public_key)| public_key).collect()))
    }

    ///Return the ring in the requested order.
    pub fn ordered(&self, hasher: HasherType, order: KeyOrder) -> Result<Self, LsagError> {
        return match order {
            KeyOrder::AsGiven => Ok(self.clone()),
            KeyOrder::Hashes => self.sorted_by_hashes(hasher)
        }
    }

    ///Fold the ring, in its current order, into one ASN.1 structure.
    pub fn fold(&self, hasher: HasherType) -> Result<FoldedPublicKeys, LsagError> {
        self.check_duplicates()?;
        debug!(curve = %C::CURVE_TYPE, hasher = %hasher, keys = self.len(), "folding public keys");

        let keys: Vec<u8> = self.0.iter()
            .flat_map(|public_key| C::encode_point(&public_key.to_projective()))
            .collect();
        return Ok(FoldedPublicKeys {
            name: format!("{} Public keys", ORIGIN),
            curve_oid: C::CURVE_TYPE.oid(),
            hasher_oid: hasher.oid(),
            digest: octet_string(self.digest(hasher)?)?,
            keys: octet_string(keys)?
        })
    }

    ///Restore a ring from its folded form, checking it against the stored digest.
    ///
    ///Returns the ring and the hash function it was folded with.
    pub fn unfold(folded: &FoldedPublicKeys) -> Result<(Self, HasherType), LsagError> {
        if folded.curve()? != C::CURVE_TYPE {
            return Err(LsagError::UnexpectedCurveType)
        }
        let hasher = folded.hasher()?;
        let bytes = folded.keys.as_bytes();
        if bytes.len() % C::POINT_SIZE != 0 {
            warn!(curve = %C::CURVE_TYPE, length = bytes.len(), "folded keys are truncated");
            return Err(LsagError::IncorrectChecksum)
        }

        let mut ring = Self::new();
        for chunk in bytes.chunks(C::POINT_SIZE) {
            ring.push(public_key_from_point::<C>(&C::decode_point(chunk)?)?);
        }
        if ring.digest(hasher)? != folded.digest.as_bytes() {
            warn!(curve = %C::CURVE_TYPE, keys = ring.len(), "folded keys do not match their digest");
            return Err(LsagError::IncorrectChecksum)
        }
        ring.check_duplicates()?;
        return Ok((ring, hasher))
    }

} impl<C: RingCurve> Default for Ring<C> {
    fn default() -> Self {
        return Self::new()
    }
}

//every digest is followed by a line feed
fn join_digests(digests: &[String]) -> Vec<u8> {
    let mut joined = Vec::with_capacity(digests.iter().map(|digest| digest.len() + 1).sum());
    for digest in digests {
        joined.extend_from_slice(digest.as_bytes());
        joined.push(b'\n');
    }
    return joined
}
