/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use elliptic_curve::subtle::ConstantTimeEq;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::internal_common::*;
use crate::ring::Ring;
use super::signature_utils::*;

///A linkable ring signature.
///
///LSAG stands for "Linkable Spontaneous Anonymous Group (signature)".
///
///The signature proves that one member of a ring authorized a message
///without revealing which one. Two signatures made with the same private key
///share the same `key_image`, whatever the ring, message or case identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LsagSignature<C: RingCurve> {
    pub key_image: C::ProjectivePoint,
    ///`c_0`, the challenge at the first ring position
    pub challenge: C::Scalar,
    ///`s_0 .. s_{m-1}`, one per ring member
    pub responses: Vec<C::Scalar>,
    ///hash function of every challenge
    pub hasher: HasherType,

} impl<C: RingCurve> LsagSignature<C> {
    ///Create a signature given a ring, a private key whose public key is a member of the ring,
    ///a message and a case identifier (may be empty).
    ///
    ///Return a signature if signing was successful, or `LsagError` if an error occurred.
    pub fn sign(
        ring: &Ring<C>, private_key: &SecretKey<C>, msg: &[u8], case_identifier: &[u8], hasher: HasherType
    ) -> Result<Self, LsagError> {
        hasher.check_combination(C::CURVE_TYPE)?;
        if ring.len() < 2 {
            return Err(LsagError::InsufficientNumberOfPublicKeys)
        }
        let position = match ring.position(&private_key.public_key()) {
            Some(position) => position,
            None => {
                warn!(curve = %C::CURVE_TYPE, keys = ring.len(), "signer is not a member of the ring");
                return Err(LsagError::PrivateKeyNotFoundAmongPublicKeys)
            }
        };
        return Self::sign_at(ring, private_key, position, msg, case_identifier, hasher)
    }

    ///Same as `sign`, with the signer's position in the ring given explicitly (starting at 0).
    pub fn sign_at(
        ring: &Ring<C>, private_key: &SecretKey<C>, position: usize, msg: &[u8], case_identifier: &[u8], hasher: HasherType
    ) -> Result<Self, LsagError> {
        hasher.check_combination(C::CURVE_TYPE)?;
        let n = ring.len();
        if n < 2 {
            return Err(LsagError::InsufficientNumberOfPublicKeys)
        }
        if position >= n {
            return Err(LsagError::PrivateKeyPositionOutOfRange)
        }
        if ring.0[position] != private_key.public_key() {
            return Err(LsagError::PrivateKeyNotFitPublic)
        }
        ring.check_duplicates()?;
        debug!(curve = %C::CURVE_TYPE, hasher = %hasher, keys = n, "creating ring signature");

        let ring_points = ring.points();
        let key_image_points = get_key_image_points::<C>(&ring_points)?;
        let x = Zeroizing::new(*private_key.to_nonzero_scalar());
        let key_image = key_image_points[position] * *x;

        let prefix = create_prefix(&ring.digest(hasher)?, hasher, msg, case_identifier);

        let mut c: Vec<C::Scalar> = vec![C::Scalar::ZERO; n];
        let mut s: Vec<C::Scalar> = vec![C::Scalar::ZERO; n];

        //start right after the signer with a random nonce
        let u = Zeroizing::new(random_scalar::<C>());
        c[(position + 1) % n] = challenge::<C>(
            hasher, &prefix, &(generator::<C>() * *u), &(key_image_points[position] * *u)
        );

        //travel around the ring back to the signer
        for k in 1..n {
            let i = (position + k) % n;
            s[i] = random_scalar::<C>();
            let left = (generator::<C>() * s[i]) + (ring_points[i] * c[i]);
            let right = (key_image_points[i] * s[i]) + (key_image * c[i]);
            c[(i + 1) % n] = challenge::<C>(hasher, &prefix, &left, &right);
        }

        //close the ring
        s[position] = *u - (c[position] * *x);

        return Ok(Self {
            key_image,
            challenge: c[0],
            responses: s,
            hasher
        })
    }

    ///Given a signature, a ring, a message and a case identifier, check if it's valid.
    ///
    ///Returns `Ok(true)` if the signature is valid, `Ok(false)` if it does not verify,
    ///or `Err(LsagError)` if the inputs are malformed.
    pub fn verify(&self, ring: &Ring<C>, msg: &[u8], case_identifier: &[u8]) -> Result<bool, LsagError> {
        let n = ring.len();
        if n < 2 {
            return Err(LsagError::InsufficientNumberOfPublicKeys)
        }
        if self.responses.len() != n {
            return Err(LsagError::IncorrectNumberOfSignatures)
        }
        if bool::from(self.key_image.is_identity()) {
            return Err(LsagError::InvalidKeyImage)
        }
        self.hasher.check_combination(C::CURVE_TYPE)?;
        ring.check_duplicates()?;
        debug!(curve = %C::CURVE_TYPE, hasher = %self.hasher, keys = n, "verifying ring signature");

        let ring_points = ring.points();
        let key_image_points = get_key_image_points::<C>(&ring_points)?;
        let prefix = create_prefix(&ring.digest(self.hasher)?, self.hasher, msg, case_identifier);

        //travel around the ring
        let mut c_i = self.challenge;
        for i in 0..n {
            let left = (generator::<C>() * self.responses[i]) + (ring_points[i] * c_i);
            let right = (key_image_points[i] * self.responses[i]) + (self.key_image * c_i);
            c_i = challenge::<C>(self.hasher, &prefix, &left, &right);
        }
        //check if we end up back where we started
        return Ok(bool::from(c_i.ct_eq(&self.challenge)))
    }

    ///Assemble a signature from its parts, no checks are made.
    pub fn from_parts(key_image: C::ProjectivePoint, challenge: C::Scalar, responses: Vec<C::Scalar>, hasher: HasherType) -> Self {
        return Self {
            key_image,
            challenge,
            responses,
            hasher
        }
    }

    ///Were both signatures made with the same private key?
    pub fn links_to(&self, other: &Self) -> bool {
        return self.key_image == other.key_image
    }
}
