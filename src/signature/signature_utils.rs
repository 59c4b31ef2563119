/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use zeroize::Zeroizing;

use crate::internal_common::*;

///hash to point, specific for key image
///
///The hash function depends on the curve only, see `HasherType::key_image_hasher`.
pub(crate) fn h_key_image_point<C: RingCurve>(encoded_public_key: &[u8]) -> Result<C::ProjectivePoint, LsagError> {
    return domain_h_point::<C>(
        HasherType::key_image_hasher(C::CURVE_TYPE),
        encoded_public_key,
        domains::SIGNATURE_KEY_IMAGE
    )
}

///return the key image points for every member of a ring
pub(crate) fn get_key_image_points<C: RingCurve>(ring: &[C::ProjectivePoint]) -> Result<Vec<C::ProjectivePoint>, LsagError> {
    return ring.iter()
        .map(|key| h_key_image_point::<C>(&C::encode_point(key)))
        .collect()
}

///Given a private key, return its key image
pub fn get_key_image<C: RingCurve>(private_key: &SecretKey<C>) -> Result<C::ProjectivePoint, LsagError> {
    let x = Zeroizing::new(*private_key.to_nonzero_scalar());
    let public_key = private_key.public_key().to_projective();
    return Ok(h_key_image_point::<C>(&C::encode_point(&public_key))? * *x)
}

///The part of the transcript shared by every challenge: `ring digest || H(message) || case identifier`
pub(crate) fn create_prefix(ring_digest: &[u8], hasher: HasherType, msg: &[u8], case_identifier: &[u8]) -> Vec<u8> {
    return [ring_digest, &hasher.digest(msg), case_identifier].concat()
}

///`H_s(prefix || enc(left) || enc(right))`
pub(crate) fn challenge<C: RingCurve>(
    hasher: HasherType, prefix: &[u8], left: &C::ProjectivePoint, right: &C::ProjectivePoint
) -> C::Scalar {
    return h_scalar::<C>(hasher, &[
        prefix, &C::encode_point(left), &C::encode_point(right)
    ].concat())
}
