/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! PEM armor with descriptive headers.

use pem::{EncodeConfig, LineEnding, Pem};
use tracing::warn;

use crate::internal_common::*;
use super::asn1::{FoldedPublicKeys, SignatureData};

pub const SIGNATURE_LABEL: &str = "RING SIGNATURE";
pub const FOLDED_PUBLIC_KEYS_LABEL: &str = "FOLDED PUBLIC KEYS";
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";
pub const PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";

const PEM_BOUNDARY: &[u8] = b"-----BEGIN ";

///Does `content` look like PEM rather than DER?
pub fn is_pem(content: &[u8]) -> bool {
    return content.windows(PEM_BOUNDARY.len()).any(|window| window == PEM_BOUNDARY)
}

///Wrap DER bytes into a PEM block. Headers are written in the given order.
pub fn armor(label: &str, der: Vec<u8>, headers: &[(&str, String)]) -> Result<Vec<u8>, LsagError> {
    let mut block = Pem::new(label, der);
    for (key, value) in headers {
        if block.headers_mut().add(key, value).is_err() {
            return Err(LsagError::PemEncodeFailed)
        }
    }
    let config = EncodeConfig::new().set_line_ending(LineEnding::LF);
    return Ok(pem::encode_config(&block, config).into_bytes())
}

///Return the DER bytes of `content`, removing the PEM armor if there is one.
///
///An armored block must carry `label`.
pub fn dearmor(content: &[u8], label: &str) -> Result<Vec<u8>, LsagError> {
    if !is_pem(content) {
        return Ok(content.to_vec())
    }
    let block = match pem::parse(content) {
        Ok(block) => block,
        Err(_) => return Err(LsagError::DecodePemFailure)
    };
    if block.tag() != label {
        warn!(expected = label, found = block.tag(), "unexpected PEM label");
        return Err(LsagError::DecodePemFailure)
    }
    return Ok(block.into_contents())
}

///Emit DER bytes as they are, or armored.
pub fn encode(label: &str, der: Vec<u8>, headers: &[(&str, String)], format: OutFormat) -> Result<Vec<u8>, LsagError> {
    return match format {
        OutFormat::Der => Ok(der),
        OutFormat::Pem => armor(label, der, headers)
    }
}

///Headers of a `RING SIGNATURE` block, the key image first.
pub fn signature_headers(signature: &SignatureData) -> Result<Vec<(&'static str, String)>, LsagError> {
    let curve = signature.curve()?;
    let hasher = signature.hasher()?;
    return Ok(vec![
        ("KeyImage", hex::encode(signature.key_image.as_bytes())),
        ("CurveName", curve.name().to_string()),
        ("CurveOID", signature.curve_oid.to_string()),
        ("HasherName", hasher.name().to_string()),
        ("HasherOID", signature.hasher_oid.to_string()),
        ("NumberOfKeys", signature.signatures.len().to_string()),
    ])
}

///Headers of a `FOLDED PUBLIC KEYS` block.
pub fn folded_public_keys_headers(folded: &FoldedPublicKeys) -> Result<Vec<(&'static str, String)>, LsagError> {
    let curve = folded.curve()?;
    let hasher = folded.hasher()?;
    return Ok(vec![
        ("CurveName", curve.name().to_string()),
        ("CurveOID", folded.curve_oid.to_string()),
        ("HasherName", hasher.name().to_string()),
        ("HasherOID", folded.hasher_oid.to_string()),
        ("NumberOfKeys", folded.number_of_keys()?.to_string()),
        ("Digest", hex::encode(folded.digest.as_bytes())),
    ])
}
