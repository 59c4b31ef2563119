/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::{Serialize, Deserialize};

///Output encoding of keys, rings and signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutFormat {
    ///Raw DER bytes
    #[serde(rename = "DER")]
    Der,
    ///PEM armor with descriptive headers
    #[default]
    #[serde(rename = "PEM")]
    Pem,

} impl From<&str> for OutFormat {
    ///`"PEM"` (any case) selects PEM, everything else DER.
    fn from(value: &str) -> Self {
        return match value.eq_ignore_ascii_case("PEM") {
            true => Self::Pem,
            false => Self::Der
        }
    }
}

///Order in which public keys are folded into a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeyOrder {
    ///Keep the order the keys were given in.
    #[serde(rename = "as-given")]
    AsGiven,
    ///Sort by key digests, so the ring does not depend on the input order.
    #[default]
    #[serde(rename = "hashes")]
    Hashes,

} impl From<&str> for KeyOrder {
    ///`"hashes"` selects `Hashes`, everything else `AsGiven`.
    fn from(value: &str) -> Self {
        return match value {
            "hashes" => Self::Hashes,
            _ => Self::AsGiven
        }
    }
}
