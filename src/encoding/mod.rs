/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!ASN.1 structures of folded rings and signatures, and their PEM armor

pub mod asn1;
pub mod armor;

pub use asn1::{PointData, FoldedPublicKeys, SignatureData};
