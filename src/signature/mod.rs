/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Linkable ring signatures

mod lsag;
mod signature_utils;

pub use lsag::LsagSignature;
pub use signature_utils::get_key_image;
