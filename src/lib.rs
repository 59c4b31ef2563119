/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Linkable ring signatures (LSAG) over prime-order short-Weierstrass curves.
//!
//! A member of a ring of public keys signs a message without revealing which member it is.
//! Every signature carries a key image, which is the same for all signatures
//! made with one private key, so two signatures by the same signer can be linked.
//!
//! The typed API lives in `keys`, `ring` and `signature`;
//! `api::Engine` exposes the same operations on DER or PEM encoded bytes.


//internal modules
mod types;
pub use types::*;
mod tobytes;
pub use tobytes::ToBytes;


//uncommon public modules
pub mod hashes;
pub mod encoding;


//"normal" public modules
pub mod errors;
pub mod curve;
pub mod config;

pub mod keys;
pub mod ring;
pub mod signature;
pub mod api;


pub mod common {
    //! A collection of commonly-used things in this crate.
    //! Errors, types, to/from bytes, and elliptic curve primitives/functions are all included.
    //!
    //! This is intended for situations where you don't want to bother with
    //! manually specifying everything you need,
    //! such as tests, examples and mockups.
    //!
    //! Use `common::*` if you wish to automatically import everything.

    pub use crate::{
        types::*, errors::*, tobytes::*, curve::*, hashes::HasherType
    };
}


mod internal_common {
    //! Similar to `common`, but for internal purposes only.
    //! This includes everything in `common`, as well as internal/less-common modules.
    //!
    //! Use `internal_common::*` if you wish to automatically import everything.

    pub use crate::{
        common::*, hashes::*
    };
}
