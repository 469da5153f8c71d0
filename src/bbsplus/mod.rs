// Copyright 2023 Fondazione LINKS

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! BBS++ signatures over a message vector of fixed length.
//!
//! A signer holding a single secret `x` commits to `l` messages with per-slot generators
//! `H_1..H_l` and signs the commitment `C` as `A = C * 1/(x + e)` for a fresh random `e`.
//! Anyone holding the verification key `X2 = g2 * x` checks `e(A, g2 * e + X2) == e(C, g2)`.
//! - **Key Generation**: [`KeyPair::generate`](crate::keys::pair::KeyPair::generate) fixes `l`,
//!                       the generators and the key pair.
//! - **Signing**: [`signature::BBSplusSignature::sign`] is randomized, so two signatures on the same
//!                vector are unlinkable.
//! - **Verification**: [`signature::BBSplusSignature::verify`] returns `Ok(false)` for an invalid
//!                     signature and an error only for malformed input.
//!
//! The curve is abstracted by [`ciphersuites::BbsCiphersuite`]; the `bls12_381` feature (on by
//! default) provides [`ciphersuites::Bls12381Sha256`] and [`ciphersuites::Bls12381Shake256`].
//! # Usage
//! ```toml
//! bbsplus-sig = { version = "0.1", default-features = false, features = ["bls12_381"] }
//! ```

/// Module for ciphersuites
pub mod ciphersuites;
/// Module for commitments
pub mod commitment;
/// Module for generators
pub mod generators;
/// Module for keys
pub mod keys;
/// Module for messages
pub mod message;
/// Module for signatures
pub mod signature;
