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

use core::fmt::Debug;
use core::ops::{Add, Mul};
use ff::PrimeField;
use crate::errors::Error;

#[cfg(feature = "bls12_381")]
use bls12_381_plus::{multi_miller_loop, G1Affine, G1Projective, G2Affine, G2Prepared, G2Projective, Gt, Scalar};
#[cfg(feature = "bls12_381")]
use elliptic_curve::hash2curve::{ExpandMsgXmd, ExpandMsgXof};
#[cfg(feature = "bls12_381")]
use group::Curve;
#[cfg(feature = "bls12_381")]
use sha2::Sha256;
#[cfg(feature = "bls12_381")]
use sha3::Shake256;
#[cfg(feature = "bls12_381")]
use crate::utils::util::bbsplus_utils::hash_to_scalar;

/// Length of the uniform output keying material reduced into a single scalar.
pub const OKM_LEN: usize = 48;

/// The primitive field a BBS++ instance runs on: scalar, source and target groups,
/// hashing into G1 and the bilinear pairing.
///
/// Key generation, signing and verification are written once against this trait, so the
/// same code runs on a production curve and on a fast test double.
pub trait BbsCiphersuite: Clone + Copy + Debug + Default + PartialEq + Eq + Send + Sync + 'static {
    const ID: &'static [u8];
    const SCALAR_BYTES: usize;
    const G1_BYTES: usize;
    const G2_BYTES: usize;

    type Scalar: PrimeField;
    type G1: Copy + Debug + Eq + Send + Sync + Add<Output = Self::G1> + Mul<Self::Scalar, Output = Self::G1>;
    type G2: Copy + Debug + Eq + Send + Sync + Add<Output = Self::G2> + Mul<Self::Scalar, Output = Self::G2>;
    type Gt: Debug + PartialEq;

    fn g1_generator() -> Self::G1;
    fn g2_generator() -> Self::G2;
    fn g1_is_identity(point: &Self::G1) -> bool;

    fn hash_to_g1(msg: &[u8], dst: &[u8]) -> Self::G1;
    /// Nonzero scalar derived from `msg` under `dst`.
    fn hash_to_scalar(msg: &[u8], dst: &[u8]) -> Result<Self::Scalar, Error>;
    /// Reduces 48 uniform bytes modulo the group order.
    fn scalar_from_okm(okm: &[u8; OKM_LEN]) -> Self::Scalar;

    fn pairing(p: &Self::G1, q: &Self::G2) -> Self::Gt;

    /// Checks `e(a, y) == e(c, g2)`.
    fn pairings_match(a: &Self::G1, y: &Self::G2, c: &Self::G1, g2: &Self::G2) -> bool {
        Self::pairing(a, y) == Self::pairing(c, g2)
    }

    fn scalar_to_bytes(scalar: &Self::Scalar) -> Vec<u8>;
    fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar, Error>;
    fn g1_to_bytes(point: &Self::G1) -> Vec<u8>;
    fn g1_from_bytes(bytes: &[u8]) -> Result<Self::G1, Error>;
    fn g2_to_bytes(point: &Self::G2) -> Vec<u8>;
    fn g2_from_bytes(bytes: &[u8]) -> Result<Self::G2, Error>;

    fn generator_dst() -> Vec<u8> {
        [Self::ID, b"MESSAGE_GENERATOR_DST_"].concat()
    }

    fn map_msg_dst() -> Vec<u8> {
        [Self::ID, b"MAP_MSG_TO_SCALAR_AS_HASH_"].concat()
    }
}


#[cfg(feature = "bls12_381")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bls12381Sha256;

#[cfg(feature = "bls12_381")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bls12381Shake256;


#[cfg(feature = "bls12_381")]
macro_rules! impl_bls12381_ciphersuite {
    ($name:ident, $expander:ty, $id:expr) => {
        impl BbsCiphersuite for $name {
            const ID: &'static [u8] = $id;
            const SCALAR_BYTES: usize = Scalar::BYTES;
            const G1_BYTES: usize = G1Affine::COMPRESSED_BYTES;
            const G2_BYTES: usize = G2Affine::COMPRESSED_BYTES;

            type Scalar = Scalar;
            type G1 = G1Projective;
            type G2 = G2Projective;
            type Gt = Gt;

            fn g1_generator() -> G1Projective {
                G1Projective::GENERATOR
            }

            fn g2_generator() -> G2Projective {
                G2Projective::GENERATOR
            }

            fn g1_is_identity(point: &G1Projective) -> bool {
                point.is_identity().into()
            }

            fn hash_to_g1(msg: &[u8], dst: &[u8]) -> G1Projective {
                G1Projective::hash::<$expander>(msg, dst)
            }

            fn hash_to_scalar(msg: &[u8], dst: &[u8]) -> Result<Scalar, Error> {
                hash_to_scalar::<$expander>(msg, dst)
            }

            fn scalar_from_okm(okm: &[u8; OKM_LEN]) -> Scalar {
                Scalar::from_okm(okm)
            }

            fn pairing(p: &G1Projective, q: &G2Projective) -> Gt {
                bls12_381_plus::pairing(&p.to_affine(), &q.to_affine())
            }

            // e(A, Y) * e(C, -g2) == 1, one final exponentiation
            fn pairings_match(a: &G1Projective, y: &G2Projective, c: &G1Projective, g2: &G2Projective) -> bool {
                let term1 = (&a.to_affine(), &G2Prepared::from(y.to_affine()));
                let term2 = (&c.to_affine(), &G2Prepared::from(-g2.to_affine()));

                multi_miller_loop(&[term1, term2]).final_exponentiation() == Gt::IDENTITY
            }

            fn scalar_to_bytes(scalar: &Scalar) -> Vec<u8> {
                scalar.to_be_bytes().to_vec()
            }

            fn scalar_from_bytes(bytes: &[u8]) -> Result<Scalar, Error> {
                bls_scalar_from_bytes(bytes)
            }

            fn g1_to_bytes(point: &G1Projective) -> Vec<u8> {
                point.to_affine().to_compressed().to_vec()
            }

            fn g1_from_bytes(bytes: &[u8]) -> Result<G1Projective, Error> {
                bls_g1_from_bytes(bytes)
            }

            fn g2_to_bytes(point: &G2Projective) -> Vec<u8> {
                point.to_affine().to_compressed().to_vec()
            }

            fn g2_from_bytes(bytes: &[u8]) -> Result<G2Projective, Error> {
                bls_g2_from_bytes(bytes)
            }
        }
    };
}

#[cfg(feature = "bls12_381")]
impl_bls12381_ciphersuite!(Bls12381Sha256, ExpandMsgXmd<Sha256>, b"BBSPP_BLS12381G1_XMD:SHA-256_SSWU_RO_");
#[cfg(feature = "bls12_381")]
impl_bls12381_ciphersuite!(Bls12381Shake256, ExpandMsgXof<Shake256>, b"BBSPP_BLS12381G1_XOF:SHAKE-256_SSWU_RO_");


#[cfg(feature = "bls12_381")]
fn bls_scalar_from_bytes(bytes: &[u8]) -> Result<Scalar, Error> {
    let bytes: [u8; Scalar::BYTES] = bytes.try_into().map_err(|_| {
        Error::DeserializationError(format!("expected {} bytes for a scalar, got {}", Scalar::BYTES, bytes.len()))
    })?;

    Option::from(Scalar::from_be_bytes(&bytes))
        .ok_or_else(|| Error::DeserializationError("scalar is not reduced modulo the group order".to_owned()))
}

#[cfg(feature = "bls12_381")]
fn bls_g1_from_bytes(bytes: &[u8]) -> Result<G1Projective, Error> {
    let bytes: [u8; G1Affine::COMPRESSED_BYTES] = bytes.try_into().map_err(|_| {
        Error::DeserializationError(format!("expected {} bytes for a G1 point, got {}", G1Affine::COMPRESSED_BYTES, bytes.len()))
    })?;

    Option::from(G1Affine::from_compressed(&bytes).map(G1Projective::from))
        .ok_or_else(|| Error::DeserializationError("invalid G1 point encoding".to_owned()))
}

#[cfg(feature = "bls12_381")]
fn bls_g2_from_bytes(bytes: &[u8]) -> Result<G2Projective, Error> {
    let bytes: [u8; G2Affine::COMPRESSED_BYTES] = bytes.try_into().map_err(|_| {
        Error::DeserializationError(format!("expected {} bytes for a G2 point, got {}", G2Affine::COMPRESSED_BYTES, bytes.len()))
    })?;

    Option::from(G2Affine::from_compressed(&bytes).map(G2Projective::from))
        .ok_or_else(|| Error::DeserializationError("invalid G2 point encoding".to_owned()))
}
