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

use ff::Field;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde::ser::SerializeStruct;
use crate::{errors::Error, utils::random::random_scalar};
use super::{ciphersuites::BbsCiphersuite, keys::{PublicParameters, SigningKey, VerificationKey}};


/// `(A, e)` with `A = C * 1/(x + e)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BBSplusSignature<CS: BbsCiphersuite> {
    pub a: CS::G1,
    pub e: CS::Scalar,
}

impl<CS: BbsCiphersuite> BBSplusSignature<CS> {

    pub fn signature_length() -> usize {
        CS::G1_BYTES + CS::SCALAR_BYTES
    }

    /// `A` compressed followed by `e` in big-endian order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = CS::g1_to_bytes(&self.a);
        bytes.extend_from_slice(&CS::scalar_to_bytes(&self.e));
        bytes
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        if data.len() != Self::signature_length() {
            return Err(Error::DeserializationError(format!(
                "expected {} bytes for a signature, got {}",
                Self::signature_length(),
                data.len()
            )));
        }

        let (a_bytes, e_bytes) = data.split_at(CS::G1_BYTES);
        let a = CS::g1_from_bytes(a_bytes)?;
        let e = CS::scalar_from_bytes(e_bytes)?;

        Ok(Self { a, e })
    }

    pub fn encode(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Signs `messages` with randomness from the operating system RNG.
    pub fn sign<M>(params: &PublicParameters<CS>, sk: &SigningKey<CS>, messages: &[M]) -> Result<Self, Error>
    where
        M: AsRef<[u8]>,
    {
        Self::sign_with_rng(&mut OsRng, params, sk, messages)
    }

    pub fn sign_with_rng<R, M>(rng: &mut R, params: &PublicParameters<CS>, sk: &SigningKey<CS>, messages: &[M]) -> Result<Self, Error>
    where
        R: RngCore + CryptoRng,
        M: AsRef<[u8]>,
    {
        core_sign::<CS, R, M>(rng, params, sk, messages)
    }

    /// `Ok(false)` for a well-formed but invalid signature; `Err` only for malformed input.
    pub fn verify<M>(&self, params: &PublicParameters<CS>, vk: &VerificationKey<CS>, messages: &[M]) -> Result<bool, Error>
    where
        M: AsRef<[u8]>,
    {
        core_verify::<CS, M>(params, vk, messages, self)
    }
}


/// Sign(params, sk, messages)
///
/// # Description
/// 1. C = g1 + H_1 * msg_1 + ... + H_L * msg_L
/// 2. draw e until x + e != 0
/// 3. A = C * (1 / (x + e))
///
/// # Inputs:
/// * `rng`, a cryptographically secure randomness source.
/// * `params`, the public parameters the key was generated with.
/// * `sk`, the signer's secret.
/// * `messages`, exactly `params.message_count()` octet strings.
fn core_sign<CS, R, M>(rng: &mut R, params: &PublicParameters<CS>, sk: &SigningKey<CS>, messages: &[M]) -> Result<BBSplusSignature<CS>, Error>
where
    CS: BbsCiphersuite,
    R: RngCore + CryptoRng,
    M: AsRef<[u8]>,
{
    let C = params.commit(messages)?;

    let (e, x_plus_e) = loop {
        let e = random_scalar::<CS, R>(rng)?;
        let x_plus_e = sk.0 + e;
        if !bool::from(x_plus_e.is_zero()) {
            break (e, x_plus_e);
        }
        log::warn!("x + e == 0, drawing a new e");
    };

    let A = compute_a::<CS>(&x_plus_e, &C)?;

    log::debug!("Signed a vector of {} messages", messages.len());

    Ok(BBSplusSignature { a: A, e })
}

// A = C * (1 / (x + e))
fn compute_a<CS: BbsCiphersuite>(x_plus_e: &CS::Scalar, C: &CS::G1) -> Result<CS::G1, Error> {
    let inverse = Option::<CS::Scalar>::from(x_plus_e.invert())
        .ok_or_else(|| Error::SignatureGenerationError("x + e is not invertible".to_owned()))?;

    Ok(*C * inverse)
}


/// Verify(params, vk, messages, signature)
///
/// # Description
/// 1. C = g1 + H_1 * msg_1 + ... + H_L * msg_L
/// 2. Y = g2 * e + X2
/// 3. accept iff e(A, Y) == e(C, g2)
fn core_verify<CS, M>(params: &PublicParameters<CS>, vk: &VerificationKey<CS>, messages: &[M], signature: &BBSplusSignature<CS>) -> Result<bool, Error>
where
    CS: BbsCiphersuite,
    M: AsRef<[u8]>,
{
    let C = params.commit(messages)?;

    let Y = *params.g2() * signature.e + vk.0;

    let valid = CS::pairings_match(&signature.a, &Y, &C, params.g2());

    log::debug!("Pairing check over {} messages: {}", messages.len(), if valid { "valid" } else { "invalid" });

    Ok(valid)
}


impl<CS: BbsCiphersuite> Serialize for BBSplusSignature<CS> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("BBSplusSignature", 2)?;
        state.serialize_field("A", &hex::encode(CS::g1_to_bytes(&self.a)))?;
        state.serialize_field("e", &hex::encode(CS::scalar_to_bytes(&self.e)))?;
        state.end()
    }
}

#[derive(Deserialize)]
struct SignatureRepr {
    #[serde(rename = "A")]
    a: String,
    e: String,
}

impl<'de, CS: BbsCiphersuite> Deserialize<'de> for BBSplusSignature<CS> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = SignatureRepr::deserialize(deserializer)?;

        let a_bytes = hex::decode(repr.a).map_err(de::Error::custom)?;
        let e_bytes = hex::decode(repr.e).map_err(de::Error::custom)?;

        let a = CS::g1_from_bytes(&a_bytes).map_err(de::Error::custom)?;
        let e = CS::scalar_from_bytes(&e_bytes).map_err(de::Error::custom)?;

        Ok(Self { a, e })
    }
}
