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

use core::fmt;
use ff::Field;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde::ser::SerializeStruct;
use crate::{errors::Error, keys::pair::KeyPair, utils::random::random_scalar};
use super::{ciphersuites::BbsCiphersuite, commitment::compute_commitment, generators::generate_independent_generators, message::MessageEncoding};


/// Public parameters `{g1, g2, H_1..H_l}` for message vectors of a fixed length `l`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PublicParameters<CS: BbsCiphersuite> {
    g1: CS::G1,
    g2: CS::G2,
    h1: Vec<CS::G1>,
    message_encoding: MessageEncoding,
}

impl<CS: BbsCiphersuite> PublicParameters<CS> {

    pub fn new(g1: CS::G1, g2: CS::G2, h1: Vec<CS::G1>, message_encoding: MessageEncoding) -> Self {
        Self { g1, g2, h1, message_encoding }
    }

    pub fn g1(&self) -> &CS::G1 {
        &self.g1
    }

    pub fn g2(&self) -> &CS::G2 {
        &self.g2
    }

    pub fn h1(&self) -> &[CS::G1] {
        &self.h1
    }

    pub fn message_encoding(&self) -> MessageEncoding {
        self.message_encoding
    }

    /// Number of message slots these parameters sign.
    pub fn message_count(&self) -> usize {
        self.h1.len()
    }

    /// At least one slot, and neither `g1` nor any `H_i` is the identity.
    pub fn is_valid(&self) -> bool {
        !self.h1.is_empty()
            && !CS::g1_is_identity(&self.g1)
            && self.h1.iter().all(|h| !CS::g1_is_identity(h))
    }

    /// `C = g1 + sum(H_i * msg_i)` under these parameters.
    pub fn commit<M: AsRef<[u8]>>(&self, messages: &[M]) -> Result<CS::G1, Error> {
        compute_commitment::<CS, M>(messages, &self.h1, &self.g1, self.message_encoding)
    }
}


/// The signer's secret `x`. Deliberately neither `Clone` nor serializable.
pub struct SigningKey<CS: BbsCiphersuite>(pub(crate) CS::Scalar);

impl<CS: BbsCiphersuite> SigningKey<CS> {

    pub fn from_scalar(x: CS::Scalar) -> Result<Self, Error> {
        if bool::from(x.is_zero()) {
            return Err(Error::KeyGenError("secret key must be nonzero".to_owned()));
        }
        Ok(Self(x))
    }
}

impl<CS: BbsCiphersuite> fmt::Debug for SigningKey<CS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}


/// `X2 = g2 * x`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct VerificationKey<CS: BbsCiphersuite>(pub CS::G2);

impl<CS: BbsCiphersuite> VerificationKey<CS> {

    pub fn from_signing_key(sk: &SigningKey<CS>, params: &PublicParameters<CS>) -> Self {
        Self(sk_to_pk::<CS>(&sk.0, &params.g2))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        CS::g2_to_bytes(&self.0)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        CS::g2_from_bytes(bytes).map(Self)
    }

    pub fn encode(&self) -> String {
        hex::encode(self.to_bytes())
    }
}


impl<CS: BbsCiphersuite> KeyPair<CS> {

    /// Key material for message vectors of length `l`, drawn from the operating system RNG
    /// with the default [`MessageEncoding`].
    pub fn generate(l: usize) -> Result<Self, Error> {
        Self::generate_with_rng(&mut OsRng, l, MessageEncoding::default())
    }

    pub fn generate_with_rng<R>(rng: &mut R, l: usize, message_encoding: MessageEncoding) -> Result<Self, Error>
    where
        R: RngCore + CryptoRng,
    {
        let (private, public, params) = key_gen::<CS, R>(rng, l, message_encoding)?;

        Ok(Self { public, private, params })
    }
}


/// KeyGen(l)
///
/// # Description
/// Selects the canonical generators `g1`, `g2`, `l` independent generators `H_1..H_l`, a
/// nonzero secret `x` and the verification key `X2 = g2 * x`.
///
/// # Inputs:
/// * `rng`, a cryptographically secure randomness source.
/// * `l` (REQUIRED), length of the message vectors, at least 1.
/// * `message_encoding`, the message-to-scalar mapping baked into the parameters.
pub(crate) fn key_gen<CS, R>(rng: &mut R, l: usize, message_encoding: MessageEncoding) -> Result<(SigningKey<CS>, VerificationKey<CS>, PublicParameters<CS>), Error>
where
    CS: BbsCiphersuite,
    R: RngCore + CryptoRng,
{
    if l == 0 {
        return Err(Error::KeyGenError("message vector length must be at least 1".to_owned()));
    }

    log::debug!("Generating key material for {} message slots", l);

    let g1 = CS::g1_generator();
    let g2 = CS::g2_generator();

    let h1 = generate_independent_generators::<CS, R>(l, rng)?;

    let x = random_scalar::<CS, R>(rng)?;

    let X2 = sk_to_pk::<CS>(&x, &g2);

    Ok((
        SigningKey(x),
        VerificationKey(X2),
        PublicParameters::new(g1, g2, h1, message_encoding),
    ))
}


/// SkToPk: `X2 = g2 * x`.
pub(crate) fn sk_to_pk<CS: BbsCiphersuite>(x: &CS::Scalar, g2: &CS::G2) -> CS::G2 {
    *g2 * *x
}


impl<CS: BbsCiphersuite> Serialize for VerificationKey<CS> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de, CS: BbsCiphersuite> Deserialize<'de> for VerificationKey<CS> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        let bytes = hex::decode(encoded).map_err(de::Error::custom)?;
        Self::from_bytes(&bytes).map_err(de::Error::custom)
    }
}


impl<CS: BbsCiphersuite> Serialize for PublicParameters<CS> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let h1: Vec<String> = self.h1.iter()
            .map(|h| hex::encode(CS::g1_to_bytes(h))).collect();

        let mut state = serializer.serialize_struct("PublicParameters", 4)?;
        state.serialize_field("G1", &hex::encode(CS::g1_to_bytes(&self.g1)))?;
        state.serialize_field("G2", &hex::encode(CS::g2_to_bytes(&self.g2)))?;
        state.serialize_field("H1", &h1)?;
        state.serialize_field("MessageEncoding", &self.message_encoding)?;
        state.end()
    }
}

#[derive(Deserialize)]
struct PublicParametersRepr {
    #[serde(rename = "G1")]
    g1: String,
    #[serde(rename = "G2")]
    g2: String,
    #[serde(rename = "H1")]
    h1: Vec<String>,
    #[serde(rename = "MessageEncoding")]
    message_encoding: MessageEncoding,
}

impl<CS: BbsCiphersuite> PublicParameters<CS> {

    fn from_repr(repr: PublicParametersRepr) -> Result<Self, Error> {
        let decode = |s: &str| hex::decode(s).map_err(|e| Error::DeserializationError(e.to_string()));

        let g1 = CS::g1_from_bytes(&decode(repr.g1.as_str())?)?;
        let g2 = CS::g2_from_bytes(&decode(repr.g2.as_str())?)?;
        let h1 = repr.h1.iter()
            .map(|h| CS::g1_from_bytes(&decode(h.as_str())?))
            .collect::<Result<Vec<_>, Error>>()?;

        let params = Self::new(g1, g2, h1, repr.message_encoding);
        if !params.is_valid() {
            return Err(Error::DeserializationError("public parameters contain the identity or no generators".to_owned()));
        }

        Ok(params)
    }
}

impl<'de, CS: BbsCiphersuite> Deserialize<'de> for PublicParameters<CS> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = PublicParametersRepr::deserialize(deserializer)?;
        Self::from_repr(repr).map_err(de::Error::custom)
    }
}
