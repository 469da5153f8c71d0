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

use serde::{Deserialize, Serialize};
use crate::{errors::Error, utils::util::scalar_from_be_bytes_reduced};
use super::ciphersuites::BbsCiphersuite;


/// How a message octet string becomes a scalar.
///
/// The choice is fixed at key generation and travels with the public parameters, so signer
/// and verifier always agree on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageEncoding {
    /// Big-endian integer reduced modulo the group order.
    ///
    /// Not injective: messages longer than the scalar width collide whenever their integer
    /// values agree modulo the order. Hash long or untrusted inputs first, or use
    /// [`MessageEncoding::HashToScalar`].
    #[default]
    RawBigEndian,
    /// `hash_to_scalar(msg, ID || "MAP_MSG_TO_SCALAR_AS_HASH_")`.
    HashToScalar,
}


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BBSplusMessage<CS: BbsCiphersuite> {
    pub value: CS::Scalar,
}

impl<CS: BbsCiphersuite> BBSplusMessage<CS> {

    pub fn new(msg: CS::Scalar) -> Self {
        Self { value: msg }
    }

    pub fn map_message_to_scalar(data: &[u8], encoding: MessageEncoding) -> Result<Self, Error> {
        match encoding {
            MessageEncoding::RawBigEndian => Ok(Self::from_be_bytes_reduced(data)),
            MessageEncoding::HashToScalar => Self::map_message_to_scalar_as_hash(data, None),
        }
    }

    pub fn from_be_bytes_reduced(data: &[u8]) -> Self {
        Self { value: scalar_from_be_bytes_reduced::<CS::Scalar>(data) }
    }

    pub fn map_message_to_scalar_as_hash(data: &[u8], dst: Option<&[u8]>) -> Result<Self, Error> {
        let default_dst = CS::map_msg_dst();
        let dst = dst.unwrap_or(default_dst.as_slice());

        let scalar = CS::hash_to_scalar(data, dst)?;

        Ok(Self { value: scalar })
    }

    pub fn messages_to_scalar<M: AsRef<[u8]>>(messages: &[M], encoding: MessageEncoding) -> Result<Vec<Self>, Error> {
        messages
            .iter()
            .map(|m| Self::map_message_to_scalar(m.as_ref(), encoding))
            .collect()
    }
}
