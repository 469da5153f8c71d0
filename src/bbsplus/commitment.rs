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

use crate::errors::Error;
use super::{ciphersuites::BbsCiphersuite, message::{BBSplusMessage, MessageEncoding}};


/// Pedersen-style commitment to a message vector:
///
/// C = g1 + H_1 * msg_1 + ... + H_L * msg_L
///
/// # Inputs:
/// * `messages`, one entry per generator in `h_points`.
/// * `h_points`, the per-slot generators of the public parameters.
/// * `g1`, the base point.
/// * `encoding`, the message-to-scalar mapping.
pub fn compute_commitment<CS, M>(messages: &[M], h_points: &[CS::G1], g1: &CS::G1, encoding: MessageEncoding) -> Result<CS::G1, Error>
where
    CS: BbsCiphersuite,
    M: AsRef<[u8]>,
{
    if messages.len() != h_points.len() {
        return Err(Error::LengthMismatch { expected: h_points.len(), actual: messages.len() });
    }

    let message_scalars = BBSplusMessage::<CS>::messages_to_scalar(messages, encoding)?;

    let C = message_scalars
        .iter()
        .zip(h_points)
        .fold(*g1, |acc, (m, h)| acc + *h * m.value);

    log::trace!("Commitment over {} messages computed", messages.len());

    Ok(C)
}
