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

use rand::{CryptoRng, RngCore};
use crate::{errors::Error, utils::random::fill_random};
use super::ciphersuites::{BbsCiphersuite, OKM_LEN};


/// Hashes fresh randomness into G1 under the suite's generator DST, so nobody knows a
/// discrete log of the result. The identity is never returned.
pub fn random_g1_element<CS, R>(rng: &mut R) -> Result<CS::G1, Error>
where
    CS: BbsCiphersuite,
    R: RngCore + CryptoRng,
{
    let dst = CS::generator_dst();
    let mut seed = [0u8; OKM_LEN];

    loop {
        fill_random(rng, &mut seed)?;
        let candidate = CS::hash_to_g1(&seed, &dst);
        if !CS::g1_is_identity(&candidate) {
            return Ok(candidate);
        }
        log::warn!("Hashed generator candidate is the identity, drawing again");
    }
}

/// `count` independent message generators `H_1..H_count`.
pub fn generate_independent_generators<CS, R>(count: usize, rng: &mut R) -> Result<Vec<CS::G1>, Error>
where
    CS: BbsCiphersuite,
    R: RngCore + CryptoRng,
{
    let mut generators = Vec::with_capacity(count);
    while generators.len() < count {
        generators.push(random_g1_element::<CS, R>(rng)?);
    }

    Ok(generators)
}
