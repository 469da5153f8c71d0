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
use rand::{CryptoRng, RngCore};
use crate::{bbsplus::ciphersuites::{BbsCiphersuite, OKM_LEN}, errors::Error};

/// Fills `dest` from `rng`, surfacing a failing entropy source as [`Error::RandomnessFailure`].
pub fn fill_random<R>(rng: &mut R, dest: &mut [u8]) -> Result<(), Error>
where
    R: RngCore + CryptoRng,
{
    rng.try_fill_bytes(dest).map_err(|e| Error::RandomnessFailure(e.to_string()))
}

/// Uniform nonzero scalar.
///
/// 48 random bytes are reduced modulo the group order, which keeps the bias below 2^-128,
/// and a zero result is redrawn.
pub fn random_scalar<CS, R>(rng: &mut R) -> Result<CS::Scalar, Error>
where
    CS: BbsCiphersuite,
    R: RngCore + CryptoRng,
{
    let mut okm = [0u8; OKM_LEN];
    loop {
        fill_random(rng, &mut okm)?;
        let scalar = CS::scalar_from_okm(&okm);
        if !bool::from(scalar.is_zero()) {
            return Ok(scalar);
        }
        log::warn!("Random scalar draw was zero, drawing again");
    }
}
