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

use ff::PrimeField;

/// Interprets `data` as a big-endian integer of arbitrary length and reduces it modulo the
/// scalar field order.
///
/// Inputs that are congruent modulo the order map to the same scalar.
pub fn scalar_from_be_bytes_reduced<F: PrimeField>(data: &[u8]) -> F {
    // 2^64
    let shift = F::from(u64::MAX) + F::ONE;

    let (head, tail) = data.split_at(data.len() % 8);
    let mut acc = F::from(be_u64(head));
    for chunk in tail.chunks_exact(8) {
        acc = acc * shift + F::from(be_u64(chunk));
    }

    acc
}

fn be_u64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b))
}


#[cfg(feature = "bls12_381")]
pub mod bbsplus_utils {
    use bls12_381_plus::Scalar;
    use elliptic_curve::hash2curve::{ExpandMsg, Expander};
    use ff::Field;
    use crate::{bbsplus::ciphersuites::OKM_LEN, errors::Error};

    /// Hashes `msg_octets` to a nonzero scalar: `expand_message(msg || counter, dst, 48)`
    /// reduced with `from_okm`, bumping the counter until the result is nonzero.
    pub fn hash_to_scalar<X>(msg_octets: &[u8], dst: &[u8]) -> Result<Scalar, Error>
    where
        X: for<'a> ExpandMsg<'a>,
    {
        let mut counter: u8 = 0;
        let mut uniform_bytes = [0u8; OKM_LEN];

        loop {
            let msg_prime = [msg_octets, &[counter; 1][..]].concat();
            X::expand_message(&[msg_prime.as_slice()], &[dst], OKM_LEN)
                .map_err(|_| Error::HashToScalarError)?
                .fill_bytes(&mut uniform_bytes);

            let hashed_scalar = Scalar::from_okm(&uniform_bytes);
            if !bool::from(hashed_scalar.is_zero()) {
                return Ok(hashed_scalar);
            }

            counter = counter.checked_add(1).ok_or(Error::HashToScalarError)?;
        }
    }
}
