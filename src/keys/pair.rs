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

use crate::bbsplus::{ciphersuites::BbsCiphersuite, keys::{PublicParameters, SigningKey, VerificationKey}};

/// Output of KeyGen: the secret key together with the public material it was generated for.
#[derive(Debug)]
pub struct KeyPair<CS: BbsCiphersuite> {
    pub(crate) public: VerificationKey<CS>,
    pub(crate) private: SigningKey<CS>,
    pub(crate) params: PublicParameters<CS>,
}

impl<CS> KeyPair<CS>
where
    CS: BbsCiphersuite,
{
    pub fn public_key(&self) -> &VerificationKey<CS> {
        &self.public
    }

    pub fn private_key(&self) -> &SigningKey<CS> {
        &self.private
    }

    pub fn public_params(&self) -> &PublicParameters<CS> {
        &self.params
    }

    /// Returns `(sk, vk, params)`.
    pub fn into_parts(self) -> (SigningKey<CS>, VerificationKey<CS>, PublicParameters<CS>) {
        (self.private, self.public, self.params)
    }
}
