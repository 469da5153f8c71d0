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

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Error during keypair generation: {0}")]
    KeyGenError(String),
    #[error("Secure randomness source failed: {0}")]
    RandomnessFailure(String),
    /// The message vector and the public parameters disagree on the number of slots.
    #[error("Message vector has {actual} entries but the public parameters hold {expected} generators")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Error during hash to scalar computation")]
    HashToScalarError,
    #[error("Error during computation of a Signature: {0}")]
    SignatureGenerationError(String),
    #[error("Error during deserialization: {0}")]
    DeserializationError(String),
}
