// Copyright 2025 Fondazione LINKS

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(feature = "bls12_381")]
mod bbsplus_example {
    use bbsplus_sig::{
        bbsplus::{
            ciphersuites::BbsCiphersuite,
            message::MessageEncoding,
            signature::BBSplusSignature,
        },
        errors::Error,
        keys::pair::KeyPair,
    };
    use rand::rngs::OsRng;

    pub(crate) fn bbsplus_main<CS: BbsCiphersuite>(encoding: MessageEncoding) -> Result<(), Error> {
        const MSGS: [&str; 3] = ["message1", "message2", "message3"];

        log::info!("Messages: {:?}", MSGS);
        log::info!("Message encoding: {:?}", encoding);

        log::info!("Keypair Generation");
        let issuer_keypair = KeyPair::<CS>::generate_with_rng(&mut OsRng, MSGS.len(), encoding)?;

        let issuer_vk = issuer_keypair.public_key();
        log::info!("VK: {}", issuer_vk.encode());
        let params = issuer_keypair.public_params();
        log::info!("Generators: {}", params.message_count());

        log::info!("Signature Computation...");
        let signature = BBSplusSignature::sign(params, issuer_keypair.private_key(), &MSGS)?;
        log::info!("Signature: {}", signature.encode());

        let valid = signature.verify(params, issuer_vk, &MSGS)?;
        assert!(valid, "Signature verification FAILED!");
        log::info!("Signature is VALID");

        let changed = ["message1", "CHANGED", "message3"];
        log::info!("Verifying against {:?}...", changed);
        let valid = signature.verify(params, issuer_vk, &changed)?;
        assert!(!valid, "Modified message vector ACCEPTED!");
        log::info!("Signature is INVALID for the modified vector");

        Ok(())
    }
}

#[cfg(feature = "bls12_381")]
fn main() {
    use crate::bbsplus_example::bbsplus_main;
    use std::env;
    use bbsplus_sig::bbsplus::{
        ciphersuites::{Bls12381Sha256, Bls12381Shake256},
        message::MessageEncoding,
    };

    dotenvy::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        println!(
            "Usage: {} <cipher_suite> [message_encoding]
                Ciphersuites:
                    - BLS12-381-SHA-256
                    - BLS12-381-SHAKE-256
                Message encodings:
                    - raw (default)
                    - hash",
            args[0]
        );
        return;
    }

    let encoding = match args.get(2).map(String::as_str) {
        None | Some("raw") => MessageEncoding::RawBigEndian,
        Some("hash") => MessageEncoding::HashToScalar,
        Some(other) => {
            println!("Unknown message encoding: {}", other);
            return;
        }
    };

    let cipher_suite = &args[1];

    let result = match cipher_suite.as_str() {
        "BLS12-381-SHA-256" => {
            println!("\n");
            log::info!("Ciphersuite: BLS12-381-SHA-256");
            bbsplus_main::<Bls12381Sha256>(encoding)
        }
        "BLS12-381-SHAKE-256" => {
            println!("\n");
            log::info!("Ciphersuite: BLS12-381-SHAKE-256");
            bbsplus_main::<Bls12381Shake256>(encoding)
        }
        _ => {
            println!("Unknown cipher suite: {}", cipher_suite);
            return;
        }
    };

    if let Err(e) = result {
        log::error!("{}", e);
    }
}

#[cfg(not(feature = "bls12_381"))]
fn main() {}
