#![no_main]

use libfuzzer_sys::fuzz_target;
use seedphrase_core::{encode, entropy::Entropy};

fuzz_target!(|data: &[u8]| {
    // Arbitrary lengths must be rejected cleanly; 16/32-byte inputs must
    // encode exactly as the reference bip39 crate does.
    let Ok(entropy) = Entropy::from_bytes(data) else {
        return;
    };
    let ours = encode(&entropy).to_string();
    let reference = bip39::Mnemonic::from_entropy(data)
        .expect("reference rejected 16/32-byte entropy")
        .to_string();
    assert_eq!(ours, reference);
});
