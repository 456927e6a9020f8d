// tests/vector_tests.rs
//! Known-answer tests against NIST SP 800-38A, F.2.5 / F.2.6 (CBC-AES256)

mod common;

use aes256_cbc::{decrypt, encrypt};
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const KEY_HEX: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
const IV_HEX: &str = "000102030405060708090a0b0c0d0e0f";
const PLAINTEXT_HEX: &str = concat!(
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
);
const CIPHERTEXT_HEX: &str = concat!(
    "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
    "9cfc4e967edb808d679f777bc6702c7d",
    "39f23369a9d9bacfb530e26304231461",
    "b2eb05e2c39be9fcda6c19078c6a9d1b",
);

struct Vector {
    key: Vec<u8>,
    iv: Vec<u8>,
    plaintext: Vec<u8>,
    ciphertext: Vec<u8>,
}

fn nist_vector() -> Vector {
    Vector {
        key: hex::decode(KEY_HEX).unwrap(),
        iv: hex::decode(IV_HEX).unwrap(),
        plaintext: hex::decode(PLAINTEXT_HEX).unwrap(),
        ciphertext: hex::decode(CIPHERTEXT_HEX).unwrap(),
    }
}

#[test]
fn nist_blocks_match_and_full_padding_block_follows() {
    common::setup();
    let v = nist_vector();

    let ciphertext = encrypt(&v.plaintext, &v.key, &v.iv).unwrap();

    // 64 aligned bytes in, so one whole padding block is appended
    assert_eq!(ciphertext.len(), 80);
    assert_eq!(&ciphertext[..64], v.ciphertext.as_slice());

    let mut raw = ciphertext.clone();
    let unpadded = Aes256CbcDec::new_from_slices(&v.key, &v.iv)
        .unwrap()
        .decrypt_padded_mut::<NoPadding>(&mut raw)
        .unwrap();
    assert_eq!(&unpadded[64..], &[0x10u8; 16]);
}

#[test]
fn nist_prefix_decrypts_to_plaintext() {
    let v = nist_vector();
    let ciphertext = encrypt(&v.plaintext, &v.key, &v.iv).unwrap();

    assert_eq!(decrypt(&ciphertext, &v.key, &v.iv).unwrap(), v.plaintext);
}

#[test]
fn short_message_pads_to_single_block_of_expected_bytes() {
    let v = nist_vector();
    let message = &v.plaintext[..5];

    let ciphertext = encrypt(message, &v.key, &v.iv).unwrap();
    assert_eq!(ciphertext.len(), 16);

    let mut raw = ciphertext.clone();
    let unpadded = Aes256CbcDec::new_from_slices(&v.key, &v.iv)
        .unwrap()
        .decrypt_padded_mut::<NoPadding>(&mut raw)
        .unwrap();
    assert_eq!(&unpadded[..5], message);
    assert_eq!(&unpadded[5..], &[0x0bu8; 11]);
}
