//! Encrypts the CHAM-128/128 reference block and decrypts it again.

use cham_core::{block_from_bytes, Cham128, Cham128Key};

fn main() {
    let key = Cham128Key::from([
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ]);
    let cipher = Cham128::new(&key);

    let mut block = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    let plaintext = block;
    cipher.encrypt_bytes(&mut block);
    assert_eq!(
        block_from_bytes(&block),
        [0xc3746034, 0xb55700c5, 0x8d64ec32, 0x489332f7]
    );

    cipher.decrypt_bytes(&mut block);
    assert_eq!(block, plaintext);

    println!("example succeeded; ciphertext matches the CHAM reference vector");
}
