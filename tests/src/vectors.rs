//! Published AES known-answer vectors

/// A single-block encryption vector
#[derive(Debug, Clone, Copy)]
pub struct BlockVector {
    /// Where the vector comes from
    pub source: &'static str,
    /// Key, hex
    pub key: &'static str,
    /// Plaintext block, hex
    pub plaintext: &'static str,
    /// Ciphertext block, hex
    pub ciphertext: &'static str,
}

/// A counter mode vector over several blocks
#[derive(Debug, Clone, Copy)]
pub struct CtrVector {
    /// Where the vector comes from
    pub source: &'static str,
    /// Key, hex
    pub key: &'static str,
    /// Initial counter block, hex
    pub iv: &'static str,
    /// Plaintext, hex
    pub plaintext: &'static str,
    /// Ciphertext, hex
    pub ciphertext: &'static str,
}

/// FIPS 197 Appendix C example vectors, one per key size
pub const FIPS_197_BLOCKS: [BlockVector; 3] = [
    BlockVector {
        source: "FIPS 197 C.1 AES-128",
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    BlockVector {
        source: "FIPS 197 C.2 AES-192",
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "dda97ca4864cdfe06eaf70a0ec0d7191",
    },
    BlockVector {
        source: "FIPS 197 C.3 AES-256",
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
    },
];

/// FIPS 197 Appendix B cipher example
pub const FIPS_197_APPENDIX_B: BlockVector = BlockVector {
    source: "FIPS 197 Appendix B",
    key: "2b7e151628aed2a6abf7158809cf4f3c",
    plaintext: "3243f6a8885a308d313198a2e0370734",
    ciphertext: "3925841d02dc09fbdc118597196a0b32",
};

/// NIST SP 800-38A F.5.1 (CTR-AES128.Encrypt)
pub const SP_800_38A_CTR_AES128: CtrVector = CtrVector {
    source: "SP 800-38A F.5.1",
    key: "2b7e151628aed2a6abf7158809cf4f3c",
    iv: "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff",
    plaintext: "6bc1bee22e409f96e93d7e117393172a\
                ae2d8a571e03ac9c9eb76fac45af8e51\
                30c81c46a35ce411e5fbc1191a0a52ef\
                f69f2445df4f9b17ad2b417be66c3710",
    ciphertext: "874d6191b620e3261bef6864990db6ce\
                 9806f66b7970fdff8617187bb9fffdff\
                 5ae4df3edbd5d35e5b4f09020db03eab\
                 1e031dda2fbe03d1792170a0f3009cee",
};

/// NIST SP 800-38A F.5.5 (CTR-AES256.Encrypt)
pub const SP_800_38A_CTR_AES256: CtrVector = CtrVector {
    source: "SP 800-38A F.5.5",
    key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
    iv: "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff",
    plaintext: "6bc1bee22e409f96e93d7e117393172a\
                ae2d8a571e03ac9c9eb76fac45af8e51\
                30c81c46a35ce411e5fbc1191a0a52ef\
                f69f2445df4f9b17ad2b417be66c3710",
    ciphertext: "601ec313775789a5b7a7f504bbf3d228\
                 f443e3ca4d62b59aca84e990cacaf5c5\
                 2b0930daa23de94ce87017ba2d84988d\
                 dfc9c58db67aada613c2dd08457941a6",
};
