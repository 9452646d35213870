//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of rounds for a 128-bit key
pub const AES128_ROUNDS: usize = 10;

/// Number of rounds for a 192-bit key
pub const AES192_ROUNDS: usize = 12;

/// Number of rounds for a 256-bit key
pub const AES256_ROUNDS: usize = 14;

/// Columns in the AES state (Nb in FIPS-197)
pub const AES_STATE_COLUMNS: usize = 4;

/// Size of a key schedule word in bytes
pub const AES_WORD_SIZE: usize = 4;

/// CTR counter block size in bytes
pub const CTR_COUNTER_SIZE: usize = AES_BLOCK_SIZE;

/// Chunk size used when comparing two files
pub const COMPARE_CHUNK_SIZE: usize = 1024;
