//! Cipher mode selector for [`FileCipher`](crate::FileCipher)

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Mode requested for file encryption
///
/// The file transform currently encrypts each block independently whatever
/// the selection; the value is stored and reported, nothing more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum CipherMode {
    /// Electronic codebook: every block encrypted on its own
    #[default]
    Ecb,
    /// Counter mode
    Ctr,
}

impl CipherMode {
    /// Canonical upper-case name
    pub const fn as_str(self) -> &'static str {
        match self {
            CipherMode::Ecb => "ECB",
            CipherMode::Ctr => "CTR",
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ECB") {
            Ok(CipherMode::Ecb)
        } else if s.eq_ignore_ascii_case("CTR") {
            Ok(CipherMode::Ctr)
        } else {
            Err(Error::InvalidParameter {
                context: "cipher mode",
                message: format!("unknown mode {:?}, expected ECB or CTR", s),
            })
        }
    }
}
