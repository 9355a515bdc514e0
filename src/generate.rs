//! One-shot fixture generation.
//!
//! A [`FixtureSet`] holds the four values of one run: key, nonce,
//! plaintext and the expected ciphertext. It is produced once, written
//! once and then dropped.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::cipher::{self, KEY_LEN, NONCE_LEN};
use crate::error::{FixtureError, Result};
use crate::fixture::{WORD_LEN, declaration, hexdump, write_le_words};
use crate::params::FixtureParams;
use crate::rng::{random_array, random_bytes};

/// Block counter the expected ciphertext starts at.
pub const INITIAL_COUNTER: u32 = 0;

/// File names of the four artifacts, in write order.
pub const KEY_FILE: &str = "key";
pub const IV_FILE: &str = "iv";
pub const PLAINTEXT_FILE: &str = "plaintext";
pub const CIPHERTEXT_FILE: &str = "ciphertext";

const RULER_WIDTH: usize = 80;

/// Key, nonce, plaintext and expected ciphertext of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureSet {
    pub key: [u8; KEY_LEN],
    pub nonce: [u8; NONCE_LEN],
    pub plaintext: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

impl FixtureSet {
    /// Draws fresh random material sized by `params` and encrypts it.
    pub fn generate(params: &FixtureParams) -> Result<Self> {
        let len = params.plaintext_len()?;

        let key = random_array::<KEY_LEN>()?;
        let nonce = random_array::<NONCE_LEN>()?;
        let plaintext = random_bytes(len)?;

        info!(
            blocks_per_cycle = params.blocks_per_cycle,
            bus_width = params.bus_width,
            big_blocks = params.big_blocks,
            plaintext_bytes = len,
            "generated random fixture material"
        );

        Self::from_parts(key, nonce, plaintext)
    }

    /// Builds a set from caller-provided material.
    pub fn from_parts(
        key: [u8; KEY_LEN],
        nonce: [u8; NONCE_LEN],
        plaintext: Vec<u8>,
    ) -> Result<Self> {
        let ciphertext = cipher::encrypt(&key, &nonce, INITIAL_COUNTER, &plaintext)?;

        Ok(Self {
            key,
            nonce,
            plaintext,
            ciphertext,
        })
    }

    fn artifacts(&self) -> [(&'static str, &[u8]); 4] {
        [
            (KEY_FILE, &self.key[..]),
            (IV_FILE, &self.nonce[..]),
            (PLAINTEXT_FILE, &self.plaintext[..]),
            (CIPHERTEXT_FILE, &self.ciphertext[..]),
        ]
    }

    /// Writes the four word files into `dir`, creating it if needed.
    ///
    /// Every artifact is staged in a temporary file inside `dir` first.
    /// Only once all four are on disk are they renamed to their final
    /// names; on any earlier failure the staged files are removed and the
    /// directory keeps whatever it held before.
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|e| FixtureError::io(dir, e))?;

        for (name, bytes) in self.artifacts() {
            if bytes.len() % WORD_LEN != 0 {
                return Err(FixtureError::MalformedWordAlignment { len: bytes.len() });
            }
            debug!(artifact = name, bytes = bytes.len(), "artifact is word aligned");
        }

        let mut staged = Vec::with_capacity(4);
        for (name, bytes) in self.artifacts() {
            let tmp = tempfile::Builder::new()
                .prefix(&format!(".{name}."))
                .tempfile_in(dir)
                .map_err(|e| FixtureError::io(dir, e))?;

            write_le_words(tmp.path(), bytes)?;
            staged.push((name, tmp));
        }

        for (name, tmp) in staged {
            let dest = dir.join(name);
            tmp.persist(&dest)
                .map_err(|e| FixtureError::io(&dest, e.error))?;
        }

        info!(dir = %dir.display(), "fixture set committed");
        Ok(())
    }

    /// Register declarations for pasting into hardware source.
    pub fn declarations(&self) -> [String; 4] {
        [
            declaration("key", &self.key),
            declaration("iv", &self.nonce),
            declaration("input_plaintext", &self.plaintext),
            declaration("expected_ciphertext", &self.ciphertext),
        ]
    }

    /// Console report: run banner, hex dumps and declarations.
    pub fn report(&self, params: &FixtureParams) -> String {
        let ruler = "=".repeat(RULER_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "*** Creating files for test pass ***");
        let _ = writeln!(out, "DEF_NUM_BLOCKS: {}", params.blocks_per_cycle);
        let _ = writeln!(out, "DEF_TDATA_WIDTH: {}", params.bus_width);
        let _ = writeln!(out, "{ruler}");

        for (label, bytes) in [
            ("Key:", &self.key[..]),
            ("IV:", &self.nonce[..]),
            ("Plaintext:", &self.plaintext[..]),
            ("Ciphertext:", &self.ciphertext[..]),
        ] {
            let _ = writeln!(out, "{label}");
            out.push_str(&hexdump(bytes));
        }

        for line in self.declarations() {
            let _ = writeln!(out, "{line}");
        }

        let _ = writeln!(out, "{ruler}");
        out
    }
}
