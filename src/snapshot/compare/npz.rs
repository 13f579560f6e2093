//! Named-array archive comparison
//!
//! The member names must match before any value is looked at. Members are
//! then compared shape first, element by element within tolerance.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use ndarray::{ArrayD, Dimension};
use ndarray_npy::NpzReader;

use super::values_match;
use crate::config::Tolerance;
use crate::error::{HarnessError, Result};

/// An opened archive with its member names
struct Archive {
    reader: NpzReader<File>,
    /// Raw member names as stored in the zip
    members: Vec<String>,
}

impl Archive {
    fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| HarnessError::io(path, e))?;
        let mut reader = NpzReader::new(file).map_err(|e| HarnessError::archive(path, e))?;
        let members = reader.names().map_err(|e| HarnessError::archive(path, e))?;
        Ok(Self { reader, members })
    }

    /// Array keys, without the `.npy` member suffix
    fn keys(&self) -> BTreeSet<&str> {
        self.members.iter().map(|m| array_key(m)).collect()
    }

    fn member(&self, key: &str) -> Option<&str> {
        self.members.iter().map(String::as_str).find(|m| array_key(m) == key)
    }

    /// Read a member as `f64`, widening integer and boolean arrays
    #[allow(clippy::cast_precision_loss)]
    fn read(&mut self, key: &str, path: &Path) -> Result<ArrayD<f64>> {
        let member = self
            .member(key)
            .map(str::to_string)
            .ok_or_else(|| HarnessError::archive(path, format!("no member '{key}'")))?;

        let floats: std::result::Result<ArrayD<f64>, _> = self.reader.by_name(&member);
        let err = match floats {
            Ok(array) => return Ok(array),
            Err(err) => err,
        };
        if let Ok(ints) = self.reader.by_name::<ndarray::OwnedRepr<i64>, ndarray::IxDyn>(&member) {
            return Ok(ints.mapv(|v| v as f64));
        }
        if let Ok(flags) = self.reader.by_name::<ndarray::OwnedRepr<bool>, ndarray::IxDyn>(&member) {
            return Ok(flags.mapv(|v| f64::from(u8::from(v))));
        }
        Err(HarnessError::archive(path, err))
    }
}

fn array_key(member: &str) -> &str {
    member.strip_suffix(".npy").unwrap_or(member)
}

pub(super) fn compare_npz(actual: &Path, expected: &Path, tolerance: Tolerance) -> Result<()> {
    let mut got = Archive::open(actual)?;
    let mut want = Archive::open(expected)?;

    let got_keys = got.keys();
    let want_keys = want.keys();
    if got_keys != want_keys {
        return Err(HarnessError::ArchiveKeyMismatch {
            path: expected.to_path_buf(),
            missing: want_keys.difference(&got_keys).map(|k| (*k).to_string()).collect(),
            unexpected: got_keys.difference(&want_keys).map(|k| (*k).to_string()).collect(),
        });
    }

    let keys: Vec<String> = want_keys.into_iter().map(String::from).collect();

    for key in &keys {
        let got_array = got.read(key, actual)?;
        let want_array = want.read(key, expected)?;

        if got_array.shape() != want_array.shape() {
            return Err(HarnessError::mismatch(
                expected,
                format!(
                    "array '{key}' shape differs: expected {:?}, found {:?}",
                    want_array.shape(),
                    got_array.shape()
                ),
            ));
        }

        let diff = want_array
            .indexed_iter()
            .zip(got_array.iter())
            .find(|((_, w), g)| !values_match(**g, **w, tolerance));
        if let Some(((index, w), g)) = diff {
            return Err(HarnessError::mismatch(
                expected,
                format!(
                    "array '{key}' at {:?}: expected {w}, found {g} (atol={}, rtol={})",
                    index.slice(),
                    tolerance.absolute,
                    tolerance.relative
                ),
            ));
        }
    }

    Ok(())
}
