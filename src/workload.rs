//! The input-source collaborator.
//!
//! A workload is the pair the simulation core consumes: a frame count and a
//! reference sequence. The text format matches the original assignment
//! layout: whitespace-separated integers `frames`, `n`, then `n` page
//! identifiers, with any line structure.
//!
//! All input validation happens here, before [`crate::simulate`] is ever
//! invoked; the core only re-checks the frame count.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::common::config::MIN_FRAMES;
use crate::common::{Error, PageId, Result};

/// A validated simulation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    /// Number of physical frames, at least 1.
    pub frame_count: usize,

    /// The reference sequence, possibly empty.
    pub refs: Vec<PageId>,
}

impl Workload {
    /// Parse a workload from any reader.
    ///
    /// # Errors
    /// - [`Error::MalformedWorkload`] on missing or non-integer tokens, a
    ///   frame count below 1, or fewer page identifiers than declared
    /// - [`Error::Io`] if the reader fails
    pub fn parse<R: Read>(reader: R) -> Result<Self> {
        let mut text = String::new();
        let mut reader = BufReader::new(reader);
        reader.read_to_string(&mut text)?;

        let mut tokens = text.split_whitespace();

        let frame_count: usize = next_int(&mut tokens, "frame count")?;
        if frame_count < MIN_FRAMES {
            return Err(Error::MalformedWorkload(format!(
                "frame count must be at least {}, got {}",
                MIN_FRAMES, frame_count
            )));
        }

        let n: usize = next_int(&mut tokens, "reference count")?;
        let mut refs = Vec::with_capacity(n);
        for i in 0..n {
            let id: u32 = next_int(&mut tokens, &format!("page identifier {}", i + 1))?;
            refs.push(PageId::new(id));
        }

        Ok(Self { frame_count, refs })
    }

    /// Parse a workload from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(File::open(path)?)
    }
}

/// Pull one integer token, naming the field in the error.
fn next_int<'a, T, I>(tokens: &mut I, what: &str) -> Result<T>
where
    T: std::str::FromStr,
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| Error::MalformedWorkload(format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| Error::MalformedWorkload(format!("invalid {}: {:?}", what, token)))
}
