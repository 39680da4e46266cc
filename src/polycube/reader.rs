//! Reading polycubes from a stream of coordinate triples.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use flate2::read::GzDecoder;

use super::Polycube;
use crate::lattice::Position3;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Compression of a coordinate stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

/// A byte source that transparently decompresses gzip input.
pub enum Reader<T>
where
    T: Read,
{
    Uncompressed(BufReader<T>),
    Gzip(GzDecoder<BufReader<T>>),
}

impl<T> Reader<T>
where
    T: Read,
{
    /// Sniff the first bytes of `reader` and pick the matching decoder.
    pub fn new(reader: T) -> std::io::Result<Self> {
        let mut reader = BufReader::new(reader);
        let head = reader.fill_buf()?;

        if head.starts_with(&GZIP_MAGIC) {
            Ok(Self::Gzip(GzDecoder::new(reader)))
        } else {
            Ok(Self::Uncompressed(reader))
        }
    }

    pub fn compression(&self) -> Compression {
        match self {
            Reader::Uncompressed(_) => Compression::None,
            Reader::Gzip(_) => Compression::Gzip,
        }
    }
}

impl<T> Read for Reader<T>
where
    T: Read,
{
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Reader::Uncompressed(t) => t.read(buf),
            Reader::Gzip(t) => t.read(buf),
        }
    }
}

/// The outcome of reading a coordinate stream.
#[derive(Debug, Clone)]
pub struct ReadReport {
    pub polycube: Polycube,
    /// Number of complete triples read, duplicates included.
    pub triples: usize,
    /// The first token that was not an integer, if reading stopped early.
    pub bad_token: Option<String>,
    pub compression: Compression,
}

/// Read whitespace separated `x y z` triples until the input is exhausted.
///
/// Coordinates must fit an `i32`. Reading stops at the first token that
/// does not; the cubes read before it are kept. A trailing incomplete
/// triple is dropped. Input that is not UTF-8 is an error.
pub fn read_polycube<T>(input: T) -> std::io::Result<ReadReport>
where
    T: Read,
{
    let input = Reader::new(input)?;
    let compression = input.compression();

    let mut polycube = Polycube::new();
    let mut triples = 0;
    let mut bad_token = None;
    let mut coords = [0i64; 3];
    let mut filled = 0;

    'lines: for line in BufReader::new(input).lines() {
        let line = line?;

        for token in line.split_whitespace() {
            match token.parse::<i32>() {
                Ok(v) => {
                    coords[filled] = i64::from(v);
                    filled += 1;
                }
                Err(_) => {
                    log::warn!("stopped reading at non-integer token {token:?} after {triples} cubes");
                    bad_token = Some(token.to_string());
                    break 'lines;
                }
            }

            if filled == 3 {
                let [x, y, z] = coords;
                polycube.insert(Position3::new(x, y, z));
                triples += 1;
                filled = 0;
            }
        }
    }

    if filled != 0 && bad_token.is_none() {
        log::debug!("dropping incomplete trailing triple ({filled} of 3 values)");
    }

    Ok(ReadReport {
        polycube,
        triples,
        bad_token,
        compression,
    })
}

/// Read a polycube from the file at `path`.
pub fn read_file<P>(path: P) -> std::io::Result<ReadReport>
where
    P: AsRef<Path>,
{
    read_polycube(File::open(path)?)
}
