//! Binary encode and decode routines.

use intset_core::{IntSet, SetError, MAX_CAPACITY};

use crate::error::{CodecError, CodecResult};

/// Size of the cardinality header and of each element, in bytes.
const WORD: usize = 4;

/// Exact encoded size of a set: the header plus one word per element.
pub fn encoded_len(set: &IntSet) -> usize {
    WORD + WORD * set.cardinality()
}

/// Encode a canonical set into a fresh buffer.
pub fn encode(set: &IntSet) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_into(set, &mut buf);
    buf
}

/// Encode a canonical set, appending to a caller-owned buffer.
///
/// Reserves exactly the bytes it appends, so a host handing in an empty
/// buffer ends up with an allocation sized to the value.
pub fn encode_into(set: &IntSet, buf: &mut Vec<u8>) {
    buf.reserve(encoded_len(set));
    buf.extend_from_slice(&(set.cardinality() as u32).to_be_bytes());
    for value in set.iter() {
        buf.extend_from_slice(&value.to_be_bytes());
    }
}

/// Decode a binary payload into a canonical set.
///
/// The declared cardinality is checked against the capacity bound before
/// the payload length is even computed, so a hostile header cannot drive an
/// allocation. The payload must then hold exactly the declared elements and
/// nothing more; leftover bytes are a malformed value, not padding.
/// Elements are trusted to be distinct, since only canonical sets are ever
/// encoded.
pub fn decode(bytes: &[u8]) -> CodecResult<IntSet> {
    if bytes.len() < WORD {
        return Err(CodecError::Truncated {
            needed: WORD,
            available: bytes.len(),
        });
    }
    let mut header = [0u8; WORD];
    header.copy_from_slice(&bytes[..WORD]);
    let cardinality = u32::from_be_bytes(header) as usize;

    if cardinality > MAX_CAPACITY {
        return Err(SetError::CapacityExceeded {
            limit: MAX_CAPACITY,
        }
        .into());
    }

    let needed = WORD + WORD * cardinality;
    if bytes.len() < needed {
        return Err(CodecError::Truncated {
            needed,
            available: bytes.len(),
        });
    }
    if bytes.len() > needed {
        return Err(CodecError::TrailingBytes {
            remaining: bytes.len() - needed,
        });
    }

    let mut elements = Vec::with_capacity(cardinality);
    for chunk in bytes[WORD..].chunks_exact(WORD) {
        let mut word = [0u8; WORD];
        word.copy_from_slice(chunk);
        elements.push(i32::from_be_bytes(word));
    }

    Ok(IntSet::from_canonical(elements)?)
}

// ==================== TESTS ====================
