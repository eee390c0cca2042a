use crate::errors::*;

// U is only ever matched literally; no ambiguity code implies it.
const MAPPING: [(u8, &[u8]); 16] = [
    (b'A', b"A"),
    (b'C', b"C"),
    (b'G', b"G"),
    (b'T', b"T"),
    (b'U', b"U"),
    (b'R', b"AG"),
    (b'Y', b"CT"),
    (b'K', b"GT"),
    (b'M', b"AC"),
    (b'S', b"CG"),
    (b'W', b"AT"),
    (b'B', b"CGT"),
    (b'D', b"AGT"),
    (b'H', b"ACT"),
    (b'V', b"ACG"),
    (b'N', b"ACGT"),
];

lazy_static! {
    static ref IUPAC: Vec<Option<&'static [u8]>> = {
        let mut table = vec![None; 256];

        for &(symbol, bases) in &MAPPING {
            table[symbol as usize] = Some(bases);
        }

        table
    };
}

/// Returns the concrete bases accepted by an IUPAC pattern symbol.
pub fn accepted_bases(symbol: u8) -> Result<&'static [u8]> {
    match IUPAC[symbol as usize] {
        Some(bases) => Ok(bases),
        None => Err(ErrorKind::InvalidSymbol(symbol).into()),
    }
}
