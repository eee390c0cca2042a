use crate::errors::*;
use crate::iupac;

/// A query pattern whose IUPAC symbols have been resolved to sets of bases.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    symbols: Vec<u8>,
    accepted: Vec<&'static [u8]>,
}

impl Pattern {
    /// Fails with `ErrorKind::InvalidSymbol` on the first symbol outside the
    /// IUPAC nucleotide alphabet.
    pub fn new(symbols: &[u8]) -> Result<Pattern> {
        let accepted = symbols
            .iter()
            .map(|&symbol| iupac::accepted_bases(symbol))
            .collect::<Result<Vec<_>>>()?;

        Ok(Pattern {
            symbols: symbols.to_owned(),
            accepted,
        })
    }

    pub fn accepts(&self, idx: usize, base: u8) -> bool {
        self.accepted[idx].contains(&base)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }
}
