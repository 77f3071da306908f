use log::debug;
use std::ops::Range;

use super::symbol_table::FrequencyTable;
use crate::error::{CodecError, Result};
use crate::tools::fork_join::bisect;

/// Concatenate the codeword of every symbol in `data`, in input order.
///
/// Ranges longer than `threshold` are split and encoded in parallel; fragments
/// are joined left before right. Every symbol must have an entry with an
/// assigned codeword in `table`.
pub fn encode(data: &[char], table: &FrequencyTable, threshold: usize) -> Result<String> {
    let encoded = bisect(
        0..data.len(),
        threshold,
        &|range: Range<usize>| encode_range(data, range, table),
        &|left: Result<String>, right: Result<String>| {
            let mut out = left?;
            out.push_str(&right?);
            Ok(out)
        },
    )?;
    debug!("Encoded {} symbols into {} bits", data.len(), encoded.len());
    Ok(encoded)
}

fn encode_range(data: &[char], range: Range<usize>, table: &FrequencyTable) -> Result<String> {
    let mut out = String::new();
    for position in range {
        let symbol = data[position];
        match table.get(symbol) {
            Some(entry) if !entry.codeword.is_empty() => out.push_str(&entry.codeword),
            _ => return Err(CodecError::UnknownSymbol { symbol, position }),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::symbol_table::SymbolLookup;

    fn table(codes: &[(char, &str)]) -> FrequencyTable {
        let mut table = FrequencyTable::new(SymbolLookup::Hashed);
        for (i, &(symbol, code)) in codes.iter().enumerate() {
            table.record(symbol, i);
            table.set_codeword(i, code.to_string());
        }
        table
    }

    #[test]
    fn concatenates_in_order() {
        let t = table(&[('a', "0"), ('b', "10"), ('c', "11")]);
        let data: Vec<char> = "abcabca".chars().collect();
        for threshold in [1, 2, 3, 100] {
            assert_eq!(encode(&data, &t, threshold).unwrap(), "01011010110");
        }
    }

    #[test]
    fn empty_input_encodes_to_nothing() {
        let t = table(&[('a', "0")]);
        assert_eq!(encode(&[], &t, 4).unwrap(), "");
    }

    #[test]
    fn unknown_symbol_is_reported() {
        let t = table(&[('a', "0"), ('b', "1")]);
        let data: Vec<char> = "abba?ab".chars().collect();
        for threshold in [1, 4, 100] {
            assert_eq!(
                encode(&data, &t, threshold),
                Err(CodecError::UnknownSymbol {
                    symbol: '?',
                    position: 4
                })
            );
        }
    }

    #[test]
    fn uncoded_entry_is_reported() {
        let mut t = table(&[('a', "0")]);
        t.clear_codewords();
        assert!(matches!(
            encode(&['a'], &t, 4),
            Err(CodecError::UnknownSymbol { symbol: 'a', .. })
        ));
    }
}
