use crate::huffman_coding::symbol_table::FrequencyTable;

const COLUMN: usize = 8;

/// Render the table as aligned Symbol / Counts / Code columns, one symbol per
/// line in table order. Whitespace symbols are shown escaped so the columns
/// stay readable.
pub fn letter_table(table: &FrequencyTable) -> String {
    let header = format!("{:<w$}{:<w$}Code\n", "Symbol", "Counts", w = COLUMN);
    table.iter().fold(header, |mut out, entry| {
        let symbol = match entry.symbol {
            ' ' => "' '".to_string(),
            c if c.is_whitespace() || c.is_control() => c.escape_default().to_string(),
            c => c.to_string(),
        };
        out.push_str(&format!(
            "{:<w$}{:<w$}{}\n",
            symbol,
            entry.count,
            entry.codeword,
            w = COLUMN
        ));
        out
    })
}
