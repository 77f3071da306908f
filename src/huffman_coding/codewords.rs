use log::debug;

use super::symbol_table::FrequencyTable;
use super::tree::{HuffmanTree, Node, NodeId};

/// Codeword given to the only symbol of a single-leaf tree.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Write every leaf's root-to-leaf path into its table entry.
///
/// Subtrees are walked in parallel. Each leaf is reached by exactly one path, so
/// the walks share nothing and the results are written back once they join.
pub fn assign_codewords(tree: &HuffmanTree, table: &mut FrequencyTable) {
    table.clear_codewords();
    let codes = match *tree.node(tree.root()) {
        // A lone leaf has no path; give it one bit so every symbol costs something.
        Node::Leaf { entry, .. } => vec![(entry, SINGLE_SYMBOL_CODE.to_string())],
        Node::Internal { .. } => walk(tree, tree.root(), String::new()),
    };
    debug!("Assigned {} codewords", codes.len());
    for (entry, code) in codes {
        table.set_codeword(entry, code);
    }
}

/// Pre-order walk returning `(table entry, codeword)` for every leaf under `id`,
/// left subtree first.
fn walk(tree: &HuffmanTree, id: NodeId, prefix: String) -> Vec<(usize, String)> {
    match *tree.node(id) {
        Node::Leaf { entry, .. } => vec![(entry, prefix)],
        Node::Internal { left, right, .. } => {
            let mut left_code = prefix.clone();
            left_code.push('0');
            let mut right_code = prefix;
            right_code.push('1');

            // The left walk is the stealable half; the right runs here.
            let (right_codes, mut codes) = rayon::join(
                || walk(tree, right, right_code),
                || walk(tree, left, left_code),
            );
            codes.extend(right_codes);
            codes
        }
    }
}
