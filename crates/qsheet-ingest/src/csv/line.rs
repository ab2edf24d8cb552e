//! Quote-aware splitting of a single physical line.

/// Splits one physical CSV line into trimmed cells.
///
/// A `"` toggles quoted mode, except that `""` inside quotes emits one
/// literal quote. Commas split cells only outside quotes. Every cell is
/// trimmed of surrounding whitespace, and the final cell is always emitted,
/// so `a,` yields `["a", ""]`.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            ('"', _) => in_quotes = !in_quotes,
            (',', false) => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    cells.push(current.trim().to_string());
    cells
}
