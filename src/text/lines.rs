/// Trims every line and drops the ones left empty.
///
/// Both `\n` and `\r\n` line endings are accepted.
///
/// ```
/// use teampaste::text::trim_lines;
/// let lines = trim_lines("\nZacian @ Rusted Sword  \nAbility: Intrepid Sword  \nLevel: 50  \n");
/// assert_eq!(lines, vec!["Zacian @ Rusted Sword", "Ability: Intrepid Sword", "Level: 50"]);
/// ```
pub fn trim_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Splits a paste into blocks of trimmed lines.
///
/// A run of one or more whitespace-only lines ends a block. Whitespace at the
/// start or end of the text never produces a block of its own.
///
/// ```
/// use teampaste::text::split_blocks;
/// let blocks = split_blocks("  \n=== [gen8] Box ===\n\r\n  \nKoffing\nAbility: Levitate\n\n");
/// assert_eq!(blocks, vec![vec!["=== [gen8] Box ==="], vec!["Koffing", "Ability: Levitate"]]);
/// ```
pub fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
