/// Parses a human-entered coordinate: two integers, optionally
/// comma-separated, optionally wrapped in parentheses. Returns `None`
/// for anything else; the caller re-prompts.
pub fn parse_coordinate(input: &str) -> Option<(u8, u8)> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('(').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(')').unwrap_or(trimmed);

    let mut parts = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());

    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}
