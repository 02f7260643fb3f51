//! Raw input line parsing.

/// Split a raw line into a lowercased command token and its positional
/// arguments. Returns `None` for blank input.
///
/// Arguments are passed through verbatim: no quoting, no coercion.
pub fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}
