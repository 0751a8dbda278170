#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
}

/// Splits one line into fields.
///
/// `"` toggles quoting, `""` inside quotes is a literal quote and `,` only
/// separates fields outside quotes. Never fails: unbalanced quotes just
/// run to the end of the line, and the caller checks the field count.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::with_capacity(2);
    let mut current = String::new();
    let mut state = State::Unquoted;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match (state, ch) {
            (State::Quoted, '"') => {
                if chars.next_if_eq(&'"').is_some() {
                    current.push('"');
                } else {
                    state = State::Unquoted;
                }
            }
            (State::Quoted, c) => current.push(c),
            (State::Unquoted, '"') => state = State::Quoted,
            (State::Unquoted, ',') => fields.push(std::mem::take(&mut current)),
            (State::Unquoted, c) => current.push(c),
        }
    }

    fields.push(current);
    fields
}
