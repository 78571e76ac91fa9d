//! Comment removal for JSON-with-comments documents
//!
//! Biome accepts `//` and `/* */` comments in its configuration files. This
//! scanner drops them while leaving string literals untouched, so a value such
//! as `"https://biomejs.dev"` survives intact. Newlines inside block comments
//! are kept so parse errors still point at the right line.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    String { escaped: bool },
    LineComment,
    BlockComment { star: bool },
}

/// Strip line and block comments from `input`
pub fn strip_comments(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut state = State::Code;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        state = match state {
            State::Code => match c {
                '"' => {
                    output.push(c);
                    State::String { escaped: false }
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    State::LineComment
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    State::BlockComment { star: false }
                }
                _ => {
                    output.push(c);
                    State::Code
                }
            },
            State::String { escaped } => {
                output.push(c);
                match c {
                    _ if escaped => State::String { escaped: false },
                    '\\' => State::String { escaped: true },
                    '"' => State::Code,
                    _ => State::String { escaped: false },
                }
            }
            State::LineComment => match c {
                '\n' => {
                    output.push(c);
                    State::Code
                }
                _ => State::LineComment,
            },
            State::BlockComment { star } => match c {
                '/' if star => State::Code,
                '\n' => {
                    output.push(c);
                    State::BlockComment { star: false }
                }
                _ => State::BlockComment { star: c == '*' },
            },
        };
    }

    output
}
