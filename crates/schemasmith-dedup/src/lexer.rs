/// Bracket depth tracker for one definition block.
///
/// Characters inside string literals, template literals and comments are
/// ignored. Template literals and block comments may span lines; plain string
/// literals end at the end of the line. `${}` interpolation is not tracked.
#[derive(Debug, Default, Clone)]
pub struct DepthTracker {
    depth: i64,
    in_template: bool,
    in_block_comment: bool,
}

impl DepthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> i64 {
        self.depth
    }

    /// Feed one line; returns `true` when the line closes the block.
    pub fn feed(&mut self, line: &str) -> bool {
        let mut code = String::with_capacity(line.len());
        let mut quote: Option<char> = None;
        let mut chars = line.chars().peekable();

        while let Some(ch) = chars.next() {
            if self.in_block_comment {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.in_block_comment = false;
                }
                continue;
            }

            if self.in_template || quote.is_some() {
                code.push(ch);
                if ch == '\\' {
                    if let Some(escaped) = chars.next() {
                        code.push(escaped);
                    }
                } else if self.in_template && ch == '`' {
                    self.in_template = false;
                } else if quote == Some(ch) {
                    quote = None;
                }
                continue;
            }

            match ch {
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.in_block_comment = true;
                }
                '"' | '\'' => {
                    quote = Some(ch);
                    code.push(ch);
                }
                '`' => {
                    self.in_template = true;
                    code.push(ch);
                }
                '(' | '{' | '[' => {
                    self.depth += 1;
                    code.push(ch);
                }
                ')' | '}' | ']' => {
                    self.depth -= 1;
                    code.push(ch);
                }
                _ => code.push(ch),
            }
        }

        !self.in_template
            && !self.in_block_comment
            && self.depth <= 0
            && code.trim_end().ends_with(");")
    }
}
