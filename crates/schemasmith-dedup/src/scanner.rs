use crate::header::HeaderPattern;
use crate::lexer::DepthTracker;

/// A contiguous span of lines declaring one definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionBlock<'a> {
    pub name: String,
    pub raw_lines: Vec<&'a str>,
}

/// A piece of the scanned source, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A line outside any definition block.
    Line(&'a str),
    Block(DefinitionBlock<'a>),
    /// A block still open at end of input.
    Unterminated(DefinitionBlock<'a>),
}

enum State<'a> {
    Outside,
    Inside {
        block: DefinitionBlock<'a>,
        tracker: DepthTracker,
    },
}

fn advance<'a>(
    segments: &mut Vec<Segment<'a>>,
    block: DefinitionBlock<'a>,
    mut tracker: DepthTracker,
    line: &'a str,
) -> State<'a> {
    if tracker.feed(line) {
        segments.push(Segment::Block(block));
        State::Outside
    } else {
        State::Inside { block, tracker }
    }
}

/// Split `source` (on `\n`) into plain lines and definition blocks.
pub fn scan<'a>(source: &'a str, pattern: &HeaderPattern) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut state = State::Outside;

    for line in source.split('\n') {
        state = match state {
            State::Outside => match pattern.capture(line) {
                Some(name) => {
                    let block = DefinitionBlock {
                        name: name.to_string(),
                        raw_lines: vec![line],
                    };
                    advance(&mut segments, block, DepthTracker::new(), line)
                }
                None => {
                    segments.push(Segment::Line(line));
                    State::Outside
                }
            },
            State::Inside { mut block, tracker } => {
                block.raw_lines.push(line);
                advance(&mut segments, block, tracker, line)
            }
        };
    }

    if let State::Inside { block, .. } = state {
        segments.push(Segment::Unterminated(block));
    }

    segments
}

/// Closed definition blocks of `source`, in source order.
pub fn definition_blocks<'a>(source: &'a str, pattern: &HeaderPattern) -> Vec<DefinitionBlock<'a>> {
    scan(source, pattern)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Block(block) => Some(block),
            _ => None,
        })
        .collect()
}
