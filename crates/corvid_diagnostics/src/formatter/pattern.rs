//! The `%`-directive template language of the basic formatter.

/// One `%x` directive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Directive {
    /// `%b`: simple name of the source file.
    BaseName,
    /// `%f`: full name of the source file.
    FullName,
    /// `%l`: line number.
    Line,
    /// `%c`: column number, tabs expanded.
    Column,
    /// `%o`: preferred offset.
    Offset,
    /// `%s`: start offset.
    Start,
    /// `%e`: end offset.
    End,
    /// `%p`: localized kind prefix.
    Prefix,
    /// `%t`: kind prefix, omitted for unpositioned errors.
    ConditionalPrefix,
    /// `%m`: the message.
    Message,
    /// `%L`: lint category as `[category] `.
    LintCategory,
    /// `%_`: a space.
    Space,
    /// `%%`: a percent sign.
    Percent,
}

impl Directive {
    /// The directive for the character after `%`.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'b' => Directive::BaseName,
            'f' => Directive::FullName,
            'l' => Directive::Line,
            'c' => Directive::Column,
            'o' => Directive::Offset,
            's' => Directive::Start,
            'e' => Directive::End,
            'p' => Directive::Prefix,
            't' => Directive::ConditionalPrefix,
            'm' => Directive::Message,
            'L' => Directive::LintCategory,
            '_' => Directive::Space,
            '%' => Directive::Percent,
            _ => return None,
        })
    }
}

/// A parsed piece of a template.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Segment {
    /// A character copied to the output.
    Literal(char),
    /// A recognized directive.
    Directive(Directive),
    /// `%` followed by an unrecognized character; rendered as that character.
    Unknown(char),
}

/// Splits a template into literal characters and directives.
///
/// A trailing lone `%` is kept as a literal.
pub fn parse_pattern(pattern: &str) -> Vec<Segment> {
    let mut out = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(Segment::Literal(c));
            continue;
        }
        match chars.next() {
            Some(next) => out.push(
                Directive::from_char(next).map_or(Segment::Unknown(next), Segment::Directive),
            ),
            None => out.push(Segment::Literal('%')),
        }
    }
    out
}
