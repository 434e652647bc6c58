//! Format/validate boundary.
//!
//! The render driver produces unindented source. A [`SourceFormatter`] turns
//! it into canonical Go or reports why it is not valid; [`format_source`]
//! makes sure the raw buffer is never lost when that happens.

use std::io::Write;
use std::process::{Command, Stdio};

use designgen_core::config::FormatterKind;

use crate::error::{FormatError, GenerateError};

/// A collaborator that canonicalizes Go source text.
pub trait SourceFormatter: Send + Sync {
    fn name(&self) -> &str;
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Pick the formatter for a configured kind.
pub fn formatter_for(kind: FormatterKind, gofmt: &str) -> Box<dyn SourceFormatter> {
    match kind {
        FormatterKind::Auto => Box::new(AutoFormatter::new(gofmt)),
        FormatterKind::Gofmt => Box::new(Gofmt::new(gofmt)),
        FormatterKind::Builtin => Box::new(BuiltinFormatter),
        FormatterKind::None => Box::new(Passthrough),
    }
}

/// Format `raw`, writing the unformatted buffer to `diagnostics` on failure.
pub fn format_source(
    raw: String,
    formatter: &dyn SourceFormatter,
    diagnostics: &mut dyn Write,
) -> Result<String, GenerateError> {
    match formatter.format(&raw) {
        Ok(formatted) => Ok(formatted),
        Err(source) => {
            log::debug!("{} failed: {source}", formatter.name());
            if let Err(err) = diagnostics
                .write_all(raw.as_bytes())
                .and_then(|()| diagnostics.flush())
            {
                log::warn!("could not write unformatted source to diagnostics: {err}");
            }
            Err(GenerateError::Format { source, raw })
        }
    }
}

/// Pipes the source through the `gofmt` program.
pub struct Gofmt {
    program: String,
}

impl Gofmt {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Gofmt {
    fn default() -> Self {
        Self::new("gofmt")
    }
}

impl SourceFormatter for Gofmt {
    fn name(&self) -> &str {
        &self.program
    }

    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| FormatError::Spawn {
                program: self.program.clone(),
                source: err,
            })?;

        // gofmt reads all of stdin before writing anything.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes())?;
        }
        let output = child.wait_with_output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FormatError::Rejected(stderr.trim().to_string()));
        }
        String::from_utf8(output.stdout)
            .map_err(|err| FormatError::Rejected(format!("output is not UTF-8: {err}")))
    }
}

/// gofmt when it can be spawned, [`BuiltinFormatter`] otherwise.
pub struct AutoFormatter {
    gofmt: Gofmt,
}

impl AutoFormatter {
    pub fn new(gofmt: impl Into<String>) -> Self {
        Self {
            gofmt: Gofmt::new(gofmt),
        }
    }
}

impl SourceFormatter for AutoFormatter {
    fn name(&self) -> &str {
        "auto"
    }

    fn format(&self, source: &str) -> Result<String, FormatError> {
        match self.gofmt.format(source) {
            Err(FormatError::Spawn { program, source: err }) => {
                log::warn!("{program} not available ({err}), using the builtin formatter");
                BuiltinFormatter.format(source)
            }
            result => result,
        }
    }
}

/// Returns the source unchanged.
pub struct Passthrough;

impl SourceFormatter for Passthrough {
    fn name(&self) -> &str {
        "none"
    }

    fn format(&self, source: &str) -> Result<String, FormatError> {
        Ok(source.to_string())
    }
}

/// Formatter that needs no Go toolchain.
///
/// Validates bracket nesting, string and comment termination, then lays the
/// source out the way gofmt does for the code this crate emits: one tab per
/// open bracket group, no trailing whitespace, single blank lines, and one
/// final newline. Alignment of comments and composite literals is not
/// reproduced.
pub struct BuiltinFormatter;

impl SourceFormatter for BuiltinFormatter {
    fn name(&self) -> &str {
        "builtin"
    }

    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut scanner = Scanner::default();
        // Bracket depth at which each still-indented group was opened.
        let mut openers: Vec<usize> = Vec::new();
        let mut lines: Vec<Line> = Vec::new();

        for (index, text) in source.lines().enumerate() {
            let number = index + 1;

            if scanner.in_raw_string() {
                let depth = scanner.scan_line(text, number)?;
                update_openers(&mut openers, depth);
                lines.push(Line::Verbatim(text.to_string()));
                continue;
            }

            let text = text.trim();
            let depth = scanner.scan_line(text, number)?;
            if text.is_empty() {
                lines.push(Line::Blank);
                continue;
            }
            while openers.last().is_some_and(|&base| base >= depth.min) {
                openers.pop();
            }
            lines.push(Line::Code(format!("{}{text}", "\t".repeat(openers.len()))));
            if depth.end > depth.min {
                openers.push(depth.min);
            }
        }

        scanner.finish()?;
        Ok(join_lines(lines))
    }
}

enum Line {
    Blank,
    Code(String),
    Verbatim(String),
}

fn update_openers(openers: &mut Vec<usize>, depth: LineDepth) {
    while openers.last().is_some_and(|&base| base >= depth.min) {
        openers.pop();
    }
    if depth.end > depth.min {
        openers.push(depth.min);
    }
}

fn join_lines(lines: Vec<Line>) -> String {
    let mut out = String::new();
    let mut pending_blank = false;
    for line in lines {
        let text = match line {
            Line::Blank => {
                pending_blank = !out.is_empty();
                continue;
            }
            Line::Code(text) | Line::Verbatim(text) => text,
        };
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }
        out.push_str(&text);
        out.push('\n');
    }
    out
}

#[derive(Debug, Clone, Copy)]
struct LineDepth {
    /// Lowest bracket depth reached on the line.
    min: usize,
    /// Bracket depth after the line.
    end: usize,
}

#[derive(Default)]
struct Scanner {
    stack: Vec<(char, usize)>,
    raw_string: Option<usize>,
    block_comment: Option<usize>,
}

impl Scanner {
    fn in_raw_string(&self) -> bool {
        self.raw_string.is_some()
    }

    fn scan_line(&mut self, text: &str, number: usize) -> Result<LineDepth, FormatError> {
        let mut min = self.stack.len();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if self.raw_string.is_some() {
                if c == '`' {
                    self.raw_string = None;
                }
                continue;
            }
            if self.block_comment.is_some() {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.block_comment = None;
                }
                continue;
            }

            match c {
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.block_comment = Some(number);
                }
                '`' => self.raw_string = Some(number),
                '"' | '\'' => {
                    if !skip_quoted(&mut chars, c) {
                        let kind = if c == '"' { "string" } else { "rune" };
                        return Err(syntax(number, format!("unterminated {kind} literal")));
                    }
                }
                '(' | '[' | '{' => self.stack.push((c, number)),
                ')' | ']' | '}' => {
                    match self.stack.pop() {
                        Some((open, _)) if closer(open) == c => {}
                        Some((open, line)) => {
                            return Err(syntax(
                                number,
                                format!(
                                    "unexpected `{c}`, expected `{}` to close `{open}` from line {line}",
                                    closer(open)
                                ),
                            ));
                        }
                        None => return Err(syntax(number, format!("unexpected `{c}`"))),
                    }
                    min = min.min(self.stack.len());
                }
                _ => {}
            }
        }

        Ok(LineDepth {
            min,
            end: self.stack.len(),
        })
    }

    fn finish(&self) -> Result<(), FormatError> {
        if let Some(line) = self.raw_string {
            return Err(syntax(line, "unterminated raw string literal"));
        }
        if let Some(line) = self.block_comment {
            return Err(syntax(line, "unterminated comment"));
        }
        match self.stack.last() {
            Some(&(open, line)) => Err(syntax(line, format!("unclosed `{open}`"))),
            None => Ok(()),
        }
    }
}

/// Consume up to and including the closing `quote`. False when the line ends first.
fn skip_quoted(chars: &mut impl Iterator<Item = char>, quote: char) -> bool {
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            c if c == quote => return true,
            _ => {}
        }
    }
    false
}

fn closer(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

fn syntax(line: usize, message: impl Into<String>) -> FormatError {
    FormatError::Syntax {
        line,
        message: message.into(),
    }
}
