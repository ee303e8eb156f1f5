//! Provides the types used to print diagnostics to the console.

use std::fmt::{Display, Formatter};

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints the particular span of the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    /// Writes the left margin: either a line number padded to `width` or blank space, followed by
    /// the `pipe` character.
    fn write_gutter(
        f: &mut Formatter<'_>,
        line_number: Option<usize>,
        width: usize,
        pipe: &str,
    ) -> std::fmt::Result {
        match line_number {
            Some(line_number) => write!(
                f,
                "{}{:padding$}",
                Style::Bold.with(Color::Cyan.with(line_number)),
                "",
                padding = width - get_digit(line_number) + 1
            )?,
            None => write!(f, "{:width$}", "", width = width + 1)?,
        }

        write!(f, "{} ", Style::Bold.with(Color::Cyan.with(pipe)))
    }

    /// Writes a line of the source file without any highlighting, if the line exists.
    fn write_context_line(
        &self,
        f: &mut Formatter<'_>,
        line_number: usize,
        width: usize,
    ) -> std::fmt::Result {
        let Some(line) = self.span.source_file().get_line(line_number) else {
            return Ok(());
        };

        Self::write_gutter(f, Some(line_number), width, "┃")?;

        for char in line.chars() {
            match char {
                '\t' => write!(f, "    ")?,
                '\n' | '\r' => {}
                char => write!(f, "{char}")?,
            }
        }

        writeln!(f)
    }

    /// Checks whether the character at the 1-based `column` of `line_number` is covered by the
    /// span.
    fn is_in_span(&self, line_number: usize, column: usize) -> bool {
        let start = self.span.start_location();
        let end_column = self
            .span
            .end_location()
            .map_or(usize::MAX, |location| location.column);
        let end_line = self
            .span
            .end_location()
            .map_or_else(|| self.span.source_file().line_number(), |location| location.line);

        if start.line == end_line {
            line_number == start.line && column >= start.column && column < end_column
        } else {
            (line_number == start.line && column >= start.column)
                || (line_number == end_line && column < end_column)
                || (line_number > start.line && line_number < end_line)
        }
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();
        let start_location = self.span.start_location();

        let start_line = start_location.line;
        let end_line = self
            .span
            .end_location()
            .map_or_else(|| source_file.line_number(), |location| location.line);
        let is_multiline = start_line != end_line;

        // the line after the span is printed as well
        let width = get_digit(end_line + 1);

        write!(f, "{:width$}", "")?;
        writeln!(
            f,
            "{} {}:{}",
            Style::Bold.with(Color::Cyan.with("-->")),
            source_file.full_path().display(),
            start_location
        )?;

        Self::write_gutter(f, None, width, "┃")?;
        writeln!(f)?;

        self.write_context_line(f, start_line.saturating_sub(1), width)?;

        for line_number in start_line..=end_line {
            let Some(line) = source_file.get_line(line_number) else {
                continue;
            };

            Self::write_gutter(f, Some(line_number), width, "┃")?;

            for (index, char) in line.chars().enumerate() {
                match char {
                    '\t' => write!(f, "    ")?,
                    '\n' | '\r' => {}
                    char if self.is_in_span(line_number, index + 1) => write!(
                        f,
                        "{}",
                        Style::Underline.with(Style::Bold.with(Color::Red.with(char)))
                    )?,
                    char => write!(f, "{char}")?,
                }
            }

            writeln!(f)?;
        }

        if let (Some(help), false) = (&self.help_display, is_multiline) {
            Self::write_gutter(f, None, width, "┃")?;

            // align the help message with the start of the span
            if let Some(line) = source_file.get_line(start_line) {
                for char in line.chars().take(start_location.column.saturating_sub(1)) {
                    write!(f, "{}", if char == '\t' { "    " } else { " " })?;
                }
            }

            writeln!(f, "{}: {help}", Style::Bold.with("help"))?;
        }

        self.write_context_line(f, end_line.saturating_add(1), width)?;

        Self::write_gutter(f, None, width, "┃")?;
        writeln!(f)?;

        if let (Some(help), true) = (&self.help_display, is_multiline) {
            Self::write_gutter(f, None, width, "=")?;
            writeln!(f, "{}: {help}", Style::Bold.with("help"))?;
        }

        Ok(())
    }
}
