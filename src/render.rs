//! Turns sorted entries into the text written to stdout.
//!
//! Renderers build a complete `String` and never touch the terminal
//! themselves, so the caller decides where output goes and how write
//! failures are handled.

use crate::entry::{Entry, Kind, LongEntry};
use crate::error::LsError;
use console::{Style, Term, measure_text_width};

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;
const COLUMN_GAP: usize = 2;

/// Name styling for one output stream.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The rendered name of `entry`. Directories carry a trailing `/`.
    pub fn name(&self, entry: &Entry) -> String {
        match entry.kind {
            Kind::Directory => {
                format!("{}/", self.paint(Style::new().blue().bold(), &entry.name))
            }
            Kind::Symlink => self.paint(Style::new().blue().bright().underlined(), &entry.name),
            Kind::File if entry.is_executable() => {
                self.paint(Style::new().green().bright(), &entry.name)
            }
            Kind::File | Kind::Other => entry.name.clone(),
        }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        style
            .force_styling(self.enabled)
            .apply_to(text)
            .to_string()
    }
}

/// Columns available on stdout, or [`DEFAULT_TERMINAL_WIDTH`] when stdout
/// is not a terminal.
pub fn terminal_width() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_rows, cols)| cols as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Short listing: a single line when everything fits in `width`,
/// otherwise a row-major grid of equally wide columns.
pub fn short(entries: &[Entry], width: usize, palette: &Palette) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut out = String::new();

    let line_width: usize = entries
        .iter()
        .map(|entry| entry.display_width() + COLUMN_GAP)
        .sum::<usize>()
        - COLUMN_GAP;

    if line_width <= width {
        let names: Vec<String> = entries.iter().map(|entry| palette.name(entry)).collect();
        out.push_str(&names.join("  "));
        out.push('\n');
        return out;
    }

    let max_width = entries.iter().map(Entry::display_width).max().unwrap_or(0);
    let per_row = (width / (max_width + COLUMN_GAP)).max(1);

    for row in entries.chunks(per_row) {
        for (index, entry) in row.iter().enumerate() {
            out.push_str(&palette.name(entry));
            if index + 1 < row.len() {
                let padding = max_width - entry.display_width() + COLUMN_GAP;
                out.push_str(&" ".repeat(padding));
            }
        }
        out.push('\n');
    }

    out
}

/// Long listing: `owner group size name`, one entry per line, with the
/// first three columns right-aligned.
pub fn long(entries: &[LongEntry], palette: &Palette) -> String {
    let owner_width = column_width(entries, |e| &e.owner);
    let group_width = column_width(entries, |e| &e.group);
    let size_width = column_width(entries, |e| &e.size);

    let mut out = String::new();

    for entry in entries {
        pad_left(&mut out, &entry.owner, owner_width);
        out.push(' ');
        pad_left(&mut out, &entry.group, group_width);
        out.push(' ');
        pad_left(&mut out, &entry.size, size_width);
        out.push(' ');
        out.push_str(&palette.name(&entry.entry));
        if let Some(target) = &entry.link_target {
            out.push_str(" -> ");
            out.push_str(target);
        }
        out.push('\n');
    }

    out
}

/// `Error: <message>`, with the prefix styled when `enabled`.
pub fn error_line(err: &LsError, enabled: bool) -> String {
    let prefix = Style::new()
        .red()
        .bold()
        .force_styling(enabled)
        .apply_to("Error");
    format!("{prefix}: {err}")
}

fn column_width<F>(entries: &[LongEntry], field: F) -> usize
where
    F: Fn(&LongEntry) -> &String,
{
    entries
        .iter()
        .map(|entry| measure_text_width(field(entry)))
        .max()
        .unwrap_or(0)
}

fn pad_left(out: &mut String, text: &str, width: usize) {
    let padding = width.saturating_sub(measure_text_width(text));
    out.push_str(&" ".repeat(padding));
    out.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names() {
        let palette = Palette::plain();
        assert_eq!(palette.name(&Entry::new("src", Kind::Directory)), "src/");
        assert_eq!(palette.name(&Entry::new("lnk", Kind::Symlink)), "lnk");
        assert_eq!(
            palette.name(&Entry::new("run", Kind::File).with_mode(0o755)),
            "run"
        );
    }

    #[test]
    fn test_colored_names() {
        let palette = Palette::new(true);

        let dir = palette.name(&Entry::new("src", Kind::Directory));
        assert!(dir.starts_with("\u{1b}["));
        assert!(dir.ends_with("/"));
        assert_eq!(console::strip_ansi_codes(&dir), "src/");

        let exe = palette.name(&Entry::new("run", Kind::File).with_mode(0o755));
        assert_ne!(exe, "run");
        assert_eq!(console::strip_ansi_codes(&exe), "run");

        let plain = palette.name(&Entry::new("notes.txt", Kind::File));
        assert_eq!(plain, "notes.txt");
    }

    #[test]
    fn test_error_line() {
        let err = LsError::UnknownFlag("z".into());
        assert_eq!(error_line(&err, false), "Error: Unknown flag \"z\"");
        let styled = error_line(&err, true);
        assert_eq!(console::strip_ansi_codes(&styled), "Error: Unknown flag \"z\"");
    }

    #[test]
    fn test_pad_left_uses_display_width() {
        let mut out = String::new();
        pad_left(&mut out, "日本", 5);
        assert_eq!(out, " 日本");
    }
}
