//! Shared rendering utilities.
//!
//! Text helpers here count characters, not bytes, so recipe names such as
//! "Piña Colada" truncate and highlight correctly.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters, ending in `...` when cut.
///
/// # Examples
///
/// ```
/// use emerald_shaker::ui::helpers::truncate;
///
/// assert_eq!(truncate("Old Fashioned", 20), "Old Fashioned");
/// assert_eq!(truncate("Old Fashioned", 8), "Old F...");
/// assert_eq!(truncate("Old Fashioned", 2), "Ol");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Keeps the last characters of `text` that fit in `width`, starting with
/// `...` when cut. Used where the end of the text matters, such as a query
/// being typed.
///
/// # Examples
///
/// ```
/// use emerald_shaker::ui::helpers::truncate_start;
///
/// assert_eq!(truncate_start("Old Fashioned", 20), "Old Fashioned");
/// assert_eq!(truncate_start("Old Fashioned", 8), "...ioned");
/// assert_eq!(truncate_start("Old Fashioned", 2), "ed");
/// ```
#[must_use]
pub fn truncate_start(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().skip(len - width).collect();
    }
    let tail: String = text.chars().skip(len - (width - 3)).collect();
    format!("...{tail}")
}

/// Prints `text` centered on a full-width line at `row`, in `style`.
///
/// The line is padded on both sides so a background color in `style` spans
/// the whole pane. An odd leftover column goes to the right.
pub fn print_centered_line(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = char_len(&text);
    let left = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(left + len);

    position_cursor(row, 1);
    print!(
        "{style}{}{text}{}{}",
        " ".repeat(left),
        " ".repeat(right),
        Theme::reset()
    );
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// Words longer than `width` are split. Blank input yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Prints `text` with the character range `highlight` in match colors.
///
/// `restore` is the escape sequence that re-establishes the surrounding
/// style after the highlighted run.
pub fn render_highlighted_text(
    text: &str,
    highlight: Option<(usize, usize)>,
    theme: &Theme,
    restore: &str,
) {
    let Some((start, end)) = highlight else {
        print!("{text}");
        return;
    };

    let chars: Vec<char> = text.chars().collect();
    let start = start.min(chars.len());
    let end = end.clamp(start, chars.len());

    let before: String = chars[..start].iter().collect();
    let matched: String = chars[start..end].iter().collect();
    let after: String = chars[end..].iter().collect();

    print!("{before}");
    print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
    print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
    print!("{matched}");
    print!("{}", Theme::reset());
    print!("{restore}");
    print!("{after}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width_and_keeps_words() {
        let lines = wrap_text("Shake all ingredients with ice and strain", 16);
        assert_eq!(lines, ["Shake all", "ingredients with", "ice and strain"]);
        assert!(lines.iter().all(|l| char_len(l) <= 16));
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), ["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn wrap_of_blank_text_is_empty() {
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Piña Colada", 7), "Piña...");
        assert_eq!(truncate("Piña", 4), "Piña");
    }

    #[test]
    fn truncate_start_keeps_the_tail() {
        assert_eq!(truncate_start("Piña Colada█", 8), "...lada█");
        assert_eq!(char_len(&truncate_start("Piña Colada█", 8)), 8);
        assert_eq!(truncate_start("Piña", 4), "Piña");
    }
}
