//! Full-pane interstitial ad.
//!
//! The creative sits in a framed box in the middle of the pane; the pane
//! behind it is left blank so nothing of the listing shows through.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InterstitialView;

const BOX_MARGIN: usize = 3;

pub fn render_interstitial(view: &InterstitialView, theme: &Theme, rows: usize, cols: usize) {
    let box_width = cols.saturating_sub(BOX_MARGIN * 2).max(4);
    let inner = box_width - 2;

    // label, blank, advertiser, headline, blank, body..., blank, action
    let content = 7 + view.body.len();
    let box_height = content + 2;
    let top = rows.saturating_sub(box_height + 2) / 2 + 1;

    let frame = format!("{}{}", Theme::fg(&theme.colors.ad_fg), Theme::bg(&theme.colors.ad_bg));
    let mut row = top;

    position_cursor(row, BOX_MARGIN + 1);
    print!("{frame}╭{}╮{}", "─".repeat(inner), Theme::reset());
    row += 1;

    let mut line = |text: &str, style: &str| {
        let text = truncate(text, inner.saturating_sub(2));
        let padding = inner.saturating_sub(char_len(&text) + 2);
        position_cursor(row, BOX_MARGIN + 1);
        print!("{frame}│ {style}{text}{}{frame}{} │{}", Theme::reset(), " ".repeat(padding), Theme::reset());
        row += 1;
    };

    line(view.label, Theme::dim());
    line("", "");
    line(view.advertiser.as_str(), "");
    line(view.headline.as_str(), Theme::bold());
    line("", "");
    for body in &view.body {
        line(body.as_str(), "");
    }
    line("", "");
    line(format!("[ {} ]", view.call_to_action).as_str(), Theme::bold());

    position_cursor(row, BOX_MARGIN + 1);
    print!("{frame}╰{}╯{}", "─".repeat(inner), Theme::reset());

    let prompt_len = char_len(view.prompt);
    position_cursor(row + 2, cols.saturating_sub(prompt_len) / 2 + 1);
    print!("{}{}{}", Theme::fg(&theme.colors.text_dim), view.prompt, Theme::reset());
}
