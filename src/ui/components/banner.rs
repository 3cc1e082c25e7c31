//! Banner ad line above the footer.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BannerInfo;

/// Renders the banner across the full width of `row`.
pub fn render_banner(row: usize, banner: &BannerInfo, theme: &Theme, cols: usize) {
    let action = format!(" [{}] ", banner.call_to_action);
    let text = truncate(
        &format!(" Ad · {}: {}", banner.advertiser, banner.headline),
        cols.saturating_sub(char_len(&action)),
    );
    let gap = cols.saturating_sub(char_len(&text) + char_len(&action));

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.ad_fg));
    print!("{}", Theme::bg(&theme.colors.ad_bg));
    print!("{text}");
    print!("{}", " ".repeat(gap));
    if char_len(&action) <= cols {
        print!("{}{action}", Theme::bold());
    }
    print!("{}", Theme::reset());
}
