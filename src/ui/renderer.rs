//! Top-level rendering coordinator.
//!
//! Rendering is two steps: `AppState::compute_viewmodel` builds a
//! [`UIViewModel`], then the matching screen component prints it.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Does not clear the pane; Zellij hands the plugin a blank pane per frame.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match vm {
        UIViewModel::Splash(splash) => components::render_splash(splash, theme, rows, cols),
        UIViewModel::Listing(listing) => components::render_listing(listing, theme, rows, cols),
        UIViewModel::Detail(detail) => components::render_detail(detail, theme, rows, cols),
        UIViewModel::Interstitial(ad) => components::render_interstitial(ad, theme, rows, cols),
    }
}
