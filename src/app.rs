use crate::cli::Args;
use crate::error::AppError;
use crate::ui;
use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::stdout;

/// Run the interactive application flow.
///
/// - Sets up terminal raw mode and alternate screen
/// - Runs the interactive UI
/// - Cleans up terminal state
pub async fn run_interactive(args: &Args) -> Result<(), AppError> {
    enable_raw_mode()?;
    let mut out = stdout();

    // Set terminal title/header to show app name
    execute!(out, SetTitle("MLB STANDINGS"))?;

    execute!(out, EnterAlternateScreen)?;

    let result = ui::run_interactive_ui(args.debug).await;

    // Clean up terminal
    execute!(out, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}
