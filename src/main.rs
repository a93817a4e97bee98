//! notymn - a personal portfolio in the terminal
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Animation Layer (Tokio) - typewriter ticks on async timers

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use notymn_tui::constants::{APP_NAME, APP_VERSION, LOG_FILE_NAME};
use notymn_tui::messages::ui_events::{key_to_ui_event, LandingButton, Page};
use notymn_tui::messages::{AnimationFrame, RenderState, UiEvent};
use notymn_tui::storage::ProfileStore;
use notymn_tui::ui::{
    centered_rect, contact_lines, details_item_heights, frame_chunks, page_area, render_button,
    render_clipped, render_project_card, render_tabs, status_hint, typing_line, wrapped_lines,
    ACCENT, SECTION_HEIGHT,
};
use notymn_tui::AppActor;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(version = APP_VERSION, "Starting {}", APP_NAME);

    // Load and validate content before touching the terminal
    let profile = ProfileStore::new().load();
    profile.validate().context("invalid profile")?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (frame_tx, frame_rx) = mpsc::unbounded_channel::<AnimationFrame>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    let app_actor = AppActor::new(profile, frame_tx, render_tx)?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Spawn app actor
    let app_task = tokio::spawn(app_actor.run(ui_rx, frame_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    // Let the app actor unmount the animation before exiting
    let _ = tokio::time::timeout(Duration::from_millis(200), app_task).await;
    tracing::info!("Bye");

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    let size = terminal.size()?;
    let _ = ui_tx.send(UiEvent::Resize(size.width, size.height));

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(30))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(event) =
                        key_to_ui_event(key, current_state.page, current_state.show_help)
                    {
                        let quit = matches!(event, UiEvent::Quit);
                        let _ = ui_tx.send(event);
                        if quit {
                            break;
                        }
                    }
                }
                Event::Resize(width, height) => {
                    let _ = ui_tx.send(UiEvent::Resize(width, height));
                }
                _ => {}
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let [tabs, _, status] = frame_chunks(area);
    f.render_widget(render_tabs(state.page), tabs);

    let content = page_area(area);

    match state.page {
        Page::Landing => draw_landing(f, state, content),
        Page::Details => draw_details(f, state, content),
        Page::Contact => draw_contact(f, state, content),
    }

    let bar = Paragraph::new(status_hint(state.page)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, status);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_landing(f: &mut Frame, state: &RenderState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(2), // Handle
            Constraint::Length(2), // I'm ...
            Constraint::Length(3), // Buttons
            Constraint::Fill(1),
        ])
        .split(area);

    let heading = Paragraph::new(Span::styled(
        state.profile.handle.as_str(),
        Style::default().bold().add_modifier(Modifier::UNDERLINED),
    ));
    f.render_widget(heading, rows[1]);

    f.render_widget(
        Paragraph::new(typing_line(&state.typed_text, state.typing_phase)),
        rows[2],
    );

    let buttons = [LandingButton::DiscoverMore, LandingButton::ContactMe];
    let button_rows = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(buttons[0].label().chars().count() as u16 + 4),
            Constraint::Length(2),
            Constraint::Length(buttons[1].label().chars().count() as u16 + 4),
            Constraint::Min(0),
        ])
        .split(rows[3]);

    f.render_widget(
        render_button(buttons[0].label(), state.focused_button == buttons[0]),
        button_rows[0],
    );
    f.render_widget(
        render_button(buttons[1].label(), state.focused_button == buttons[1]),
        button_rows[2],
    );
}

/// Render paragraphs top to bottom, `scroll` rows up, clipping whatever crosses the edges
fn draw_stacked(f: &mut Frame, area: Rect, items: Vec<(u16, Paragraph)>, scroll: u16) {
    let mut top: i32 = area.y as i32 - scroll as i32;

    for (height, widget) in items {
        if top >= area.bottom() as i32 {
            break;
        }
        render_clipped(widget, height, top, area, f.buffer_mut());
        top += height as i32;
    }
}

fn go_back_button() -> (u16, Paragraph<'static>) {
    let button = Paragraph::new(Line::from(vec![
        Span::styled("← Go Back", Style::default().fg(ACCENT).bold()),
    ]));
    (SECTION_HEIGHT, button)
}

fn section_heading(text: String) -> (u16, Paragraph<'static>) {
    (SECTION_HEIGHT, Paragraph::new(Span::styled(text, Style::default().bold().underlined())))
}

fn draw_details(f: &mut Frame, state: &RenderState, area: Rect) {
    let profile = &state.profile;
    let mut widgets = vec![
        go_back_button().1,
        section_heading(format!("Who is {}?", profile.handle)).1,
    ];
    widgets.extend(
        profile
            .bio
            .iter()
            .map(|paragraph| Paragraph::new(paragraph.as_str()).wrap(Wrap { trim: true })),
    );
    widgets.push(Paragraph::new(""));
    widgets.push(section_heading(String::from("My Projects")).1);
    widgets.extend(
        profile
            .projects
            .iter()
            .enumerate()
            .map(|(i, project)| render_project_card(project, i == state.selected_project)),
    );

    let items = details_item_heights(profile, area.width).into_iter().zip(widgets).collect();
    draw_stacked(f, area, items, state.details_scroll);
}

fn draw_contact(f: &mut Frame, state: &RenderState, area: Rect) {
    let profile = &state.profile;
    let mut items = vec![
        go_back_button(),
        section_heading(String::from("Contact Me")),
        (
            wrapped_lines(&profile.contact_intro, area.width) + 1,
            Paragraph::new(profile.contact_intro.as_str()).wrap(Wrap { trim: true }),
        ),
    ];

    let links = contact_lines(&profile.contacts);
    items.push((links.len() as u16, Paragraph::new(links)));

    draw_stacked(f, area, items, 0);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 NOTYMN - Keyboard Shortcuts

 HOME
   Tab / ← / →        Move between buttons
   Enter / Space      Open focused page
   d                  About & projects
   c                  Contact

 ABOUT / CONTACT
   Esc / b / Enter    Go back
   ↑ / ↓              Select project
   PgUp / PgDn        Scroll

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
