use ratatui::{prelude::*, widgets::*};

use crate::constants::CURSOR_GLYPH;
use crate::messages::ui_events::Page;
use crate::models::{ContactLink, Profile, Project};
use crate::typing::Phase;

/// Accent color used for the typed text, links and buttons
pub const ACCENT: Color = Color::Green;

/// The "I'm <typed text>▌" line of the landing page
pub fn typing_line<'a>(typed: &'a str, phase: Phase) -> Line<'a> {
    // Cursor dims while the finished phrase is on hold
    let cursor_style = match phase {
        Phase::Holding => Style::default().fg(Color::DarkGray),
        Phase::Typing | Phase::Deleting => Style::default().fg(ACCENT),
    };

    Line::from(vec![
        Span::raw("I'm "),
        Span::styled(typed, Style::default().fg(ACCENT)),
        Span::styled(CURSOR_GLYPH, cursor_style),
    ])
}

/// Renders a button; filled when focused, outlined otherwise
pub fn render_button(label: &str, is_focused: bool) -> Paragraph<'_> {
    let (style, border_style) = if is_focused {
        (
            Style::default().fg(Color::Black).bg(ACCENT).bold(),
            Style::default().fg(ACCENT),
        )
    } else {
        (Style::default().fg(ACCENT).bold(), Style::default().fg(ACCENT))
    };

    Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        )
}

/// Renders a project card
pub fn render_project_card(project: &Project, is_selected: bool) -> Paragraph<'_> {
    let border_style = if is_selected {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(Span::styled(project.description.as_str(), Style::default())),
        Line::from(Span::styled(
            project.url.as_str(),
            Style::default().fg(ACCENT).underlined(),
        )),
    ];

    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", project.title), Style::default().bold())),
    )
}

/// Rough number of rows `text` occupies when wrapped at `width` columns
pub fn wrapped_lines(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    text.chars().count().div_ceil(width).max(1) as u16
}

/// Height a project card needs at the given width, borders included
pub fn project_card_height(project: &Project, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    wrapped_lines(&project.description, inner) + wrapped_lines(&project.url, inner) + 2
}

/// Splits the terminal area into page indicator, content and status bar rows
pub fn frame_chunks(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Page indicator
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .areas(area)
}

/// Content column of a page, offset from the left edge like the web layout
pub fn page_area(area: Rect) -> Rect {
    let [_, content, _] = frame_chunks(area);
    let [_, column, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(75),
            Constraint::Min(0),
        ])
        .areas(content);
    column
}

/// Row heights of the details page items, top to bottom:
/// go back, heading, bio paragraphs, spacer, heading, project cards
pub fn details_item_heights(profile: &Profile, width: u16) -> Vec<u16> {
    let mut heights = vec![SECTION_HEIGHT, SECTION_HEIGHT];
    heights.extend(profile.bio.iter().map(|p| wrapped_lines(p, width) + 1));
    heights.push(1);
    heights.push(SECTION_HEIGHT);
    heights.extend(profile.projects.iter().map(|p| project_card_height(p, width)));
    heights
}

/// Rows the details page can scroll before its last item is at the bottom
pub fn details_max_scroll(profile: &Profile, terminal: Rect) -> u16 {
    let page = page_area(terminal);
    let content: u16 = details_item_heights(profile, page.width)
        .into_iter()
        .fold(0, u16::saturating_add);
    content.saturating_sub(page.height)
}

/// Height of the go back button and of section headings
pub const SECTION_HEIGHT: u16 = 2;

/// Render `widget` as if it were `height` rows tall with its top at row `y`,
/// keeping only the rows that fall inside `area`
pub fn render_clipped<W: Widget>(widget: W, height: u16, y: i32, area: Rect, buf: &mut Buffer) {
    let top = y.max(area.top() as i32);
    let bottom = (y + height as i32).min(area.bottom() as i32);
    if top >= bottom || area.width == 0 {
        return;
    }

    let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, height));
    widget.render(scratch.area, &mut scratch);

    for row in top..bottom {
        let src = (row - y) as u16;
        if src >= scratch.area.height {
            break;
        }
        for dx in 0..area.width.min(scratch.area.width) {
            buf[(area.x + dx, row as u16)] = scratch[(dx, src)].clone();
        }
    }
}

/// Contact links as "Label: text (url)" lines
pub fn contact_lines(contacts: &[ContactLink]) -> Vec<Line<'_>> {
    contacts
        .iter()
        .map(|c| {
            Line::from(vec![
                Span::raw(format!("{}: ", c.label)),
                Span::styled(c.text.as_str(), Style::default().fg(ACCENT)),
                Span::styled(format!("  ({})", c.url), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect()
}

/// Renders the page indicator
pub fn render_tabs(selected: Page) -> Tabs<'static> {
    let pages = [Page::Landing, Page::Details, Page::Contact];
    let titles: Vec<Line> = pages.iter().map(|p| Line::from(p.title())).collect();
    let index = pages.iter().position(|p| *p == selected).unwrap_or(0);

    Tabs::new(titles)
        .select(index)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(ACCENT).bold())
        .divider("|")
}

/// Key hints for the status bar
pub fn status_hint(page: Page) -> &'static str {
    match page {
        Page::Landing => " Tab/←→:focus | Enter:open | d:about | c:contact | ?:help | q:quit ",
        Page::Details => " Esc/b:back | ↑↓:projects | PgUp/PgDn:scroll | ?:help | q:quit ",
        Page::Contact => " Esc/b:back | ?:help | q:quit ",
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
