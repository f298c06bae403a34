use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use sizelens_core::throttle::Throttle;
use sizelens_core::visibility::{OverlayPhase, OverlayVisibility};
use sizelens_core::{evaluate, format, resolve};
use sizelens_protocol::{BreakpointSet, OverlayPosition, Resolution};

use crate::Options;

/// Run the terminal overlay until `q`/Esc.
///
/// The terminal is the viewport: columns scaled by `options.scale` stand in
/// for pixels, and terminal resize events drive re-evaluation the way
/// window resize notifications would in a host application.
pub fn run(options: &Options) -> Result<()> {
    let set = resolve(&options.spec)?;
    let title = format::spec_title(&options.spec);

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, options, &set, &title);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    options: &Options,
    set: &BreakpointSet,
    title: &str,
) -> Result<()> {
    let started = Instant::now();
    let now_ms = || u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let mut visibility = OverlayVisibility::new(options.mode, options.display_duration_ms, 0);
    let mut gate = Throttle::new(options.throttle_ms);
    let mut hovered = false;

    let size = terminal.size()?;
    let mut cols = size.width;
    let mut rows = size.height;

    loop {
        let now = now_ms();
        let phase = visibility.poll(now);

        let width_px = f64::from(cols) * options.scale;
        let height_px = f64::from(rows) * options.scale;
        let resolution = evaluate(width_px, set);

        terminal.draw(|frame| {
            draw(
                frame, options, title, &resolution, width_px, height_px, phase, hovered,
            );
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('h') => {
                        let now = now_ms();
                        hovered = !hovered;
                        if hovered {
                            visibility.hover_enter();
                        } else {
                            visibility.hover_leave(now);
                        }
                    }
                    _ => {}
                },
                Event::Resize(new_cols, new_rows) => {
                    let now = now_ms();
                    if gate.ready(now) {
                        cols = new_cols;
                        rows = new_rows;
                        visibility.viewport_changed(now);
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}

#[allow(
    clippy::too_many_arguments,
    reason = "plain draw parameters, grouping them would not clarify anything"
)]
fn draw(
    frame: &mut Frame<'_>,
    options: &Options,
    title: &str,
    resolution: &Resolution,
    width_px: f64,
    height_px: f64,
    phase: OverlayPhase,
    hovered: bool,
) {
    let area = frame.area();

    // Header bar with key hints, the overlay floats over the rest.
    let header_area = Rect::new(0, 0, area.width, 1.min(area.height));
    let hover_hint = if hovered { "hovered" } else { "h hover" };
    let header = Block::default()
        .title(format!(
            " sizelens — {} | {} | {hover_hint} | q quit ",
            title,
            format::dimensions_label(width_px, height_px),
        ))
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(header, header_area);

    if phase == OverlayPhase::Hidden {
        return;
    }

    let lines: Vec<Line<'_>> = if phase == OverlayPhase::Compact {
        vec![Line::from(resolution.active.name().to_owned())]
    } else {
        let mut lines = vec![
            Line::from(format::dimensions_label(width_px, height_px)),
            Line::from(format!(
                "{title}: {}",
                format::highlighted_names(resolution)
            )),
        ];
        let mut distances = Vec::new();
        if let Some(prev) = &resolution.prev {
            distances.push(format::prev_distance_label(prev));
        }
        if let Some(next) = &resolution.next {
            distances.push(format::next_distance_label(next));
        }
        if !distances.is_empty() {
            lines.push(Line::from(distances.join("  |  ")));
        }
        lines
    };

    let inner_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let box_width = (inner_width + 4).min(area.width);
    let box_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(1));
    let overlay_area = anchor(options.position, area, box_width, box_height).intersection(area);

    // Fading renders dimmed; the terminal has no real opacity.
    let text_style = if phase == OverlayPhase::Fading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let border_style = if hovered {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let overlay = Paragraph::new(lines)
        .style(text_style.add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).style(border_style));
    frame.render_widget(Clear, overlay_area);
    frame.render_widget(overlay, overlay_area);
}

/// Anchor a `width` x `height` box inside `area` with a one-cell margin,
/// below the header row. `Relative` centers it.
fn anchor(position: OverlayPosition, area: Rect, width: u16, height: u16) -> Rect {
    let left = area.x + 1;
    let right = (area.x + area.width).saturating_sub(width + 1).max(left);
    let top = area.y + 2;
    let bottom = (area.y + area.height).saturating_sub(height + 1).max(top);
    let (x, y) = match position {
        OverlayPosition::TopLeft => (left, top),
        OverlayPosition::TopRight => (right, top),
        OverlayPosition::BottomLeft => (left, bottom),
        OverlayPosition::BottomRight => (right, bottom),
        OverlayPosition::Relative => (
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
        ),
    };
    Rect::new(
        x,
        y,
        width.min(area.width.saturating_sub(x - area.x)),
        height.min(area.height.saturating_sub(y - area.y)),
    )
}
