//! UI rendering and layout module

use crate::calculator::{CalculationMode, Outcome};
use crate::constants::CURRENCY_SYMBOL;
use crate::content;
use crate::tui::app::{App, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const ACCENT: Color = Color::Indexed(62);

/// Below this height the subtitle, mode prompt, info panels and disclaimer are hidden
const FULL_LAYOUT_MIN_HEIGHT: u16 = 40;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let full = area.height >= FULL_LAYOUT_MIN_HEIGHT;

    // Form rows keep their full height; the FAQ only gets what is left over
    let (header, mode, info, footer) = if full { (3, 4, 8, 4) } else { (1, 3, 0, 1) };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header),
            Constraint::Length(mode),
            Constraint::Length(3), // input
            Constraint::Length(3), // calculate button
            Constraint::Length(3), // outcome
            Constraint::Length(info),
            Constraint::Fill(1), // faq
            Constraint::Length(footer),
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_mode_selector(frame, app, chunks[1]);
    render_input(frame, app, chunks[2]);
    render_calculate_button(frame, app, chunks[3]);
    render_outcome(frame, app, chunks[4]);
    if info > 0 {
        render_info(frame, chunks[5]);
    }
    render_faq(frame, app, chunks[6]);
    render_footer(frame, chunks[7]);
}

/// Bordered block whose border lights up when focused
fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn render_header(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        content::TITLE,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))];
    if area.height > 1 {
        lines.push(Line::from(Span::styled(
            content::SUBTITLE,
            Style::default().fg(Color::Gray),
        )));
    }
    let text = Text::from(lines);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_mode_selector(frame: &mut Frame, app: &App, area: Rect) {
    // The prompt line only fits above the buttons in the full layout
    let button_row = if area.height > 3 {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(3)])
            .split(area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                content::MODE_PROMPT,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            rows[0],
        );
        rows[1]
    } else {
        area
    };

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(button_row);

    let focused = app.focus == Focus::ModeSelector;
    for (mode, button_area) in [CalculationMode::Income, CalculationMode::Rent]
        .into_iter()
        .zip(buttons.iter())
    {
        let style = if app.calculator.mode() == mode {
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(mode.label(), style))
                .alignment(Alignment::Center)
                .block(focus_block("", focused)),
            *button_area,
        );
    }
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let field = app.calculator.active_field();
    let text = app.calculator.active_text();
    let focused = app.focus == Focus::Input;

    let value = if text.is_empty() {
        Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(text)
    };
    let prefix = format!("{} ", CURRENCY_SYMBOL);
    let prefix_width = prefix.chars().count() as u16;

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::DarkGray)),
            value,
        ]))
        .block(focus_block(field.label(), focused)),
        area,
    );

    if focused {
        let typed = text.chars().count() as u16;
        let max_x = area.right().saturating_sub(2);
        let x = (area.x + 1 + prefix_width + typed).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_calculate_button(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Calculate;
    let style = if focused {
        Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Span::styled("Calculate", style))
            .alignment(Alignment::Center)
            .block(focus_block("", focused)),
        area,
    );
}

fn render_outcome(frame: &mut Frame, app: &App, area: Rect) {
    let (title, line, color) = match app.calculator.outcome() {
        Outcome::Error(msg) => (
            "Error",
            Line::from(Span::styled(msg.as_str(), Style::default().fg(Color::Red))),
            Color::Red,
        ),
        Outcome::Success(msg) => (
            "Result",
            Line::from(Span::styled(
                msg.as_str(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Color::Green,
        ),
        Outcome::Empty => (
            "",
            Line::from(Span::styled(
                "Enter an amount and press Enter to calculate",
                Style::default().fg(Color::DarkGray),
            )),
            Color::DarkGray,
        ),
    };

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title),
        ),
        area,
    );
}

fn render_info(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    frame.render_widget(
        Paragraph::new(content::HOW_IT_WORKS)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(focus_block(content::HOW_IT_WORKS_TITLE, false)),
        columns[0],
    );

    let benefits: Vec<Line> = content::BENEFITS
        .iter()
        .map(|benefit| Line::from(format!("• {}", benefit)))
        .collect();
    frame.render_widget(
        Paragraph::new(benefits)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(focus_block(content::BENEFITS_TITLE, false)),
        columns[1],
    );
}

fn render_faq(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Faq;
    let width = area.width.saturating_sub(2) as usize;
    let height = area.height.saturating_sub(2) as usize;

    // Keep the cursor entry in view while focused, otherwise the open entry
    let anchor = if focused {
        Some(app.faq_cursor)
    } else {
        app.accordion.open_index()
    };

    let mut lines = Vec::new();
    let mut anchor_rows = 0..0;

    for (idx, entry) in app.accordion.entries().iter().enumerate() {
        let start = lines.len();
        let open = app.accordion.is_open(idx);
        let marker = if open { "▾" } else { "▸" };

        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if focused && idx == app.faq_cursor {
            style = style.fg(Color::Yellow).add_modifier(Modifier::REVERSED);
        }
        for row in wrap_text(&format!("{} {}", marker, entry.question), width, "  ") {
            lines.push(Line::from(Span::styled(row, style)));
        }

        if open {
            for row in wrap_text(entry.answer, width.saturating_sub(2), "") {
                lines.push(Line::from(Span::styled(
                    format!("  {}", row),
                    Style::default().fg(Color::Gray),
                )));
            }
        }

        if anchor == Some(idx) {
            anchor_rows = start..lines.len();
        }
    }

    let offset = faq_scroll_offset(anchor_rows, height);
    frame.render_widget(
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .block(focus_block(content::FAQ_TITLE, focused)),
        area,
    );
}

/// First visible row so that `rows` fits in a viewport of `height` rows,
/// preferring the top of `rows` when it is taller than the viewport
fn faq_scroll_offset(rows: std::ops::Range<usize>, height: usize) -> usize {
    rows.end.saturating_sub(height).min(rows.start)
}

/// Greedy word wrap to `width` columns; continuation rows start with `indent`
fn wrap_text(text: &str, width: usize, indent: &str) -> Vec<String> {
    let indent_len = indent.chars().count();
    let width = width.max(indent_len + 1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut has_word = false;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if has_word && current_len + 1 + word_len > width {
            rows.push(std::mem::replace(&mut current, indent.to_string()));
            current_len = indent_len;
            has_word = false;
        }
        if has_word {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
        has_word = true;
    }

    if has_word {
        rows.push(current);
    }
    rows
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(Span::styled(
            "Tab/Shift+Tab: move  ←/→: mode  Enter: calculate/expand  Esc: quit",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            content::DISCLAIMER,
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::InputField;
    use crate::tui::events::KeyAction;
    use ratatui::{backend::TestBackend, Terminal};

    const WIDTH: u16 = 110;
    const HEIGHT: u16 = 50;

    /// Render `app` and return the screen as one string per row
    fn render_to_rows(app: &App) -> Vec<String> {
        render_sized(app, WIDTH, HEIGHT)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn test_initial_screen() {
        let rows = render_to_rows(&App::new());

        assert!(screen_contains(&rows, content::TITLE));
        assert!(screen_contains(&rows, "Required Income"));
        assert!(screen_contains(&rows, "Affordable Rent"));
        assert!(screen_contains(&rows, "Monthly Rent (£)"));
        assert!(screen_contains(&rows, "Enter monthly rent"));
        assert!(screen_contains(&rows, "Calculate"));
        assert!(screen_contains(&rows, content::FAQ_TITLE));
        assert!(!screen_contains(&rows, "Error"));
        assert!(!screen_contains(&rows, "Result"));

        // every question shown, collapsed
        for entry in crate::faq::FAQ_ENTRIES.iter() {
            assert!(screen_contains(&rows, &format!("▸ {}", entry.question)));
        }
        assert!(!screen_contains(&rows, "▾"));
    }

    #[test]
    fn test_rent_mode_shows_income_field() {
        let mut app = App::new();
        app.calculator.set_mode(CalculationMode::Rent);
        let rows = render_to_rows(&app);

        assert!(screen_contains(&rows, "Annual Income (£)"));
        assert!(screen_contains(&rows, "Enter annual income"));
        assert!(!screen_contains(&rows, "Monthly Rent (£)"));
    }

    #[test]
    fn test_success_banner() {
        let mut app = App::new();
        app.calculator.update_input(InputField::MonthlyRent, "1000");
        app.handle_key_action(KeyAction::Activate);
        let rows = render_to_rows(&app);

        assert!(screen_contains(&rows, "£ 1000"));
        assert!(screen_contains(&rows, "Required Annual Income: £30,000"));
        assert!(!screen_contains(&rows, "Please enter"));
    }

    #[test]
    fn test_error_banner() {
        let mut app = App::new();
        app.calculator.set_mode(CalculationMode::Rent);
        app.calculator.update_input(InputField::AnnualIncome, "-500");
        app.handle_key_action(KeyAction::Activate);
        let rows = render_to_rows(&app);

        assert!(screen_contains(&rows, "Please enter a valid annual income"));
        assert!(!screen_contains(&rows, "Affordable Monthly Rent"));
    }

    #[test]
    fn test_open_faq_entry_shows_answer() {
        let mut app = App::new();
        app.accordion.toggle(3);
        let rows = render_to_rows(&app);

        let entry = crate::faq::FAQ_ENTRIES[3];
        assert!(screen_contains(&rows, &format!("▾ {}", entry.question)));
        assert!(screen_contains(&rows, "This calculator uses gross (pre-tax)"));
        assert!(!screen_contains(
            &rows,
            "The 30% rule is a widely accepted financial guideline"
        ));
    }

    #[test]
    fn test_standard_terminal_keeps_form_and_open_answer() {
        let mut app = App::new();
        app.calculator.update_input(InputField::MonthlyRent, "1000");
        app.accordion.toggle(4);
        let rows = render_sized(&app, 80, 24);
        let dump = rows.join("\n");

        for needle in [
            "Required Income",
            "Affordable Rent",
            "Monthly Rent (£)",
            "£ 1000",
            "Calculate",
            "▾ What other expenses should I consider besides rent?",
            "Besides rent, consider:",
            "and savings.",
        ] {
            assert!(screen_contains(&rows, needle), "{:?} missing from\n{}", needle, dump);
        }
        // info panels give way to the form on short terminals
        assert!(!screen_contains(&rows, content::HOW_IT_WORKS_TITLE));
    }

    #[test]
    fn test_faq_scrolls_to_cursor() {
        let mut app = App::new();
        app.accordion.toggle(0);
        app.focus = Focus::Faq;
        app.faq_cursor = 4;
        let rows = render_sized(&app, 80, 24);

        assert!(screen_contains(&rows, "▸ What other expenses should I consider besides rent?"));
        assert!(!screen_contains(&rows, "▾ Why use the 30% rule"));
        assert!(screen_contains(&rows, "Calculate"));
    }

    #[test]
    fn test_faq_scroll_offset() {
        assert_eq!(faq_scroll_offset(0..0, 8), 0);
        assert_eq!(faq_scroll_offset(4..8, 8), 0);
        assert_eq!(faq_scroll_offset(8..9, 8), 1);
        // taller than the viewport: keep the question row on screen
        assert_eq!(faq_scroll_offset(3..15, 8), 3);
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("alpha beta gamma delta", 11, "  "),
            vec!["alpha beta", "  gamma", "  delta"]
        );
        assert_eq!(wrap_text("short", 40, ""), vec!["short"]);
        assert!(wrap_text("", 40, "").is_empty());
    }
}
