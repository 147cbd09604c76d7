use pantry_core::AppViewModel;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

use crate::app::{App, FormFocus};

const TITLE: &str = "AI-Powered Grocery & Recipe Recommender";
const PANTRY_LABEL: &str = "Your Pantry";
const TOP_K_LABEL: &str = "Top-K (1-20)";
const RESULTS_TITLE: &str = "Top Recipes";
const NO_RESULTS: &str = "Results will appear here...";
const BUSY_LABEL: &str = "Recommending...";
const KEY_HINTS: &str = "[Enter] Recommend  [Tab] Switch field  [Esc] Quit";

impl<'a> App<'a> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let view = self.state.view();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(frame.area());

        let title = Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(title, layout[0]);

        self.pantry_input
            .set_block(field_block(PANTRY_LABEL, self.focus == FormFocus::Pantry));
        frame.render_widget(&self.pantry_input, layout[1]);

        self.top_k_input
            .set_block(field_block(TOP_K_LABEL, self.focus == FormFocus::TopK));
        frame.render_widget(&self.top_k_input, layout[2]);

        if view.busy {
            let throbber = Throbber::default()
                .label(BUSY_LABEL)
                .style(Style::default().fg(Color::Cyan));
            frame.render_stateful_widget(throbber, layout[3], &mut self.throbber_state);
        } else {
            let hints = Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hints, layout[3]);
        }

        if let Some(error) = view.error.as_deref() {
            let error = Paragraph::new(error).style(Style::default().fg(Color::Red));
            frame.render_widget(error, layout[4]);
        }

        render_results(frame, layout[5], &view, &mut self.table_state);
    }
}

fn field_block(label: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::bordered()
        .title(label.to_string())
        .border_style(border_style)
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewModel,
    table_state: &mut TableState,
) {
    let block = Block::bordered().title(RESULTS_TITLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.rows.is_empty() {
        let empty = Paragraph::new(NO_RESULTS)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let header = Row::new(["Recipe", "Ingredients", "Similarity"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .height(1)
        .bottom_margin(1);

    // Long ingredient lists clip at the column edge; the data is untouched.
    let rows = view.rows.iter().map(|row| {
        Row::new([
            Cell::from(row.recipe_name.as_str()),
            Cell::from(row.ingredients.as_str()),
            Cell::from(row.similarity.as_str()),
        ])
    });

    let widths = [
        Constraint::Percentage(30),
        Constraint::Fill(1),
        Constraint::Length(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, inner, table_state);
}
