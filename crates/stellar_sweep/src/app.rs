use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
};
use stellar_sweep_core::render::{ColorMap, ScaleFloor, TableQuantity};
use stellar_sweep_core::{HeatmapTable, RenderConfig, SweepError, SweepResults};

use crate::ui::{HeatmapView, StatusBar, heatmap::scale_legend, styles::titled_block};

/// Interactive viewer over a finished sweep
pub struct App {
    results: SweepResults,
    render: RenderConfig,
    quantity: TableQuantity,
    table: HeatmapTable,
    message: Option<String>,
    exit: bool,
}

impl App {
    pub fn new(
        results: SweepResults,
        render: RenderConfig,
        quantity: TableQuantity,
    ) -> Result<Self, SweepError> {
        let table = HeatmapTable::for_quantity(&results, quantity, &render)?;
        Ok(Self {
            results,
            render,
            quantity,
            table,
            message: None,
            exit: false,
        })
    }

    pub fn table(&self) -> &HeatmapTable {
        &self.table
    }

    pub fn quantity(&self) -> TableQuantity {
        self.quantity
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// runs the viewer's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Table
                Constraint::Length(1), // Legend
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        let title = format!(
            "{} - {} ({})",
            self.table.title,
            self.quantity.label(),
            self.render.color_map
        );
        let block = titled_block(&title);
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);
        frame.render_widget(HeatmapView::new(&self.table), inner);

        frame.render_widget(Paragraph::new(scale_legend(&self.table)), chunks[1]);
        frame.render_widget(
            StatusBar {
                message: self.message.as_deref(),
                unconverged: self.results.diagnostics().len(),
            },
            chunks[2],
        );
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true
            }
            KeyCode::Char('t') => {
                self.quantity = match self.quantity {
                    TableQuantity::Error => TableQuantity::CentralTemperature,
                    TableQuantity::CentralTemperature => TableQuantity::Error,
                };
                self.rebuild();
            }
            KeyCode::Char('c') => {
                self.render.color_map = next_color_map(self.render.color_map);
                self.rebuild();
            }
            KeyCode::Char('f') => {
                self.render.scale_floor = match self.render.scale_floor {
                    ScaleFloor::MatrixMin => ScaleFloor::Zero,
                    ScaleFloor::Zero => ScaleFloor::MatrixMin,
                };
                self.rebuild();
            }
            _ => {}
        }
    }

    fn rebuild(&mut self) {
        match HeatmapTable::for_quantity(&self.results, self.quantity, &self.render) {
            Ok(table) => {
                self.table = table;
                self.message = None;
            }
            Err(e) => {
                tracing::error!("failed to rebuild table: {e}");
                self.message = Some(e.to_string());
            }
        }
    }
}

fn next_color_map(current: ColorMap) -> ColorMap {
    let index = ColorMap::ALL
        .iter()
        .position(|&m| m == current)
        .unwrap_or(0);
    ColorMap::ALL[(index + 1) % ColorMap::ALL.len()]
}
