use gridkit_states::{Cell, Column, Row, TableModel};

use crate::widgets::{self, TableUiState};

/// Demo application: one sortable transactions table.
pub struct GridkitApp {
    table: TableModel,
    table_ui: TableUiState,
}

impl GridkitApp {
    /// Called once before the first frame.
    pub fn new(table: TableModel) -> Self {
        Self {
            table,
            table_ui: TableUiState::new(),
        }
    }

    /// App preloaded with the demo transactions table.
    pub fn demo() -> Self {
        Self::new(demo_table())
    }

    pub fn table(&self) -> &TableModel {
        &self.table
    }
}

/// A transactions-style table exercising every column type, including a
/// display-text/sort-key split on the date column.
pub fn demo_table() -> TableModel {
    let mut table = TableModel::new(vec![
        Column::date("Date").with_width(110.0),
        Column::text("Description"),
        Column::number("Amount").with_width(100.0),
    ]);

    let rows: [(&str, &str, &str, &str); 5] = [
        ("2026-01-03", "Jan 3, 2026", "Groceries", "42.50"),
        ("2026-01-05", "Jan 5, 2026", "Rent", "1200"),
        ("2025-12-28", "Dec 28, 2025", "Coffee", "3.80"),
        ("2026-01-05", "Jan 5, 2026", "Internet", "39.99"),
        ("2026-01-10", "Jan 10, 2026", "Refund", "-15"),
    ];
    for (sort_key, date, description, amount) in rows {
        table.push_row(Row::new(vec![
            Cell::with_sort_key(date, sort_key),
            Cell::new(description),
            Cell::new(amount),
        ]));
    }

    table
}

impl eframe::App for GridkitApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Gridkit");
                ui.separator();
                ui.label(format!("{} rows", self.table.rows().len()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Transactions");
            ui.add_space(8.0);
            widgets::sortable_table(ui, &mut self.table, &mut self.table_ui);

            powered_by_egui_and_eframe(ui);
        });
    }
}

fn powered_by_egui_and_eframe(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Powered by ");
        ui.hyperlink_to("egui", "https://github.com/emilk/egui");
        ui.label(" and ");
        ui.hyperlink_to(
            "eframe",
            "https://github.com/emilk/egui/tree/master/crates/eframe",
        );
        ui.label(".");
    });
}
