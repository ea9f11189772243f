use crate::statics;
use crate::{CatalogSource, FilterState, ItemRecord, LoadedCatalog, RememberedPath};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::collections::BTreeSet;
use std::path::PathBuf;

pub fn run_gui() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 800.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| {
            let mut app = LootdexApp {
                theme_dark: true,
                server_url: statics::DEFAULT_SERVER_URL.to_string(),
                ..Default::default()
            };
            app.initial_load();
            Ok(Box::new(app))
        }),
    )
}

/// The main application state and GUI logic.
/// Owns the current LoadedCatalog, the filter criteria, and transient UI state.
#[derive(Default)]
struct LootdexApp {
    catalog: Option<LoadedCatalog>,
    remembered: RememberedPath,
    server_url: String,
    dialog_dir: Option<PathBuf>,
    filter: FilterState,

    // A click on a TOC chip requests a scroll to that level section.
    scroll_to_level: Option<Option<i64>>,

    status: String,
    last_error: Option<String>,
    about_open: bool,
    theme_dark: bool,
}

impl LootdexApp {
    /// Startup load sequence: remembered file, then server fetch, then leave
    /// the manual affordances to the user. A failing source never substitutes
    /// data silently; its error is surfaced before falling through.
    fn initial_load(&mut self) {
        self.remembered = RememberedPath::load();

        if let Some(path) = self.remembered.path.clone() {
            match LoadedCatalog::load_path(&path, true) {
                Ok(catalog) => {
                    self.install(catalog);
                    self.status = statics::EN_STATUS_LOADED_REMEMBERED.to_string();
                    return;
                }
                Err(e) => {
                    self.last_error = Some(format!("Remembered file failed: {e}"));
                }
            }
        }

        match LoadedCatalog::fetch_url(&self.server_url) {
            Ok(catalog) => {
                self.install(catalog);
                self.status = statics::EN_STATUS_LOADED_SERVER.to_string();
            }
            Err(_) => {
                // Expected when running purely from local files.
                self.status = statics::EN_STATUS_NO_SERVER.to_string();
            }
        }
    }

    /// Replace the catalog wholesale; filter criteria survive a reload.
    fn install(&mut self, catalog: LoadedCatalog) {
        self.scroll_to_level = None;
        self.last_error = None;
        self.catalog = Some(catalog);
    }

    fn file_dialog(&self) -> rfd::FileDialog {
        let mut dlg = rfd::FileDialog::new().add_filter("Item Catalog", &["json"]);
        if let Some(dir) = self.dialog_dir.clone() {
            dlg = dlg.set_directory(dir);
        }
        dlg
    }

    fn open_file(&mut self) {
        let Some(path) = self.file_dialog().pick_file() else {
            return;
        };

        match LoadedCatalog::load_path(&path, false) {
            Ok(catalog) => {
                self.dialog_dir = path.parent().map(PathBuf::from);
                self.status = format!("Loaded {}", path.display());
                self.install(catalog);
            }
            Err(e) => {
                self.last_error = Some(format!("Failed to load: {e}"));
            }
        }
    }

    /// Pick a file, persist its location, and load it. The desktop analog of
    /// the original's remembered file handle.
    fn remember_file(&mut self) {
        let Some(path) = self.file_dialog().pick_file() else {
            return;
        };

        if let Err(e) = RememberedPath::store(&path) {
            self.last_error = Some(format!("Failed to remember file: {e:#}"));
            return;
        }
        self.remembered.path = Some(path.clone());

        match LoadedCatalog::load_path(&path, true) {
            Ok(catalog) => {
                self.dialog_dir = path.parent().map(PathBuf::from);
                self.status = statics::EN_STATUS_REMEMBERED.to_string();
                self.install(catalog);
            }
            Err(e) => {
                self.last_error = Some(format!("Failed to load: {e}"));
            }
        }
    }

    fn forget_file(&mut self) {
        if let Err(e) = RememberedPath::clear() {
            self.last_error = Some(format!("Failed to forget file: {e:#}"));
            return;
        }
        self.remembered.path = None;
        self.status = statics::EN_STATUS_FORGOT.to_string();
    }

    /// Re-run the load for whatever source produced the current catalog.
    fn reload(&mut self) {
        let Some(source) = self.catalog.as_ref().map(|c| c.source.clone()) else {
            return;
        };

        let result = match &source {
            CatalogSource::Remembered(path) => LoadedCatalog::load_path(path, true),
            CatalogSource::File(path) => LoadedCatalog::load_path(path, false),
            CatalogSource::Server(url) => LoadedCatalog::fetch_url(url),
        };

        match result {
            Ok(catalog) => {
                self.status = format!("Reloaded ({})", source.describe());
                self.install(catalog);
            }
            Err(e) => {
                self.last_error = Some(format!("Reload failed: {e}"));
            }
        }
    }

    fn filter_combo(
        ui: &mut egui::Ui,
        id_salt: &str,
        label: &str,
        selection: &mut String,
        options: &[String],
    ) {
        ui.label(label);
        let selected_text = if selection.is_empty() {
            statics::EN_FILTER_ANY.to_string()
        } else {
            selection.clone()
        };
        egui::ComboBox::from_id_salt(id_salt)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(selection, String::new(), statics::EN_FILTER_ANY);
                for option in options {
                    ui.selectable_value(selection, option.clone(), option);
                }
            });
    }

    fn render_bucket_table(&self, ui: &mut egui::Ui, level: Option<i64>, visible: &[&ItemRecord]) {
        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
        ui.push_id(("bucket_table", level), |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::remainder().resizable(true))
                .column(Column::initial(90.0).resizable(true))
                .column(Column::initial(110.0).resizable(true))
                .column(Column::initial(110.0).resizable(true))
                .column(Column::initial(150.0).resizable(true))
                .column(Column::initial(160.0).resizable(true))
                .header(row_h, |#[allow(unused_mut)] mut header| {
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_NAME);
                    });
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_ID);
                    });
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_TYPE);
                    });
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_QUALITY);
                    });
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_CLASSES);
                    });
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_STATS);
                    });
                })
                .body(|#[allow(unused_mut)] mut body| {
                    for item in visible {
                        body.row(row_h, |#[allow(unused_mut)] mut row| {
                            row.col(|ui| {
                                ui.label(item.display_name());
                            });
                            row.col(|ui| {
                                ui.monospace(&item.id);
                            });
                            row.col(|ui| {
                                ui.label(item.typ.as_deref().unwrap_or(statics::EN_MISSING));
                            });
                            row.col(|ui| {
                                ui.label(item.jakosc.as_deref().unwrap_or(statics::EN_MISSING));
                            });
                            row.col(|ui| {
                                let classes = item.classes_joined();
                                if classes.is_empty() {
                                    ui.label(statics::EN_NONE_DASH);
                                } else {
                                    ui.label(classes);
                                }
                            });
                            row.col(|ui| {
                                ui.label(stat_preview(item));
                            });
                        });
                    }
                });
        });
    }
}

fn level_heading(level: Option<i64>) -> String {
    match level {
        Some(n) => format!("{} {n}", statics::EN_LEVEL_PREFIX),
        None => statics::EN_LEVEL_NONE.to_string(),
    }
}

/// Compact stat annotation line for one record, dash when it has none.
fn stat_preview(item: &ItemRecord) -> String {
    let mut parts = Vec::new();
    if let Some(v) = item.dmg_flat {
        parts.push(format!("dmg +{}", format_stat(v)));
    }
    if let Some(v) = item.def {
        parts.push(format!("def +{}", format_stat(v)));
    }
    if let Some(v) = item.mana_bonus {
        parts.push(format!("mana +{}", format_stat(v)));
    }
    if parts.is_empty() {
        statics::EN_NONE_DASH.to_string()
    } else {
        parts.join("  ")
    }
}

fn format_stat(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Distinct selector options drawn from the loaded records: classes and types
/// alphabetically, qualities in tier order with unknown tiers trailing.
fn filter_options(items: &[ItemRecord]) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut classes: BTreeSet<String> = BTreeSet::new();
    let mut types: BTreeSet<String> = BTreeSet::new();
    let mut qualities: BTreeSet<String> = BTreeSet::new();

    for item in items {
        for class in &item.klasy {
            if !class.is_empty() {
                classes.insert(class.clone());
            }
        }
        if let Some(typ) = &item.typ {
            types.insert(typ.clone());
        }
        if let Some(jakosc) = &item.jakosc {
            qualities.insert(jakosc.clone());
        }
    }

    let mut qualities: Vec<String> = qualities.into_iter().collect();
    qualities.sort_by_key(|q| (crate::catalog::quality_rank(Some(q.as_str())), q.clone()));

    (
        classes.into_iter().collect(),
        types.into_iter().collect(),
        qualities,
    )
}

impl eframe::App for LootdexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button(statics::EN_BTN_OPEN).clicked() {
                    self.open_file();
                }
                if ui.button(statics::EN_BTN_REMEMBER).clicked() {
                    self.remember_file();
                }
                let has_remembered = self.remembered.path.is_some();
                if ui
                    .add_enabled(has_remembered, egui::Button::new(statics::EN_BTN_FORGET))
                    .clicked()
                {
                    self.forget_file();
                }
                let has_catalog = self.catalog.is_some();
                if ui
                    .add_enabled(has_catalog, egui::Button::new(statics::EN_BTN_RELOAD))
                    .clicked()
                {
                    self.reload();
                }

                ui.separator();
                if ui.button(statics::EN_BTN_ABOUT).clicked() {
                    self.about_open = true;
                }
                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }

                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        if self.about_open {
            let mut open = self.about_open;
            egui::Window::new(statics::EN_WINDOW_ABOUT)
                .collapsible(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.heading(statics::EN_ABOUT_HEADING);
                    ui.label(format!(
                        "{} {}",
                        statics::EN_ABOUT_VERSION,
                        env!("CARGO_PKG_VERSION")
                    ));
                    ui.separator();
                    ui.label(statics::EN_ABOUT_SOURCES);
                });
            self.about_open = open;
        }

        if let Some(err) = self.last_error.clone() {
            egui::TopBottomPanel::top("error_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::RED, err);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(statics::EN_BTN_CLEAR).clicked() {
                            self.last_error = None;
                        }
                    });
                });
            });
        }

        if self.catalog.is_none() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading(statics::EN_HOME_HEADING);
                ui.label(statics::EN_HOME_INSTRUCTIONS);
            });
            return;
        }

        let catalog = self.catalog.take().expect("checked above");
        let (classes, types, qualities) = filter_options(&catalog.items);
        let visible_total = self.filter.count_visible(&catalog.items);

        // The bottom status bar must be shown before side/central panels so it
        // reserves space across the full window width.
        egui::TopBottomPanel::bottom("bottom_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(catalog.source.describe());
                ui.separator();
                ui.label(format!(
                    "{} {} / {}",
                    statics::EN_LABEL_VISIBLE,
                    visible_total,
                    catalog.total()
                ));
                if catalog.skipped > 0 {
                    ui.separator();
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        format!("{} {}", statics::EN_LABEL_SKIPPED, catalog.skipped),
                    );
                }
            });
        });

        egui::SidePanel::left("toc_panel")
            .resizable(true)
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.heading(statics::EN_HEADING_LEVELS);
                ui.separator();
                ui.push_id("toc_scroll", |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            for bucket in &catalog.buckets {
                                let visible = self.filter.count_visible(&bucket.items);
                                let label =
                                    format!("{} ({visible})", level_heading(bucket.level));
                                if ui.button(label).clicked() {
                                    self.scroll_to_level = Some(bucket.level);
                                }
                            }
                        });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(statics::EN_LABEL_SEARCH);
                ui.add(
                    egui::TextEdit::singleline(&mut self.filter.query)
                        .hint_text(statics::EN_HINT_SEARCH)
                        .desired_width(160.0),
                );
                Self::filter_combo(
                    ui,
                    "f_klasa",
                    statics::EN_LABEL_CLASS,
                    &mut self.filter.klasa,
                    &classes,
                );
                Self::filter_combo(
                    ui,
                    "f_typ",
                    statics::EN_LABEL_TYPE,
                    &mut self.filter.typ,
                    &types,
                );
                Self::filter_combo(
                    ui,
                    "f_jakosc",
                    statics::EN_LABEL_QUALITY,
                    &mut self.filter.jakosc,
                    &qualities,
                );
                if ui
                    .add_enabled(
                        self.filter.is_active(),
                        egui::Button::new(statics::EN_BTN_CLEAR),
                    )
                    .clicked()
                {
                    self.filter.clear();
                }
            });
            ui.separator();

            ui.push_id("sections_scroll", |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for bucket in &catalog.buckets {
                            let visible: Vec<&ItemRecord> = bucket
                                .items
                                .iter()
                                .filter(|item| self.filter.matches(item))
                                .collect();

                            let resp = ui.heading(format!(
                                "{} ({} / {})",
                                level_heading(bucket.level),
                                visible.len(),
                                bucket.items.len()
                            ));
                            if self.scroll_to_level == Some(bucket.level) {
                                resp.scroll_to_me(Some(egui::Align::Min));
                                self.scroll_to_level = None;
                            }

                            if visible.is_empty() {
                                ui.label(statics::EN_SECTION_EMPTY);
                            } else {
                                self.render_bucket_table(ui, bucket.level, &visible);
                            }
                            ui.add_space(14.0);
                        }
                    });
            });
        });

        self.catalog = Some(catalog);
    }
}
