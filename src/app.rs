use eframe::egui;
use egui::RichText;

use crate::components::grid_canvas::GridCanvas;
use crate::components::picker::{ColorPicker, PickerCommit};
use crate::export;
use crate::pattern::{Palette, PaletteEntry, Pattern};
use crate::store::{FsStore, PatternLibrary};
use crate::{log_err, log_info};

/// The composition root: owns the grid canvas, the palette and its picker
/// widgets, and the pattern library, and wires them together.
pub struct StitchpadApp {
    canvas: GridCanvas,
    palette: Palette,
    pickers: Vec<ColorPicker>,
    pattern_name: Option<String>,

    /// `None` when the backing store could not be opened; saving and
    /// loading are disabled but drawing still works.
    library: Option<PatternLibrary<FsStore>>,
    /// Saved pattern names, newest first.
    saved: Vec<String>,

    /// Last save/load/export outcome, shown in the library panel.
    status: Option<String>,
}

impl StitchpadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let palette = Palette::with_default_slots();
        let pickers = palette
            .iter()
            .map(|(key, entry)| ColorPicker::new(key.clone(), entry))
            .collect();

        let library = match FsStore::open_default() {
            Ok(store) => Some(PatternLibrary::new(store)),
            Err(e) => {
                log_err!("{}", e);
                None
            }
        };

        let mut app = Self {
            canvas: GridCanvas::new(),
            palette,
            pickers,
            pattern_name: None,
            library,
            saved: Vec::new(),
            status: None,
        };
        if app.library.is_none() {
            app.status = Some("Pattern store unavailable — saving is disabled".to_string());
        }
        app.refresh_saved();
        app
    }

    /// The in-memory document, assembled for persistence or export.
    fn current_pattern(&self) -> Pattern {
        Pattern {
            name: self.pattern_name.clone(),
            palette: self.palette.clone(),
            grid: self.canvas.grid().clone(),
        }
    }

    fn set_status(&mut self, msg: String) {
        log_info!("{}", msg);
        self.status = Some(msg);
    }

    fn refresh_saved(&mut self) {
        let Some(library) = &self.library else {
            return;
        };
        match library.saved_names() {
            Ok(mut names) => {
                names.sort_by(|a, b| b.cmp(a));
                self.saved = names;
            }
            Err(e) => self.set_status(format!("Could not list saved patterns: {}", e)),
        }
    }

    fn save_pattern(&mut self) {
        let mut pattern = self.current_pattern();
        let Some(library) = &mut self.library else {
            self.set_status("Save failed: pattern store unavailable".to_string());
            return;
        };
        match library.save(&mut pattern) {
            Ok(name) => {
                self.pattern_name = Some(name.clone());
                self.refresh_saved();
                self.set_status(format!("Saved {}", name));
            }
            Err(e) => self.set_status(format!("Save failed: {}", e)),
        }
    }

    /// Replace the live pattern wholesale with a stored snapshot.  On any
    /// load error the current pattern stays untouched.
    fn load_pattern(&mut self, name: &str) {
        let Some(library) = &self.library else {
            self.set_status("Load failed: pattern store unavailable".to_string());
            return;
        };
        match library.load(name) {
            Ok(pattern) => {
                self.pattern_name = pattern.name.clone();
                self.palette = pattern.palette;
                self.canvas.replace_grid(pattern.grid);
                self.canvas.set_active_key(None);
                // Explicit reset: the parent's authoritative state changed,
                // so every picker abandons its local state.
                for picker in &mut self.pickers {
                    if let Some(entry) = self.palette.get(picker.key()) {
                        picker.reset(entry);
                    }
                }
                self.set_status(format!("Loaded {}", name));
            }
            Err(e) => self.set_status(format!("Load failed: {}", e)),
        }
    }

    fn delete_pattern(&mut self, name: &str) {
        let Some(library) = &mut self.library else {
            return;
        };
        match library.delete(name) {
            Ok(()) => {
                self.refresh_saved();
                self.set_status(format!("Deleted {}", name));
            }
            Err(e) => self.set_status(format!("Delete failed: {}", e)),
        }
    }

    fn export_pattern(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&export::default_export_name())
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            return;
        };
        let written = self
            .canvas
            .export_image(&self.palette)
            .map_err(|e| e.to_string())
            .and_then(|bytes| std::fs::write(&path, bytes).map_err(|e| e.to_string()));
        match written {
            Ok(()) => self.set_status(format!("Exported {}", path.display())),
            Err(e) => self.set_status(format!("Export failed: {}", e)),
        }
    }

    /// Store a picker's committed color in its palette slot and make that
    /// slot the active paint key.
    fn apply_commit(&mut self, commit: PickerCommit) {
        self.palette.set(
            &commit.key,
            PaletteEntry {
                color: commit.color,
                selection: commit.selection,
            },
        );
        self.canvas.set_active_key(Some(commit.key));
    }
}

impl eframe::App for StitchpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // -- library panel: title, save/export, saved patterns ---------
        egui::SidePanel::left("library_panel")
            .resizable(false)
            .default_width(230.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Stitchpad");
                    ui.label(RichText::new("stitch pattern designer").small());
                });
                ui.add_space(8.0);

                ui.vertical_centered_justified(|ui| {
                    if ui.button("Download").clicked() {
                        self.export_pattern();
                    }
                    if ui.button("Save").clicked() {
                        self.save_pattern();
                    }
                });

                if let Some(status) = self.status.clone() {
                    ui.add_space(6.0);
                    ui.label(RichText::new(status).small().weak());
                }

                ui.add_space(6.0);
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    let names = self.saved.clone();
                    for name in names {
                        ui.horizontal(|ui| {
                            if ui.button(&name).clicked() {
                                self.load_pattern(&name);
                            }
                            if ui.small_button("Delete").clicked() {
                                self.delete_pattern(&name);
                            }
                        });
                    }
                });
            });

        // -- palette panel: eraser + one picker per slot ---------------
        egui::SidePanel::right("palette_panel")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.vertical_centered_justified(|ui| {
                    if ui.button("Eraser").clicked() {
                        self.canvas.set_active_key(None);
                    }
                });
                ui.add_space(6.0);
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    let mut commits = Vec::new();
                    for picker in &mut self.pickers {
                        if let Some(commit) = picker.show(ui) {
                            commits.push(commit);
                        }
                        ui.add_space(6.0);
                    }
                    for commit in commits {
                        self.apply_commit(commit);
                    }
                });
            });

        // -- the canvas ------------------------------------------------
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.canvas.show(ui, &self.palette);
            });
        });
    }
}
