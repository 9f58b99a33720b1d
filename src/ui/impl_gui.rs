use crate::config::Config;
use crate::mood_detector::core::Msg;
use crate::mood_detector::main::MoodDetector;
use eframe::egui;

struct CachedTexture {
    image_name: String,
    texture: Option<egui::TextureHandle>,
}

pub struct UiGui {
    mood_detector: MoodDetector,
    image_display_size: f32,
    cached: Option<CachedTexture>,
}

impl UiGui {
    pub fn new(config: &Config, mood_detector: MoodDetector) -> Self {
        Self {
            mood_detector,
            image_display_size: config.image_display_size,
            cached: None,
        }
    }

    fn texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureHandle> {
        let image_name = self.mood_detector.model.current_image().to_string();

        if needs_reload(self.cached.as_ref(), &image_name) {
            let texture = match self.mood_detector.current_image() {
                Ok(image) => {
                    let rgba = image.to_rgba8();
                    let size = [rgba.width() as usize, rgba.height() as usize];
                    let color_image =
                        egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                    Some(ctx.load_texture(&image_name, color_image, Default::default()))
                }
                Err(error) => {
                    let _ = self.mood_detector.logger.error(&error.to_string());
                    None
                }
            };
            self.cached = Some(CachedTexture {
                image_name,
                texture,
            });
        }

        self.cached.as_ref().and_then(|cached| cached.texture.clone())
    }
}

fn needs_reload(cached: Option<&CachedTexture>, image_name: &str) -> bool {
    match cached {
        Some(cached) => cached.image_name != image_name,
        None => true,
    }
}

/// A failed load is only remembered until the next button press, then retried.
fn forget_failed(cached: Option<CachedTexture>) -> Option<CachedTexture> {
    cached.filter(|cached| cached.texture.is_some())
}

impl eframe::App for UiGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let texture = self.texture(ctx);
        let screen = self.mood_detector.screen();
        let size = egui::vec2(self.image_display_size, self.image_display_size);
        let mut pressed = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);

                match &texture {
                    Some(texture) => {
                        ui.add(egui::Image::new(egui::load::SizedTexture::new(
                            texture.id(),
                            size,
                        )));
                    }
                    None => {
                        ui.add_sized(size, egui::Label::new("(image unavailable)"));
                    }
                }

                ui.heading(&screen.image_name);
                ui.label(&screen.position);

                ui.horizontal(|ui| {
                    if ui.button("Back").clicked() {
                        pressed = Some(Msg::BackPressed);
                    }
                    if ui.button("Next").clicked() {
                        pressed = Some(Msg::NextPressed);
                    }
                });

                if ui.button("Classify").clicked() {
                    pressed = Some(Msg::ClassifyPressed);
                }

                ui.add_space(10.0);
                ui.label(egui::RichText::new(&screen.result).size(18.0));
            });
        });

        if let Some(msg) = pressed {
            self.mood_detector.dispatch(msg);
            self.cached = forget_failed(self.cached.take());
            ctx.request_repaint();
        }
    }
}

pub fn run(
    config: &Config,
    mood_detector: MoodDetector,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_resizable(false),
        ..Default::default()
    };

    let app = UiGui::new(config, mood_detector);

    eframe::run_native(
        "Cat Mood Detector",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
