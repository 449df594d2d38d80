use eframe::egui;
use facets::DisplayConfig;
use image::RgbImage;

use crate::CliError;

/// Shows one image until any key is pressed or the window is closed
pub struct ImageViewer {
    image: RgbImage,
    texture: Option<egui::TextureHandle>,
}

impl ImageViewer {
    pub fn new(image: RgbImage) -> Self {
        Self {
            image,
            texture: None,
        }
    }
}

impl eframe::App for ImageViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let texture = self.texture.get_or_insert_with(|| {
            let size = [self.image.width() as usize, self.image.height() as usize];
            let pixels = egui::ColorImage::from_rgb(size, self.image.as_raw());
            ctx.load_texture("detections", pixels, egui::TextureOptions::default())
        });

        let key_pressed = ctx.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
        });
        if key_pressed {
            tracing::debug!("key pressed, closing viewer");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                        .shrink_to_fit(),
                );
            });
    }
}

/// Open the viewer window and block until it closes
pub fn show(image: RgbImage, display: &DisplayConfig) -> Result<(), CliError> {
    let (width, height) = display.sizing.initial_size(image.width(), image.height());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(display.title.clone())
            .with_inner_size([width as f32, height as f32])
            .with_resizable(display.sizing.resizable()),
        ..Default::default()
    };

    eframe::run_native(
        &display.title,
        options,
        Box::new(move |_cc| Ok(Box::new(ImageViewer::new(image)))),
    )
    .map_err(|e| CliError::Viewer(e.to_string()))
}
