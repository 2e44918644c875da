use std::time::Duration;

use image::RgbImage;
use minifb::{Window, WindowOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("failed to create window: {0}")]
    Create(minifb::Error),
    #[error("failed to update window: {0}")]
    Update(minifb::Error),
}

/// Display an image in a window and block until a key is pressed or the
/// window is closed.
pub fn show(title: &str, img: &RgbImage) -> Result<(), WindowError> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let buffer = to_0rgb(img);

    let mut window = Window::new(title, width, height, WindowOptions::default())
        .map_err(WindowError::Create)?;

    while window.is_open() {
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(WindowError::Update)?;

        if !window.get_keys().is_empty() {
            break;
        }

        std::thread::sleep(Duration::from_millis(10));
    }

    Ok(())
}

/// Pack RGB pixels into the 0RGB u32 layout the framebuffer expects.
fn to_0rgb(img: &RgbImage) -> Vec<u32> {
    img.pixels()
        .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32)
        .collect()
}
