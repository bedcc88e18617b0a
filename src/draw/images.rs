// Prize images. The terminal does not render them, but a draw only goes ahead
// once the image of its prize has been decoded.

use std::path::PathBuf;

use crate::draw::*;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    fn from_codec(codec: image::ImageFormat) -> Option<ImageFormat> {
        match codec {
            image::ImageFormat::Png => Some(ImageFormat::Png),
            image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
            image::ImageFormat::Gif => Some(ImageFormat::Gif),
            _ => None,
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct PrizeImage {
    pub path: PathBuf,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

/// The image shown for each prize, if any.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct PrizeImages {
    paths: [Option<PathBuf>; 3],
}

fn slot(prize: Prize) -> usize {
    match prize {
        Prize::Third => 0,
        Prize::Second => 1,
        Prize::First => 2,
    }
}

impl PrizeImages {
    pub fn none() -> PrizeImages {
        PrizeImages::default()
    }

    /// Expects `third-place.png`, `second-place.png` and `first-place.png` in `dir`.
    pub fn from_directory(dir: &Path) -> PrizeImages {
        let mut res = PrizeImages::none();
        for prize in Prize::ALL {
            res.paths[slot(prize)] = Some(dir.join(format!("{}-place.png", prize.key())));
        }
        res
    }

    /// Replaces the image of a prize. `None` keeps the current one.
    pub fn set(&mut self, prize: Prize, path: Option<String>) {
        if let Some(p) = path {
            self.paths[slot(prize)] = Some(PathBuf::from(p));
        }
    }

    pub fn get(&self, prize: Prize) -> Option<&Path> {
        self.paths[slot(prize)].as_deref()
    }

    /// Decodes the whole image of `prize`. The format is taken from the content
    /// of the file, not from its extension.
    ///
    /// Returns None when no image is configured for this prize.
    pub fn resolve(&self, prize: Prize) -> RaffleResult<Option<PrizeImage>> {
        let path = match self.get(prize) {
            Some(p) => p,
            None => return Ok(None),
        };
        let display = path.display().to_string();
        let reader = image::io::Reader::open(path)
            .context(ImageLoadSnafu {
                path: display.clone(),
            })?
            .with_guessed_format()
            .context(ImageLoadSnafu {
                path: display.clone(),
            })?;
        let format = reader
            .format()
            .and_then(ImageFormat::from_codec)
            .context(ImageFormatSnafu {
                path: display.clone(),
            })?;
        let decoded = reader.decode().context(ImageDecodeSnafu {
            path: display.clone(),
        })?;
        let (width, height) = image::GenericImageView::dimensions(&decoded);
        debug!(
            "resolve: {:?} image for {:?}: {:?} ({}x{})",
            format, prize, display, width, height
        );
        Ok(Some(PrizeImage {
            path: path.to_path_buf(),
            format,
            width,
            height,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path) {
        image::RgbImage::from_pixel(4, 3, image::Rgb([200, 30, 30]))
            .save_with_format(path, image::ImageFormat::Png)
            .unwrap();
    }

    #[test]
    fn no_image_configured() {
        assert_eq!(PrizeImages::none().resolve(Prize::First).unwrap(), None);
    }

    #[test]
    fn directory_layout() {
        let imgs = PrizeImages::from_directory(Path::new("prizes"));
        assert_eq!(
            imgs.get(Prize::Second),
            Some(Path::new("prizes").join("second-place.png").as_path())
        );
    }

    #[test]
    fn decodes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("third-place.png");
        write_png(&path);
        let imgs = PrizeImages::from_directory(dir.path());
        let img = imgs.resolve(Prize::Third).unwrap().unwrap();
        assert_eq!(img.format, ImageFormat::Png);
        assert_eq!((img.width, img.height), (4, 3));
        assert_eq!(img.path, path);
    }

    #[test]
    fn format_comes_from_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gold.img");
        image::RgbImage::from_pixel(2, 2, image::Rgb([255, 215, 0]))
            .save_with_format(&path, image::ImageFormat::Gif)
            .unwrap();
        let mut imgs = PrizeImages::none();
        imgs.set(Prize::First, Some(path.display().to_string()));
        let img = imgs.resolve(Prize::First).unwrap().unwrap();
        assert_eq!(img.format, ImageFormat::Gif);
    }

    #[test]
    fn missing_image() {
        let dir = tempfile::tempdir().unwrap();
        let imgs = PrizeImages::from_directory(dir.path());
        assert!(matches!(
            imgs.resolve(Prize::Second),
            Err(RaffleError::ImageLoad { .. })
        ));
    }

    #[test]
    fn not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gold.png");
        fs::write(&path, b"hello world").unwrap();
        let mut imgs = PrizeImages::none();
        imgs.set(Prize::First, Some(path.display().to_string()));
        assert!(matches!(
            imgs.resolve(Prize::First),
            Err(RaffleError::ImageFormat { .. })
        ));
    }

    #[test]
    fn signature_alone_is_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("third-place.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\ngarbage-not-a-png").unwrap();
        let imgs = PrizeImages::from_directory(dir.path());
        assert!(matches!(
            imgs.resolve(Prize::Third),
            Err(RaffleError::ImageDecode { .. })
        ));
    }

    #[test]
    fn truncated_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("third-place.png");
        write_png(&path);
        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
        let imgs = PrizeImages::from_directory(dir.path());
        assert!(matches!(
            imgs.resolve(Prize::Third),
            Err(RaffleError::ImageDecode { .. })
        ));
    }
}
