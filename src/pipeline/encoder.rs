//! Mask-to-matrix encoding pipeline.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Error, Result};
use crate::field::{self, DistanceField, DistanceFieldBuilder, ScanStrategy};
use crate::mask::{self, Mask};

/// Most fixed-point digits that still carry information for an `f64`.
const MAX_PRECISION: usize = 17;

/// Configuration for the encoding pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// How free cells search for obstacles.
    pub strategy: ScanStrategy,

    /// Whether to encode columns in parallel.
    pub parallel: bool,

    /// Worker threads when parallel. None uses the rayon default.
    pub threads: Option<usize>,

    /// Digits after the decimal point in the output matrix.
    pub precision: usize,

    /// Whether to draw a per-column progress bar.
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: ScanStrategy::Obstacles,
            parallel: true,
            threads: None,
            precision: field::DEFAULT_PRECISION,
            show_progress: true,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(Error::InvalidParameter {
                name: "precision".to_string(),
                reason: format!("must be at most {MAX_PRECISION}"),
            });
        }

        if self.threads == Some(0) {
            return Err(Error::InvalidParameter {
                name: "threads".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Loads a mask, encodes its distance field, and saves the matrix.
pub struct Pipeline {
    config: Config,
    pool: Option<rayon::ThreadPool>,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the worker pool
    /// cannot be started.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Initializing pipeline with config: {config:?}");

        let pool = match config.threads {
            Some(threads) if config.parallel => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?,
            ),
            _ => None,
        };

        Ok(Self { config, pool })
    }

    /// Pipeline configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encode a mask file into a CSV distance matrix.
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the mask image
    /// * `output_path` - Path to write the CSV matrix
    ///
    /// # Errors
    ///
    /// Returns an error if the mask cannot be loaded or the matrix cannot be
    /// written. Nothing is written when loading fails.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<DistanceField> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        tracing::info!("Loading mask: {}", input_path.display());
        let mask = mask::load_mask(input_path)?;

        let field = self.encode(&mask);

        tracing::info!("Saving matrix to: {}", output_path.display());
        field::save_csv(&field, output_path, self.config.precision)?;

        tracing::info!("Encoding complete");
        Ok(field)
    }

    /// Compute the distance field for an in-memory mask.
    pub fn encode(&self, mask: &Mask) -> DistanceField {
        let (width, height) = mask.dimensions();
        tracing::info!(
            "Encoding {width}x{height} mask ({} blocked cells)",
            mask.blocked_count()
        );

        let builder = DistanceFieldBuilder::new()
            .strategy(self.config.strategy)
            .parallel(self.config.parallel);

        let pb = if self.config.show_progress {
            ProgressBar::new(u64::from(width))
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Encoding col [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .expect("valid template")
                .progress_chars("#>-"),
        );

        let run = || builder.build_with_progress(mask, || pb.inc(1));
        let field = match self.pool {
            Some(ref pool) => pool.install(run),
            None => run(),
        };

        pb.finish_with_message("Encoding complete");
        field
    }
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

    use super::*;
    use crate::mask::MaskSource;

    fn quiet(config: Config) -> Config {
        Config {
            show_progress: false,
            ..config
        }
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("maskoccupancy-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.precision, 6);
        assert_eq!(config.strategy, ScanStrategy::Obstacles);
    }

    #[test]
    fn test_invalid_precision() {
        let config = Config {
            precision: 18,
            ..Config::default()
        };

        assert!(matches!(
            Pipeline::new(config),
            Err(Error::InvalidParameter { ref name, .. }) if name == "precision"
        ));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let config = Config {
            threads: Some(0),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_encode_matches_sequential_build() {
        let mask = Mask::from_fn(7, 5, |x, y| {
            if (x + 2 * y) % 5 == 0 {
                Rgba([0, 0, 0, u16::MAX])
            } else {
                Rgba([u16::MAX; 4])
            }
        })
        .unwrap();
        let expected = field::build(&mask);

        for config in [
            Config::default(),
            Config {
                parallel: false,
                strategy: ScanStrategy::Exhaustive,
                ..Config::default()
            },
            Config {
                threads: Some(2),
                ..Config::default()
            },
        ] {
            let pipeline = Pipeline::new(quiet(config)).unwrap();
            assert_eq!(pipeline.encode(&mask), expected);
        }
    }

    #[test]
    fn test_process_writes_matrix() {
        let input = temp_path("row.png");
        let output = temp_path("row.csv");

        let mut img = RgbaImage::from_pixel(3, 1, Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        DynamicImage::ImageRgba8(img)
            .save_with_format(&input, ImageFormat::Png)
            .unwrap();

        let pipeline = Pipeline::new(quiet(Config::default())).unwrap();
        let field = pipeline.process(&input, &output).unwrap();
        let written = std::fs::read_to_string(&output).unwrap();

        std::fs::remove_file(&input).ok();
        std::fs::remove_file(&output).ok();

        assert_eq!(field.width(), 3);
        assert_eq!(written, "0.000000\n1.000000\n2.000000\n");
    }

    #[test]
    fn test_load_failure_writes_nothing() {
        let input = temp_path("absent.png");
        let output = temp_path("absent.csv");

        let pipeline = Pipeline::new(quiet(Config::default())).unwrap();
        let err = pipeline.process(&input, &output).unwrap_err();

        assert!(matches!(err, Error::MaskLoad { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_mask_dimensions_preserved() {
        let mask = Mask::from_fn(9, 4, |_, _| Rgba([u16::MAX; 4])).unwrap();
        let pipeline = Pipeline::new(quiet(Config::default())).unwrap();
        let field = pipeline.encode(&mask);

        assert_eq!(field.width(), mask.width() as usize);
        assert_eq!(field.height(), mask.height() as usize);
        assert!(field.as_array().iter().all(|&v| v == 36.0));
    }
}
