//! histogram::observe — optional structured logging of pipeline stages.
//!
//! When the `obs_slog` feature is enabled and [`HistogramOptions::verbose`]
//! is set, [`PipelineLog`] writes one record per stage (bucket size
//! resolution, each binned series, alignment) to a non-blocking terminal
//! drain. A caller can also attach its own `slog::Logger`. Without the
//! feature every method is a no-op, so call sites need no `cfg` guards.
use crate::histogram::{
    bucket_size::{BucketSize, BucketSizeSource},
    options::HistogramOptions,
};

#[cfg(feature = "obs_slog")]
use slog::{Drain, Logger, info, o};

/// Stage logger threaded through one histogram build.
#[derive(Clone, Default)]
pub struct PipelineLog {
    #[cfg(feature = "obs_slog")]
    logger: Option<Logger>,
}

impl std::fmt::Debug for PipelineLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineLog").field("enabled", &self.is_enabled()).finish()
    }
}

impl PipelineLog {
    /// A logger that records nothing.
    pub fn silent() -> Self {
        PipelineLog::default()
    }

    /// Terminal logger when `opts.verbose` is set, silent otherwise.
    pub fn for_options(opts: &HistogramOptions) -> Self {
        #[cfg(feature = "obs_slog")]
        if opts.verbose {
            return PipelineLog { logger: Some(term_logger()) };
        }
        let _ = opts;
        PipelineLog::silent()
    }

    /// Log through a caller-supplied logger.
    #[cfg(feature = "obs_slog")]
    pub fn with_logger(logger: Logger) -> Self {
        PipelineLog { logger: Some(logger.new(o!("component" => "histogram"))) }
    }

    pub fn is_enabled(&self) -> bool {
        #[cfg(feature = "obs_slog")]
        return self.logger.is_some();
        #[cfg(not(feature = "obs_slog"))]
        return false;
    }

    pub fn bucket_size(&self, size: BucketSize, source: BucketSizeSource) {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            info!(logger, "bucket size resolved"; "size" => size.get(), "source" => ?source);
        }
        #[cfg(not(feature = "obs_slog"))]
        let _ = (size, source);
    }

    pub fn series_binned(&self, field: &str, bins: usize, counted: u64) {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            info!(logger, "series binned"; "field" => field, "bins" => bins, "counted" => counted);
        }
        #[cfg(not(feature = "obs_slog"))]
        let _ = (field, bins, counted);
    }

    pub fn aligned(&self, series: usize, axis_len: usize) {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            info!(logger, "series aligned"; "series" => series, "buckets" => axis_len);
        }
        #[cfg(not(feature = "obs_slog"))]
        let _ = (series, axis_len);
    }

    pub fn no_numeric_fields(&self, frames: usize) {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            info!(logger, "no numeric fields, emitting empty histogram"; "frames" => frames);
        }
        #[cfg(not(feature = "obs_slog"))]
        let _ = frames;
    }
}

#[cfg(feature = "obs_slog")]
fn term_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(drain, o!("component" => "histogram"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_log_is_silent_unless_verbose() {
        let quiet = PipelineLog::for_options(&HistogramOptions::default());
        assert!(!quiet.is_enabled());
        assert!(!PipelineLog::silent().is_enabled());

        // Silent loggers accept every stage call.
        quiet.bucket_size(BucketSize::new(1.0).unwrap(), BucketSizeSource::Auto);
        quiet.series_binned("x", 3, 10);
        quiet.aligned(2, 3);
        quiet.no_numeric_fields(1);
    }

    #[cfg(feature = "obs_slog")]
    #[test]
    // Purpose
    // -------
    // A caller-supplied logger is used for every stage record.
    fn pipeline_log_with_logger_is_enabled() {
        // Arrange
        let logger = Logger::root(slog::Discard, o!());

        // Act
        let log = PipelineLog::with_logger(logger);
        log.bucket_size(BucketSize::new(2.5).unwrap(), BucketSizeSource::Fixed);
        log.series_binned("latency", 4, 12);
        log.aligned(1, 4);

        // Assert
        assert!(log.is_enabled());
        assert!(format!("{log:?}").contains("true"));
    }
}
